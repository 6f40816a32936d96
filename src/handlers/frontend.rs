//! 프론트엔드 정적 파일 서빙
//!
//! API 라우트에 매칭되지 않은 `GET` 요청을 처리합니다.
//!
//! 1. `STATIC_DIR` 아래에 요청 경로의 파일이 있으면 그대로 반환
//! 2. 없으면 `index.html`을 반환 (SPA 라우팅), 이때 API 키 플레이스홀더를 치환
//!
//! 요청 경로는 퍼센트 디코딩 후 [`PathBufWrap`]으로 정적 디렉터리 기준 상대 경로가 됩니다.
//! `..` 세그먼트를 포함한 경로와 `/api` 아래의 미매칭 경로는 404입니다.

use std::io::ErrorKind;
use std::path::Path;

use actix_files::{NamedFile, PathBufWrap};
use actix_web::http::header::ContentType;
use actix_web::http::Method;
use actix_web::{web, HttpRequest, HttpResponse};

use crate::config::FrontendConfig;
use crate::core::errors::AppError;

/// `index.html`의 API 키 플레이스홀더
pub const API_KEY_PLACEHOLDER: &str = "const API_KEY = window.API_KEY || 'fallback-key';";

/// 플레이스홀더를 실제 키 선언으로 치환합니다.
pub fn inject_api_key(html: &str, api_key: &str) -> String {
    let escaped = api_key.replace('\\', "\\\\").replace('\'', "\\'");
    html.replace(API_KEY_PLACEHOLDER, &format!("const API_KEY = '{}';", escaped))
}

fn not_found() -> AppError {
    AppError::NotFound("Not found".to_string())
}

/// 디코딩된 요청 경로가 상위 디렉터리 세그먼트를 포함하는지 확인합니다.
fn has_parent_segment(decoded: &str) -> bool {
    decoded.split('/').any(|segment| segment == "..")
}

fn is_api_path(decoded: &str) -> bool {
    decoded.trim_start_matches('/').split('/').next() == Some("api")
}

/// `App::default_service`로 등록되는 프론트엔드 핸들러
pub async fn serve_frontend(
    req: HttpRequest,
    config: web::Data<FrontendConfig>,
) -> Result<HttpResponse, AppError> {
    if req.method() != Method::GET && req.method() != Method::HEAD {
        return Err(not_found());
    }

    // `%2F`, `%25`, `%2B`를 제외한 퍼센트 인코딩이 풀린 경로
    let decoded = req.match_info().as_str();
    if is_api_path(decoded) || has_parent_segment(decoded) {
        return Err(not_found());
    }

    // 숨김 파일 등 파일 경로로 쓸 수 없는 세그먼트는 SPA 라우트로 취급
    if let Ok(relative) = PathBufWrap::parse_req_path(&req, false) {
        let relative: &Path = relative.as_ref();
        if !relative.as_os_str().is_empty() {
            if let Ok(file) = NamedFile::open_async(config.static_dir.join(relative)).await {
                if file.metadata().is_file() {
                    return Ok(file.into_response(&req));
                }
            }
        }
    }

    let index_path = config.static_dir.join("index.html");
    let html = web::block(move || std::fs::read_to_string(index_path))
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))?;

    match html {
        Ok(html) => Ok(HttpResponse::Ok()
            .content_type(ContentType::html())
            .body(inject_api_key(&html, &config.api_key))),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            Err(AppError::NotFound("index.html not found".to_string()))
        }
        Err(e) => Err(AppError::InternalError(format!("Failed to read index.html: {}", e))),
    }
}
