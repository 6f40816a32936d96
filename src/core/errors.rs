//! # Application Error Handling System
//!
//! 백엔드 서비스 전역에서 사용하는 통합 에러 타입입니다.
//! 핸들러는 `AppResult<T>`를 반환하기만 하면 되고, 상태 코드 매핑은
//! [`actix_web::ResponseError`] 구현 한 곳에서 일괄적으로 처리됩니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` / `MissingFields` | 400 Bad Request | 입력값 누락, 길이 미달, 잘못된 기분 값 |
//! | `AuthenticationError` | 401 Unauthorized | 잘못된 로그인 정보 |
//! | `NotFound` | 404 Not Found | 존재하지 않는 사용자 ID |
//! | `Conflict` | 409 Conflict | 사용자명/이메일 중복 |
//! | `DatabaseError` | 500 Internal Server Error | 저장소 오류 (트랜잭션 롤백 후 보고) |
//! | `InternalError` | 500 Internal Server Error | 비밀번호 해싱 실패 등 |
//!
//! ## 응답 형식
//!
//! ```json
//! { "error": "Registration failed", "details": "database is locked" }
//! ```
//!
//! `details`는 값이 있을 때만 직렬화됩니다.

use std::fmt;

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

/// 사용자 식별자 중복의 종류
///
/// 사용자명과 이메일이 동시에 충돌하면 사용자명 충돌이 우선합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conflict {
    UsernameTaken,
    EmailTaken,
}

impl Conflict {
    pub fn message(&self) -> &'static str {
        match self {
            Conflict::UsernameTaken => "Username already exists",
            Conflict::EmailTaken => "Email already exists",
        }
    }
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// 애플리케이션 전역 에러 타입
///
/// `Display` 출력이 그대로 응답 본문의 `error` 필드가 되므로
/// 메시지에는 접두어를 붙이지 않습니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 저장소 에러 (500)
    ///
    /// `context`는 클라이언트에 노출되는 일반 메시지이고,
    /// 드라이버의 원본 메시지는 `details`로 전달됩니다.
    #[error("{context}")]
    DatabaseError {
        context: &'static str,
        #[source]
        source: sqlx::Error,
    },

    /// 입력값 검증 에러 (400)
    #[error("{0}")]
    ValidationError(String),

    /// 필수 필드 누락 (400)
    #[error("Missing required fields")]
    MissingFields(Vec<&'static str>),

    /// 리소스 없음 (404)
    #[error("{0}")]
    NotFound(String),

    /// 사용자명/이메일 중복 (409)
    #[error("{0}")]
    Conflict(Conflict),

    /// 인증 실패 (401)
    #[error("{0}")]
    AuthenticationError(String),

    /// 내부 서버 에러 (500)
    #[error("Internal server error")]
    InternalError(String),
}

impl AppError {
    /// 저장소 에러를 변환합니다.
    ///
    /// `users` 테이블의 UNIQUE 제약 위반은 [`AppError::Conflict`]로,
    /// 나머지는 컨텍스트 메시지를 가진 [`AppError::DatabaseError`]로 바뀝니다.
    pub fn from_store(context: &'static str, source: sqlx::Error) -> Self {
        match unique_violation(&source) {
            Some(conflict) => AppError::Conflict(conflict),
            None => AppError::DatabaseError { context, source },
        }
    }

    /// 응답 본문의 `details` 값
    pub fn details(&self) -> Option<String> {
        match self {
            AppError::MissingFields(fields) => Some(fields.join(", ")),
            AppError::DatabaseError { source, .. } => Some(source.to_string()),
            AppError::InternalError(detail) => Some(detail.clone()),
            _ => None,
        }
    }
}

fn unique_violation(error: &sqlx::Error) -> Option<Conflict> {
    let sqlx::Error::Database(db_error) = error else {
        return None;
    };
    if !db_error.is_unique_violation() {
        return None;
    }

    // SQLite: "UNIQUE constraint failed: users.username"
    let message = db_error.message();
    if message.contains("users.username") {
        Some(Conflict::UsernameTaken)
    } else if message.contains("users.email") {
        Some(Conflict::EmailTaken)
    } else {
        None
    }
}

/// 에러 응답 본문
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) | AppError::MissingFields(_) => StatusCode::BAD_REQUEST,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::DatabaseError { .. } | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 5xx 에러는 서버 로그에도 원인과 함께 기록됩니다.
    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let details = self.details();

        if status.is_server_error() {
            log::error!("{} ({})", self, details.as_deref().unwrap_or("-"));
        }

        HttpResponse::build(status).json(ErrorResponse {
            error: self.to_string(),
            details,
        })
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// `sqlx` 에러에 컨텍스트를 붙여 `AppError`로 변환하는 확장 trait
///
/// ```rust,ignore
/// let users = sqlx::query_as::<_, User>("SELECT * FROM users")
///     .fetch_all(self.db.pool())
///     .await
///     .store_context("Failed to fetch users")?;
/// ```
pub trait StoreContext<T> {
    fn store_context(self, context: &'static str) -> AppResult<T>;
}

impl<T> StoreContext<T> for Result<T, sqlx::Error> {
    fn store_context(self, context: &'static str) -> AppResult<T> {
        self.map_err(|source| AppError::from_store(context, source))
    }
}
