//! # Route Configuration
//!
//! 모든 API 라우트는 `/api` 스코프 아래에 등록됩니다.
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | GET | `/api/health` | [`health_check`] |
//! | POST | `/api/register` | [`handlers::auth::register`] |
//! | POST | `/api/login` | [`handlers::auth::login`] |
//! | POST | `/api/check-email` | [`handlers::auth::check_email`] |
//! | POST | `/api/check-username` | [`handlers::auth::check_username`] |
//! | GET | `/api/users` | [`handlers::users::list_users`] |
//! | GET/PUT/DELETE | `/api/users/{id}` | [`handlers::users`] |
//! | POST/GET | `/api/mood` | [`handlers::wellness`] |
//! | POST | `/api/test-result` | [`handlers::wellness::save_test_result`] |
//! | GET | `/api/test-results` | [`handlers::wellness::list_test_results`] |
//!
//! 프론트엔드 핸들러는 `App::default_service`로 별도 등록됩니다.

use actix_web::web;
use serde_json::json;

use crate::core::errors::AppError;
use crate::handlers;

pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // 추출기 에러를 AppError 응답 형식으로 통일
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        AppError::ValidationError(format!("Invalid JSON body: {}", err)).into()
    }))
    .app_data(web::PathConfig::default().error_handler(|_err, _req| {
        AppError::NotFound("User not found".to_string()).into()
    }));

    cfg.service(
        web::scope("/api")
            .service(health_check)
            .configure(configure_user_routes)
            .configure(configure_wellness_routes),
    );
}

fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::auth::register)
        .service(handlers::auth::login)
        .service(handlers::auth::check_email)
        .service(handlers::auth::check_username)
        .service(handlers::users::list_users)
        .service(handlers::users::get_user)
        .service(handlers::users::update_user)
        .service(handlers::users::delete_user);
}

fn configure_wellness_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::wellness::save_mood)
        .service(handlers::wellness::list_moods)
        .service(handlers::wellness::save_test_result)
        .service(handlers::wellness::list_test_results);
}

#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "user_api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
