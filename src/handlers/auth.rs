//! 가입, 로그인, 중복 확인 핸들러
//!
//! 로그인은 세션이나 토큰을 발급하지 않고 사용자 투영만 반환합니다.

use actix_web::{post, web, HttpResponse};

use crate::core::errors::AppError;
use crate::domain::dto::users::request::{
    CheckEmailRequest, CheckUsernameRequest, LoginRequest, RegisterRequest,
};
use crate::services::users::UserService;

/// 회원가입
///
/// 성공 시 `201 Created`와 `{message, user}`를 반환합니다.
/// 누락 필드는 `{"error": "Missing required fields", "details": "username, email"}` 형태로 보고됩니다.
#[post("/register")]
pub async fn register(
    service: web::Data<UserService>,
    payload: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    let response = service.register(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(response))
}

/// 로그인 (이메일 또는 사용자명)
#[post("/login")]
pub async fn login(
    service: web::Data<UserService>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let response = service.login(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(response))
}

#[post("/check-email")]
pub async fn check_email(
    service: web::Data<UserService>,
    payload: web::Json<CheckEmailRequest>,
) -> Result<HttpResponse, AppError> {
    let response = service.check_email(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(response))
}

#[post("/check-username")]
pub async fn check_username(
    service: web::Data<UserService>,
    payload: web::Json<CheckUsernameRequest>,
) -> Result<HttpResponse, AppError> {
    let response = service.check_username(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(response))
}
