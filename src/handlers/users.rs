//! 사용자 디렉터리 핸들러
//!
//! `/api/users` 조회, 수정, 삭제 엔드포인트입니다.
//! 경로의 `{user_id}`가 정수가 아니면 `PathConfig` 에러 핸들러가 404를 반환합니다.

use actix_web::{delete, get, put, web, HttpResponse};

use crate::core::errors::AppError;
use crate::domain::dto::users::request::UpdateUserRequest;
use crate::services::users::UserService;

#[get("/users")]
pub async fn list_users(service: web::Data<UserService>) -> Result<HttpResponse, AppError> {
    let users = service.list_users().await?;

    Ok(HttpResponse::Ok().json(users))
}

#[get("/users/{user_id}")]
pub async fn get_user(
    service: web::Data<UserService>,
    user_id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let user = service.get_user(user_id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(user))
}

#[put("/users/{user_id}")]
pub async fn update_user(
    service: web::Data<UserService>,
    user_id: web::Path<i64>,
    payload: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse, AppError> {
    let response = service
        .update_user(user_id.into_inner(), payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(response))
}

#[delete("/users/{user_id}")]
pub async fn delete_user(
    service: web::Data<UserService>,
    user_id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let response = service.delete_user(user_id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(response))
}
