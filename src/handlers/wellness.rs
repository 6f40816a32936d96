use actix_web::{get, post, web, HttpResponse};

use crate::core::errors::AppError;
use crate::domain::dto::wellness::request::{SaveMoodRequest, SaveTestResultRequest};
use crate::services::wellness::WellnessService;

#[post("/mood")]
pub async fn save_mood(
    service: web::Data<WellnessService>,
    payload: web::Json<SaveMoodRequest>,
) -> Result<HttpResponse, AppError> {
    let response = service.save_mood(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(response))
}

/// 최근 기분 기록 (최신순, 최대 10개)
#[get("/mood")]
pub async fn list_moods(service: web::Data<WellnessService>) -> Result<HttpResponse, AppError> {
    let moods = service.recent_moods().await?;

    Ok(HttpResponse::Ok().json(moods))
}

#[post("/test-result")]
pub async fn save_test_result(
    service: web::Data<WellnessService>,
    payload: web::Json<SaveTestResultRequest>,
) -> Result<HttpResponse, AppError> {
    let response = service.save_test_result(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(response))
}

#[get("/test-results")]
pub async fn list_test_results(
    service: web::Data<WellnessService>,
) -> Result<HttpResponse, AppError> {
    let results = service.recent_test_results().await?;

    Ok(HttpResponse::Ok().json(results))
}
