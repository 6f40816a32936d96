use serde::Deserialize;

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::wellness::NewTestResult;
use crate::utils::string_utils::non_empty;

/// 자가진단 결과 저장 요청 DTO
///
/// 세 필드 모두 필수입니다. 점수 0은 유효한 값입니다.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SaveTestResultRequest {
    pub test_type: Option<String>,
    pub score: Option<f64>,
    pub result_category: Option<String>,
}

impl SaveTestResultRequest {
    pub fn into_new_test_result(self) -> AppResult<NewTestResult> {
        match (
            non_empty(self.test_type),
            self.score,
            non_empty(self.result_category),
        ) {
            (Some(test_type), Some(score), Some(result_category)) => Ok(NewTestResult {
                test_type,
                score,
                result_category,
            }),
            _ => Err(AppError::ValidationError(
                "All fields are required".to_string(),
            )),
        }
    }
}
