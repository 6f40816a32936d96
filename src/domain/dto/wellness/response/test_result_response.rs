use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::wellness::TestResult;

/// 저장된 자가진단 결과
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestResultResponse {
    pub id: i64,
    pub test_type: String,
    pub score: f64,
    pub result_category: String,
    pub date_created: DateTime<Utc>,
}

impl From<TestResult> for TestResultResponse {
    fn from(result: TestResult) -> Self {
        Self {
            id: result.id,
            test_type: result.test_type,
            score: result.score,
            result_category: result.result_category,
            date_created: result.date_created,
        }
    }
}

/// 자가진단 결과 저장 응답 `{message, result}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveTestResultResponse {
    pub message: String,
    pub result: TestResultResponse,
}

impl From<TestResult> for SaveTestResultResponse {
    fn from(result: TestResult) -> Self {
        Self {
            message: "Test result saved successfully".to_string(),
            result: TestResultResponse::from(result),
        }
    }
}
