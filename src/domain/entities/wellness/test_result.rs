//! 자가진단 결과 엔티티

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// `test_results` 테이블의 한 행
#[derive(Debug, Clone, FromRow)]
pub struct TestResult {
    pub id: i64,
    /// 진단 종류 (예: `stress`, `anxiety`)
    pub test_type: String,
    pub score: f64,
    /// 결과 구간 (예: `low`, `moderate`)
    pub result_category: String,
    pub date_created: DateTime<Utc>,
}

/// 저장 전 자가진단 결과
#[derive(Debug, Clone)]
pub struct NewTestResult {
    pub test_type: String,
    pub score: f64,
    pub result_category: String,
}
