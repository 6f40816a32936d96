//! 자가진단 결과 리포지토리

use chrono::Utc;

use crate::core::errors::{AppResult, StoreContext};
use crate::db::Database;
use crate::domain::entities::wellness::{NewTestResult, TestResult};

#[derive(Clone)]
pub struct TestResultRepository {
    db: Database,
}

impl TestResultRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub async fn create(&self, result: NewTestResult) -> AppResult<TestResult> {
        sqlx::query_as::<_, TestResult>(
            "INSERT INTO test_results (test_type, score, result_category, date_created)
             VALUES (?, ?, ?, ?)
             RETURNING id, test_type, score, result_category, date_created",
        )
        .bind(&result.test_type)
        .bind(result.score)
        .bind(&result.result_category)
        .bind(Utc::now())
        .fetch_one(self.db.pool())
        .await
        .store_context("Failed to save test result")
    }

    /// 최신순으로 최대 `limit`개
    pub async fn find_recent(&self, limit: i64) -> AppResult<Vec<TestResult>> {
        sqlx::query_as::<_, TestResult>(
            "SELECT id, test_type, score, result_category, date_created FROM test_results
             ORDER BY date_created DESC, id DESC LIMIT ?",
        )
        .bind(limit)
        .fetch_all(self.db.pool())
        .await
        .store_context("Failed to fetch test results")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn test_create_and_list() {
        let repo = TestResultRepository::new(Database::in_memory().await.unwrap());

        for (test_type, score) in [("stress", 0.0), ("anxiety", 14.5)] {
            repo.create(NewTestResult {
                test_type: test_type.into(),
                score,
                result_category: "moderate".into(),
            })
            .await
            .unwrap();
        }

        let recent = repo.find_recent(10).await.unwrap();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].test_type, "anxiety");
        assert_eq!(recent[0].score, 14.5);
        assert_eq!(recent[1].score, 0.0);
    }
}
