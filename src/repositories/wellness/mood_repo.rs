//! 기분 기록 리포지토리
//!
//! 기분 수준은 기호 문자열로 저장되고, 생성 시각은 서버가 기록합니다.

use chrono::Utc;

use crate::core::errors::{AppResult, StoreContext};
use crate::db::Database;
use crate::domain::entities::wellness::{Mood, NewMood};

#[derive(Clone)]
pub struct MoodRepository {
    db: Database,
}

impl MoodRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub async fn create(&self, mood: NewMood) -> AppResult<Mood> {
        sqlx::query_as::<_, Mood>(
            "INSERT INTO moods (mood_level, notes, date_created) VALUES (?, ?, ?)
             RETURNING id, mood_level, notes, date_created",
        )
        .bind(mood.mood_level.as_str())
        .bind(&mood.notes)
        .bind(Utc::now())
        .fetch_one(self.db.pool())
        .await
        .store_context("Failed to save mood")
    }

    /// 최신순으로 최대 `limit`개. 생성 시각이 같으면 나중에 저장된 기록이 먼저 옵니다.
    pub async fn find_recent(&self, limit: i64) -> AppResult<Vec<Mood>> {
        sqlx::query_as::<_, Mood>(
            "SELECT id, mood_level, notes, date_created FROM moods
             ORDER BY date_created DESC, id DESC LIMIT ?",
        )
        .bind(limit)
        .fetch_all(self.db.pool())
        .await
        .store_context("Failed to fetch moods")
    }
}
