use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::wellness::Mood;

/// 저장된 기분 기록 `{id, mood_level, notes, date_created}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodResponse {
    pub id: i64,
    /// 저장된 기호 (`happy` 등)
    pub mood_level: String,
    pub notes: String,
    pub date_created: DateTime<Utc>,
}

impl From<Mood> for MoodResponse {
    fn from(mood: Mood) -> Self {
        Self {
            id: mood.id,
            mood_level: mood.mood_level,
            notes: mood.notes,
            date_created: mood.date_created,
        }
    }
}

/// 최근 기분 목록의 항목
///
/// 저장된 필드에 숫자 기분 값 `mood`와 날짜 `date`(YYYY-MM-DD)가 추가됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodHistoryItem {
    #[serde(flatten)]
    pub entry: MoodResponse,
    pub mood: i64,
    pub date: String,
}

impl From<Mood> for MoodHistoryItem {
    fn from(mood: Mood) -> Self {
        let score = mood.score();
        let date = mood.date_created.format("%Y-%m-%d").to_string();

        Self {
            entry: MoodResponse::from(mood),
            mood: score,
            date,
        }
    }
}

/// 기분 저장 응답 `{message, mood}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveMoodResponse {
    pub message: String,
    pub mood: MoodResponse,
}

impl From<Mood> for SaveMoodResponse {
    fn from(mood: Mood) -> Self {
        Self {
            message: "Mood saved successfully".to_string(),
            mood: MoodResponse::from(mood),
        }
    }
}
