use serde::Deserialize;

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::wellness::{MoodLevel, NewMood};

/// 요청 본문의 `mood_level` 원본 값
///
/// 정수(1–5)와 기호 문자열만 유효합니다. 그 밖의 JSON 값(실수, 불리언, 배열 등)은
/// `Other`로 받아 변환 단계에서 거부합니다.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum MoodLevelInput {
    Score(i64),
    Symbol(String),
    Other(serde_json::Value),
}

impl MoodLevelInput {
    pub fn resolve(&self) -> Option<MoodLevel> {
        match self {
            MoodLevelInput::Score(score) => MoodLevel::from_score(*score),
            MoodLevelInput::Symbol(symbol) => MoodLevel::from_symbol(symbol),
            MoodLevelInput::Other(_) => None,
        }
    }
}

/// 기분 기록 요청 DTO
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SaveMoodRequest {
    pub mood_level: Option<MoodLevelInput>,
    pub notes: Option<String>,
}

impl SaveMoodRequest {
    pub fn into_new_mood(self) -> AppResult<NewMood> {
        let input = self
            .mood_level
            .ok_or_else(|| AppError::ValidationError("Mood level is required".to_string()))?;
        let mood_level = input
            .resolve()
            .ok_or_else(|| AppError::ValidationError("Invalid mood level".to_string()))?;

        Ok(NewMood {
            mood_level,
            notes: self.notes.unwrap_or_default(),
        })
    }
}
