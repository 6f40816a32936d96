//! 기분 기록 엔티티
//!
//! 기분 수준은 저장소에 항상 기호 문자열로 저장됩니다.
//! 숫자 1–5 입력은 저장 전에 기호로 변환되고, 조회 시 다시 숫자로 역변환됩니다.
//!
//! | 숫자 | 기호 |
//! |------|------|
//! | 1 | `very_sad` |
//! | 2 | `sad` |
//! | 3 | `neutral` |
//! | 4 | `happy` |
//! | 5 | `very_happy` |

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// 기호 기분 수준
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoodLevel {
    VerySad,
    Sad,
    Neutral,
    Happy,
    VeryHappy,
}

impl MoodLevel {
    pub const ALL: [MoodLevel; 5] = [
        MoodLevel::VerySad,
        MoodLevel::Sad,
        MoodLevel::Neutral,
        MoodLevel::Happy,
        MoodLevel::VeryHappy,
    ];

    /// 숫자 1–5를 기호로 변환합니다. 범위 밖이면 `None`.
    pub fn from_score(score: i64) -> Option<Self> {
        match score {
            1 => Some(MoodLevel::VerySad),
            2 => Some(MoodLevel::Sad),
            3 => Some(MoodLevel::Neutral),
            4 => Some(MoodLevel::Happy),
            5 => Some(MoodLevel::VeryHappy),
            _ => None,
        }
    }

    /// 기호 문자열을 파싱합니다. 정확히 일치해야 합니다.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.as_str() == symbol)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MoodLevel::VerySad => "very_sad",
            MoodLevel::Sad => "sad",
            MoodLevel::Neutral => "neutral",
            MoodLevel::Happy => "happy",
            MoodLevel::VeryHappy => "very_happy",
        }
    }

    pub fn score(&self) -> i64 {
        match self {
            MoodLevel::VerySad => 1,
            MoodLevel::Sad => 2,
            MoodLevel::Neutral => 3,
            MoodLevel::Happy => 4,
            MoodLevel::VeryHappy => 5,
        }
    }
}

/// `moods` 테이블의 한 행
#[derive(Debug, Clone, FromRow)]
pub struct Mood {
    pub id: i64,
    /// 저장된 기호 그대로의 값
    pub mood_level: String,
    pub notes: String,
    pub date_created: DateTime<Utc>,
}

impl Mood {
    /// 저장된 기호를 해석합니다. 알 수 없는 값이면 `None`.
    pub fn level(&self) -> Option<MoodLevel> {
        MoodLevel::from_symbol(&self.mood_level)
    }

    /// 숫자 기분 값. 알 수 없는 기호는 중립(3)으로 취급합니다.
    pub fn score(&self) -> i64 {
        self.level()
            .map(|level| level.score())
            .unwrap_or(MoodLevel::Neutral.score())
    }
}

/// 저장 전 기분 기록
#[derive(Debug, Clone)]
pub struct NewMood {
    pub mood_level: MoodLevel,
    pub notes: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_and_symbol_agree() {
        for score in 1..=5 {
            let level = MoodLevel::from_score(score).unwrap();
            assert_eq!(level.score(), score);
            assert_eq!(MoodLevel::from_symbol(level.as_str()), Some(level));
        }
    }

    #[test]
    fn test_out_of_range_scores() {
        assert_eq!(MoodLevel::from_score(0), None);
        assert_eq!(MoodLevel::from_score(6), None);
        assert_eq!(MoodLevel::from_score(-1), None);
    }

    #[test]
    fn test_symbols_are_exact() {
        assert_eq!(MoodLevel::from_symbol("Happy"), None);
        assert_eq!(MoodLevel::from_symbol(" happy"), None);
        assert_eq!(MoodLevel::from_symbol("very_happy"), Some(MoodLevel::VeryHappy));
    }

    #[test]
    fn test_unknown_stored_symbol_scores_neutral() {
        let mood = Mood {
            id: 1,
            mood_level: "ecstatic".to_string(),
            notes: String::new(),
            date_created: Utc::now(),
        };

        assert_eq!(mood.level(), None);
        assert_eq!(mood.score(), 3);
    }
}
