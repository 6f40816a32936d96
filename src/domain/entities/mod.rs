//! # Domain Entities Module
//!
//! 저장소의 세 테이블(`users`, `moods`, `test_results`)과 1:1로 대응되는 엔티티입니다.
//! 모든 엔티티는 `sqlx::FromRow`로 행에서 직접 매핑됩니다.
//!
//! - [`users`] - 사용자 계정 (User Directory)
//! - [`wellness`] - 기분 기록과 자가진단 결과 (Wellness Log)

pub mod users;
pub mod wellness;

pub use users::*;
pub use wellness::*;
