//! 웰니스 로그 엔티티 모듈
//!
//! 기분 기록과 자가진단 결과는 생성 후 변경되지 않는 추가 전용 로그입니다.

pub mod mood;
pub mod test_result;

pub use mood::{Mood, MoodLevel, NewMood};
pub use test_result::{NewTestResult, TestResult};
