//! # Repository Layer
//!
//! 저장소 접근 계층입니다. 각 리포지토리는 [`crate::db::Database`]를 값으로 전달받아
//! 생성되며, 모든 메서드는 [`crate::core::errors::AppResult`]를 반환합니다.
//!
//! ```text
//! repositories/
//! ├── users/      # UserRepository (users 테이블)
//! └── wellness/   # MoodRepository, TestResultRepository
//! ```

pub mod users;
pub mod wellness;

pub use users::UserRepository;
pub use wellness::{MoodRepository, TestResultRepository, RECENT_LIMIT};
