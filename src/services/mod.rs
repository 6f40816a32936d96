//! # Service Layer
//!
//! 비즈니스 로직 계층입니다. 서비스는 리포지토리를 `Arc`로 주입받아 생성되고,
//! 핸들러에는 `web::Data<Service>`로 전달됩니다.

pub mod users;
pub mod wellness;

pub use users::UserService;
pub use wellness::WellnessService;
