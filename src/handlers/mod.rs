//! # HTTP Handlers
//!
//! 요청 추출, 서비스 호출, 상태 코드 결정만 담당합니다.
//! 서비스는 `web::Data<T>`로 주입되며 에러는 `AppError`로 반환합니다.
//!
//! - [`auth`] - 가입, 로그인, 중복 확인
//! - [`users`] - 사용자 조회, 수정, 삭제
//! - [`wellness`] - 기분 기록, 자가진단 결과
//! - [`frontend`] - 정적 파일 및 `index.html` 서빙

pub mod auth;
pub mod frontend;
pub mod users;
pub mod wellness;
