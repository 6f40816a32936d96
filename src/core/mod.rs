//! # Core Module
//!
//! 모든 계층이 공유하는 핵심 타입을 제공합니다.
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 검증/충돌/미존재/인증/저장소 에러 분류
//! - **HTTP 통합**: `ResponseError` 구현으로 상태 코드 일괄 매핑
//! - **StoreContext**: `sqlx` 에러에 컨텍스트를 붙이고 UNIQUE 위반을 충돌로 변환
//!
//! 서비스 인스턴스는 전역 레지스트리 없이 `main`에서 직접 조립되어
//! `web::Data`로 핸들러에 주입됩니다.

pub mod errors;

pub use errors::*;
