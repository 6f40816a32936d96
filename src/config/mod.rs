//! # Configuration Module
//!
//! 환경 변수 기반 설정값을 중앙에서 관리합니다.
//! 설정 파일은 `main`에서 `PROFILE`에 따라 `.env.dev` / `.env.prod` / `.env` 순으로 로드됩니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버, 데이터베이스, bcrypt, CORS 설정
//! - [`frontend_config`] - 정적 파일 경로와 API 키 주입 정책
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="5000"
//!
//! # 저장소
//! export DATABASE_URL="sqlite://database/app.db"
//!
//! # 환경 설정
//! export ENVIRONMENT="production"  # development, test, staging, production
//!
//! # 보안 설정
//! export BCRYPT_COST="12"          # 4-15 범위
//!
//! # 프론트엔드 (production 필수)
//! export GOOGLE_API_KEY="..."
//! ```

pub mod data_config;
pub mod frontend_config;

pub use data_config::*;
pub use frontend_config::*;
