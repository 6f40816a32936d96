//! 프론트엔드 정적 파일 및 API 키 주입 설정
//!
//! 빌드된 SPA 번들의 위치와 `index.html`에 주입할 `GOOGLE_API_KEY`를 관리합니다.
//!
//! ## API 키 정책
//!
//! - **Production**: `GOOGLE_API_KEY`가 없으면 서버 시작이 실패합니다.
//! - **그 외 환경**: 경고 로그를 남기고 [`API_KEY_FALLBACK`]을 주입합니다.
//!
//! 키 값 자체는 어떤 로그에도 기록하지 않습니다.

use std::env;
use std::path::PathBuf;

use thiserror::Error;

use super::Environment;

/// API 키가 없을 때 비프로덕션 환경에서 주입되는 값
pub const API_KEY_FALLBACK: &str = "fallback-key";

/// 설정 로드 에러
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("GOOGLE_API_KEY must be set in production")]
    MissingApiKey,
}

/// 프론트엔드 서빙 설정
#[derive(Debug, Clone)]
pub struct FrontendConfig {
    /// 정적 파일 루트 디렉터리
    pub static_dir: PathBuf,
    /// `index.html`에 주입할 API 키
    pub api_key: String,
}

impl FrontendConfig {
    /// 환경 변수에서 설정을 읽습니다.
    ///
    /// # Environment Variables
    ///
    /// - `STATIC_DIR`: 정적 파일 디렉터리 (기본값: `static`)
    /// - `GOOGLE_API_KEY`: 프론트엔드 챗봇용 API 키
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::resolve(
            &Environment::current(),
            env::var("STATIC_DIR").ok(),
            env::var("GOOGLE_API_KEY").ok(),
        )
    }

    /// 주어진 값과 환경으로 설정을 결정합니다.
    pub fn resolve(
        environment: &Environment,
        static_dir: Option<String>,
        api_key: Option<String>,
    ) -> Result<Self, ConfigError> {
        let api_key = match api_key.filter(|key| !key.trim().is_empty()) {
            Some(key) => key,
            None if *environment == Environment::Production => {
                return Err(ConfigError::MissingApiKey);
            }
            None => {
                log::warn!("GOOGLE_API_KEY not set, injecting fallback key ({:?})", environment);
                API_KEY_FALLBACK.to_string()
            }
        };

        Ok(Self {
            static_dir: PathBuf::from(static_dir.unwrap_or_else(|| "static".to_string())),
            api_key,
        })
    }
}
