//! 데이터 및 서버 설정 관리 모듈
//!
//! 데이터베이스, 서버, 환경 및 보안 관련 설정을 관리합니다.

use std::env;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경 - 빠른 개발을 위한 설정
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경 - 최고 수준의 보안 및 성능
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 또는 `NODE_ENV` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        let name = env::var("ENVIRONMENT")
            .or_else(|_| env::var("NODE_ENV"))
            .unwrap_or_else(|_| "production".to_string());

        Self::from_str(&name)
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// 패스워드 해싱 설정
pub struct PasswordConfig;

impl PasswordConfig {
    /// 현재 환경에 맞는 bcrypt cost를 반환합니다.
    ///
    /// `BCRYPT_COST`가 4-15 범위의 값이면 그대로 사용하고,
    /// 아니면 환경별 기본값을 사용합니다.
    pub fn bcrypt_cost() -> u32 {
        if let Ok(cost_str) = env::var("BCRYPT_COST") {
            if let Ok(cost) = cost_str.parse::<u32>() {
                if (4..=15).contains(&cost) {
                    return cost;
                }
            }
            log::warn!("BCRYPT_COST 값이 유효하지 않습니다: {}. 환경 기본값 사용", cost_str);
        }

        Self::bcrypt_cost_for_env(&Environment::current())
    }

    /// 특정 환경에 대한 bcrypt cost를 반환합니다.
    ///
    /// - Development/Test: 4 (빠른 처리)
    /// - Staging: 10 (중간 보안)
    /// - Production: 12 (고보안)
    pub fn bcrypt_cost_for_env(env: &Environment) -> u32 {
        match env {
            Environment::Development => 4,
            Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트를 반환합니다. 기본값: 5000
    pub fn port() -> u16 {
        env::var("PORT")
            .ok()
            .and_then(|port| port.parse().ok())
            .unwrap_or(5000)
    }

    /// 서버가 바인딩할 호스트 주소를 반환합니다. 기본값: "0.0.0.0"
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }

    /// 워커 스레드 수. 기본값: 4
    pub fn workers() -> usize {
        env::var("WORKERS")
            .ok()
            .and_then(|workers| workers.parse().ok())
            .filter(|workers| *workers > 0)
            .unwrap_or(4)
    }
}

/// 관계형 저장소 연결 설정
pub struct DatabaseConfig;

impl DatabaseConfig {
    pub const DEFAULT_URL: &'static str = "sqlite://database/app.db";

    /// 데이터베이스 연결 URL
    ///
    /// # Environment Variables
    ///
    /// - `DATABASE_URL`: 예) `sqlite://database/app.db`, `sqlite::memory:`
    pub fn url() -> String {
        env::var("DATABASE_URL").unwrap_or_else(|_| Self::DEFAULT_URL.to_string())
    }

    /// 커넥션 풀 최대 크기. 기본값: 5
    pub fn max_connections() -> u32 {
        env::var("DATABASE_MAX_CONNECTIONS")
            .ok()
            .and_then(|size| size.parse().ok())
            .filter(|size| *size > 0)
            .unwrap_or(5)
    }
}

/// CORS 허용 Origin 설정
pub struct CorsConfig;

impl CorsConfig {
    /// 허용할 Origin 목록
    ///
    /// `CORS_ALLOWED_ORIGINS`(쉼표 구분)가 없으면 로컬 개발 주소를 사용합니다.
    /// `*`를 포함하면 모든 Origin을 허용합니다.
    pub fn allowed_origins() -> Vec<String> {
        match env::var("CORS_ALLOWED_ORIGINS") {
            Ok(value) => Self::parse_origins(&value),
            Err(_) => vec![
                "http://localhost:3000".to_string(),
                "http://127.0.0.1:3000".to_string(),
                "http://localhost:5000".to_string(),
                "http://127.0.0.1:5000".to_string(),
            ],
        }
    }

    pub fn parse_origins(value: &str) -> Vec<String> {
        value
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// 와일드카드(`*`) 포함 여부
    pub fn allows_any_origin(origins: &[String]) -> bool {
        origins.iter().any(|origin| origin == "*")
    }
}
