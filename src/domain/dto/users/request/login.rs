use serde::Deserialize;

use crate::core::errors::{AppError, AppResult};
use crate::utils::string_utils::non_empty;

/// 로그인 요청 DTO
///
/// `email`이 비어 있지 않으면 이메일을, 아니면 `username`을 식별자로 사용합니다.
/// 식별자는 정규화하지 않고 저장된 값과 정확히 비교합니다.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
}

/// 식별자와 비밀번호 쌍
#[derive(Debug, Clone)]
pub struct Credentials {
    pub identifier: String,
    pub password: String,
}

impl LoginRequest {
    pub fn into_credentials(self) -> AppResult<Credentials> {
        let identifier = non_empty(self.email).or_else(|| non_empty(self.username));

        match (identifier, non_empty(self.password)) {
            (Some(identifier), Some(password)) => Ok(Credentials { identifier, password }),
            _ => Err(AppError::ValidationError(
                "Email/username and password are required".to_string(),
            )),
        }
    }
}
