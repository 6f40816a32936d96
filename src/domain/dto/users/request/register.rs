use serde::Deserialize;
use validator::Validate;

use crate::core::errors::{AppError, AppResult};
use crate::utils::string_utils::{is_valid_string, normalize_email, trim_string};
use crate::utils::validation::first_validation_error;

/// 회원가입 요청 DTO
///
/// 세 필드 모두 필수입니다. 누락 여부를 먼저 판정해 누락된 필드 이름을
/// 모두 보고하고, 그 다음 형식 규칙을 검증합니다.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegisterRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// 정규화와 형식 검증을 통과한 가입 정보
#[derive(Debug, Clone, Validate)]
pub struct Registration {
    /// 앞뒤 공백이 제거된 사용자명 (대소문자 유지)
    #[validate(length(min = 3, message = "Username must be at least 3 characters"))]
    pub username: String,

    /// 소문자로 정규화된 이메일
    pub email: String,

    /// 평문 비밀번호 (공백 포함 그대로 해싱됨)
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

impl RegisterRequest {
    /// 요청을 검증된 가입 정보로 변환합니다.
    ///
    /// 사용자명/이메일은 공백만 있어도 누락으로 보고, 비밀번호는 빈 문자열만 누락으로 봅니다.
    pub fn into_registration(self) -> AppResult<Registration> {
        let mut missing = Vec::new();
        if !self.username.as_deref().is_some_and(is_valid_string) {
            missing.push("username");
        }
        if !self.email.as_deref().is_some_and(is_valid_string) {
            missing.push("email");
        }
        if self.password.as_deref().is_none_or(str::is_empty) {
            missing.push("password");
        }

        match (self.username, self.email, self.password) {
            (Some(username), Some(email), Some(password)) if missing.is_empty() => {
                let registration = Registration {
                    username: trim_string(&username),
                    email: normalize_email(&email),
                    password,
                };
                registration
                    .validate()
                    .map_err(|e| first_validation_error(&e, &["username", "password"]))?;
                Ok(registration)
            }
            _ => Err(AppError::MissingFields(missing)),
        }
    }
}
