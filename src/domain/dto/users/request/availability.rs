use serde::Deserialize;

use crate::core::errors::AppResult;
use crate::utils::string_utils::{normalize_email, validate_required_string};

/// 이메일 중복 확인 요청
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CheckEmailRequest {
    pub email: Option<String>,
}

impl CheckEmailRequest {
    /// 정규화된 이메일. 비어 있으면 `"Email is required"`.
    pub fn normalized_email(&self) -> AppResult<String> {
        let email = validate_required_string(self.email.as_deref().unwrap_or_default(), "Email")?;
        Ok(normalize_email(&email))
    }
}

/// 사용자명 중복 확인 요청
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CheckUsernameRequest {
    pub username: Option<String>,
}

impl CheckUsernameRequest {
    /// 앞뒤 공백이 제거된 사용자명. 비어 있으면 `"Username is required"`.
    pub fn normalized_username(&self) -> AppResult<String> {
        validate_required_string(self.username.as_deref().unwrap_or_default(), "Username")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_normalized() {
        let request = CheckEmailRequest {
            email: Some(" Bob@Example.COM ".into()),
        };
        assert_eq!(request.normalized_email().unwrap(), "bob@example.com");
    }

    #[test]
    fn test_required_messages() {
        let error = CheckEmailRequest::default().normalized_email().unwrap_err();
        assert_eq!(error.to_string(), "Email is required");

        let error = CheckUsernameRequest {
            username: Some("  ".into()),
        }
        .normalized_username()
        .unwrap_err();
        assert_eq!(error.to_string(), "Username is required");
    }

    #[test]
    fn test_username_keeps_case() {
        let request = CheckUsernameRequest {
            username: Some(" Alice ".into()),
        };
        assert_eq!(request.normalized_username().unwrap(), "Alice");
    }
}
