use serde::Deserialize;
use validator::Validate;

use crate::core::errors::AppResult;
use crate::domain::entities::users::User;
use crate::utils::string_utils::{normalize_email, trim_string};
use crate::utils::validation::first_validation_error;

/// 사용자 정보 수정 요청 DTO
///
/// 생략된 필드는 기존 값을 유지합니다.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUserRequest {
    pub username: Option<String>,
    pub email: Option<String>,
}

/// 기존 값과 병합되고 정규화된 최종 프로필
#[derive(Debug, Clone, Validate)]
pub struct ProfileChanges {
    #[validate(length(min = 3, message = "Username must be at least 3 characters"))]
    pub username: String,

    #[validate(length(min = 1, message = "Email cannot be empty"))]
    pub email: String,
}

impl UpdateUserRequest {
    /// 요청을 현재 사용자 값 위에 덮어써 최종 프로필을 만듭니다.
    pub fn apply_to(self, current: &User) -> AppResult<ProfileChanges> {
        let username = self.username.as_deref().unwrap_or(&current.username);
        let email = self.email.as_deref().unwrap_or(&current.email);

        let changes = ProfileChanges {
            username: trim_string(username),
            email: normalize_email(email),
        };
        changes
            .validate()
            .map_err(|e| first_validation_error(&e, &["username", "email"]))?;

        Ok(changes)
    }
}
