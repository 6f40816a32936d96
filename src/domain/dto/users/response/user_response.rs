use serde::{Deserialize, Serialize};

use crate::domain::entities::users::User;

/// 공개 사용자 투영 `{id, username, email}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            username,
            email,
            ..
        } = user;

        Self { id, username, email }
    }
}

/// 가입/로그인/수정 응답 `{message, user}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserActionResponse {
    pub message: String,
    pub user: UserResponse,
}

impl UserActionResponse {
    fn new(message: &str, user: User) -> Self {
        Self {
            message: message.to_string(),
            user: UserResponse::from(user),
        }
    }

    pub fn registered(user: User) -> Self {
        Self::new("User registered successfully", user)
    }

    pub fn logged_in(user: User) -> Self {
        Self::new("Login successful", user)
    }

    pub fn updated(user: User) -> Self {
        Self::new("User updated successfully", user)
    }
}

/// 메시지만 담는 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// 중복 확인 응답 `{available}`
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AvailabilityResponse {
    pub available: bool,
}
