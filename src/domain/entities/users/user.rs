//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.

use sqlx::FromRow;

/// 사용자 엔티티
///
/// `users` 테이블의 한 행입니다. `password_hash`를 포함하므로
/// 직렬화하지 않으며, 외부 응답은 항상 `UserResponse`를 거칩니다.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    /// 서버가 발급하는 고유 ID
    pub id: i64,
    /// 사용자명 (unique, 대소문자 구분, 앞뒤 공백 제거됨)
    pub username: String,
    /// 이메일 (unique, 소문자로 정규화되어 저장)
    pub email: String,
    /// bcrypt 해시
    pub password_hash: String,
}

impl User {
    /// 평문 비밀번호가 저장된 해시와 일치하는지 확인합니다.
    pub fn verify_password(&self, password: &str) -> Result<bool, bcrypt::BcryptError> {
        bcrypt::verify(password, &self.password_hash)
    }
}

/// 저장 전 사용자
///
/// 정규화와 해싱이 끝난 값만 담습니다.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_password() {
        let user = User {
            id: 1,
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password_hash: bcrypt::hash("secret1", 4).unwrap(),
        };

        assert!(user.verify_password("secret1").unwrap());
        assert!(!user.verify_password("secret2").unwrap());
    }

    #[test]
    fn test_verify_password_with_corrupt_hash() {
        let user = User {
            id: 1,
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password_hash: "not-a-bcrypt-hash".to_string(),
        };

        assert!(user.verify_password("secret1").is_err());
    }
}
