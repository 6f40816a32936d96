//! # 문자열 유틸리티
//!
//! 요청 경계에서 쓰이는 문자열 검증/정규화 함수들입니다.
//! 사용자명은 앞뒤 공백만 제거하고(대소문자 구분), 이메일은 공백 제거 후 소문자로 바꿉니다.

use crate::core::errors::AppError;

/// 필수 문자열 필드 검증 및 정리
///
/// 빈 문자열이나 공백만 있는 경우 `"{field_name} is required"` ValidationError를 반환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 문자열을 반환합니다.
///
/// # 예제
/// ```rust,ignore
/// assert_eq!(validate_required_string("  Hello  ", "Name").unwrap(), "Hello");
/// assert!(validate_required_string("   ", "Name").is_err());
/// ```
pub fn validate_required_string(value: &str, field_name: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::ValidationError(format!(
            "{} is required",
            field_name
        )));
    }
    Ok(trimmed.to_string())
}

/// 빈 문자열을 `None`으로 취급합니다. 공백은 그대로 둡니다.
///
/// 로그인 식별자처럼 저장된 값과 정확히 비교해야 하는 필드에 사용합니다.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

/// 문자열 정리 (trim 후 반환)
pub fn trim_string(value: &str) -> String {
    value.trim().to_string()
}

/// 이메일 정규화: 앞뒤 공백 제거 후 소문자 변환
pub fn normalize_email(value: &str) -> String {
    value.trim().to_lowercase()
}

/// 문자열이 유효한지 확인 (빈 문자열이 아니고 공백만으로 구성되지 않음)
pub fn is_valid_string(value: &str) -> bool {
    !value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_required_string() {
        // 성공 케이스
        assert_eq!(validate_required_string("Hello", "Name").unwrap(), "Hello");
        assert_eq!(validate_required_string("  World  ", "Name").unwrap(), "World");

        // 실패 케이스
        assert!(validate_required_string("", "Name").is_err());
        assert!(validate_required_string("   ", "Name").is_err());
        assert!(validate_required_string("\t\n", "Name").is_err());
    }

    #[test]
    fn test_validate_required_string_message() {
        let error = validate_required_string(" ", "Email").unwrap_err();
        assert_eq!(error.to_string(), "Email is required");
    }

    #[test]
    fn test_non_empty_keeps_whitespace() {
        assert_eq!(non_empty(Some("".to_string())), None);
        assert_eq!(non_empty(None), None);
        assert_eq!(non_empty(Some(" bob ".to_string())), Some(" bob ".to_string()));
    }

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("  Alice@Example.COM "), "alice@example.com");
        assert_eq!(normalize_email("bob@example.com"), "bob@example.com");
    }

    #[test]
    fn test_trim_keeps_case() {
        assert_eq!(trim_string("  Alice  "), "Alice");
    }

    #[test]
    fn test_is_valid_string() {
        assert!(is_valid_string("Hello"));
        assert!(is_valid_string("  World  "));
        assert!(!is_valid_string(""));
        assert!(!is_valid_string("   "));
        assert!(!is_valid_string("\t\n"));
    }
}
