//! `validator` 결과를 API 에러로 변환합니다.

use validator::ValidationErrors;

use crate::core::errors::AppError;

/// 필드 우선순위에 따라 첫 번째 검증 실패 메시지를 `ValidationError`로 만듭니다.
///
/// `ValidationErrors`는 필드 순서를 보존하지 않으므로 보고 순서를 호출자가 정합니다.
/// 우선순위 목록에 없는 필드의 에러는 그 뒤에 보고됩니다.
pub fn first_validation_error(errors: &ValidationErrors, field_order: &[&str]) -> AppError {
    let field_errors = errors.field_errors();

    let prioritized = field_order.iter().find_map(|field| {
        field_errors.iter().find_map(|(name, errors)| {
            let name: &str = name.as_ref();
            (name == *field).then(|| errors.first()).flatten()
        })
    });
    let error = prioritized.or_else(|| field_errors.values().find_map(|errors| errors.first()));

    let message = error
        .and_then(|error| error.message.as_ref().map(|message| message.to_string()))
        .unwrap_or_else(|| errors.to_string());

    AppError::ValidationError(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 3, message = "first too short"))]
        first: String,
        #[validate(length(min = 6, message = "second too short"))]
        second: String,
    }

    #[test]
    fn test_reports_fields_in_priority_order() {
        let sample = Sample {
            first: "a".into(),
            second: "b".into(),
        };
        let errors = sample.validate().unwrap_err();

        let error = first_validation_error(&errors, &["first", "second"]);
        assert_eq!(error.to_string(), "first too short");

        let error = first_validation_error(&errors, &["second", "first"]);
        assert_eq!(error.to_string(), "second too short");
    }

    #[test]
    fn test_unlisted_fields_still_reported() {
        let sample = Sample {
            first: "abc".into(),
            second: "b".into(),
        };
        let errors = sample.validate().unwrap_err();

        let error = first_validation_error(&errors, &["first"]);
        assert_eq!(error.to_string(), "second too short");
    }
}
