//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - 문자열 검증, 정리, 정규화 유틸리티
//! - [`validation`] - `validator` 에러를 `AppError`로 변환

pub mod string_utils;
pub mod validation;
