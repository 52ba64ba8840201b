//! 공통 유틸리티 함수 모듈
//!
//! 애플리케이션 전체에서 사용되는 공통 유틸리티 함수들을 제공합니다.
//!
//! # Modules
//!
//! - [`validation`] - 필드 형식 검증을 위한 순수 술어 함수들
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::validation::{is_document_number, is_valid_name};
//!
//! assert!(is_document_number("12345"));
//! assert!(is_valid_name("Ana Gomez 2"));
//! ```

pub mod validation;
