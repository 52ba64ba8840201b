//! 애플리케이션 에러 처리 모듈
//!
//! [`AppError`](errors::AppError)를 통해 서비스 전역의 에러를
//! HTTP 응답으로 변환합니다.

pub mod errors;

pub use errors::{AppError, AppResult};
