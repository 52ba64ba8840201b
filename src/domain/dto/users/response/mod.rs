//! # 사용자 관련 응답 DTO 모듈
//!
//! 비즈니스 로직 처리 결과를 클라이언트에게 일관된 형태로 전달하는
//! 응답 DTO들을 정의합니다.
//!
//! ## 응답 계약
//!
//! ### 제출 엔드포인트
//! ```json
//! { "success": true, "message": "Usuario registrado exitosamente" }
//! ```
//!
//! 모든 실패(검증, 중복, 저장소 오류)도 동일한 형태로
//! `success: false`와 함께 반환됩니다.
//!
//! ### 중복 확인 엔드포인트
//! ```json
//! { "existe": true, "message": "Usuario ya registrado" }
//! ```

pub mod submit_response;

pub use submit_response::{ExistsResponse, SubmitResponse};
