//! # User Data Transfer Objects Module
//!
//! 사용자 등록 API의 요청/응답 데이터 구조를 정의하는 모듈입니다.
//!
//! ## 요청 DTO
//!
//! - [`request::SubmitUserRequest`] - 등록/수정 제출 (`POST /api/v1/users`)
//! - [`request::CheckUserRequest`] - 중복 확인 (`POST /api/v1/users/exists`)
//!
//! ## 응답 DTO
//!
//! - [`response::SubmitResponse`] - `{ success, message }` 계약
//! - [`response::ExistsResponse`] - `{ existe, message }` 계약
//!
//! ## JSON 요청 예제
//!
//! ```json
//! {
//!   "tipo_documento": "CC",
//!   "documento": "12345678",
//!   "nombre": "Ana Gomez",
//!   "edad": "30",
//!   "genero": "F",
//!   "preferencias": ["Deportes", "Lectura"],
//!   "latitud": "4.60971",
//!   "longitud": "-74.08175"
//! }
//! ```

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
