//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 JSON 데이터를 구조화된 Rust 타입으로 변환하고
//! 검증하는 요청 DTO들을 정의합니다.
//!
//! ## 검증 계층
//!
//! 1. **구문 검증**: JSON 구조 일치성 (필드 누락은 실패가 아니라 기본값)
//! 2. **형식 검증**: 숫자만/문자 집합/범위 등 필드별 규칙
//! 3. **비즈니스 검증**: 좌표 쌍 동시 제공, 생성/수정 모드 결정
//!
//! 검증 실패 시 모든 필드의 오류 메시지가 선언 순서대로 수집되어
//! 하나의 메시지로 집계됩니다. 첫 오류에서 중단하지 않습니다.

pub mod submit_user_request;
pub mod check_user_request;

pub use submit_user_request::SubmitUserRequest;
pub use check_user_request::CheckUserRequest;
