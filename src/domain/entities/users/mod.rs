//! Users Entity Module
//!
//! 사용자 도메인의 핵심 엔티티들을 정의하는 모듈입니다.
//!
//! # 주요 구성 요소
//!
//! - [`user::DocumentType`] / [`user::Gender`] - 허용값이 닫혀 있는 열거형
//! - [`user::Coordinates`] - 위도/경도 쌍 값 객체 (둘 다 있거나 둘 다 없음)
//! - [`user::NewUser`] - 검증 완료된 사용자 레코드
//! - [`user::Operation`] - 생성/수정 연산 구분

pub mod user;
