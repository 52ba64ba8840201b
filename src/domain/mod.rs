//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 핵심 모듈로, 비즈니스 객체와 도메인 규칙을 담당합니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities      - 핵심 비즈니스 객체 (검증 완료된 사용자 레코드)
//! └── DTOs          - 데이터 전송 객체 (Request/Response)
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```
//!
//! ## 모듈 구성
//!
//! ### [`entities`] - 핵심 도메인 엔티티
//!
//! 검증을 통과한 사용자 레코드([`NewUser`](entities::users::user::NewUser))와
//! 문서 타입/성별 열거형, 좌표 값 객체, 생성/수정 연산 구분을 정의합니다.
//! DTO 계층에서 원시 문자열 입력이 검증을 통과해야만 생성될 수 있으므로,
//! 엔티티를 받는 하위 계층은 필드 유효성을 다시 확인하지 않습니다.
//!
//! ### [`dto`] - 데이터 전송 객체
//!
//! API 경계의 요청/응답 구조를 정의합니다. 와이어 필드명은 클라이언트
//! 계약(스페인어 필드명)을 그대로 따르며, `validator` 크레이트로
//! 필드별 검증 규칙을 선언합니다.

pub mod entities;
pub mod dto;
