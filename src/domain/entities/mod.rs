//! # Domain Entities Module
//!
//! 비즈니스 도메인의 핵심 엔티티들을 정의합니다.
//! MySQL `usuarios` 테이블과 대응되는 데이터 구조체들을 포함하며,
//! 검증 계층을 통과한 데이터만 엔티티로 존재할 수 있습니다.
//!
//! ## 엔티티 설계 원칙
//!
//! - **검증 후 생성**: 엔티티는 DTO 검증을 통과한 입력에서만 만들어집니다
//! - **타입 안전성**: 문서 타입과 성별은 열거형으로, 좌표 쌍은 단일 값
//!   객체로 표현하여 불변식을 타입에 인코딩합니다
//! - **식별성**: `id`는 저장소가 발급하며, 엔티티 자체는 id를 갖지 않습니다

pub mod users;
