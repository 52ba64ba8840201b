//! 사용자 등록 서비스 모듈
//!
//! 등록 제출과 중복 확인의 비즈니스 로직을 담당하는
//! [`UserService`](user_service::UserService)를 제공합니다.
//!
//! # Features
//!
//! - 필드 검증 실패의 단일 메시지 집계
//! - 생성/수정 공통의 자연키 중복 검사 (수정 시 자기 제외)
//! - 저장소 연산 위임 및 성공 메시지 결정

pub mod user_service;
