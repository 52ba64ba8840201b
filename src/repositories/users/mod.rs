//! 사용자 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! [`UserRepository`](user_repo::UserRepository)를 통해 MySQL `usuarios`
//! 테이블의 존재 확인, 삽입, 수정 연산을 제공합니다.

pub mod user_repo;
