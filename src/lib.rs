//! 사용자 등록 서비스 백엔드
//!
//! Rust 기반의 사용자 등록 및 중복 검증 서비스입니다.
//! 제출된 폼 데이터를 필드별로 검증하고, 문서 타입/번호 자연키의
//! 중복을 확인한 뒤 MySQL 저장소에 사용자 레코드를 생성하거나 수정합니다.
//!
//! # Features
//!
//! - 필드별 검증 (모든 오류를 수집하여 하나의 메시지로 통합)
//! - (tipo_documento, documento) 자연키 중복 검사 및 수정 대상 자기 제외
//! - 생성/수정 이원화 (요청 경계에서 단 한 번 결정)
//! - MySQL 영구 저장 (sqlx 커넥션 풀)
//!
//! # Architecture
//!
//! ```text
//! routes → handlers → services → repositories → MySQL
//!              domain (entities + DTOs) 계층 간 공유
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use registration_service_backend::config::DataConfig;
//! use registration_service_backend::db::Database;
//! use registration_service_backend::repositories::users::user_repo::UserRepository;
//! use registration_service_backend::services::users::user_service::UserService;
//!
//! let config = DataConfig::from_env();
//! let database = Database::connect(&config).await?;
//! let repo = UserRepository::new(database.pool().clone());
//! let service = UserService::new(Arc::new(repo));
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
