//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반으로 데이터베이스 연결 정보와 서버 바인딩 설정을 읽어옵니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::config::{DataConfig, ServerConfig};
//!
//! let data_config = DataConfig::from_env();
//! let bind_address = format!("{}:{}", ServerConfig::host(), ServerConfig::port());
//! ```

pub mod data_config;

pub use data_config::{DataConfig, ServerConfig};
