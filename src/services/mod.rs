//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 검증, 중복 검사, 영속화로 이어지는 등록 플로우를 조율합니다.
//! 서비스는 `main`에서 명시적으로 생성되어 `web::Data`로 핸들러에
//! 주입됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::services::users::user_service::UserService;
//!
//! let service = UserService::new(Arc::new(repo));
//! let response = service.submit(request).await?;
//! ```

pub mod users;
