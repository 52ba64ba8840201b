//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! MySQL을 주 저장소로 사용하며, [`UserStore`](users::user_repo::UserStore)
//! 트레이트 뒤에서 실제 저장소 구현을 교체할 수 있게 합니다.
//! 서비스 계층은 트레이트만 바라보므로 테스트에서는 인메모리 구현이
//! 실제 데이터베이스를 대신합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::user_repo::UserRepository;
//!
//! let repo = UserRepository::new(pool);
//! let taken = repo.exists(DocumentType::CC, "12345", None).await?;
//! ```

pub mod users;
