//! 사용자 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! [`UserStore`](user_repo::UserStore) trait과 SQLite 구현체인
//! [`UserRepository`](user_repo::UserRepository)를 제공합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::{UserRepository, UserStore};
//!
//! let repo = UserRepository::new(database);
//! let user = repo.find_by_id(1).await?;
//! ```

pub mod user_repo;

pub use user_repo::*;
