//! 비즈니스 로직 계층
//!
//! 서비스는 저장소를 생성자로 주입받으며 전역 상태에 의존하지 않습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::UserRepository;
//! use crate::services::users::UserService;
//!
//! let service = UserService::new(Arc::new(UserRepository::new(database)));
//! let users = service.list_users().await?;
//! ```

pub mod users;
