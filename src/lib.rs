//! 사용자 CRUD 서비스
//!
//! 이름, 이메일, 나이를 가진 사용자 레코드를 관리하는 JSON REST API입니다.
//! 요청 검증, SQLite 기반 트랜잭션 저장, 일관된 JSON 에러 응답을 제공합니다.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 검증, 에러 매핑
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 트랜잭션 단위 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     SQLite      │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use user_crud_service::db::Database;
//! use user_crud_service::repositories::users::UserRepository;
//! use user_crud_service::services::users::UserService;
//!
//! let database = Database::connect("sqlite://app.db", 5).await?;
//! database.ensure_schema().await?;
//!
//! let service = UserService::new(Arc::new(UserRepository::new(database)));
//! let users = service.list_users().await?;
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod repositories;
pub mod routes;
pub mod services;
