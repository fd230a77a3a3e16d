//! # Domain Layer Module
//!
//! 사용자 엔티티와 API 계약(DTO), 요청 검증 규칙을 담당합니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities  - 저장소 행을 표현하는 사용자 엔티티
//! └── DTOs      - 요청 본문, 검증, 응답
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```

pub mod dto;
pub mod entities;

pub use dto::*;
pub use entities::users::*;
