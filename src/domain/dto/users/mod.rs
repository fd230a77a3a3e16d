//! # User DTOs Module
//!
//! 사용자 API의 요청/응답 계약을 정의합니다.
//!
//! ## 모듈 구성
//!
//! - [`request`] - 필드별 선택값을 보존하는 요청 본문 ([`UserPayload`])
//! - [`validation`] - 생성/부분 수정 모드별 본문 검증
//! - [`response`] - 직렬화된 사용자 및 메시지 응답
//!
//! ## 처리 흐름
//!
//! ```text
//! raw body ──▶ UserPayload::from_body ──▶ validate_user_data ──▶ UserPayload::changes
//!                 (None = 본문 없음)          (위반 사항 누적)          (age 정수 변환)
//! ```

pub mod request;
pub mod response;
pub mod validation;

pub use request::*;
pub use response::*;
pub use validation::*;
