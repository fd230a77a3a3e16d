//! 에러 타입 모듈
//!
//! [`AppError`](errors::AppError)와 HTTP 응답 변환을 제공합니다.

#[allow(clippy::module_inception)]
pub mod errors;

pub use errors::*;
