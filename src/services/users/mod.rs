//! 사용자 관리 서비스 모듈
//!
//! [`UserService`](user_service::UserService)는 요청 본문 검증과 저장소 변경을
//! 조율하고, 결과를 응답 DTO 또는 [`AppError`](crate::errors::AppError)로 변환합니다.

pub mod user_service;

pub use user_service::*;
