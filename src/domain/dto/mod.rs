//! 데이터 전송 객체(DTO) 모듈
//!
//! HTTP 계층과 서비스 계층 사이에서 주고받는 요청/응답 구조체를 정의합니다.
//! 엔티티를 직접 노출하지 않고 API 계약을 별도로 유지합니다.

pub mod users;

pub use users::*;
