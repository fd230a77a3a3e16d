//! Users Entity Module
//!
//! 사용자 도메인의 엔티티와 쓰기용 값 타입을 정의합니다.
//!
//! - [`User`](user::User) - 저장된 사용자 행
//! - [`NewUser`](user::NewUser) - 삽입 대기 중인 사용자
//! - [`UserChanges`](user::UserChanges) - 부분 업데이트 내용

pub mod user;

pub use user::*;
