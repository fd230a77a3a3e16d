//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 리포지토리는 커넥션 풀을 명시적으로 전달받으며, 쓰기 연산마다
//! 하나의 트랜잭션을 열고 커밋 또는 롤백한 뒤 반환합니다.

pub mod users;
