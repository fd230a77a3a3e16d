//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Handlers (이 모듈) - 본문/경로 해석, 응답 생성      ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 검증, 에러 매핑                       ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 트랜잭션 단위 데이터 접근           ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! 서비스는 `web::Data<UserService>`로 주입됩니다. 핸들러는
//! `Result<HttpResponse, AppError>`를 반환하며, 에러는 `ResponseError` 구현을 통해
//! 상태 코드와 `{"error": ...}` 본문으로 변환됩니다.
//!
//! ## 모듈 구성
//!
//! - **`users`**: 사용자 CRUD 엔드포인트
//! - **`index`**: API 안내, 헬스체크, 기본 404 응답

pub mod index;
pub mod users;
