//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 핸들러가 반환한 에러를
//! `{"error": "<message>"}` 형태의 JSON 응답으로 변환합니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `InvalidInput` | 400 Bad Request | 본문 누락, 검증 실패, 저장소 쓰기 실패 |
//! | `NotFound` | 404 Not Found | 존재하지 않는 사용자 ID, 알 수 없는 경로 |
//! | `DatabaseError` | 500 Internal Server Error | 조회 중 저장소 오류 |
//! | `InternalError` | 500 Internal Server Error | 설정/초기화 오류 |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! let user = repo.find_by_id(id).await
//!     .map_err(|e| AppError::DatabaseError(e.to_string()))?
//!     .ok_or_else(|| AppError::NotFound("User not found.".to_string()))?;
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 메시지는 가공 없이 그대로 클라이언트에게 전달되므로 `Display` 출력에
/// 접두어를 붙이지 않습니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 잘못된 입력 또는 저장소 쓰기 실패 (400 Bad Request)
    #[error("{0}")]
    InvalidInput(String),

    /// 리소스 찾을 수 없음 (404 Not Found)
    #[error("{0}")]
    NotFound(String),

    /// 조회 경로의 데이터베이스 에러 (500 Internal Server Error)
    #[error("{0}")]
    DatabaseError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("{0}")]
    InternalError(String),
}

impl AppError {
    /// 응답에 사용할 HTTP 상태 코드
    pub fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        AppError::status_code(self)
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 모든 에러 응답은 `{"error": "<message>"}` 형식을 따릅니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(AppError::status_code(self))
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use actix_web::http::StatusCode;
    use actix_web::ResponseError;

    #[test]
    fn test_invalid_input_error_response() {
        let error = AppError::InvalidInput("No input data provided.".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::NotFound("User not found.".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_database_and_internal_errors_are_server_errors() {
        let database = AppError::DatabaseError("pool timed out".to_string());
        let internal = AppError::InternalError("bad config".to_string());

        assert_eq!(database.error_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(internal.error_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_display_is_bare_message() {
        let error = AppError::InvalidInput("Missing required field: age".to_string());

        assert_eq!(error.to_string(), "Missing required field: age");
    }

    #[actix_web::test]
    async fn test_error_body_shape() {
        let error = AppError::NotFound("User not found.".to_string());
        let body = to_bytes(error.error_response().into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(json, serde_json::json!({ "error": "User not found." }));
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        assert!(app_result.is_err());
        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}
