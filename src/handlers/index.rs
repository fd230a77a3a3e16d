//! 안내 및 상태 확인 핸들러
//!
//! 루트 경로의 API 안내 문서, 헬스체크, 그리고 매칭되지 않는 요청에 대한
//! JSON 404 응답을 제공합니다.

use actix_web::{get, HttpResponse};
use serde_json::json;

use crate::errors::AppError;

/// 알 수 없는 경로 및 잘못된 경로 파라미터에 대한 메시지
pub const NOT_FOUND_MESSAGE: &str = "The requested URL was not found on the server. \
If you entered the URL manually please check your spelling and try again.";

/// API 안내 문서
///
/// ```bash
/// curl http://localhost:5000/
/// ```
#[get("/")]
pub async fn index() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "message": "Welcome to the User CRUD API!",
        "routes": {
            "Create User": "POST /api/users",
            "Retrieve All Users": "GET /api/users",
            "Retrieve Single User": "GET /api/users/<id>",
            "Update User": "PUT /api/users/<id>",
            "Delete User": "DELETE /api/users/<id>"
        }
    }))
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "user_crud_service",
///   "version": "0.1.0",
///   "timestamp": "2023-01-01T00:00:00Z"
/// }
/// ```
#[get("/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// 매칭되는 라우트가 없는 요청의 기본 응답
pub async fn not_found() -> Result<HttpResponse, AppError> {
    Err(AppError::NotFound(NOT_FOUND_MESSAGE.to_string()))
}
