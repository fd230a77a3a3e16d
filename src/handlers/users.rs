//! # User Management HTTP Handlers
//!
//! 사용자 CRUD 엔드포인트를 처리하는 핸들러 함수들입니다.
//! 핸들러는 요청 본문/경로를 해석해 [`UserService`]에 위임하고,
//! 결과를 JSON 응답으로 변환합니다. 에러는 [`AppError`]가 직접 응답으로 변환됩니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/api/users` | 사용자 생성 | 201 Created |
//! | `GET` | `/api/users` | 전체 사용자 조회 | 200 OK |
//! | `GET` | `/api/users/{id}` | 사용자 조회 | 200 OK |
//! | `PUT` | `/api/users/{id}` | 사용자 부분 수정 | 200 OK |
//! | `DELETE` | `/api/users/{id}` | 사용자 삭제 | 200 OK |
//!
//! 경로의 ID는 부호 없는 10진수만 매칭됩니다. 음수나 `i64` 범위를 넘는 ID는
//! 존재하지 않는 경로와 같은 404 응답을 받습니다.

use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::domain::dto::users::UserPayload;
use crate::errors::{AppError, AppResult};
use crate::handlers::index::NOT_FOUND_MESSAGE;
use crate::services::users::UserService;

fn user_id_of(path: web::Path<u64>) -> AppResult<i64> {
    i64::try_from(path.into_inner())
        .map_err(|_| AppError::NotFound(NOT_FOUND_MESSAGE.to_string()))
}

/// 사용자 생성 핸들러
///
/// # 요청 본문
///
/// ```json
/// { "name": "Ann", "email": "ann@x.com", "age": 30 }
/// ```
///
/// # 응답
///
/// ## 성공 (201 Created)
/// ```json
/// { "id": 1, "name": "Ann", "email": "ann@x.com", "age": 30 }
/// ```
///
/// ## 검증 실패 (400 Bad Request)
/// ```json
/// { "error": "Missing required field: email; Field 'age' must be an integer." }
/// ```
///
/// # 사용 예제
///
/// ```bash
/// curl -X POST http://localhost:5000/api/users \
///   -H "Content-Type: application/json" \
///   -d '{"name":"Ann","email":"ann@x.com","age":30}'
/// ```
#[post("")]
pub async fn create_user(
    service: web::Data<UserService>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let payload = UserPayload::from_body(&body)?;
    let user = service.create_user(payload).await?;

    Ok(HttpResponse::Created().json(user))
}

/// 전체 사용자 조회 핸들러
///
/// 사용자가 없으면 빈 배열을 반환합니다.
#[get("")]
pub async fn list_users(service: web::Data<UserService>) -> Result<HttpResponse, AppError> {
    let users = service.list_users().await?;

    Ok(HttpResponse::Ok().json(users))
}

/// 사용자 조회 핸들러
///
/// ## 사용자 없음 (404 Not Found)
/// ```json
/// { "error": "User not found." }
/// ```
#[get("/{user_id}")]
pub async fn get_user(
    service: web::Data<UserService>,
    user_id: web::Path<u64>,
) -> Result<HttpResponse, AppError> {
    let user = service.get_user(user_id_of(user_id)?).await?;

    Ok(HttpResponse::Ok().json(user))
}

/// 사용자 수정 핸들러
///
/// 본문에 포함된 필드만 변경합니다.
///
/// ```bash
/// curl -X PUT http://localhost:5000/api/users/1 \
///   -H "Content-Type: application/json" \
///   -d '{"age":31}'
/// ```
#[put("/{user_id}")]
pub async fn update_user(
    service: web::Data<UserService>,
    user_id: web::Path<u64>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let user_id = user_id_of(user_id)?;
    let payload = UserPayload::from_body(&body)?;
    let user = service.update_user(user_id, payload).await?;

    Ok(HttpResponse::Ok().json(user))
}

/// 사용자 삭제 핸들러
///
/// ## 성공 (200 OK)
/// ```json
/// { "message": "User deleted successfully." }
/// ```
#[delete("/{user_id}")]
pub async fn delete_user(
    service: web::Data<UserService>,
    user_id: web::Path<u64>,
) -> Result<HttpResponse, AppError> {
    let response = service.delete_user(user_id_of(user_id)?).await?;

    Ok(HttpResponse::Ok().json(response))
}
