//! API 라우트 설정 모듈
//!
//! 사용자 CRUD 엔드포인트와 안내/헬스체크 엔드포인트를 등록합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(web::Data::new(user_service))
//!     .configure(configure_all_routes);
//! ```

use actix_web::web;
use log::debug;

use crate::errors::AppError;
use crate::handlers;
use crate::handlers::index::NOT_FOUND_MESSAGE;

/// 모든 라우트를 설정합니다
///
/// 경로 파라미터 해석 실패(정수가 아닌 ID)와 매칭되지 않는 요청은
/// 404 JSON 에러로 응답합니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::PathConfig::default().error_handler(|err, req| {
        debug!("경로 파라미터 해석 실패: {} ({})", req.path(), err);
        AppError::NotFound(NOT_FOUND_MESSAGE.to_string()).into()
    }));

    cfg.service(handlers::index::index)
        .service(handlers::index::health_check);

    configure_user_routes(cfg);

    cfg.default_service(web::to(handlers::index::not_found));
}

/// 사용자 관련 라우트를 설정합니다
///
/// - `POST /api/users` - 사용자 생성
/// - `GET /api/users` - 전체 사용자 조회
/// - `GET /api/users/{id}` - 사용자 조회
/// - `PUT /api/users/{id}` - 사용자 부분 수정
/// - `DELETE /api/users/{id}` - 사용자 삭제
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/users")
            .service(handlers::users::create_user)
            .service(handlers::users::list_users)
            .service(handlers::users::get_user)
            .service(handlers::users::update_user)
            .service(handlers::users::delete_user)
            .default_service(web::to(handlers::index::not_found)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use serde_json::{json, Value};

    use crate::db::Database;
    use crate::repositories::users::UserRepository;
    use crate::services::users::UserService;

    async fn user_service() -> UserService {
        let database = Database::in_memory().await.unwrap();
        database.ensure_schema().await.unwrap();
        UserService::new(Arc::new(UserRepository::new(database)))
    }

    macro_rules! app {
        () => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(user_service().await))
                    .configure(configure_all_routes),
            )
            .await
        };
    }

    macro_rules! send {
        ($app:expr, $req:expr) => {{
            let response = test::call_service(&$app, $req.to_request()).await;
            let status = response.status();
            let body: Value = test::read_body_json(response).await;
            (status, body)
        }};
    }

    #[actix_web::test]
    async fn test_full_lifecycle_scenario() {
        let app = app!();

        let (status, body) = send!(
            app,
            test::TestRequest::post()
                .uri("/api/users")
                .set_json(json!({ "name": "Ann", "email": "ann@x.com", "age": 30 }))
        );
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body, json!({ "id": 1, "name": "Ann", "email": "ann@x.com", "age": 30 }));

        let (status, fetched) = send!(app, test::TestRequest::get().uri("/api/users/1"));
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched, body);

        let (status, body) = send!(
            app,
            test::TestRequest::put()
                .uri("/api/users/1")
                .set_json(json!({ "age": 31 }))
        );
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "id": 1, "name": "Ann", "email": "ann@x.com", "age": 31 }));

        let (status, body) = send!(app, test::TestRequest::delete().uri("/api/users/1"));
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "message": "User deleted successfully." }));

        let (status, body) = send!(app, test::TestRequest::get().uri("/api/users/1"));
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "User not found." }));
    }

    #[actix_web::test]
    async fn test_list_users() {
        let app = app!();

        let (status, body) = send!(app, test::TestRequest::get().uri("/api/users"));
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));

        for (name, age) in [("Ann", json!(30)), ("Bob", json!("41"))] {
            let (status, _) = send!(
                app,
                test::TestRequest::post()
                    .uri("/api/users")
                    .set_json(json!({ "name": name, "email": "x@y.z", "age": age }))
            );
            assert_eq!(status, StatusCode::CREATED);
        }

        let (_, body) = send!(app, test::TestRequest::get().uri("/api/users"));
        assert_eq!(
            body,
            json!([
                { "id": 1, "name": "Ann", "email": "x@y.z", "age": 30 },
                { "id": 2, "name": "Bob", "email": "x@y.z", "age": 41 }
            ])
        );
    }

    #[actix_web::test]
    async fn test_create_validation_errors() {
        let app = app!();

        let (status, body) = send!(
            app,
            test::TestRequest::post()
                .uri("/api/users")
                .set_json(json!({ "name": 5, "email": "not-an-email" }))
        );
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({
                "error": "Missing required field: age; Field 'name' must be a string.; \
                          Field 'email' must be a valid email address."
            })
        );

        let (_, body) = send!(app, test::TestRequest::get().uri("/api/users"));
        assert_eq!(body, json!([]));
    }

    #[actix_web::test]
    async fn test_empty_bodies() {
        let app = app!();

        let (status, body) = send!(app, test::TestRequest::post().uri("/api/users"));
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "No input data provided." }));

        let (status, body) = send!(
            app,
            test::TestRequest::put().uri("/api/users/1").set_json(json!({}))
        );
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "No update data provided." }));
    }

    #[actix_web::test]
    async fn test_malformed_json_body() {
        let app = app!();

        let (status, body) = send!(
            app,
            test::TestRequest::post()
                .uri("/api/users")
                .insert_header(("Content-Type", "application/json"))
                .set_payload("{not json")
        );
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().starts_with("Failed to decode JSON object"));
    }

    #[actix_web::test]
    async fn test_update_and_delete_missing_user() {
        let app = app!();

        let (status, body) = send!(
            app,
            test::TestRequest::put()
                .uri("/api/users/9")
                .set_json(json!({ "name": "Zed" }))
        );
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "User not found." }));

        let (status, body) = send!(app, test::TestRequest::delete().uri("/api/users/9"));
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "User not found." }));
    }

    #[actix_web::test]
    async fn test_non_integer_id_and_unknown_route() {
        let app = app!();

        let (status, body) = send!(app, test::TestRequest::get().uri("/api/users/abc"));
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": NOT_FOUND_MESSAGE }));

        for uri in ["/api/users/-1", "/api/users/9223372036854775808"] {
            let (status, body) = send!(app, test::TestRequest::delete().uri(uri));
            assert_eq!(status, StatusCode::NOT_FOUND, "uri: {}", uri);
            assert_eq!(body, json!({ "error": NOT_FOUND_MESSAGE }), "uri: {}", uri);
        }

        let (status, body) = send!(
            app,
            test::TestRequest::put().uri("/api/users/-1").set_json(json!({ "age": "x" }))
        );
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": NOT_FOUND_MESSAGE }));

        let (status, body) = send!(app, test::TestRequest::get().uri("/nowhere"));
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": NOT_FOUND_MESSAGE }));
    }

    #[actix_web::test]
    async fn test_index_lists_routes() {
        let app = app!();

        let (status, body) = send!(app, test::TestRequest::get().uri("/"));
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Welcome to the User CRUD API!");
        assert_eq!(body["routes"]["Update User"], "PUT /api/users/<id>");
    }

    #[actix_web::test]
    async fn test_health_check() {
        let app = app!();

        let (status, body) = send!(app, test::TestRequest::get().uri("/health"));
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
    }
}
