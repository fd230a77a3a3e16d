//! 사용자 CRUD 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동합니다.
//! SQLite 연결과 스키마를 준비하고, 사용자 서비스를 앱 데이터로 주입합니다.

use std::io;
use std::sync::Arc;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use env_logger::Env;
use log::{info, warn};
use user_crud_service::config::{
    load_env_file, CorsConfig, DatabaseConfig, Environment, RateLimitConfig, ServerConfig,
};
use user_crud_service::db::Database;
use user_crud_service::errors::ErrorContext;
use user_crud_service::repositories::users::UserRepository;
use user_crud_service::routes::configure_all_routes;
use user_crud_service::services::users::UserService;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 환경 설정 및 로깅 초기화
    let loaded = load_env_file();
    init_logging();

    info!("🚀 사용자 CRUD 서비스 시작중...");
    let environment = Environment::current();
    info!("Current profile: {} ({:?})", loaded.profile, environment);
    match &loaded.file {
        Some(path) => info!("📄 환경 설정 파일 로드 됨: {}", path.display()),
        None => warn!("환경 설정 파일 없음, 프로세스 환경변수만 사용합니다"),
    }

    let database = initialize_database().await?;
    let user_service = web::Data::new(UserService::new(Arc::new(UserRepository::new(database))));

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(user_service, CorsConfig::allowed_origins(&environment)).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패, Rate Limiting 설정 오류 또는 서버 실행 오류
async fn start_http_server(
    user_service: web::Data<UserService>,
    allowed_origins: Vec<String>,
) -> io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 API: http://{}/api/users", bind_address);

    let rate_limit_config = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("잘못된 Rate Limiting 설정: {:?}", rate_limit_config),
            )
        })?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    info!("🔓 CORS 허용 Origin: {:?}", allowed_origins);

    HttpServer::new(move || {
        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors(&allowed_origins))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(user_service.clone())
            .configure(configure_all_routes)
    })
    .bind(bind_address.as_str())?
    .workers(ServerConfig::workers())
    .run()
    .await
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info")
///
/// ```bash
/// RUST_LOG=user_crud_service::services=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// SQLite 연결을 만들고 `users` 테이블을 준비합니다
///
/// 연결이나 스키마 생성에 실패하면 서버를 시작하지 않습니다.
async fn initialize_database() -> io::Result<Database> {
    info!("📡 데이터베이스 연결 중...");

    let database_url = DatabaseConfig::url();
    let database = Database::connect(&database_url, DatabaseConfig::max_connections())
        .await
        .with_context(|| format!("데이터베이스 연결 실패 ({})", database_url))
        .map_err(io::Error::other)?;

    database
        .ensure_schema()
        .await
        .context("스키마 생성 실패")
        .map_err(io::Error::other)?;

    info!("✅ users 테이블 준비 완료");

    Ok(database)
}

/// CORS 설정을 구성합니다
///
/// 허용 Origin은 실행 환경에 따라 [`CorsConfig`]가 결정합니다.
/// 목록이 비어 있으면 교차 출처 요청을 허용하지 않습니다.
fn configure_cors(allowed_origins: &[String]) -> Cors {
    allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        // Preflight 요청 캐시 시간 (초)
        .max_age(3600)
}
