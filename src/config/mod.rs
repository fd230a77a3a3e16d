//! # Configuration Module
//!
//! 서비스 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리하며,
//! `PROFILE`에 따라 `.env` 파일을 먼저 로드합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 데이터베이스, 서버, 환경, Rate Limiting 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="127.0.0.1"
//! export PORT="5000"
//! export WORKERS="4"
//!
//! # 데이터베이스
//! export DATABASE_URL="sqlite://app.db"
//! export DATABASE_MAX_CONNECTIONS="5"
//!
//! # 실행 환경 (development/test는 로컬 CORS Origin 허용)
//! export ENVIRONMENT="production"
//! export CORS_ALLOWED_ORIGINS="https://app.example.com"
//!
//! # Rate Limiting
//! export RATE_LIMIT_PER_SECOND="100"
//! export RATE_LIMIT_BURST_SIZE="200"
//! ```

pub mod data_config;

pub use data_config::*;

use std::path::PathBuf;

/// 로드된 환경 설정 파일 정보
#[derive(Debug, Clone)]
pub struct LoadedProfile {
    pub profile: String,
    /// 실제로 읽은 파일 (없으면 프로세스 환경변수만 사용)
    pub file: Option<PathBuf>,
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// 프로필 파일이 없으면 기본 .env 파일로 대체합니다. 로거 초기화 전에
/// 호출되므로 결과는 반환값으로 전달합니다.
pub fn load_env_file() -> LoadedProfile {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    let file = match profile_file(&profile) {
        Some(name) => dotenv::from_filename(name).or_else(|_| dotenv::dotenv()).ok(),
        None => dotenv::dotenv().ok(),
    };

    LoadedProfile { profile, file }
}

fn profile_file(profile: &str) -> Option<&'static str> {
    match profile {
        "prod" => Some(".env.prod"),
        "dev" => Some(".env.dev"),
        _ => None,
    }
}
