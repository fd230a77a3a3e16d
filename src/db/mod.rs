//! Database Connection Management Module
//!
//! SQLite 데이터베이스 연결 관리를 담당하는 모듈입니다.
//! 커넥션 풀 생성과 `users` 테이블 준비를 처리합니다.
//!
//! # 환경 변수 설정
//!
//! ```bash
//! # SQLite 연결 문자열 (파일이 없으면 생성)
//! export DATABASE_URL="sqlite://app.db"
//! ```
//!
//! # 기본 사용법
//!
//! ```rust,ignore
//! use crate::db::Database;
//!
//! let database = Database::connect(&DatabaseConfig::url(), 5).await?;
//! database.ensure_schema().await?;
//! ```

use std::str::FromStr;

use log::info;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

const CREATE_USERS_TABLE: &str = "\
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    email TEXT NOT NULL,
    age INTEGER NOT NULL
)";

/// SQLite 커넥션 풀 래퍼
///
/// 풀은 내부적으로 `Arc`로 공유되므로 복제 비용이 낮고,
/// 리포지토리 계층에 명시적으로 전달됩니다.
#[derive(Clone, Debug)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// 주어진 연결 문자열로 커넥션 풀을 생성합니다.
    ///
    /// 데이터베이스 파일이 없으면 새로 생성합니다.
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;

        info!("✅ SQLite 연결 성공: {}", url);

        Ok(Self { pool })
    }

    /// 메모리 기반 데이터베이스를 생성합니다.
    ///
    /// 메모리 DB는 연결마다 독립적이므로 단일 연결을 유지하며,
    /// 유휴 연결이 정리되어 데이터가 사라지지 않도록 수명 제한을 해제합니다.
    pub async fn in_memory() -> Result<Self, sqlx::Error> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await?;

        Ok(Self { pool })
    }

    /// `users` 테이블이 없으면 생성합니다.
    pub async fn ensure_schema(&self) -> Result<(), sqlx::Error> {
        sqlx::query(CREATE_USERS_TABLE).execute(&self.pool).await?;
        Ok(())
    }

    /// 내부 커넥션 풀
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn test_ensure_schema_is_idempotent() {
        let database = Database::in_memory().await.unwrap();

        database.ensure_schema().await.unwrap();
        database.ensure_schema().await.unwrap();

        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(database.pool())
            .await
            .unwrap();
        assert_eq!(count, 0);
    }
}
