//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 데이터 액세스 계층을 담당하는 리포지토리입니다.
//! SQLite `users` 테이블을 저장소로 사용합니다.
//!
//! ## 트랜잭션 정책
//!
//! - 모든 쓰기 연산은 하나의 트랜잭션 안에서 수행됩니다.
//! - 성공 시 커밋하고, 실패 시 롤백한 뒤 원래 에러를 반환합니다.
//! - 수정/삭제는 대상 행 조회와 변경을 같은 트랜잭션에서 처리합니다.
//! - 수정/삭제의 실패는 [`StoreError`]로 조회 단계와 쓰기 단계를 구분합니다.

use async_trait::async_trait;
use log::error;
use sqlx::{Sqlite, Transaction};
use thiserror::Error;

use crate::db::Database;
use crate::domain::entities::users::{NewUser, User, UserChanges};

/// 수정/삭제 연산의 실패 단계
#[derive(Debug, Error)]
pub enum StoreError {
    /// 트랜잭션 시작 또는 대상 행 조회 실패
    #[error("{0}")]
    Lookup(sqlx::Error),

    /// 변경 실행 또는 커밋 실패
    #[error("{0}")]
    Write(#[from] sqlx::Error),
}

/// 사용자 저장소 인터페이스
///
/// 서비스 계층은 이 trait에만 의존하므로 테스트에서 다른 구현을
/// 주입할 수 있습니다.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 새 사용자를 삽입하고 ID가 부여된 엔티티를 반환합니다.
    async fn insert(&self, user: NewUser) -> Result<User, sqlx::Error>;

    /// 모든 사용자를 ID 오름차순으로 조회합니다.
    async fn find_all(&self) -> Result<Vec<User>, sqlx::Error>;

    /// ID로 사용자를 조회합니다.
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, sqlx::Error>;

    /// 존재하는 사용자에 변경 사항을 적용합니다.
    ///
    /// 대상이 없으면 `Ok(None)`을 반환합니다.
    async fn update(&self, id: i64, changes: UserChanges) -> Result<Option<User>, StoreError>;

    /// 사용자를 삭제합니다.
    ///
    /// 대상이 없으면 `Ok(false)`를 반환합니다.
    async fn delete(&self, id: i64) -> Result<bool, StoreError>;
}

/// SQLite 기반 사용자 리포지토리
#[derive(Clone, Debug)]
pub struct UserRepository {
    db: Database,
}

impl UserRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    async fn begin(&self) -> Result<Transaction<'static, Sqlite>, sqlx::Error> {
        self.db.pool().begin().await
    }
}

/// 연산 결과에 따라 트랜잭션을 커밋하거나 롤백합니다.
async fn settle<T, E>(tx: Transaction<'static, Sqlite>, outcome: Result<T, E>) -> Result<T, E>
where
    E: From<sqlx::Error>,
{
    match outcome {
        Ok(value) => {
            tx.commit().await?;
            Ok(value)
        }
        Err(e) => {
            if let Err(rollback_error) = tx.rollback().await {
                error!("트랜잭션 롤백 실패: {}", rollback_error);
            }
            Err(e)
        }
    }
}

async fn select_by_id(
    tx: &mut Transaction<'static, Sqlite>,
    id: i64,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT id, name, email, age FROM users WHERE id = ?")
        .bind(id)
        .fetch_optional(&mut **tx)
        .await
}

async fn update_in(
    tx: &mut Transaction<'static, Sqlite>,
    id: i64,
    changes: UserChanges,
) -> Result<Option<User>, StoreError> {
    let Some(mut user) = select_by_id(tx, id).await.map_err(StoreError::Lookup)? else {
        return Ok(None);
    };

    user.apply(changes);

    sqlx::query("UPDATE users SET name = ?, email = ?, age = ? WHERE id = ?")
        .bind(&user.name)
        .bind(&user.email)
        .bind(user.age)
        .bind(user.id)
        .execute(&mut **tx)
        .await?;

    Ok(Some(user))
}

async fn delete_in(tx: &mut Transaction<'static, Sqlite>, id: i64) -> Result<bool, StoreError> {
    if select_by_id(tx, id).await.map_err(StoreError::Lookup)?.is_none() {
        return Ok(false);
    }

    sqlx::query("DELETE FROM users WHERE id = ?")
        .bind(id)
        .execute(&mut **tx)
        .await?;

    Ok(true)
}

#[async_trait]
impl UserStore for UserRepository {
    async fn insert(&self, user: NewUser) -> Result<User, sqlx::Error> {
        let mut tx = self.begin().await?;

        let inserted = sqlx::query("INSERT INTO users (name, email, age) VALUES (?, ?, ?)")
            .bind(&user.name)
            .bind(&user.email)
            .bind(user.age)
            .execute(&mut *tx)
            .await;

        let outcome = inserted.map(|result| user.with_id(result.last_insert_rowid()));
        settle(tx, outcome).await
    }

    async fn find_all(&self) -> Result<Vec<User>, sqlx::Error> {
        sqlx::query_as::<_, User>("SELECT id, name, email, age FROM users ORDER BY id")
            .fetch_all(self.db.pool())
            .await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>("SELECT id, name, email, age FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(self.db.pool())
            .await
    }

    async fn update(&self, id: i64, changes: UserChanges) -> Result<Option<User>, StoreError> {
        let mut tx = self.begin().await.map_err(StoreError::Lookup)?;
        let outcome = update_in(&mut tx, id, changes).await;
        settle(tx, outcome).await
    }

    async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        let mut tx = self.begin().await.map_err(StoreError::Lookup)?;
        let outcome = delete_in(&mut tx, id).await;
        settle(tx, outcome).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn repository() -> UserRepository {
        let database = Database::in_memory().await.unwrap();
        database.ensure_schema().await.unwrap();
        UserRepository::new(database)
    }

    fn new_user(name: &str, age: i64) -> NewUser {
        NewUser {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            age,
        }
    }

    #[actix_web::test]
    async fn test_insert_assigns_sequential_ids() {
        let repo = repository().await;

        let ann = repo.insert(new_user("Ann", 30)).await.unwrap();
        let bob = repo.insert(new_user("Bob", 40)).await.unwrap();

        assert_eq!(ann.id, 1);
        assert_eq!(bob.id, 2);
        assert_eq!(repo.find_by_id(1).await.unwrap(), Some(ann));
    }

    #[actix_web::test]
    async fn test_find_all_orders_by_id() {
        let repo = repository().await;
        assert!(repo.find_all().await.unwrap().is_empty());

        repo.insert(new_user("Ann", 30)).await.unwrap();
        repo.insert(new_user("Bob", 40)).await.unwrap();

        let names: Vec<String> = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|user| user.name)
            .collect();
        assert_eq!(names, vec!["Ann", "Bob"]);
    }

    #[actix_web::test]
    async fn test_update_applies_partial_changes() {
        let repo = repository().await;
        let ann = repo.insert(new_user("Ann", 30)).await.unwrap();

        let updated = repo
            .update(
                ann.id,
                UserChanges {
                    age: Some(31),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.age, 31);
        assert_eq!(updated.name, ann.name);
        assert_eq!(repo.find_by_id(ann.id).await.unwrap(), Some(updated));
    }

    #[actix_web::test]
    async fn test_update_missing_user_returns_none() {
        let repo = repository().await;

        let result = repo.update(42, UserChanges::default()).await.unwrap();

        assert_eq!(result, None);
    }

    #[actix_web::test]
    async fn test_delete() {
        let repo = repository().await;
        let ann = repo.insert(new_user("Ann", 30)).await.unwrap();

        assert!(!repo.delete(99).await.unwrap());
        assert!(repo.delete(ann.id).await.unwrap());
        assert_eq!(repo.find_by_id(ann.id).await.unwrap(), None);
    }

    #[actix_web::test]
    async fn test_failed_write_is_rolled_back() {
        let repo = repository().await;
        sqlx::query(
            "CREATE TRIGGER reject_bob BEFORE INSERT ON users WHEN NEW.name = 'Bob' \
             BEGIN SELECT RAISE(ABORT, 'bob is not welcome'); END",
        )
        .execute(repo.db.pool())
        .await
        .unwrap();

        repo.insert(new_user("Ann", 30)).await.unwrap();
        let err = repo.insert(new_user("Bob", 40)).await.unwrap_err();

        assert!(err.to_string().contains("bob is not welcome"));
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn test_lookup_failure_is_distinguished_from_write_failure() {
        let repo = repository().await;
        repo.insert(new_user("Ann", 30)).await.unwrap();
        sqlx::query(
            "CREATE TRIGGER freeze_users BEFORE UPDATE ON users \
             BEGIN SELECT RAISE(ABORT, 'users are frozen'); END",
        )
        .execute(repo.db.pool())
        .await
        .unwrap();

        let write = repo
            .update(1, UserChanges { age: Some(5), ..Default::default() })
            .await
            .unwrap_err();
        assert!(matches!(write, StoreError::Write(_)));
        assert!(write.to_string().contains("users are frozen"));

        sqlx::query("DROP TABLE users").execute(repo.db.pool()).await.unwrap();

        let update = repo.update(1, UserChanges::default()).await.unwrap_err();
        let delete = repo.delete(1).await.unwrap_err();
        assert!(matches!(update, StoreError::Lookup(_)));
        assert!(matches!(delete, StoreError::Lookup(_)));
    }
}
