//! User Entity Implementation
//!
//! `users` 테이블의 한 행을 표현하는 사용자 엔티티입니다.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// 사용자 엔티티
///
/// 요청마다 저장소에서 읽어 만드는 일시적인 뷰입니다.
/// `id`는 저장소가 삽입 시 부여하며 이후 변경되지 않습니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub age: i64,
}

impl User {
    /// 변경 사항 중 값이 있는 필드만 덮어씁니다.
    pub fn apply(&mut self, changes: UserChanges) {
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(email) = changes.email {
            self.email = email;
        }
        if let Some(age) = changes.age {
            self.age = age;
        }
    }
}

/// 아직 저장되지 않은 사용자
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub age: i64,
}

impl NewUser {
    /// 저장소가 부여한 ID로 엔티티를 완성합니다.
    pub fn with_id(self, id: i64) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
            age: self.age,
        }
    }
}

/// 부분 업데이트 내용 (`None`은 변경하지 않음)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<i64>,
}

impl UserChanges {
    /// 모든 필드가 채워진 경우 새 사용자로 변환합니다.
    pub fn into_new_user(self) -> Option<NewUser> {
        Some(NewUser {
            name: self.name?,
            email: self.email?,
            age: self.age?,
        })
    }
}
