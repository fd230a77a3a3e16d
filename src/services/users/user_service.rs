//! # 사용자 관리 서비스 구현
//!
//! 사용자 CRUD 요청의 검증, 저장소 변경, 에러 매핑을 담당하는 비즈니스 로직입니다.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                 UserService                  │
//! │  • 본문 존재 확인   • 검증 (생성/부분 수정)      │
//! │  • 엔티티 → DTO     • 저장소 에러 → AppError    │
//! └──────────────────────┬───────────────────────┘
//!                        ▼
//! ┌──────────────────────────────────────────────┐
//! │            UserStore (UserRepository)        │
//! │  • 요청당 최대 하나의 트랜잭션                  │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! ## 에러 매핑
//!
//! | 상황 | 에러 |
//! |------|------|
//! | 생성 본문 없음 | `InvalidInput("No input data provided.")` |
//! | 수정 본문 없음 | `InvalidInput("No update data provided.")` |
//! | 검증 실패 | `InvalidInput(<메시지들을 "; "로 연결>)` |
//! | 사용자 없음 | `NotFound("User not found.")` |
//! | 쓰기 실패 | `InvalidInput("Error saving/updating/deleting user: <원인>")` |
//! | 조회 실패 (수정/삭제 대상 조회 포함) | `DatabaseError(<원인>)` |

use std::sync::Arc;

use log::{debug, info, warn};

use crate::domain::dto::users::{
    join_messages, validate_user_data, MessageResponse, UserPayload, UserResponse, ValidationMode,
};
use crate::errors::{AppError, AppResult};
use crate::repositories::users::{StoreError, UserStore};

const USER_NOT_FOUND: &str = "User not found.";

/// 사용자 관리 서비스
///
/// 저장소는 생성 시 주입되며, 서비스 자체는 요청 간 상태를 갖지 않습니다.
#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn UserStore>,
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// 새 사용자 생성
    ///
    /// 모든 필드를 요구하며, 검증을 통과하면 정수로 변환된 나이와 함께 저장합니다.
    pub async fn create_user(&self, payload: Option<UserPayload>) -> AppResult<UserResponse> {
        let payload = payload
            .ok_or_else(|| AppError::InvalidInput("No input data provided.".to_string()))?;

        ensure_valid(&payload, ValidationMode::RequireAll)?;

        let new_user = payload
            .changes()
            .into_new_user()
            .ok_or_else(|| AppError::InvalidInput("No input data provided.".to_string()))?;

        let user = self.store.insert(new_user).await.map_err(|e| {
            warn!("사용자 저장 실패, 롤백됨: {}", e);
            AppError::InvalidInput(format!("Error saving user: {}", e))
        })?;

        info!("사용자 생성: id={}", user.id);
        Ok(UserResponse::from(user))
    }

    /// 전체 사용자 조회
    pub async fn list_users(&self) -> AppResult<Vec<UserResponse>> {
        let users = self
            .store
            .find_all()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    /// ID로 사용자 조회
    pub async fn get_user(&self, id: i64) -> AppResult<UserResponse> {
        let user = self
            .store
            .find_by_id(id)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND.to_string()))?;

        Ok(UserResponse::from(user))
    }

    /// 사용자 부분 수정
    ///
    /// 본문에 포함된 필드만 덮어씁니다. 검증은 대상 조회보다 먼저 수행되므로
    /// 잘못된 본문은 존재하지 않는 ID에 대해서도 400을 반환합니다.
    pub async fn update_user(&self, id: i64, payload: Option<UserPayload>) -> AppResult<UserResponse> {
        let payload = payload
            .ok_or_else(|| AppError::InvalidInput("No update data provided.".to_string()))?;

        ensure_valid(&payload, ValidationMode::Partial)?;

        let user = self
            .store
            .update(id, payload.changes())
            .await
            .map_err(|e| write_error("updating", id, e))?
            .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND.to_string()))?;

        info!("사용자 수정: id={}", user.id);
        Ok(UserResponse::from(user))
    }

    /// 사용자 삭제
    pub async fn delete_user(&self, id: i64) -> AppResult<MessageResponse> {
        let deleted = self
            .store
            .delete(id)
            .await
            .map_err(|e| write_error("deleting", id, e))?;

        if !deleted {
            return Err(AppError::NotFound(USER_NOT_FOUND.to_string()));
        }

        info!("사용자 삭제: id={}", id);
        Ok(MessageResponse::new("User deleted successfully."))
    }
}

/// 수정/삭제 실패를 단계에 맞는 에러로 변환합니다.
fn write_error(action: &str, id: i64, error: StoreError) -> AppError {
    match error {
        StoreError::Lookup(e) => AppError::DatabaseError(e.to_string()),
        StoreError::Write(e) => {
            warn!("사용자 쓰기 실패 ({}), 롤백됨: id={} {}", action, id, e);
            AppError::InvalidInput(format!("Error {} user: {}", action, e))
        }
    }
}

fn ensure_valid(payload: &UserPayload, mode: ValidationMode) -> AppResult<()> {
    let errors = validate_user_data(payload, mode);
    if errors.is_empty() {
        return Ok(());
    }

    let message = join_messages(&errors);
    debug!("요청 검증 실패 ({:?}): {}", mode, message);
    Err(AppError::InvalidInput(message))
}
