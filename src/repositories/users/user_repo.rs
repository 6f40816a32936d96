//! # 사용자 리포지토리 구현
//!
//! `users` 테이블의 데이터 액세스 계층입니다.
//!
//! ## 특징
//!
//! - **명시적 주입**: 생성 시 [`Database`]를 전달받습니다
//! - **원자적 중복 검사**: 존재 확인과 쓰기가 쓰기 잠금을 먼저 잡은 하나의 트랜잭션에서 실행됩니다
//! - **제약 조건 백스톱**: UNIQUE 위반은 [`AppError::Conflict`]로 변환됩니다
//!
//! ## 에러 컨텍스트
//!
//! 각 메서드는 자신의 작업 이름을 저장소 에러 컨텍스트로 사용합니다.
//!
//! | 메서드 | 컨텍스트 |
//! |--------|----------|
//! | `find_all` | `Failed to fetch users` |
//! | `find_by_id` | `Failed to fetch user` |
//! | `find_by_identifier` | `Login failed` |
//! | `exists_by_username` / `exists_by_email` | `Check failed` |
//! | `create` | `Registration failed` |
//! | `update` | `Update failed` |
//! | `delete` | `Deletion failed` |

use sqlx::{Sqlite, Transaction};

use crate::core::errors::{AppError, AppResult, Conflict, StoreContext};
use crate::db::Database;
use crate::domain::dto::users::request::ProfileChanges;
use crate::domain::entities::users::{NewUser, User};

const USER_COLUMNS: &str = "id, username, email, password_hash";

/// 사용자 데이터 액세스 리포지토리
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let repo = UserRepository::new(database.clone());
///
/// let created = repo.create(NewUser { .. }).await?;
/// let found = repo.find_by_id(created.id).await?;
/// let deleted = repo.delete(created.id).await?;
/// ```
#[derive(Clone)]
pub struct UserRepository {
    db: Database,
}

impl UserRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// 전체 사용자 조회 (저장 순서)
    pub async fn find_all(&self) -> AppResult<Vec<User>> {
        sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users ORDER BY id"))
            .fetch_all(self.db.pool())
            .await
            .store_context("Failed to fetch users")
    }

    /// ID로 사용자 조회
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?"))
            .bind(id)
            .fetch_optional(self.db.pool())
            .await
            .store_context("Failed to fetch user")
    }

    /// 로그인 식별자로 사용자 조회
    ///
    /// 식별자가 저장된 이메일 또는 사용자명과 정확히 일치하는 사용자를 찾습니다.
    /// 둘 다 일치하는 행이 여럿이면 이메일 일치가 우선합니다.
    pub async fn find_by_identifier(&self, identifier: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = ? OR username = ?
             ORDER BY CASE WHEN email = ? THEN 0 ELSE 1 END, id LIMIT 1"
        ))
        .bind(identifier)
        .bind(identifier)
        .bind(identifier)
        .fetch_optional(self.db.pool())
        .await
        .store_context("Login failed")
    }

    /// 사용자명 존재 여부 (대소문자 구분)
    pub async fn exists_by_username(&self, username: &str) -> AppResult<bool> {
        sqlx::query_scalar::<_, i64>("SELECT id FROM users WHERE username = ? LIMIT 1")
            .bind(username)
            .fetch_optional(self.db.pool())
            .await
            .map(|id| id.is_some())
            .store_context("Check failed")
    }

    /// 이메일 존재 여부
    pub async fn exists_by_email(&self, email: &str) -> AppResult<bool> {
        sqlx::query_scalar::<_, i64>("SELECT id FROM users WHERE email = ? LIMIT 1")
            .bind(email)
            .fetch_optional(self.db.pool())
            .await
            .map(|id| id.is_some())
            .store_context("Check failed")
    }

    /// 새 사용자 저장
    ///
    /// 사용자명 → 이메일 순서로 중복을 확인한 뒤 같은 트랜잭션에서 삽입합니다.
    pub async fn create(&self, user: NewUser) -> AppResult<User> {
        const CONTEXT: &str = "Registration failed";

        let mut tx = self.db.begin_write().await.store_context(CONTEXT)?;

        ensure_identity_free(&mut tx, &user.username, &user.email, None, CONTEXT).await?;

        let created = sqlx::query_as::<_, User>(&format!(
            "INSERT INTO users (username, email, password_hash) VALUES (?, ?, ?)
             RETURNING {USER_COLUMNS}"
        ))
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.password_hash)
        .fetch_one(&mut *tx)
        .await
        .store_context(CONTEXT)?;

        tx.commit().await.store_context(CONTEXT)?;

        log::debug!("사용자 저장 완료: id={}", created.id);
        Ok(created)
    }

    /// 사용자 정보 수정
    ///
    /// 현재 행을 읽어 `apply`로 최종 프로필을 만들고, 다른 사용자와의 중복을
    /// 확인한 뒤 갱신합니다. 전 과정이 하나의 트랜잭션입니다.
    /// 사용자가 없으면 `Ok(None)`.
    pub async fn update<F>(&self, id: i64, apply: F) -> AppResult<Option<User>>
    where
        F: FnOnce(&User) -> AppResult<ProfileChanges>,
    {
        const CONTEXT: &str = "Update failed";

        let mut tx = self.db.begin_write().await.store_context(CONTEXT)?;

        let current = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .store_context(CONTEXT)?;

        let Some(current) = current else {
            return Ok(None);
        };

        let changes = apply(&current)?;
        ensure_identity_free(&mut tx, &changes.username, &changes.email, Some(id), CONTEXT)
            .await?;

        let updated = sqlx::query_as::<_, User>(&format!(
            "UPDATE users SET username = ?, email = ? WHERE id = ? RETURNING {USER_COLUMNS}"
        ))
        .bind(&changes.username)
        .bind(&changes.email)
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .store_context(CONTEXT)?;

        tx.commit().await.store_context(CONTEXT)?;
        Ok(updated)
    }

    /// 사용자 삭제. 삭제된 행이 있으면 `true`.
    pub async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(self.db.pool())
            .await
            .store_context("Deletion failed")?;

        Ok(result.rows_affected() > 0)
    }
}

/// 사용자명/이메일이 (`exclude_id` 이외의) 다른 사용자에게 없는지 확인합니다.
///
/// 사용자명 충돌이 이메일 충돌보다 먼저 보고됩니다.
async fn ensure_identity_free(
    tx: &mut Transaction<'_, Sqlite>,
    username: &str,
    email: &str,
    exclude_id: Option<i64>,
    context: &'static str,
) -> AppResult<()> {
    let exclude_id = exclude_id.unwrap_or(-1);

    let username_owner =
        sqlx::query_scalar::<_, i64>("SELECT id FROM users WHERE username = ? AND id != ? LIMIT 1")
            .bind(username)
            .bind(exclude_id)
            .fetch_optional(&mut **tx)
            .await
            .store_context(context)?;
    if username_owner.is_some() {
        return Err(AppError::Conflict(Conflict::UsernameTaken));
    }

    let email_owner =
        sqlx::query_scalar::<_, i64>("SELECT id FROM users WHERE email = ? AND id != ? LIMIT 1")
            .bind(email)
            .bind(exclude_id)
            .fetch_optional(&mut **tx)
            .await
            .store_context(context)?;
    if email_owner.is_some() {
        return Err(AppError::Conflict(Conflict::EmailTaken));
    }

    Ok(())
}
