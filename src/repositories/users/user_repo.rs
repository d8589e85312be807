//! # 사용자 리포지토리 구현
//!
//! `users` 테이블에 대한 데이터 액세스 계층입니다.
//! 모든 접근은 [`Store`] 포트를 통하므로 PostgreSQL 어댑터와 테스트 대역을 그대로 교체할 수 있습니다.
//!
//! ## 무결성
//!
//! - `LOWER(username)`, `LOWER(email)`에 대한 유니크 인덱스가 최종 판단 기준입니다.
//! - 서비스 계층의 존재 여부 사전 확인은 안내용이며, 동시 가입 경합은 인덱스 위반
//!   ([`StoreError::UniqueViolation`])으로 드러납니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! let repo = UserRepository::new(database.store());
//! repo.create_schema().await?;
//!
//! if !repo.exists_by_username("alice").await? {
//!     repo.create(&NewUser::new(username, email, hash)).await?;
//! }
//! ```

use std::sync::Arc;

use log::info;

use crate::db::store::{SqlValue, Store, StoreError};
use crate::domain::entities::users::user::{NewUser, UserProfile};

pub(crate) const EXISTS_BY_USERNAME: &str =
    "SELECT EXISTS(SELECT 1 FROM users WHERE LOWER(username) = LOWER($1))";

pub(crate) const EXISTS_BY_EMAIL: &str =
    "SELECT EXISTS(SELECT 1 FROM users WHERE LOWER(email) = LOWER($1))";

pub(crate) const INSERT_USER: &str =
    "INSERT INTO users (username, email, password) VALUES ($1, $2, $3)";

pub(crate) const FIND_PROFILE_BY_ID: &str =
    "SELECT username, email, created_at FROM users WHERE id = $1";

pub(crate) const CREATE_USERS_TABLE: &str = "CREATE TABLE IF NOT EXISTS users (
    id BIGSERIAL PRIMARY KEY,
    username VARCHAR(50) NOT NULL,
    email VARCHAR(254) NOT NULL,
    password TEXT NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
)";

/// 사용자명 유니크 인덱스 이름
pub const USERNAME_UNIQUE_INDEX: &str = "users_username_lower_key";

/// 이메일 유니크 인덱스 이름
pub const EMAIL_UNIQUE_INDEX: &str = "users_email_lower_key";

pub(crate) const CREATE_USERNAME_INDEX: &str =
    "CREATE UNIQUE INDEX IF NOT EXISTS users_username_lower_key ON users (LOWER(username))";

pub(crate) const CREATE_EMAIL_INDEX: &str =
    "CREATE UNIQUE INDEX IF NOT EXISTS users_email_lower_key ON users (LOWER(email))";

/// 사용자 데이터 액세스 리포지토리
#[derive(Clone)]
pub struct UserRepository {
    store: Arc<dyn Store>,
}

impl UserRepository {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// 대소문자 구분 없이 사용자명이 이미 존재하는지 확인합니다.
    pub async fn exists_by_username(&self, username: &str) -> Result<bool, StoreError> {
        self.exists(EXISTS_BY_USERNAME, username).await
    }

    /// 대소문자 구분 없이 이메일이 이미 존재하는지 확인합니다.
    pub async fn exists_by_email(&self, email: &str) -> Result<bool, StoreError> {
        self.exists(EXISTS_BY_EMAIL, email).await
    }

    async fn exists(&self, sql: &str, value: &str) -> Result<bool, StoreError> {
        let row = self.store.query_row(sql, &[SqlValue::from(value)]).await?;
        row.expect_columns(1)?;
        row.get::<bool>(0)
    }

    /// 새 계정을 삽입합니다.
    ///
    /// # Errors
    ///
    /// * `StoreError::UniqueViolation` - 사용자명/이메일 인덱스 위반 (`constraint`에 인덱스 이름)
    /// * 그 외 `StoreError` - 삽입 실패
    pub async fn create(&self, user: &NewUser) -> Result<(), StoreError> {
        self.store
            .exec(
                INSERT_USER,
                &[
                    SqlValue::from(user.username.as_str()),
                    SqlValue::from(user.email.as_str()),
                    SqlValue::from(user.password_hash.as_str()),
                ],
            )
            .await?;
        Ok(())
    }

    /// ID로 공개 프로필을 조회합니다.
    ///
    /// 결과 행은 정확히 `username, email, created_at` 세 컬럼이어야 하며,
    /// 그렇지 않으면 `StoreError::Decode`를 반환합니다.
    pub async fn find_profile_by_id(&self, id: i64) -> Result<UserProfile, StoreError> {
        let row = self
            .store
            .query_row(FIND_PROFILE_BY_ID, &[SqlValue::Int(id)])
            .await?;

        row.expect_columns(3)?;

        Ok(UserProfile {
            id,
            username: row.get(0)?,
            email: row.get(1)?,
            created_at: row.get(2)?,
        })
    }

    /// `users` 테이블과 대소문자 무관 유니크 인덱스를 생성합니다.
    ///
    /// 이미 존재하면 아무것도 하지 않으므로 매 시작 시 실행해도 안전합니다.
    /// 기존 데이터에 대소문자만 다른 중복이 있으면 인덱스 생성이 실패합니다.
    pub async fn create_schema(&self) -> Result<(), StoreError> {
        for statement in [CREATE_USERS_TABLE, CREATE_USERNAME_INDEX, CREATE_EMAIL_INDEX] {
            self.store.exec(statement, &[]).await?;
        }
        info!("✅ users 테이블 및 유니크 인덱스 준비 완료");
        Ok(())
    }
}
