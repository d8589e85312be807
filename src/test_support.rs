//! 테스트 공용 대역
//!
//! `users` 테이블 쿼리를 메모리에서 흉내 내는 [`MemoryStore`]와 빠른 해셔를 제공합니다.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::db::store::{Row, SqlValue, Store, StoreError};
use crate::repositories::users::user_repo::{
    CREATE_EMAIL_INDEX, CREATE_USERNAME_INDEX, CREATE_USERS_TABLE, EMAIL_UNIQUE_INDEX,
    EXISTS_BY_EMAIL, EXISTS_BY_USERNAME, FIND_PROFILE_BY_ID, INSERT_USER, USERNAME_UNIQUE_INDEX,
};
use crate::services::auth::password_hasher::{BcryptHasher, CredentialHasher};

#[derive(Debug, Clone)]
struct StoredUser {
    id: i64,
    username: String,
    email: String,
    password: String,
    created_at: DateTime<Utc>,
}

/// 메모리 기반 `users` 테이블
#[derive(Default)]
pub(crate) struct MemoryStore {
    users: Mutex<Vec<StoredUser>>,
}

impl MemoryStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn user_count(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    pub(crate) fn stored_password(&self, username: &str) -> Option<String> {
        self.find(username).map(|u| u.password)
    }

    pub(crate) fn id_of(&self, username: &str) -> Option<i64> {
        self.find(username).map(|u| u.id)
    }

    fn find(&self, username: &str) -> Option<StoredUser> {
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.username == username)
            .cloned()
    }
}

fn text(params: &[SqlValue], index: usize) -> Result<String, StoreError> {
    match params.get(index) {
        Some(SqlValue::Text(s)) => Ok(s.clone()),
        other => Err(StoreError::Database(format!(
            "expected text parameter ${}, got {:?}",
            index + 1,
            other
        ))),
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn query_row(&self, sql: &str, params: &[SqlValue]) -> Result<Row, StoreError> {
        let users = self.users.lock().unwrap();

        match sql {
            EXISTS_BY_USERNAME => {
                let name = text(params, 0)?.to_lowercase();
                let exists = users.iter().any(|u| u.username.to_lowercase() == name);
                Ok(Row::new().with("exists", exists))
            }
            EXISTS_BY_EMAIL => {
                let email = text(params, 0)?.to_lowercase();
                let exists = users.iter().any(|u| u.email.to_lowercase() == email);
                Ok(Row::new().with("exists", exists))
            }
            FIND_PROFILE_BY_ID => {
                let id = match params.first() {
                    Some(SqlValue::Int(id)) => *id,
                    other => {
                        return Err(StoreError::Database(format!("bad id parameter: {:?}", other)))
                    }
                };
                let user = users.iter().find(|u| u.id == id).ok_or(StoreError::NoRows)?;
                Ok(Row::new()
                    .with("username", user.username.as_str())
                    .with("email", user.email.as_str())
                    .with("created_at", user.created_at))
            }
            _ => Err(StoreError::Database(format!("unsupported query: {}", sql))),
        }
    }

    async fn exec(&self, sql: &str, params: &[SqlValue]) -> Result<u64, StoreError> {
        match sql {
            CREATE_USERS_TABLE | CREATE_USERNAME_INDEX | CREATE_EMAIL_INDEX => Ok(0),
            INSERT_USER => {
                let username = text(params, 0)?;
                let email = text(params, 1)?;
                let password = text(params, 2)?;

                let mut users = self.users.lock().unwrap();
                if users
                    .iter()
                    .any(|u| u.username.to_lowercase() == username.to_lowercase())
                {
                    return Err(StoreError::UniqueViolation {
                        constraint: Some(USERNAME_UNIQUE_INDEX.to_string()),
                    });
                }
                if users
                    .iter()
                    .any(|u| u.email.to_lowercase() == email.to_lowercase())
                {
                    return Err(StoreError::UniqueViolation {
                        constraint: Some(EMAIL_UNIQUE_INDEX.to_string()),
                    });
                }

                let id = users.iter().map(|u| u.id).max().unwrap_or(0) + 1;
                users.push(StoredUser {
                    id,
                    username,
                    email,
                    password,
                    created_at: Utc::now(),
                });
                Ok(1)
            }
            _ => Err(StoreError::Database(format!("unsupported statement: {}", sql))),
        }
    }
}

/// 최소 cost bcrypt 해셔
pub(crate) fn fast_hasher() -> Arc<dyn CredentialHasher> {
    Arc::new(BcryptHasher::new(4))
}
