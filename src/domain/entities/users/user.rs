//! User Entity Implementation
//!
//! `users` 테이블에 대응하는 계정 엔티티입니다.
//!
//! ```text
//! users
//! ├── id          BIGINT       (저장소가 부여, 숫자)
//! ├── username    VARCHAR(50)  (대소문자 무관 unique)
//! ├── email       VARCHAR(254) (대소문자 무관 unique)
//! ├── password    TEXT         (bcrypt 해시, 평문 저장 금지)
//! └── created_at  TIMESTAMPTZ
//! ```
//!
//! 계정은 회원가입으로만 생성되며 이후 읽기 전용입니다.

use std::fmt;

use chrono::{DateTime, Utc};

/// 삽입 대기 중인 새 계정
///
/// `password_hash`는 이미 해싱된 값이어야 합니다.
#[derive(Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

impl NewUser {
    pub fn new(username: String, email: String, password_hash: String) -> Self {
        Self {
            username,
            email,
            password_hash,
        }
    }
}

impl fmt::Debug for NewUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewUser")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password_hash", &"[REDACTED]")
            .finish()
    }
}

/// 계정의 공개 프로필 (해시 제외)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}
