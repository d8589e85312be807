use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::users::user::UserProfile;

/// 회원가입 성공 메시지
pub const SIGN_UP_SUCCESS: &str = "Sign up successfully";

/// 현재 사용자 응답 DTO
///
/// 비밀번호 해시는 포함하지 않습니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUserResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<UserProfile> for CurrentUserResponse {
    fn from(profile: UserProfile) -> Self {
        let UserProfile {
            id,
            username,
            email,
            created_at,
        } = profile;

        Self {
            id,
            username,
            email,
            created_at,
        }
    }
}
