//! 현재 사용자 조회 요청
//!
//! 본문 없이 요청 컨텍스트의 Identity만으로 만들어지는 요청입니다.

use crate::core::errors::{AppError, AppResult};
use crate::core::handler::RequestContext;

/// Identity가 없거나 숫자 계정 ID로 변환할 수 없을 때의 메시지
pub const UNABLE_TO_FETCH_CURRENT_USER: &str = "Unable to fetch current user data.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentUserRequest {
    pub id: i64,
}

impl CurrentUserRequest {
    /// 요청 컨텍스트의 Identity를 계정 ID로 변환합니다.
    pub fn from_context(ctx: &RequestContext) -> AppResult<Self> {
        ctx.identity()
            .and_then(|identity| identity.account_id())
            .map(|id| Self { id })
            .ok_or_else(|| AppError::BadRequest(UNABLE_TO_FETCH_CURRENT_USER.to_string()))
    }
}
