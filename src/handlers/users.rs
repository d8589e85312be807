//! # User HTTP Handlers
//!
//! 인증된 호출자의 계정 정보를 돌려주는 엔드포인트입니다.
//!
//! | 메서드 | 경로 | 성공 | 실패 |
//! |--------|------|------|------|
//! | `GET` | `{prefix}/users/current` | 200 `{id, username, email, created_at}` | 400 / 500 `{"message": ...}` |
//!
//! 호출자 식별은 인증 미들웨어가 붙인 `Identity`에만 의존하며, 요청 본문은 읽지 않습니다.

use std::sync::Arc;

use async_trait::async_trait;

use crate::core::errors::AppResult;
use crate::core::handler::{Handler, RequestContext};
use crate::core::registry::{ApiModule, ApiRouter, NamedModule};
use crate::domain::dto::users::request::CurrentUserRequest;
use crate::domain::dto::users::response::CurrentUserResponse;
use crate::services::users::UserService;

/// 현재 사용자 조회 핸들러
pub struct CurrentUserHandler {
    user_service: Arc<UserService>,
}

impl CurrentUserHandler {
    pub fn new(user_service: Arc<UserService>) -> Self {
        Self { user_service }
    }
}

#[async_trait(?Send)]
impl Handler for CurrentUserHandler {
    type Request = CurrentUserRequest;
    type Response = CurrentUserResponse;

    fn parse(&self, ctx: &RequestContext, _body: &[u8]) -> AppResult<CurrentUserRequest> {
        CurrentUserRequest::from_context(ctx)
    }

    async fn execute(&self, request: CurrentUserRequest) -> AppResult<CurrentUserResponse> {
        self.user_service.current_user(request).await
    }
}

/// `/users` 모듈: `GET /users/current`
pub fn module(user_service: Arc<UserService>) -> Box<dyn ApiModule> {
    Box::new(NamedModule::new("users", move |router: &mut ApiRouter| {
        let handler = CurrentUserHandler::new(user_service.clone());
        router.scope("/users", |users| {
            users.bind("GET", "/current", handler);
        });
    }))
}
