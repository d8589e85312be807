//! Authentication HTTP Handlers
//!
//! 계정 생성(회원가입) 엔드포인트입니다.
//!
//! # Endpoints
//!
//! | 메서드 | 경로 | 성공 | 실패 |
//! |--------|------|------|------|
//! | `POST` | `{prefix}/auth/sign-up` | 201 `{"message":"Sign up successfully"}` | 400 `{"message": ...}` |
//!
//! # Examples
//!
//! ```bash
//! curl -X POST http://localhost:8080/api/v1/auth/sign-up \
//!   -H "Content-Type: application/json" \
//!   -d '{"username":"alice","email":"alice@example.com","password":"s3cret"}'
//! ```

use std::sync::Arc;

use actix_web::http::StatusCode;
use async_trait::async_trait;

use crate::core::errors::AppResult;
use crate::core::handler::{parse_json, Handler, RequestContext};
use crate::core::registry::{ApiModule, ApiRouter, NamedModule};
use crate::core::response::MessageResponse;
use crate::domain::dto::users::request::SignUpRequest;
use crate::services::users::UserService;

/// 회원가입 핸들러
///
/// parse 단계에서 JSON 해석과 필드 검증을 마치므로, execute 단계에는 항상 유효한 요청만 도달합니다.
pub struct SignUpHandler {
    user_service: Arc<UserService>,
}

impl SignUpHandler {
    pub fn new(user_service: Arc<UserService>) -> Self {
        Self { user_service }
    }
}

#[async_trait(?Send)]
impl Handler for SignUpHandler {
    type Request = SignUpRequest;
    type Response = MessageResponse;

    const SUCCESS_STATUS: StatusCode = StatusCode::CREATED;

    fn parse(&self, _ctx: &RequestContext, body: &[u8]) -> AppResult<SignUpRequest> {
        let request: SignUpRequest = parse_json(body)?;
        request.check()?;
        Ok(request)
    }

    async fn execute(&self, request: SignUpRequest) -> AppResult<MessageResponse> {
        log::debug!("회원가입 요청: {:?}", request);
        self.user_service.sign_up(request).await
    }
}

/// `/auth` 모듈: `POST /auth/sign-up`
pub fn module(user_service: Arc<UserService>) -> Box<dyn ApiModule> {
    Box::new(NamedModule::new("auth", move |router: &mut ApiRouter| {
        let handler = SignUpHandler::new(user_service.clone());
        router.scope("/auth", |auth| {
            auth.bind("POST", "/sign-up", handler);
        });
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::AppError;
    use crate::db::store::MockStore;
    use crate::repositories::users::UserRepository;
    use crate::test_support::fast_hasher;

    /// 저장소에 닿으면 실패하는 핸들러
    fn handler_without_store_access() -> SignUpHandler {
        let mut store = MockStore::new();
        store.expect_query_row().never();
        store.expect_exec().never();
        let service = UserService::new(UserRepository::new(Arc::new(store)), fast_hasher());
        SignUpHandler::new(Arc::new(service))
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        let handler = handler_without_store_access();
        let err = handler
            .parse(&RequestContext::anonymous(), b"{not json")
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidRequest(ref m) if m == "Invalid request body."));
    }

    #[test]
    fn test_parse_rejects_non_object_body() {
        let handler = handler_without_store_access();
        assert!(handler.parse(&RequestContext::anonymous(), b"[1,2]").is_err());
        assert!(handler.parse(&RequestContext::anonymous(), b"").is_err());
    }

    #[test]
    fn test_parse_reports_validation_messages() {
        let handler = handler_without_store_access();
        let err = handler
            .parse(
                &RequestContext::anonymous(),
                br#"{"username":"","email":"nope","password":"pw"}"#,
            )
            .unwrap_err();
        assert_eq!(err.to_string(), "Username is required. E-mail is invalid.");
    }

    #[test]
    fn test_parse_accepts_valid_body() {
        let handler = handler_without_store_access();
        let request = handler
            .parse(
                &RequestContext::anonymous(),
                br#"{"username":" alice ","email":"alice@example.com","password":"pw"}"#,
            )
            .unwrap();
        assert_eq!(request.username, "alice");
    }
}
