//! JWT 인증 미들웨어
//!
//! ActixWeb 요청 파이프라인에서 JWT 토큰을 검증하고 계정 식별자를 추출합니다.

use std::future::{ready, Ready};
use std::rc::Rc;
use std::sync::Arc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
};

use crate::middlewares::auth_inner::AuthMiddlewareService;
use crate::services::auth::TokenService;

/// JWT 인증 미들웨어 (선택적 인증)
///
/// 유효한 토큰이면 `Identity`를 request extension에 넣고, 그렇지 않으면 아무것도 넣지 않은 채
/// 다음 서비스로 넘깁니다.
#[derive(Clone)]
pub struct AuthMiddleware {
    token_service: Arc<TokenService>,
}

impl AuthMiddleware {
    pub fn new(token_service: Arc<TokenService>) -> Self {
        Self { token_service }
    }

    /// `JWT_SECRET` 설정으로 토큰 서비스를 구성합니다.
    pub fn from_config() -> Self {
        Self::new(Arc::new(TokenService::from_config()))
    }
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            token_service: self.token_service.clone(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::handler::RequestContext;
    use crate::services::auth::token_service::tests::{issue_token, TEST_SECRET};
    use actix_web::{http::header, test, web, App, HttpResponse};
    use chrono::Duration;
    use serde_json::{json, Value};

    async fn whoami(ctx: RequestContext) -> HttpResponse {
        let sub = ctx.identity().map(|i| i.raw().clone()).unwrap_or(Value::Null);
        HttpResponse::Ok().json(json!({ "sub": sub }))
    }

    async fn call_whoami(auth_header: Option<String>) -> Value {
        let app = test::init_service(
            App::new()
                .wrap(AuthMiddleware::new(Arc::new(TokenService::new(TEST_SECRET, 0))))
                .route("/whoami", web::get().to(whoami)),
        )
        .await;

        let mut req = test::TestRequest::get().uri("/whoami");
        if let Some(value) = auth_header {
            req = req.insert_header((header::AUTHORIZATION, value));
        }
        let resp = test::call_service(&app, req.to_request()).await;
        assert!(resp.status().is_success());
        test::read_body_json(resp).await
    }

    #[actix_web::test]
    async fn test_valid_token_attaches_identity() {
        let token = issue_token(json!(42), TEST_SECRET, Duration::hours(1));
        let body = call_whoami(Some(format!("Bearer {}", token))).await;
        assert_eq!(body["sub"], json!(42));
    }

    #[actix_web::test]
    async fn test_missing_header_passes_through() {
        let body = call_whoami(None).await;
        assert_eq!(body["sub"], Value::Null);
    }

    #[actix_web::test]
    async fn test_invalid_token_passes_through_without_identity() {
        let expired = issue_token(json!(42), TEST_SECRET, Duration::hours(-2));
        assert_eq!(call_whoami(Some(format!("Bearer {}", expired))).await["sub"], Value::Null);

        let forged = issue_token(json!(42), "wrong-secret", Duration::hours(1));
        assert_eq!(call_whoami(Some(format!("Bearer {}", forged))).await["sub"], Value::Null);

        assert_eq!(call_whoami(Some("Token abc".to_string())).await["sub"], Value::Null);
    }
}
