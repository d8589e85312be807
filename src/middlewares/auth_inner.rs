//! AuthMiddleware 인증 로직의 핵심적인 기능
use std::rc::Rc;
use std::sync::Arc;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::http::header;
use actix_web::{Error, HttpMessage};
use futures_util::future::LocalBoxFuture;

use crate::domain::models::auth::Identity;
use crate::services::auth::{TokenError, TokenService};

/// 실제 인증 로직을 수행하는 서비스
pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
    pub token_service: Arc<TokenService>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let token_service = self.token_service.clone();

        Box::pin(async move {
            match identify_request(&req, &token_service) {
                Ok(Some(identity)) => {
                    log::debug!("인증 성공: 주체 {}", identity.raw());
                    req.extensions_mut().insert(identity);
                }
                Ok(None) => {
                    log::debug!("인증: 토큰 없음 또는 주체 없음, 요청 진행");
                }
                Err(err) => {
                    log::debug!("인증 실패, 익명으로 요청 진행: {}", err);
                }
            }

            service.call(req).await
        })
    }
}

/// 요청 헤더에서 토큰을 꺼내 검증합니다. 헤더가 없으면 `Ok(None)`입니다.
fn identify_request(
    req: &ServiceRequest,
    token_service: &TokenService,
) -> Result<Option<Identity>, TokenError> {
    let Some(value) = req.headers().get(header::AUTHORIZATION) else {
        return Ok(None);
    };
    let auth_header = value.to_str().map_err(|_| TokenError::MalformedHeader)?;

    let token = token_service.extract_bearer_token(auth_header)?;
    token_service.identify(token)
}
