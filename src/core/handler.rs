//! # Handler Contract
//!
//! 모든 엔드포인트가 구현하는 3단계 계약입니다.
//!
//! ```text
//! raw request (body bytes + RequestContext)
//!      │ parse    ─ 저장소에 접근하지 않음, 실패 시 400
//!      ▼
//! typed request
//!      │ execute  ─ 전송 계층에 접근하지 않음, 도메인 결과 반환
//!      ▼
//! AppResult<typed response>
//!      │ respond  ─ 성공 2xx / 사용자 오류 4xx / 내부 오류 5xx
//!      ▼
//! HttpResponse (요청당 정확히 하나)
//! ```
//!
//! 구현체는 [`Handler`]만 작성하면 되고, 라우터가 사용하는 객체 안전(object-safe)한
//! [`Endpoint`]는 blanket impl로 자동 제공됩니다.
//!
//! ```rust,ignore
//! struct PingHandler;
//!
//! #[async_trait(?Send)]
//! impl Handler for PingHandler {
//!     type Request = ();
//!     type Response = MessageResponse;
//!
//!     fn parse(&self, _ctx: &RequestContext, _body: &[u8]) -> AppResult<()> {
//!         Ok(())
//!     }
//!
//!     async fn execute(&self, _request: ()) -> AppResult<MessageResponse> {
//!         Ok(MessageResponse::new("pong"))
//!     }
//! }
//! ```

use std::future::{ready, Ready};
use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::web::Bytes;
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest, HttpResponse};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::core::errors::{AppError, AppResult};
use crate::core::response::respond;
use crate::domain::models::auth::Identity;

/// 본문을 해석할 수 없을 때 돌려주는 고정 메시지
pub const INVALID_REQUEST_BODY: &str = "Invalid request body.";

/// 요청 범위 컨텍스트
///
/// 상위 인증 단계가 붙여준 [`Identity`]를 parse 단계로 명시적으로 전달합니다.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    identity: Option<Identity>,
}

impl RequestContext {
    pub fn new(identity: Option<Identity>) -> Self {
        Self { identity }
    }

    /// 인증 정보가 없는 컨텍스트
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn with_identity(identity: Identity) -> Self {
        Self::new(Some(identity))
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }
}

/// request extensions에서 Identity를 읽어 컨텍스트를 구성합니다.
impl FromRequest for RequestContext {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let identity = req.extensions().get::<Identity>().cloned();
        ready(Ok(RequestContext::new(identity)))
    }
}

/// parse → execute 두 단계를 정의하는 핸들러 계약
///
/// respond 단계는 [`Endpoint`] blanket impl이 [`SUCCESS_STATUS`](Handler::SUCCESS_STATUS)와
/// [`respond`]를 사용해 공통으로 처리합니다.
#[async_trait(?Send)]
pub trait Handler: Send + Sync + 'static {
    type Request: 'static;
    type Response: Serialize;

    /// 성공 시 응답 상태 코드
    const SUCCESS_STATUS: StatusCode = StatusCode::OK;

    /// 원시 요청을 타입이 있는 요청으로 변환합니다. 저장소를 건드리지 않습니다.
    fn parse(&self, ctx: &RequestContext, body: &[u8]) -> AppResult<Self::Request>;

    /// 비즈니스 로직을 실행합니다. 전송 계층을 건드리지 않습니다.
    async fn execute(&self, request: Self::Request) -> AppResult<Self::Response>;
}

/// 라우트 테이블에 저장되는 객체 안전한 엔드포인트
#[async_trait(?Send)]
pub trait Endpoint {
    async fn serve(&self, ctx: RequestContext, body: Bytes) -> HttpResponse;
}

#[async_trait(?Send)]
impl<H: Handler> Endpoint for H {
    async fn serve(&self, ctx: RequestContext, body: Bytes) -> HttpResponse {
        let result = match self.parse(&ctx, &body) {
            Ok(request) => self.execute(request).await,
            Err(err) => Err(err),
        };
        respond(H::SUCCESS_STATUS, result)
    }
}

/// 워커 간 공유되는 엔드포인트 핸들
pub type SharedEndpoint = Arc<dyn Endpoint + Send + Sync>;

/// JSON 본문을 역직렬화합니다. 실패하면 [`INVALID_REQUEST_BODY`]로 400을 돌려줍니다.
pub fn parse_json<T: DeserializeOwned>(body: &[u8]) -> AppResult<T> {
    serde_json::from_slice(body).map_err(|e| {
        log::debug!("요청 본문 파싱 실패: {}", e);
        AppError::InvalidRequest(INVALID_REQUEST_BODY.to_string())
    })
}
