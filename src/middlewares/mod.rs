//! 미들웨어 모듈
//!
//! 요청 처리 파이프라인의 횡단 관심사를 처리합니다.
//!
//! # 제공 미들웨어
//!
//! ### 인증 미들웨어 (AuthMiddleware)
//! - `Authorization: Bearer <jwt>` 헤더 검증
//! - 토큰의 `sub` 클레임을 [`Identity`](crate::domain::models::auth::Identity)로 request extension에 저장
//! - 인증 실패 시에도 요청을 거부하지 않고 그대로 진행 (인증 여부 판단은 유스케이스의 몫)
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::{App, HttpServer};
//! use crate::middlewares::AuthMiddleware;
//!
//! let token_service = Arc::new(TokenService::from_config());
//!
//! HttpServer::new(move || {
//!     App::new()
//!         .wrap(AuthMiddleware::new(token_service.clone()))
//!         .default_service(web::to(dispatch_api))
//! })
//! ```

pub mod auth_middleware;
mod auth_inner;

pub use auth_middleware::AuthMiddleware;
