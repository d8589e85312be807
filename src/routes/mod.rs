//! API 라우트 설정 모듈
//!
//! 기능 모듈을 [`RouteTable`]로 조립하고, actix-web 앱에 연결합니다.
//!
//! # Features
//!
//! - 모듈 레지스트리 기반 API 라우팅 (`{prefix}/auth/sign-up`, `{prefix}/users/current`)
//! - 매칭되지 않는 요청은 404 `{"message":"Route not found."}`
//! - 헬스체크 엔드포인트
//!
//! # Examples
//!
//! ```rust,ignore
//! let table = build_route_table(&ApiConfig::root_path(), api_modules(user_service));
//!
//! App::new()
//!     .app_data(web::Data::new(table))
//!     .configure(configure_all_routes)
//!     .default_service(web::to(dispatch_api))
//! ```

use std::sync::Arc;

use actix_web::{web, HttpRequest, HttpResponse};
use serde_json::json;

use crate::core::handler::RequestContext;
use crate::core::registry::{ApiModule, ApiRouter, RouteTable};
use crate::core::errors::AppError;
use crate::core::response::write_error;
use crate::handlers;
use crate::services::users::UserService;

/// 매칭되는 라우트가 없을 때의 메시지
pub const ROUTE_NOT_FOUND: &str = "Route not found.";

/// 애플리케이션이 제공하는 기능 모듈 목록 (등록 순서)
pub fn api_modules(user_service: Arc<UserService>) -> Vec<Box<dyn ApiModule>> {
    vec![
        handlers::auth::module(user_service.clone()),
        handlers::users::module(user_service),
    ]
}

/// 모듈들을 `root_path` 아래에 마운트하고 불변 라우트 테이블로 고정합니다.
pub fn build_route_table<I>(root_path: &str, modules: I) -> RouteTable
where
    I: IntoIterator<Item = Box<dyn ApiModule>>,
{
    ApiRouter::new(root_path).register(modules).freeze()
}

/// 라우트 테이블 밖의 고정 엔드포인트를 설정합니다
///
/// # Examples
///
/// ```rust,ignore
/// let app = App::new().configure(configure_all_routes);
/// ```
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check);
}

/// 라우트 테이블에서 (메서드, 경로)에 맞는 엔드포인트를 찾아 실행합니다.
///
/// `App::default_service`로 등록되어, 고정 엔드포인트가 처리하지 않은 모든 요청을 받습니다.
pub async fn dispatch_api(
    ctx: RequestContext,
    req: HttpRequest,
    body: web::Bytes,
    table: web::Data<RouteTable>,
) -> HttpResponse {
    match table.dispatch(req.method().as_str(), req.path()) {
        Some(endpoint) => endpoint.serve(ctx, body).await,
        None => {
            log::debug!("매칭되는 라우트 없음: {} {}", req.method(), req.path());
            write_error(&AppError::NotFound(ROUTE_NOT_FOUND.to_string()))
        }
    }
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "account_service_backend",
///   "version": "0.1.0",
///   "timestamp": "2026-01-01T00:00:00+00:00",
///   "features": { "database": "PostgreSQL" }
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "PostgreSQL"
        }
    }))
}
