//! # HTTP Request Handlers Module
//!
//! 기능 모듈별 핸들러와 라우트 선언을 정의합니다.
//! 각 모듈은 [`ApiModule`](crate::core::registry::ApiModule)을 돌려주는 `module()` 함수를 제공하고,
//! 애플리케이션은 이를 [`ApiRouter`](crate::core::registry::ApiRouter)에 등록합니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   RouteTable dispatch → Handler (이 모듈)       ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 비즈니스 로직                      ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 데이터 접근 (Store 포트)        ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 모듈 구성
//!
//! - **`auth`**: `POST /auth/sign-up`
//! - **`users`**: `GET /users/current`
//!
//! ## 새 모듈 추가
//!
//! ```rust,ignore
//! pub fn module(service: Arc<ProfileService>) -> Box<dyn ApiModule> {
//!     Box::new(NamedModule::new("profiles", move |router: &mut ApiRouter| {
//!         router.bind("GET", "/profiles/me", ProfileHandler::new(service.clone()));
//!     }))
//! }
//! ```

pub mod auth;
pub mod users;
