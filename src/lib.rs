//! 계정 서비스 백엔드
//!
//! 독립적인 기능 모듈을 하나의 HTTP 표면으로 조립하는 계정 서비스입니다.
//! 회원가입과 현재 사용자 조회를 PostgreSQL 위에서 제공합니다.
//!
//! # Features
//!
//! - **모듈 레지스트리**: 기능 모듈이 자신의 라우트를 선언하고, 시작 시 불변 라우트 테이블로 고정
//! - **핸들러 계약**: parse → execute → respond 3단계, 요청당 정확히 하나의 응답
//! - **회원가입**: 필드 검증, 대소문자 무관 중복 확인, bcrypt 해싱
//! - **현재 사용자**: JWT `sub` 클레임 기반 계정 조회
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │  AuthMiddleware │ ← Bearer 토큰 → Identity
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   RouteTable    │ ← (메서드, 경로) 디스패치
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← parse / execute / respond
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← Store 포트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   PostgreSQL    │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use account_service_backend::routes::{api_modules, build_route_table};
//!
//! let user_service = Arc::new(UserService::new(UserRepository::new(database.store()), hasher));
//! let table = build_route_table(&ApiConfig::root_path(), api_modules(user_service));
//! ```

pub mod config;
pub mod core;
pub mod db;
pub mod domain;
pub mod handlers;
pub mod middlewares;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod utils;

#[cfg(test)]
mod test_support;
