//! 사용자 관리 서비스 모듈
//!
//! 계정 등록과 현재 사용자 조회 비즈니스 로직을 제공합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//! use crate::domain::dto::users::request::SignUpRequest;
//!
//! let response = user_service
//!     .sign_up(SignUpRequest::new("alice", "alice@example.com", "pw"))
//!     .await?;
//! ```

pub mod user_service;

pub use user_service::*;
