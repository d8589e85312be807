//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 도메인별로 모듈화되어 계정 관리와 인증/보안 기능을 담당합니다.
//!
//! # Features
//!
//! - 회원가입, 현재 사용자 조회
//! - bcrypt 비밀번호 해싱
//! - HS256 JWT 검증
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::{auth::BcryptHasher, users::UserService};
//!
//! let hasher = Arc::new(BcryptHasher::from_config());
//! let user_service = UserService::new(UserRepository::new(database.store()), hasher);
//! ```

pub mod auth;
pub mod users;
