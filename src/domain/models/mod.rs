//! # Domain Models Module
//!
//! 영속화되지 않는 도메인 값 객체들입니다.
//!
//! - [`auth::Identity`] - 상위 인증 단계가 붙여준 요청 범위 주체 식별자

pub mod auth;

pub use auth::*;
