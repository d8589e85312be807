//! 인증 및 보안 서비스 모듈
//!
//! 자격 증명 해싱과 요청 토큰 검증을 담당합니다.
//!
//! # Security
//!
//! - bcrypt 단방향 해시 (환경별 cost)
//! - HMAC-SHA256 토큰 서명 검증
//! - 토큰 만료 시간 확인

pub mod password_hasher;
pub mod token_service;

pub use password_hasher::*;
pub use token_service::*;
