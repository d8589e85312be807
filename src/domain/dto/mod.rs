//! # Data Transfer Objects
//!
//! API 경계에서 주고받는 요청/응답 구조체입니다.
//! 요청 DTO는 역직렬화와 필드 검증을, 응답 DTO는 엔티티에서 공개 필드만 골라내는 변환을 담당합니다.

pub mod users;

pub use users::*;
