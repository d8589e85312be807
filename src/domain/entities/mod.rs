//! # Domain Entities Module
//!
//! 저장소 테이블과 대응되는 엔티티들입니다.
//!
//! ```text
//! Domain Layer
//! ├── entities/     ← 이 모듈 (users 테이블)
//! ├── models/       ← 값 객체 (Identity)
//! └── dto/          ← 요청/응답 DTO
//! ```

pub mod users;

pub use users::*;
