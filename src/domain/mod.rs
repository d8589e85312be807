//! # Domain Layer Module
//!
//! 비즈니스 데이터와 API 계약을 정의하는 계층입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities  - NewUser, UserProfile
//! ├── dto       - SignUpRequest, CurrentUserRequest, CurrentUserResponse
//! └── models    - Identity
//!      │
//!      ▼
//! Application Layer (services)
//!      │
//!      ▼
//! Infrastructure Layer (repositories, db)
//! ```

pub mod dto;
pub mod entities;
pub mod models;

pub use dto::users::{CurrentUserRequest, CurrentUserResponse, SignUpRequest};
pub use entities::users::{NewUser, UserProfile};
pub use models::auth::Identity;
