//! # Configuration Module
//!
//! 환경 변수 기반 설정값들을 중앙에서 관리하는 모듈입니다.
//! 각 설정은 상태 없는 구조체의 연관 함수로 제공되며, 호출 시점의 환경 변수를 읽습니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버, 데이터베이스, API 마운트, CORS, 패스워드 해싱
//! - [`auth_config`] - JWT 검증 설정
//!
//! ## 환경 변수 목록
//!
//! | 변수 | 기본값 | 설명 |
//! |------|--------|------|
//! | `PROFILE` | `dev` | 로드할 `.env.{profile}` 파일 |
//! | `ENVIRONMENT` | `production` | development, test, staging, production |
//! | `HOST` / `PORT` | `0.0.0.0` / `8080` | 바인딩 주소 |
//! | `WORKERS` | `4` | actix-web 워커 수 |
//! | `DATABASE_URL` | 로컬 PostgreSQL | 연결 URL |
//! | `DATABASE_MAX_CONNECTIONS` | `10` | 풀 크기 |
//! | `API_ROOT_PATH` | `/api/v1` | 기능 모듈 마운트 prefix |
//! | `CORS_ALLOWED_ORIGINS` | localhost 3000/8080 | 콤마 구분 Origin 목록 |
//! | `BCRYPT_COST` | 환경별 (4/4/10/12) | bcrypt cost |
//! | `JWT_SECRET` | 개발용 값 | HS256 검증 키 |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{ApiConfig, ServerConfig};
//!
//! let router = ApiRouter::new(ApiConfig::root_path());
//! let bind_address = ServerConfig::bind_address();
//! ```

pub mod auth_config;
pub mod data_config;

pub use auth_config::*;
pub use data_config::*;
