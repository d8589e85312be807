//! # Core Framework Module
//!
//! 요청 처리 파이프라인의 뼈대를 제공하는 모듈입니다.
//! 기능 모듈은 이 계층이 정의한 계약만 구현하면 HTTP 표면에 조립됩니다.
//!
//! ## 모듈 구성
//!
//! ### [`registry`] - 모듈 레지스트리 / 라우터
//! - **ApiRouter**: 마운트 prefix 아래에 (메서드, 경로) → 핸들러 바인딩
//! - **ApiModule**: 라우트를 선언하는 기능 모듈 (`Fn(&mut ApiRouter)`)
//! - **RouteTable**: 시작 이후 불변인 디스패치 테이블
//!
//! ### [`handler`] - 핸들러 계약
//! - **Handler**: parse → execute 두 단계 계약
//! - **Endpoint**: 라우트 테이블에 저장되는 객체 안전 래퍼 (respond 포함)
//! - **RequestContext**: 요청 범위 Identity 전달자
//!
//! ### [`response`] - 응답 작성기
//! - 성공 결과/에러를 상태 코드와 JSON 본문으로 직렬화
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현
//!
//! ## 요청 흐름
//!
//! ```text
//! HTTP 요청
//!   │ AuthMiddleware      ─ Bearer 토큰 → Identity (request extensions)
//!   ▼
//! routes::dispatch_api    ─ RouteTable::dispatch(method, path)
//!   │
//!   ▼
//! Endpoint::serve         ─ parse → execute → respond
//!   │
//!   ▼
//! HTTP 응답 (요청당 정확히 하나)
//! ```

pub mod errors;
pub mod handler;
pub mod registry;
pub mod response;

pub use errors::*;
pub use handler::*;
pub use registry::*;
pub use response::*;
