//! # Repositories Module
//!
//! 데이터 액세스 계층입니다. 리포지토리는 [`Store`](crate::db::Store) 포트만 의존하며,
//! SQL 문장과 결과 행 해석을 책임집니다. 에러는 [`StoreError`](crate::db::StoreError)로 돌려주고,
//! 실패 지점별 사용자 메시지로의 변환은 서비스 계층이 담당합니다.

pub mod users;

pub use users::*;
