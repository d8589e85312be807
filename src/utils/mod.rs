//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - 요청 DTO용 문자열 정리/역직렬화 함수
//! - [`display_terminal`] - 기동 시 터미널 출력 포맷팅 함수들

pub mod display_terminal;
pub mod string_utils;
