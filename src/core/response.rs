//! # Response Writer
//!
//! 핸들러 계약의 마지막 단계(respond)를 담당합니다.
//! 성공 결과는 지정된 2xx 상태 코드와 JSON 본문으로, 실패는 [`AppError`]의
//! `ResponseError` 구현을 통해 정확히 하나의 HTTP 응답으로 직렬화됩니다.
//!
//! ```rust,ignore
//! let result: AppResult<MessageResponse> = Ok(MessageResponse::new("Sign up successfully"));
//! let response = respond(StatusCode::CREATED, result);
//! ```

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use log::{debug, error};
use serde::{Deserialize, Serialize};

use crate::core::errors::{AppError, AppResult};

/// `{"message": "..."}` 형태의 단일 메시지 응답 본문
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// 임의의 직렬화 가능한 값을 주어진 상태 코드의 JSON 응답으로 작성합니다.
pub fn write_json<T: Serialize>(status: StatusCode, payload: &T) -> HttpResponse {
    HttpResponse::build(status).json(payload)
}

/// 실패를 응답으로 변환합니다.
///
/// 5xx 계열은 내부 상세 정보를 `error!`로 남기고, 4xx 계열은 `debug!`로만 기록합니다.
/// 어느 쪽이든 응답 본문에는 [`AppError::public_message`]만 포함됩니다.
pub fn write_error(err: &AppError) -> HttpResponse {
    if err.is_server_error() {
        error!("❌ 요청 처리 실패: {}", err);
    } else {
        debug!("요청 거부: {}", err);
    }
    err.error_response()
}

/// 핸들러 실행 결과를 최종 HTTP 응답으로 변환합니다.
///
/// # Arguments
///
/// * `success_status` - 성공 시 사용할 2xx 상태 코드
/// * `result` - execute 단계의 결과
pub fn respond<T: Serialize>(success_status: StatusCode, result: AppResult<T>) -> HttpResponse {
    match result {
        Ok(payload) => write_json(success_status, &payload),
        Err(err) => write_error(&err),
    }
}
