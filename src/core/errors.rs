//! # Application Error Handling System
//!
//! 핸들러 계약(parse → execute → respond)의 모든 단계가 공유하는 에러 타입입니다.
//! `thiserror`로 `Error` trait을 구현하고 `actix_web::ResponseError`를 구현하여
//! 어떤 실패든 정확히 하나의 HTTP 응답으로 변환됩니다.
//!
//! ## 상태 코드 정책
//!
//! 응답 본문은 항상 `{"message": "..."}` 형식입니다.
//!
//! | AppError | HTTP Status | 클라이언트에 노출되는 메시지 |
//! |----------|-------------|------------------------------|
//! | `InvalidRequest` | 400 Bad Request | 에러 메시지 그대로 |
//! | `ValidationError` | 400 Bad Request | 필드별 메시지를 공백으로 연결 |
//! | `ConflictError` | 400 Bad Request | 중복 안내 메시지 |
//! | `BadRequest` | 400 Bad Request | 실패 지점별 고정 메시지 |
//! | `NotFound` | 404 Not Found | 에러 메시지 그대로 |
//! | `DependencyError` | 500 Internal Server Error | 실패 지점별 고정 메시지 |
//! | `InternalError` | 500 Internal Server Error | `"Internal server error."` 고정 |
//!
//! `InternalError`에 담긴 원본 에러 문자열은 로그에만 남고 응답에는 절대 포함되지 않습니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::core::errors::AppError;
//!
//! let err = AppError::BadRequest("Unable to validate user username.".to_string());
//! assert_eq!(err.to_string(), "Unable to validate user username.");
//! ```

use actix_web::http::StatusCode;
use thiserror::Error;

use crate::core::response::MessageResponse;

/// 분류되지 않은 내부 오류에 대해 클라이언트에 돌려주는 고정 메시지
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error.";

/// 애플리케이션 전역 에러 타입
///
/// 4xx 계열 변형은 사용자에게 보여줘도 안전한 메시지만 담습니다.
/// `DependencyError`는 5xx지만 메시지가 실패 지점별 고정 문구이므로 그대로 노출되고,
/// `InternalError`만 내부 상세 정보를 담을 수 있습니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 요청 본문을 해석할 수 없음 (400)
    #[error("{0}")]
    InvalidRequest(String),

    /// 필드 검증 실패 (400)
    #[error("{0}")]
    ValidationError(String),

    /// 사용자명/이메일 중복 (400)
    #[error("{0}")]
    ConflictError(String),

    /// 사용자 대상 사전 조건 확인 중 발생한 실패 (400)
    ///
    /// 회원가입의 중복 확인 쿼리 실패처럼, 의존성 오류지만
    /// 고정된 안내 문구로 400 응답을 돌려주는 경우에 사용합니다.
    #[error("{0}")]
    BadRequest(String),

    /// 리소스 또는 라우트 없음 (404)
    #[error("{0}")]
    NotFound(String),

    /// 인증된 조회 중 저장소 장애 (500, 고정 메시지 노출)
    #[error("{0}")]
    DependencyError(String),

    /// 예상하지 못한 내부 오류 (500, 메시지 비공개)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 클라이언트에게 전달할 메시지를 반환합니다.
    pub fn public_message(&self) -> String {
        match self {
            AppError::InternalError(_) => INTERNAL_ERROR_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }

    /// 서버 측 장애(5xx)인지 여부
    pub fn is_server_error(&self) -> bool {
        matches!(
            self,
            AppError::DependencyError(_) | AppError::InternalError(_)
        )
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidRequest(_)
            | AppError::ValidationError(_)
            | AppError::ConflictError(_)
            | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::DependencyError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 상태 코드는 [`status_code`](Self::status_code)를 따르고,
    /// 본문은 [`public_message`](AppError::public_message)만 사용합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(self.status_code())
            .json(MessageResponse::new(self.public_message()))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;
    use actix_web::body::to_bytes;

    async fn body_message(error: AppError) -> (StatusCode, String) {
        let response = error.error_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body()).await.unwrap();
        let body: MessageResponse = serde_json::from_slice(&bytes).unwrap();
        (status, body.message)
    }

    #[actix_web::test]
    async fn test_user_safe_errors_are_bad_request() {
        let cases = [
            AppError::InvalidRequest("Invalid request body.".to_string()),
            AppError::ValidationError("Username is required.".to_string()),
            AppError::ConflictError("Username already in use.".to_string()),
            AppError::BadRequest("Unable to validate user email.".to_string()),
        ];

        for error in cases {
            let expected = error.to_string();
            let (status, message) = body_message(error).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(message, expected);
        }
    }

    #[actix_web::test]
    async fn test_not_found_error_response() {
        let (status, message) = body_message(AppError::NotFound("Route not found.".to_string())).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(message, "Route not found.");
    }

    #[actix_web::test]
    async fn test_dependency_error_keeps_fixed_message() {
        let (status, message) = body_message(AppError::DependencyError(
            "Unable to retrieve current user data.".to_string(),
        ))
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(message, "Unable to retrieve current user data.");
    }

    #[actix_web::test]
    async fn test_internal_error_never_leaks_detail() {
        let error = AppError::InternalError("connection refused at 10.0.0.5:5432".to_string());
        assert!(error.to_string().contains("10.0.0.5"));

        let (status, message) = body_message(error).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(message, INTERNAL_ERROR_MESSAGE);
    }
}
