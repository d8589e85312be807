//! # 회원가입 요청 DTO
//!
//! `POST {prefix}/auth/sign-up` 요청 본문입니다.
//!
//! ```json
//! { "username": "alice", "email": "alice@example.com", "password": "s3cret" }
//! ```
//!
//! ## 검증 규칙
//!
//! | 필드 | 규칙 | 메시지 |
//! |------|------|--------|
//! | `username` | 필수, 최대 50자 | `Username is required.` / `Username must be at most 50 characters.` |
//! | `email` | 필수, 이메일 형식, 최대 254자 | `E-mail is required.` / `E-mail is invalid.` / `E-mail must be at most 254 characters.` |
//! | `password` | 필수, 최대 72바이트 (bcrypt 입력 한도) | `Password is required.` / `Password must be at most 72 bytes.` |
//!
//! `username`, `email`은 앞뒤 공백을 제거한 뒤 검증합니다. 여러 필드가 실패하면
//! 필드 선언 순서대로 필드당 하나의 메시지를 공백으로 이어 붙입니다.

use std::fmt;

use serde::Deserialize;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::core::errors::{AppError, AppResult};
use crate::utils::string_utils::{deserialize_or_empty, deserialize_trimmed, is_blank};

/// bcrypt가 해싱하는 최대 입력 길이
pub const MAX_PASSWORD_BYTES: usize = 72;

const REQUIRED: &str = "required";

/// 필드 이름과 "필수" 메시지 (검증 메시지 순서)
const FIELDS: [(&str, &str); 3] = [
    ("username", "Username is required."),
    ("email", "E-mail is required."),
    ("password", "Password is required."),
];

#[derive(Clone, Default, Deserialize, Validate)]
pub struct SignUpRequest {
    #[serde(default, deserialize_with = "deserialize_trimmed")]
    #[validate(
        custom(function = "validate_required"),
        length(max = 50, message = "Username must be at most 50 characters.")
    )]
    pub username: String,

    #[serde(default, deserialize_with = "deserialize_trimmed")]
    #[validate(
        custom(function = "validate_required"),
        email(message = "E-mail is invalid."),
        length(max = 254, message = "E-mail must be at most 254 characters.")
    )]
    pub email: String,

    #[serde(default, deserialize_with = "deserialize_or_empty")]
    #[validate(custom(function = "validate_password"))]
    pub password: String,
}

impl SignUpRequest {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    /// 필드 검증을 수행하고 실패 시 `ValidationError`로 변환합니다.
    pub fn check(&self) -> AppResult<()> {
        self.validate()
            .map_err(|errors| AppError::ValidationError(validation_messages(&errors).join(" ")))
    }
}

/// 비밀번호 평문이 로그에 남지 않도록 Debug를 직접 구현합니다.
impl fmt::Debug for SignUpRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignUpRequest")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// 필드 순서대로 필드당 하나의 메시지를 모읍니다.
///
/// 같은 필드에 여러 규칙이 실패하면 "필수" 위반을 우선합니다.
fn validation_messages(errors: &ValidationErrors) -> Vec<String> {
    let field_errors = errors.field_errors();

    FIELDS
        .iter()
        .filter_map(|(field, required_message)| {
            let errs = field_errors.get(*field)?;
            let chosen = errs
                .iter()
                .find(|e| e.code == REQUIRED)
                .or_else(|| errs.first())?;

            Some(if chosen.code == REQUIRED {
                required_message.to_string()
            } else {
                chosen
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid {}.", field))
            })
        })
        .collect()
}

fn validate_required(value: &str) -> Result<(), ValidationError> {
    if is_blank(value) {
        return Err(ValidationError::new(REQUIRED));
    }
    Ok(())
}

fn validate_password(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::new(REQUIRED));
    }
    if value.len() > MAX_PASSWORD_BYTES {
        return Err(ValidationError::new("too_long")
            .with_message("Password must be at most 72 bytes.".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message_of(request: &SignUpRequest) -> String {
        match request.check() {
            Err(AppError::ValidationError(msg)) => msg,
            other => panic!("Expected ValidationError, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_request_passes() {
        let request = SignUpRequest::new("alice", "alice@example.com", "s3cret-pass");
        assert!(request.check().is_ok());
    }

    #[test]
    fn test_missing_fields_in_declaration_order() {
        let request: SignUpRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(
            message_of(&request),
            "Username is required. E-mail is required. Password is required."
        );
    }

    #[test]
    fn test_whitespace_only_username_is_required_error() {
        let request: SignUpRequest =
            serde_json::from_str(r#"{"username":"   ","email":"a@x.com","password":"pw"}"#).unwrap();
        assert_eq!(message_of(&request), "Username is required.");
    }

    #[test]
    fn test_fields_are_trimmed() {
        let request: SignUpRequest = serde_json::from_str(
            r#"{"username":"  alice ","email":" alice@example.com ","password":" pw "}"#,
        )
        .unwrap();

        assert_eq!(request.username, "alice");
        assert_eq!(request.email, "alice@example.com");
        assert_eq!(request.password, " pw ");
        assert!(request.check().is_ok());
    }

    #[test]
    fn test_invalid_email_and_long_password() {
        let request = SignUpRequest::new("alice", "not-an-email", "x".repeat(73));
        assert_eq!(
            message_of(&request),
            "E-mail is invalid. Password must be at most 72 bytes."
        );
    }

    #[test]
    fn test_long_username() {
        let request = SignUpRequest::new("a".repeat(51), "alice@example.com", "pw");
        assert_eq!(message_of(&request), "Username must be at most 50 characters.");
    }

    #[test]
    fn test_debug_redacts_password() {
        let request = SignUpRequest::new("alice", "alice@example.com", "hunter2");
        assert!(!format!("{:?}", request).contains("hunter2"));
    }
}
