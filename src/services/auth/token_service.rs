//! JWT 토큰 검증 서비스
//!
//! 인증 미들웨어가 `Authorization: Bearer <jwt>` 헤더를 검증할 때 사용합니다.
//! 이 서비스는 토큰을 발급하지 않으며, HS256 서명과 `exp` 클레임만 확인합니다.

use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::config::JwtConfig;
use crate::domain::models::auth::Identity;

/// 토큰 검증 실패 사유
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("invalid authorization header format")]
    MalformedHeader,

    #[error("token has expired")]
    Expired,

    #[error("invalid token: {0}")]
    Invalid(String),
}

/// 검증 대상 클레임
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// 주체 식별자 (숫자 또는 문자열)
    #[serde(default)]
    pub sub: Option<Value>,
    /// 만료 시각 (Unix timestamp)
    pub exp: i64,
}

/// JWT 토큰 검증 서비스
///
/// HMAC-SHA256 서명을 발급자와 공유한 비밀키로 검증합니다.
#[derive(Clone)]
pub struct TokenService {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    pub fn new(secret: &str, leeway_seconds: u64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = leeway_seconds;

        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// `JWT_SECRET`, `JWT_LEEWAY_SECONDS` 설정으로 생성합니다.
    pub fn from_config() -> Self {
        Self::new(&JwtConfig::secret(), JwtConfig::leeway_seconds())
    }

    /// 토큰 서명과 만료를 검증하고 클레임을 반환합니다.
    ///
    /// # Errors
    ///
    /// * `TokenError::Expired` - 만료된 토큰
    /// * `TokenError::Invalid` - 잘못된 형식, 서명, 알고리즘
    pub fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        decode::<TokenClaims>(token, &self.decoding_key, &self.validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid(e.to_string()),
            })
    }

    /// 토큰을 검증하고 `sub` 클레임을 [`Identity`]로 반환합니다.
    ///
    /// `sub`가 없거나 `null`이면 `None`입니다.
    pub fn identify(&self, token: &str) -> Result<Option<Identity>, TokenError> {
        let claims = self.verify_token(token)?;
        Ok(claims.sub.filter(|sub| !sub.is_null()).map(Identity::new))
    }

    /// "Bearer {token}" 형식의 헤더에서 토큰 부분만 추출합니다.
    ///
    /// 스킴 이름은 대소문자를 구분하지 않습니다.
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> Result<&'a str, TokenError> {
        let (scheme, token) = auth_header
            .trim()
            .split_once(' ')
            .ok_or(TokenError::MalformedHeader)?;

        let token = token.trim();
        if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
            return Err(TokenError::MalformedHeader);
        }
        Ok(token)
    }
}
