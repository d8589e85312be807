//! # Authentication Configuration Module
//!
//! 인증 미들웨어가 Bearer 토큰을 검증할 때 사용하는 JWT 설정입니다.
//! 이 서비스는 토큰을 발급하지 않고 검증만 하므로, 발급자와 같은 비밀키를 공유해야 합니다.
//!
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"
//! export JWT_LEEWAY_SECONDS="30"
//! ```

use std::env;

/// JWT 검증 설정
pub struct JwtConfig;

impl JwtConfig {
    /// HS256 서명 검증에 사용할 비밀키 (`JWT_SECRET`)
    ///
    /// 설정되지 않은 경우 개발용 기본값을 사용하며 경고 로그를 남깁니다.
    ///
    /// ```bash
    /// # 안전한 키 생성
    /// openssl rand -base64 32
    /// ```
    pub fn secret() -> String {
        env::var("JWT_SECRET").unwrap_or_else(|_| {
            log::warn!("JWT_SECRET not set, using default (not secure for production!)");
            "your-secret-key".to_string()
        })
    }

    /// `exp` 검증 시 허용할 시계 오차(초). 기본값: 30
    pub fn leeway_seconds() -> u64 {
        env::var("JWT_LEEWAY_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jwt_defaults() {
        if env::var("JWT_SECRET").is_err() {
            assert_eq!(JwtConfig::secret(), "your-secret-key");
        }
        if env::var("JWT_LEEWAY_SECONDS").is_err() {
            assert_eq!(JwtConfig::leeway_seconds(), 30);
        }
    }
}
