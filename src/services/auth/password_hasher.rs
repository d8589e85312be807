//! 자격 증명 해싱 서비스
//!
//! 평문 비밀번호를 저장 가능한 단방향 해시로 변환하고, 평문과 저장된 해시를 비교합니다.
//! 해싱은 CPU 집약적이므로 호출 측은 `actix_web::web::block`으로 워커 밖에서 실행해야 합니다.

use bcrypt::{hash, verify};
use thiserror::Error;

use crate::config::PasswordConfig;

/// 해싱/검증 실패
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("credential hashing failed: {0}")]
pub struct HashError(pub String);

/// 단방향 자격 증명 해셔
#[cfg_attr(test, mockall::automock)]
pub trait CredentialHasher: Send + Sync {
    /// 평문을 해싱합니다. 같은 평문이라도 매번 다른 salt가 적용됩니다.
    fn hash(&self, plaintext: &str) -> Result<String, HashError>;

    /// 평문이 저장된 해시와 일치하는지 확인합니다.
    fn verify(&self, plaintext: &str, stored: &str) -> Result<bool, HashError>;
}

/// bcrypt 기반 해셔
#[derive(Debug, Clone, Copy)]
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// 환경별 bcrypt cost로 생성합니다 (`BCRYPT_COST`, 기본 4/4/10/12).
    pub fn from_config() -> Self {
        Self::new(PasswordConfig::bcrypt_cost())
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl CredentialHasher for BcryptHasher {
    fn hash(&self, plaintext: &str) -> Result<String, HashError> {
        hash(plaintext, self.cost).map_err(|e| HashError(e.to_string()))
    }

    fn verify(&self, plaintext: &str, stored: &str) -> Result<bool, HashError> {
        verify(plaintext, stored).map_err(|e| HashError(e.to_string()))
    }
}
