//! 요청 범위 인증 주체(Identity)
//!
//! 인증 미들웨어가 검증된 토큰의 `sub` 클레임을 그대로 담아 request extensions에 넣고,
//! 전송 계층 어댑터가 이를 [`RequestContext`](crate::core::handler::RequestContext)로 옮겨
//! 핸들러의 parse 단계에 전달합니다.
//!
//! 값 자체는 불투명(opaque)하며, 숫자 계정 ID로의 변환은 [`Identity::account_id`]가 담당합니다.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 상위 인증 단계가 붙여준 주체 식별자
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identity(Value);

impl Identity {
    pub fn new(value: impl Into<Value>) -> Self {
        Self(value.into())
    }

    /// 원본 값
    pub fn raw(&self) -> &Value {
        &self.0
    }

    /// 숫자 계정 ID로 변환합니다.
    ///
    /// 음이 아닌 정수 값(소수부가 0인 부동소수점 포함)과 정수 문자열만 허용하며,
    /// 그 외의 값(음수, 소수, 빈 문자열, 객체 등)은 `None`을 반환합니다.
    ///
    /// ```rust,ignore
    /// assert_eq!(Identity::new(42).account_id(), Some(42));
    /// assert_eq!(Identity::new(42.0).account_id(), Some(42));
    /// assert_eq!(Identity::new("42").account_id(), Some(42));
    /// assert_eq!(Identity::new("abc").account_id(), None);
    /// ```
    pub fn account_id(&self) -> Option<i64> {
        match &self.0 {
            Value::Number(number) => {
                if let Some(id) = number.as_i64() {
                    return (id >= 0).then_some(id);
                }
                let float = number.as_f64()?;
                let integral = float.is_finite()
                    && float >= 0.0
                    && float.fract() == 0.0
                    && float < i64::MAX as f64;
                integral.then_some(float as i64)
            }
            Value::String(text) => text.trim().parse::<i64>().ok().filter(|id| *id >= 0),
            _ => None,
        }
    }
}
