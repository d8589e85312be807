//! # 문자열 유틸리티
//!
//! 요청 DTO 역직렬화에 쓰이는 문자열 정리 함수들입니다.

use serde::{Deserialize, Deserializer};

/// 앞뒤 공백을 제거하고, `null`은 빈 문자열로 취급하는 역직렬화 함수
///
/// 필드 누락은 `#[serde(default)]`와 함께 사용해 빈 문자열로 만듭니다.
/// 빈 문자열은 이후 검증 단계에서 "필수 값 누락"으로 처리됩니다.
///
/// # 예제
/// ```rust,ignore
/// #[derive(Deserialize)]
/// struct Request {
///     #[serde(default, deserialize_with = "deserialize_trimmed")]
///     username: String,
/// }
/// ```
pub fn deserialize_trimmed<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.map(|s| trim_string(&s)).unwrap_or_default())
}

/// `null`을 빈 문자열로 취급하되 내용은 그대로 두는 역직렬화 함수
///
/// 비밀번호처럼 공백도 의미가 있는 필드에 사용합니다.
pub fn deserialize_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// 문자열 정리 (trim 후 반환)
pub fn trim_string(value: &str) -> String {
    value.trim().to_string()
}

/// 공백이 아닌 내용이 있는지 확인
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
