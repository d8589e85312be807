//! 저장소 포트(Store)
//!
//! 리포지토리가 사용하는 좁은 저장소 인터페이스입니다. 연산은 두 개뿐입니다.
//!
//! | 연산 | 용도 | 결과 |
//! |------|------|------|
//! | `query_row` | 단일 행 조회 | [`Row`] 또는 [`StoreError::NoRows`] |
//! | `exec` | 삽입/DDL | 영향받은 행 수 |
//!
//! 운영 환경에서는 [`PgStore`](crate::db::postgres::PgStore)가, 테스트에서는
//! mockall이 생성한 `MockStore`와 인메모리 가짜 구현이 이 trait을 구현합니다.
//! 각 호출은 저장소와의 단일 왕복이며 재시도하지 않습니다.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

/// 위치 기반 파라미터와 결과 컬럼에 쓰이는 중립 값 타입
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Bool(bool),
    Int(i64),
    Text(String),
    Timestamp(DateTime<Utc>),
}

impl SqlValue {
    /// 값의 타입 이름 (디코딩 에러 메시지용)
    pub fn kind(&self) -> &'static str {
        match self {
            SqlValue::Null => "null",
            SqlValue::Bool(_) => "bool",
            SqlValue::Int(_) => "int",
            SqlValue::Text(_) => "text",
            SqlValue::Timestamp(_) => "timestamp",
        }
    }
}

impl From<bool> for SqlValue {
    fn from(value: bool) -> Self {
        SqlValue::Bool(value)
    }
}

impl From<i64> for SqlValue {
    fn from(value: i64) -> Self {
        SqlValue::Int(value)
    }
}

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        SqlValue::Text(value.to_string())
    }
}

impl From<String> for SqlValue {
    fn from(value: String) -> Self {
        SqlValue::Text(value)
    }
}

impl From<DateTime<Utc>> for SqlValue {
    fn from(value: DateTime<Utc>) -> Self {
        SqlValue::Timestamp(value)
    }
}

impl<T: Into<SqlValue>> From<Option<T>> for SqlValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(SqlValue::Null, Into::into)
    }
}

/// 저장소 접근 에러
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StoreError {
    /// 조회 결과 행이 없음
    #[error("no rows returned")]
    NoRows,

    /// 유니크 제약 위반 (SQLSTATE 23505)
    #[error("unique constraint violated: {}", constraint.as_deref().unwrap_or("unknown"))]
    UniqueViolation { constraint: Option<String> },

    /// 그 외 저장소 오류 (연결, 문법 등)
    #[error("database error: {0}")]
    Database(String),

    /// 결과 행을 기대한 형태로 해석할 수 없음
    #[error("decode error: {0}")]
    Decode(String),
}

/// 조회 결과 한 행
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    columns: Vec<String>,
    values: Vec<SqlValue>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// 컬럼 하나를 덧붙입니다.
    pub fn with(mut self, column: impl Into<String>, value: impl Into<SqlValue>) -> Self {
        self.columns.push(column.into());
        self.values.push(value.into());
        self
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// 행의 컬럼 수가 정확히 `expected`인지 확인합니다.
    pub fn expect_columns(&self, expected: usize) -> Result<(), StoreError> {
        if self.len() != expected {
            return Err(StoreError::Decode(format!(
                "expected {} columns, got {}",
                expected,
                self.len()
            )));
        }
        Ok(())
    }

    /// `index`번째 컬럼을 `T`로 해석합니다.
    pub fn get<T: FromSqlValue>(&self, index: usize) -> Result<T, StoreError> {
        let value = self.values.get(index).ok_or_else(|| {
            StoreError::Decode(format!("column index {} out of range ({})", index, self.len()))
        })?;

        T::from_sql_value(value).map_err(|e| {
            let column = self.columns.get(index).map(String::as_str).unwrap_or("?");
            StoreError::Decode(format!("column '{}': {}", column, e))
        })
    }
}

/// [`SqlValue`]에서 Rust 값으로의 변환
pub trait FromSqlValue: Sized {
    fn from_sql_value(value: &SqlValue) -> Result<Self, String>;
}

fn mismatch(expected: &str, value: &SqlValue) -> String {
    format!("expected {}, found {}", expected, value.kind())
}

impl FromSqlValue for bool {
    fn from_sql_value(value: &SqlValue) -> Result<Self, String> {
        match value {
            SqlValue::Bool(b) => Ok(*b),
            other => Err(mismatch("bool", other)),
        }
    }
}

impl FromSqlValue for i64 {
    fn from_sql_value(value: &SqlValue) -> Result<Self, String> {
        match value {
            SqlValue::Int(i) => Ok(*i),
            other => Err(mismatch("int", other)),
        }
    }
}

impl FromSqlValue for String {
    fn from_sql_value(value: &SqlValue) -> Result<Self, String> {
        match value {
            SqlValue::Text(s) => Ok(s.clone()),
            other => Err(mismatch("text", other)),
        }
    }
}

impl FromSqlValue for DateTime<Utc> {
    fn from_sql_value(value: &SqlValue) -> Result<Self, String> {
        match value {
            SqlValue::Timestamp(ts) => Ok(*ts),
            other => Err(mismatch("timestamp", other)),
        }
    }
}

impl<T: FromSqlValue> FromSqlValue for Option<T> {
    fn from_sql_value(value: &SqlValue) -> Result<Self, String> {
        match value {
            SqlValue::Null => Ok(None),
            other => T::from_sql_value(other).map(Some),
        }
    }
}

/// 저장소 포트
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Store: Send + Sync {
    /// 단일 행을 조회합니다. 결과가 없으면 [`StoreError::NoRows`].
    async fn query_row(&self, sql: &str, params: &[SqlValue]) -> Result<Row, StoreError>;

    /// 문장을 실행하고 영향받은 행 수를 반환합니다.
    async fn exec(&self, sql: &str, params: &[SqlValue]) -> Result<u64, StoreError>;
}
