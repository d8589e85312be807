//! PostgreSQL 저장소 어댑터
//!
//! `sqlx` 커넥션 풀 위에서 [`Store`] 포트를 구현합니다.
//!
//! ## 에러 매핑
//!
//! | sqlx 에러 | SQLSTATE | StoreError |
//! |-----------|----------|------------|
//! | `RowNotFound` | - | `NoRows` |
//! | Database (unique violation) | `23505` | `UniqueViolation { constraint }` |
//! | Column decode / not found | - | `Decode` |
//! | 그 외 | - | `Database` |
//!
//! ## 컬럼 타입 매핑
//!
//! | PostgreSQL | SqlValue |
//! |------------|----------|
//! | `BOOL` | `Bool` |
//! | `INT2`, `INT4`, `INT8` | `Int` |
//! | `TEXT`, `VARCHAR`, `BPCHAR`, `NAME` | `Text` |
//! | `TIMESTAMPTZ`, `TIMESTAMP` | `Timestamp` (UTC) |
//!
//! 그 외 타입의 컬럼은 `Decode` 에러가 됩니다.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime, Utc};
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::Query;
use sqlx::{Column, PgPool, Postgres, Row as _, TypeInfo, ValueRef};

use crate::db::store::{Row, SqlValue, Store, StoreError};

/// unique_violation
const UNIQUE_VIOLATION: &str = "23505";

/// `PgPool` 기반 [`Store`] 구현
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Store for PgStore {
    async fn query_row(&self, sql: &str, params: &[SqlValue]) -> Result<Row, StoreError> {
        let row = bind_params(sqlx::query(sql), params)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        decode_row(&row)
    }

    async fn exec(&self, sql: &str, params: &[SqlValue]) -> Result<u64, StoreError> {
        let result = bind_params(sqlx::query(sql), params)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected())
    }
}

fn bind_params<'q>(
    mut query: Query<'q, Postgres, PgArguments>,
    params: &'q [SqlValue],
) -> Query<'q, Postgres, PgArguments> {
    for param in params {
        query = match param {
            SqlValue::Null => query.bind(None::<String>),
            SqlValue::Bool(value) => query.bind(*value),
            SqlValue::Int(value) => query.bind(*value),
            SqlValue::Text(value) => query.bind(value.as_str()),
            SqlValue::Timestamp(value) => query.bind(*value),
        };
    }
    query
}

fn decode_row(row: &PgRow) -> Result<Row, StoreError> {
    let mut decoded = Row::new();

    for column in row.columns() {
        let index = column.ordinal();
        let name = column.name();

        let raw = row.try_get_raw(index).map_err(map_sqlx_error)?;
        if raw.is_null() {
            decoded = decoded.with(name, SqlValue::Null);
            continue;
        }

        let value = match column.type_info().name() {
            "BOOL" => SqlValue::Bool(row.try_get::<bool, _>(index).map_err(map_sqlx_error)?),
            "INT2" => SqlValue::Int(i64::from(
                row.try_get::<i16, _>(index).map_err(map_sqlx_error)?,
            )),
            "INT4" => SqlValue::Int(i64::from(
                row.try_get::<i32, _>(index).map_err(map_sqlx_error)?,
            )),
            "INT8" => SqlValue::Int(row.try_get::<i64, _>(index).map_err(map_sqlx_error)?),
            "TEXT" | "VARCHAR" | "BPCHAR" | "NAME" => {
                SqlValue::Text(row.try_get::<String, _>(index).map_err(map_sqlx_error)?)
            }
            "TIMESTAMPTZ" => SqlValue::Timestamp(
                row.try_get::<DateTime<Utc>, _>(index).map_err(map_sqlx_error)?,
            ),
            "TIMESTAMP" => SqlValue::Timestamp(
                row.try_get::<NaiveDateTime, _>(index)
                    .map_err(map_sqlx_error)?
                    .and_utc(),
            ),
            other => {
                return Err(StoreError::Decode(format!(
                    "unsupported column type {} for '{}'",
                    other, name
                )));
            }
        };

        decoded = decoded.with(name, value);
    }

    Ok(decoded)
}

/// sqlx 에러를 [`StoreError`]로 변환합니다.
pub(crate) fn map_sqlx_error(err: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) {
            return StoreError::UniqueViolation {
                constraint: db_err.constraint().map(str::to_string),
            };
        }
        return StoreError::Database(db_err.message().to_string());
    }

    match &err {
        sqlx::Error::RowNotFound => StoreError::NoRows,
        sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::ColumnIndexOutOfBounds { .. }
        | sqlx::Error::Decode(_) => StoreError::Decode(err.to_string()),
        _ => StoreError::Database(err.to_string()),
    }
}
