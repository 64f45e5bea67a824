//! Values bound to `$n` placeholders.

use sqlx::postgres::{PgArguments, Postgres};
use sqlx::query::Query;

/// A value that can be bound to a students query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BindValue {
    BigInt(i64),
    Text(String),
}

impl From<i64> for BindValue {
    fn from(v: i64) -> Self {
        BindValue::BigInt(v)
    }
}

impl From<&str> for BindValue {
    fn from(v: &str) -> Self {
        BindValue::Text(v.to_string())
    }
}

/// Bind every param in order onto `query`.
pub fn bind_all<'q>(
    mut query: Query<'q, Postgres, PgArguments>,
    params: &[BindValue],
) -> Query<'q, Postgres, PgArguments> {
    for p in params {
        query = match p {
            BindValue::BigInt(n) => query.bind(*n),
            BindValue::Text(s) => query.bind(s.clone()),
        };
    }
    query
}
