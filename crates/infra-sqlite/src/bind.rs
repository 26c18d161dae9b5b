// Bind builder-produced values onto sqlx queries, in order

use jobly_core::sql::SqlValue;
use sqlx::query::QueryAs;
use sqlx::sqlite::{Sqlite, SqliteArguments};

pub(crate) fn bind_values<'q, O>(
    mut query: QueryAs<'q, Sqlite, O, SqliteArguments<'q>>,
    values: &'q [SqlValue],
) -> QueryAs<'q, Sqlite, O, SqliteArguments<'q>> {
    for value in values {
        query = match value {
            SqlValue::Null => query.bind(None::<String>),
            SqlValue::Integer(v) => query.bind(*v),
            SqlValue::Text(v) => query.bind(v.as_str()),
        };
    }
    query
}
