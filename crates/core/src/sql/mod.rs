// SQL Construction - pure text + parameter builders, no I/O

pub mod filter;
pub mod partial_update;
pub mod value;

pub use filter::{sql_for_company_filter, sql_for_job_filter, WhereClause};
pub use partial_update::{sql_for_partial_update, ColumnMap, PartialUpdate};
pub use value::SqlValue;

/// Store flavour the generated predicates target.
///
/// Placeholders are `$n` for both.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SqlDialect {
    #[default]
    Postgres,
    Sqlite,
}

impl SqlDialect {
    /// Case-insensitive substring match on `column`, with the pattern bound
    /// at `position`.
    ///
    /// SQLite's LIKE folds ASCII letters only, so there the predicate targets
    /// the `<column>_folded` shadow column, which holds [`fold_case`] of the
    /// text.
    pub fn contains_predicate(self, column: &str, position: usize) -> String {
        match self {
            SqlDialect::Postgres => format!("{} ILIKE ${}", column, position),
            SqlDialect::Sqlite => format!("{}_folded LIKE ${}", column, position),
        }
    }

    /// Pattern bound to a [`contains_predicate`](Self::contains_predicate).
    pub fn contains_pattern(self, needle: &str) -> SqlValue {
        let needle = match self {
            SqlDialect::Postgres => needle.to_string(),
            SqlDialect::Sqlite => fold_case(needle),
        };
        SqlValue::Text(format!("%{}%", needle))
    }

    /// `column > 0` for a decimal column. SQLite keeps equity as TEXT, which
    /// would otherwise compare as a string.
    pub fn positive_decimal(self, column: &str) -> String {
        match self {
            SqlDialect::Postgres => format!("{} > 0", column),
            SqlDialect::Sqlite => format!("CAST({} AS REAL) > 0", column),
        }
    }
}

/// Unicode lowercase form stored in `*_folded` columns and used for needles.
pub fn fold_case(text: &str) -> String {
    text.to_lowercase()
}
