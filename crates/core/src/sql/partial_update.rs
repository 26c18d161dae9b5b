// Partial Update Builder
//
// Turns an ordered, sparse list of (field, value) pairs into the body of an
// `UPDATE ... SET` statement plus the values for its placeholders.

use super::SqlValue;
use crate::error::{AppError, Result};

/// Fixed table of field names whose storage column differs.
///
/// Fields not listed map to a column of the same name.
#[derive(Debug, Clone, Copy)]
pub struct ColumnMap(&'static [(&'static str, &'static str)]);

impl ColumnMap {
    pub const fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
        Self(entries)
    }

    /// Storage column for `field`.
    pub fn resolve<'a>(&self, field: &'a str) -> &'a str {
        self.0
            .iter()
            .find(|(name, _)| *name == field)
            .map_or(field, |&(_, column)| column)
    }
}

/// `SET` fragment with one `"<column>"=$<n>` per field, and the matching values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartialUpdate {
    pub set_cols: String,
    pub values: Vec<SqlValue>,
}

impl PartialUpdate {
    /// Placeholder position for the first parameter after the SET values.
    pub fn next_placeholder(&self) -> usize {
        self.values.len() + 1
    }
}

/// Build the `SET` fragment for `data`, numbering placeholders from `$1` in
/// the order the pairs are given.
///
/// Fails with [`AppError::Validation`] when `data` is empty, since
/// `UPDATE ... SET` with no assignments is not valid SQL.
pub fn sql_for_partial_update(
    data: &[(&str, SqlValue)],
    columns: &ColumnMap,
) -> Result<PartialUpdate> {
    if data.is_empty() {
        return Err(AppError::Validation("No data".to_string()));
    }

    let set_cols = data
        .iter()
        .enumerate()
        .map(|(idx, (field, _))| format!("\"{}\"=${}", columns.resolve(field), idx + 1))
        .collect::<Vec<_>>()
        .join(", ");

    let values = data.iter().map(|(_, value)| value.clone()).collect();

    Ok(PartialUpdate { set_cols, values })
}
