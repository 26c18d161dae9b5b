// sqlx::Error -> AppError
//
// Store faults are reported as opaque Database errors; only the message is
// enriched with the SQLite result code.

use jobly_core::error::AppError;

pub(crate) fn map_sqlx_error(err: sqlx::Error) -> AppError {
    match &err {
        sqlx::Error::Database(db_err) => {
            let Some(code) = db_err.code() else {
                return AppError::Database(format!("Database error: {}", db_err.message()));
            };
            let code_str = code.as_ref();

            // SQLite extended result codes: https://www.sqlite.org/rescode.html
            let kind = match code_str {
                "2067" | "1555" => "Unique constraint violation",
                "787" => "Foreign key constraint violation",
                "275" => "Check constraint violation",
                "1299" => "Not null constraint violation",
                "5" => "Database locked (SQLITE_BUSY)",
                "13" => "Database full",
                _ => "Database error",
            };

            AppError::Database(format!("{}: {} ({})", kind, db_err.message(), code_str))
        }
        sqlx::Error::RowNotFound => AppError::Database("Row not found".to_string()),
        sqlx::Error::ColumnNotFound(col) => {
            AppError::Database(format!("Column not found: {}", col))
        }
        // Connection, pool, protocol errors
        _ => AppError::Database(err.to_string()),
    }
}
