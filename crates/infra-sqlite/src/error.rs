// sqlx::Error -> AppError mapping

use qanda_core::error::AppError;

/// True when the store rejected a write because a referenced row is missing
pub(crate) fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => {
            db_err.is_foreign_key_violation()
                || matches!(db_err.code().as_deref(), Some("787") | Some("3850"))
        }
        _ => false,
    }
}

// Helper to convert sqlx::Error to AppError with structured information
pub(crate) fn map_sqlx_error(err: sqlx::Error) -> AppError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(code) = db_err.code() {
                let code_str = code.as_ref();

                // SQLite result codes: https://www.sqlite.org/rescode.html
                match code_str {
                    "2067" | "1555" => AppError::Storage(format!(
                        "Unique constraint violation: {} ({})",
                        db_err.message(),
                        code_str
                    )),
                    "787" | "3850" => AppError::Storage(format!(
                        "Foreign key constraint violation: {} ({})",
                        db_err.message(),
                        code_str
                    )),
                    "5" => AppError::Storage(format!(
                        "Database locked (SQLITE_BUSY): {}",
                        db_err.message()
                    )),
                    "13" => AppError::Storage(format!("Database full: {}", db_err.message())),
                    _ => AppError::Storage(format!(
                        "Database error [{}]: {}",
                        code_str,
                        db_err.message()
                    )),
                }
            } else {
                AppError::Storage(format!("Database error: {}", db_err.message()))
            }
        }
        sqlx::Error::ColumnNotFound(col) => AppError::Storage(format!("Column not found: {}", col)),
        sqlx::Error::PoolTimedOut => {
            AppError::Storage("Timed out waiting for a database connection".to_string())
        }
        // Connection, pool, protocol errors
        _ => AppError::Storage(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_database_errors_are_storage() {
        let err = map_sqlx_error(sqlx::Error::PoolClosed);
        assert!(err.is_storage());
        assert!(!is_foreign_key_violation(&sqlx::Error::PoolClosed));
    }

    #[test]
    fn test_row_not_found_is_storage_not_domain() {
        // Callers use fetch_optional; a stray RowNotFound is a bug, not a 404
        assert!(map_sqlx_error(sqlx::Error::RowNotFound).is_storage());
    }
}
