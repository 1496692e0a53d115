use chrono::{DateTime, Utc};
use sqlx::{sqlite::SqliteRow, Row};
use todo_core::{error::TodoError, models::Todo};

/// Column list shared by every query that returns full rows
pub const TODO_COLUMNS: &str = "id, title, description, completed, created_at, updated_at";

/// Convert a SQLite row to the Todo model
pub fn row_to_todo(row: &SqliteRow) -> Result<Todo, TodoError> {
    let created_at: DateTime<Utc> = row
        .try_get("created_at")
        .map_err(|e| TodoError::Database(format!("Invalid created_at column: {e}")))?;
    let updated_at: DateTime<Utc> = row
        .try_get("updated_at")
        .map_err(|e| TodoError::Database(format!("Invalid updated_at column: {e}")))?;

    Ok(Todo {
        id: row
            .try_get("id")
            .map_err(|e| TodoError::Database(format!("Invalid id column: {e}")))?,
        title: row
            .try_get("title")
            .map_err(|e| TodoError::Database(format!("Invalid title column: {e}")))?,
        description: row
            .try_get("description")
            .map_err(|e| TodoError::Database(format!("Invalid description column: {e}")))?,
        completed: row
            .try_get("completed")
            .map_err(|e| TodoError::Database(format!("Invalid completed column: {e}")))?,
        created_at,
        updated_at,
    })
}

/// Convert a SQLx error to the domain error type.
///
/// The resulting message is for logs only; the HTTP boundary replaces it
/// with a generic envelope before anything reaches a client.
pub fn sqlx_error_to_todo_error(err: sqlx::Error) -> TodoError {
    match &err {
        sqlx::Error::Database(db_err) => {
            TodoError::Database(format!("Database constraint error: {}", db_err.message()))
        }
        sqlx::Error::RowNotFound => {
            // Lookups use fetch_optional, so this never reflects a missing todo
            TodoError::Database("Unexpected RowNotFound error".to_string())
        }
        sqlx::Error::PoolTimedOut => TodoError::Database("Connection pool timeout".to_string()),
        sqlx::Error::Io(io_err) => TodoError::Database(format!("Database I/O error: {io_err}")),
        _ => TodoError::Database(format!("Database operation failed: {err}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_timeout_mapping() {
        let error = sqlx_error_to_todo_error(sqlx::Error::PoolTimedOut);
        assert!(error.is_database());
        assert_eq!(format!("{error}"), "Database error: Connection pool timeout");
    }

    #[test]
    fn test_row_not_found_mapping_is_still_a_database_error() {
        let error = sqlx_error_to_todo_error(sqlx::Error::RowNotFound);
        assert!(error.is_database());
        assert!(!error.is_not_found());
    }
}
