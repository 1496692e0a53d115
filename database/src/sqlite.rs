use crate::common::{row_to_todo, sqlx_error_to_todo_error, TODO_COLUMNS};
use async_trait::async_trait;
use chrono::Utc;
use sqlx::{migrate::MigrateDatabase, Sqlite, SqlitePool};
use todo_core::{
    error::{Result, TodoError},
    models::{NewTodo, Todo, TodoPatch},
    repository::TodoRepository,
};

/// SQLite implementation of the TodoRepository trait
///
/// Provides todo persistence using SQLite with connection pooling and WAL
/// journaling. Every mutating operation runs in its own transaction scoped
/// to the request: committed on success, rolled back on any error so prior
/// state is never left half-applied.
#[derive(Debug, Clone)]
pub struct SqliteTodoRepository {
    pool: SqlitePool,
}

impl SqliteTodoRepository {
    /// Create a new SQLite repository with the given database URL
    ///
    /// # Arguments
    /// * `database_url` - SQLite database URL (file path or `:memory:`)
    ///
    /// # Returns
    /// * `Ok(SqliteTodoRepository)` - Successfully connected repository
    /// * `Err(TodoError::Database)` - If connection fails
    ///
    /// # Examples
    /// ```rust,no_run
    /// use database::SqliteTodoRepository;
    ///
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// // In-memory database for testing
    /// let repo = SqliteTodoRepository::new(":memory:").await?;
    ///
    /// // File-based database
    /// let repo = SqliteTodoRepository::new("sqlite:///tmp/todos.db").await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn new(database_url: &str) -> Result<Self> {
        let db_url = if database_url.starts_with(":memory:")
            || database_url.starts_with("sqlite://")
        {
            database_url.to_string()
        } else {
            format!("sqlite://{database_url}")
        };

        // Create database if it doesn't exist (for file-based databases)
        if !db_url.contains(":memory:") && !Sqlite::database_exists(&db_url).await.unwrap_or(false)
        {
            match Sqlite::create_database(&db_url).await {
                Ok(_) => tracing::info!("Database created successfully"),
                Err(error) => {
                    tracing::error!("Error creating database: {}", error);
                    return Err(TodoError::Database(format!(
                        "Failed to create database: {error}"
                    )));
                }
            }
        }

        let connect_options = if db_url.contains(":memory:") {
            sqlx::sqlite::SqliteConnectOptions::new()
                .filename(&db_url)
                .create_if_missing(true)
                .journal_mode(sqlx::sqlite::SqliteJournalMode::Memory)
                .busy_timeout(std::time::Duration::from_secs(5))
                .foreign_keys(true)
        } else {
            sqlx::sqlite::SqliteConnectOptions::new()
                .filename(db_url.replace("sqlite://", ""))
                .create_if_missing(true)
                .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
                .busy_timeout(std::time::Duration::from_secs(5))
                .foreign_keys(true)
        };

        let pool = SqlitePool::connect_with(connect_options)
            .await
            .map_err(sqlx_error_to_todo_error)?;

        Ok(Self { pool })
    }

    /// Run database migrations
    ///
    /// Applies all pending migrations so the todos table exists before the
    /// server accepts requests. Call after creating a repository instance.
    ///
    /// # Returns
    /// * `Ok(())` - Migrations completed successfully
    /// * `Err(TodoError::Database)` - If migration fails
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("./migrations/sqlite")
            .run(&self.pool)
            .await
            .map_err(|e| TodoError::Database(format!("Migration failed: {e}")))?;

        tracing::info!("Database migrations completed successfully");
        Ok(())
    }

    /// Get access to the underlying database pool for custom operations
    ///
    /// Primarily intended for tests that need direct SQL execution.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl TodoRepository for SqliteTodoRepository {
    async fn create(&self, todo: NewTodo) -> Result<Todo> {
        // One clock read so created_at == updated_at on fresh records
        let now = Utc::now();

        let mut tx = self.pool.begin().await.map_err(sqlx_error_to_todo_error)?;

        let row = sqlx::query(
            "INSERT INTO todos (title, description, completed, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?) \
             RETURNING id, title, description, completed, created_at, updated_at",
        )
        .bind(&todo.title)
        .bind(&todo.description)
        .bind(todo.completed)
        .bind(now)
        .bind(now)
        .fetch_one(&mut *tx)
        .await
        .map_err(sqlx_error_to_todo_error)?;

        let created = row_to_todo(&row)?;
        tx.commit().await.map_err(sqlx_error_to_todo_error)?;

        Ok(created)
    }

    async fn get(&self, id: i32) -> Result<Option<Todo>> {
        let result = sqlx::query(
            "SELECT id, title, description, completed, created_at, updated_at \
             FROM todos WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(sqlx_error_to_todo_error)?;

        match result {
            Some(row) => Ok(Some(row_to_todo(&row)?)),
            None => Ok(None),
        }
    }

    async fn list(&self) -> Result<Vec<Todo>> {
        // id DESC tie-break keeps same-timestamp inserts newest-first
        let rows = sqlx::query(
            "SELECT id, title, description, completed, created_at, updated_at \
             FROM todos ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(sqlx_error_to_todo_error)?;

        rows.iter().map(row_to_todo).collect()
    }

    async fn update(&self, id: i32, patch: TodoPatch) -> Result<Todo> {
        let now = Utc::now();

        let mut tx = self.pool.begin().await.map_err(sqlx_error_to_todo_error)?;

        // Build dynamic update query using QueryBuilder with proper type binding.
        // updated_at is always refreshed: a successful update counts as a
        // mutation even when the patch repeats current values.
        let mut query_builder: sqlx::QueryBuilder<sqlx::Sqlite> =
            sqlx::QueryBuilder::new("UPDATE todos SET updated_at = ");
        query_builder.push_bind(now);

        if let Some(title) = &patch.title {
            query_builder.push(", title = ");
            query_builder.push_bind(title);
        }

        if let Some(description) = &patch.description {
            query_builder.push(", description = ");
            query_builder.push_bind(description);
        }

        if let Some(completed) = patch.completed {
            query_builder.push(", completed = ");
            query_builder.push_bind(completed);
        }

        query_builder.push(" WHERE id = ");
        query_builder.push_bind(id);
        query_builder.push(" RETURNING ");
        query_builder.push(TODO_COLUMNS);

        let row = query_builder
            .build()
            .fetch_optional(&mut *tx)
            .await
            .map_err(sqlx_error_to_todo_error)?;

        let updated = match row {
            Some(row) => row_to_todo(&row)?,
            None => return Err(TodoError::not_found_id(id)),
        };

        tx.commit().await.map_err(sqlx_error_to_todo_error)?;
        Ok(updated)
    }

    async fn delete(&self, id: i32) -> Result<()> {
        let mut tx = self.pool.begin().await.map_err(sqlx_error_to_todo_error)?;

        let result = sqlx::query("DELETE FROM todos WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(sqlx_error_to_todo_error)?;

        if result.rows_affected() == 0 {
            return Err(TodoError::not_found_id(id));
        }

        tx.commit().await.map_err(sqlx_error_to_todo_error)?;
        Ok(())
    }

    async fn toggle(&self, id: i32) -> Result<Todo> {
        let now = Utc::now();

        let mut tx = self.pool.begin().await.map_err(sqlx_error_to_todo_error)?;

        // Single statement so the read-flip-write cannot interleave with a
        // concurrent toggle on the same row
        let row = sqlx::query(
            "UPDATE todos SET completed = NOT completed, updated_at = ? \
             WHERE id = ? \
             RETURNING id, title, description, completed, created_at, updated_at",
        )
        .bind(now)
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(sqlx_error_to_todo_error)?;

        let toggled = match row {
            Some(row) => row_to_todo(&row)?,
            None => return Err(TodoError::not_found_id(id)),
        };

        tx.commit().await.map_err(sqlx_error_to_todo_error)?;
        Ok(toggled)
    }

    async fn health_check(&self) -> Result<()> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map_err(sqlx_error_to_todo_error)?;
        Ok(())
    }
}
