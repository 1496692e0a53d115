use crate::{
    error::Result,
    models::{NewTodo, Todo, TodoPatch},
};
use async_trait::async_trait;

/// Repository trait for todo persistence and retrieval operations
///
/// This trait defines the interface for all todo data operations.
/// Implementations must be thread-safe and support concurrent access.
/// Every mutating operation is atomic: either the change and the
/// `updated_at` refresh both apply, or neither does.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Create a new todo
    ///
    /// # Arguments
    /// * `todo` - The sanitized field set to persist
    ///
    /// # Returns
    /// * `Ok(Todo)` - The created todo with assigned ID and equal
    ///   `created_at`/`updated_at` timestamps
    /// * `Err(TodoError::Database)` - If the database operation fails
    async fn create(&self, todo: NewTodo) -> Result<Todo>;

    /// Get a todo by its numeric ID
    ///
    /// # Arguments
    /// * `id` - The todo ID to find
    ///
    /// # Returns
    /// * `Ok(Some(Todo))` - The todo if found
    /// * `Ok(None)` - If no todo exists with that ID
    /// * `Err(TodoError::Database)` - If the database operation fails
    async fn get(&self, id: i32) -> Result<Option<Todo>>;

    /// List all todos, newest-created first
    ///
    /// # Returns
    /// * `Ok(Vec<Todo>)` - All todos ordered by `created_at` descending
    ///   (may be empty)
    /// * `Err(TodoError::Database)` - If the database operation fails
    async fn list(&self) -> Result<Vec<Todo>>;

    /// Apply a partial update to an existing todo
    ///
    /// Only fields present in the patch change; `updated_at` is refreshed
    /// on every successful call.
    ///
    /// # Arguments
    /// * `id` - The todo ID to update
    /// * `patch` - The fields to change
    ///
    /// # Returns
    /// * `Ok(Todo)` - The updated todo
    /// * `Err(TodoError::NotFound)` - If the todo doesn't exist
    /// * `Err(TodoError::Database)` - If the database operation fails
    async fn update(&self, id: i32, patch: TodoPatch) -> Result<Todo>;

    /// Delete a todo (hard delete, no tombstone)
    ///
    /// # Arguments
    /// * `id` - The todo ID to delete
    ///
    /// # Returns
    /// * `Ok(())` - The todo was deleted
    /// * `Err(TodoError::NotFound)` - If the todo doesn't exist
    /// * `Err(TodoError::Database)` - If the database operation fails
    async fn delete(&self, id: i32) -> Result<()>;

    /// Flip the completion flag of a todo
    ///
    /// # Arguments
    /// * `id` - The todo ID to toggle
    ///
    /// # Returns
    /// * `Ok(Todo)` - The todo with `completed` inverted and `updated_at`
    ///   refreshed
    /// * `Err(TodoError::NotFound)` - If the todo doesn't exist
    /// * `Err(TodoError::Database)` - If the database operation fails
    async fn toggle(&self, id: i32) -> Result<Todo>;

    /// Get repository health status for monitoring
    ///
    /// # Returns
    /// * `Ok(())` - Repository is healthy and connected
    /// * `Err(TodoError::Database)` - Repository is unhealthy
    async fn health_check(&self) -> Result<()>;
}
