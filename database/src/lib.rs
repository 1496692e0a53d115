//! Database crate for the todo API
//!
//! This crate provides the SQLite implementation of the TodoRepository
//! trait, with connection pooling, startup schema migration, and
//! per-request transactions for every mutating operation.
//!
//! # Features
//!
//! - SQLite database support with WAL mode for better concurrency
//! - Schema applied via migrations before the server accepts requests
//! - Connection pooling with a busy timeout
//! - sqlx errors mapped into the domain error taxonomy
//! - In-memory database support for tests
//!
//! # Usage
//!
//! ```rust
//! use database::SqliteTodoRepository;
//! use todo_core::repository::TodoRepository;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create repository (in-memory for testing)
//!     let repo = SqliteTodoRepository::new(":memory:").await?;
//!
//!     // Run migrations
//!     repo.migrate().await?;
//!
//!     // Repository is ready to use
//!     repo.health_check().await?;
//!
//!     Ok(())
//! }
//! ```

mod common;
mod sqlite;

pub use sqlite::SqliteTodoRepository;

// Re-export commonly used types from todo-core for convenience
pub use todo_core::{
    error::{Result, TodoError},
    models::{NewTodo, Todo, TodoPatch},
    repository::TodoRepository,
};
