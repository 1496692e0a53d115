//! Test doubles for the todo API
//!
//! Provides an in-memory `TodoRepository` implementation with error
//! injection and call tracking, plus a fluent builder for constructing
//! `Todo` fixtures. Used by the HTTP layer's router tests and by the
//! repository contract suite.

mod builders;
mod repository;

pub use builders::TodoBuilder;
pub use repository::MockTodoRepository;
