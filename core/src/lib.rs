//! Todo Core Library
//!
//! This crate provides the foundational domain models, error taxonomy, and
//! trait interfaces for the todo API. All other crates depend on the types
//! and interfaces defined here.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - [`models`] - Core domain models (Todo, NewTodo, TodoPatch)
//! - [`error`] - Error types and result handling
//! - [`repository`] - Repository trait for data persistence
//! - [`validation`] - Two-mode payload validation
//!
//! # Example
//!
//! ```rust
//! use todo_core::validation::{TodoValidator, ValidationMode};
//!
//! let payload = TodoValidator::parse_payload(br#"{"title": "Buy milk"}"#).unwrap();
//! let new_todo = TodoValidator::validate_create(&payload).unwrap();
//! assert_eq!(new_todo.title, "Buy milk");
//! ```

pub mod error;
pub mod models;
pub mod repository;
pub mod validation;

// Re-export commonly used types at the crate root for convenience
pub use error::{Result, TodoError, ValidationErrors};
pub use models::{NewTodo, Todo, TodoPatch};
pub use repository::TodoRepository;
pub use validation::{TodoValidator, ValidatedPayload, ValidationMode};

/// Current version of the core crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
