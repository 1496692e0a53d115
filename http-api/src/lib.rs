//! HTTP/JSON layer for the todo API
//!
//! Routes, per-operation handlers, the boundary error mapping, and request
//! logging. The router is generic over [`todo_core::TodoRepository`], so
//! production wires in the SQLite store and tests wire in the mock.

pub mod error;
pub mod handlers;
pub mod logging;
pub mod server;

pub use error::ApiError;
pub use server::ApiServer;
