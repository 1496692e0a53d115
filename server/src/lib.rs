//! Todo API Server Library
//!
//! Configuration management, telemetry initialization, and application
//! wiring for the todo CRUD HTTP API server binary.

pub mod config;
pub mod setup;
pub mod telemetry;

pub use config::Config;
pub use setup::{create_repository, create_server, ensure_database_directory, initialize_app};
pub use telemetry::init_telemetry;
