use anyhow::{Context, Result};
use database::SqliteTodoRepository;
use http_api::ApiServer;
use std::path::Path;
use std::sync::Arc;
use todo_core::TodoRepository;
use tracing::info;

use crate::config::Config;

/// Create the todo repository from configuration
///
/// Connects, applies the schema migrations, and verifies health before the
/// server starts accepting requests.
pub async fn create_repository(config: &Config) -> Result<Arc<SqliteTodoRepository>> {
    let database_url = config.database_url();
    info!("Initializing SQLite repository at: {}", database_url);

    let repo = SqliteTodoRepository::new(&database_url)
        .await
        .context("Failed to create SQLite repository")?;

    info!("Running database migrations");
    repo.migrate()
        .await
        .context("Failed to run database migrations")?;

    repo.health_check()
        .await
        .context("Repository failed its startup health check")?;

    info!("Todo repository created successfully");
    Ok(Arc::new(repo))
}

/// Create and configure the HTTP server
pub fn create_server(repository: Arc<SqliteTodoRepository>) -> ApiServer<SqliteTodoRepository> {
    info!("Creating HTTP server");
    ApiServer::new(repository)
}

/// Initialize the complete application
pub async fn initialize_app(config: &Config) -> Result<ApiServer<SqliteTodoRepository>> {
    info!("Initializing application");

    let repository = create_repository(config)
        .await
        .context("Failed to create repository")?;

    let server = create_server(repository);

    info!("Application initialized successfully");
    Ok(server)
}

/// Ensure the database directory exists using config
pub fn ensure_database_directory_from_config(config: &Config) -> Result<()> {
    ensure_database_directory(&config.database_url())
}

/// Ensure the parent directory of a sqlite database file exists
pub fn ensure_database_directory(database_url: &str) -> Result<()> {
    if let Some(db_path) = database_url.strip_prefix("sqlite://") {
        let db_path = Path::new(db_path);

        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create database directory {}", parent.display())
                })?;
                info!("Created database directory: {}", parent.display());
            }
        }
    }

    Ok(())
}
