//! HTTP server and route wiring for the todo API
//!
//! Binds the CRUD routes plus the root liveness route, applies the fixed
//! cross-origin allow-list, installs the fallback for unmatched routes, and
//! owns the listen/serve lifecycle.

use axum::{
    http::{header, HeaderValue, Method},
    middleware,
    routing::{get, patch},
    Router,
};
use std::{net::SocketAddr, sync::Arc};
use todo_core::TodoRepository;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::handlers;

/// HTTP server for the todo API, generic over the backing repository
pub struct ApiServer<R> {
    repository: Arc<R>,
}

impl<R: TodoRepository + 'static> ApiServer<R> {
    /// Create a new server around a shared repository handle
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Bind the address and serve requests until the task is dropped
    pub async fn serve(self, addr: &str) -> Result<(), Box<dyn std::error::Error>> {
        let app = self.create_router();

        let socket_addr: SocketAddr = addr
            .parse()
            .map_err(|e| format!("Invalid address '{addr}': {e}"))?;

        info!("Starting todo API server on {}", socket_addr);

        let listener = tokio::net::TcpListener::bind(socket_addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }

    /// Create the router with all endpoints
    pub fn create_router(self) -> Router {
        // Fixed allow-list for the local UI; not configurable on purpose
        let cors = CorsLayer::new()
            .allow_origin([
                HeaderValue::from_static("http://localhost:5173"),
                HeaderValue::from_static("http://127.0.0.1:5173"),
            ])
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::PATCH,
            ])
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

        Router::new()
            .route("/", get(handlers::index))
            .route(
                "/api/todos",
                get(handlers::list_todos::<R>).post(handlers::create_todo::<R>),
            )
            .route(
                "/api/todos/:id",
                get(handlers::get_todo::<R>)
                    .put(handlers::update_todo::<R>)
                    .delete(handlers::delete_todo::<R>),
            )
            .route("/api/todos/:id/toggle", patch(handlers::toggle_todo::<R>))
            .fallback(handlers::not_found)
            .layer(middleware::from_fn(crate::logging::request_logging_middleware))
            .layer(cors)
            .with_state(self.repository)
    }
}
