//! Todo API: a small REST backend for todos persisted in SQLite.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::AppConfig;
pub use error::{AppError, ConfigError};
pub use model::{CreateTodo, Todo, UpdateTodo};
pub use routes::{asset_routes, common_routes, todo_routes};
pub use state::AppState;
pub use store::TodoStore;

use axum::{extract::DefaultBodyLimit, Router};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Full application router: todo API, health routes, static assets, a JSON 404 fallback, and
/// the shared layers (request tracing, permissive CORS). The body limit is enforced by the
/// extractors so oversize bodies are rejected with the usual `{"detail"}` error.
pub fn app(state: AppState, config: &AppConfig) -> Router {
    Router::new()
        .merge(todo_routes(state.clone()))
        .merge(common_routes(state))
        .merge(asset_routes(&config.static_dir))
        .fallback(routes::common::not_found)
        .layer(DefaultBodyLimit::max(config.body_limit))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
}
