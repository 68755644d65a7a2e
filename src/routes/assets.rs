//! Static asset host: landing page at `/`, files under `/static`.

use axum::Router;
use std::path::Path;
use tower_http::services::{ServeDir, ServeFile};

pub fn asset_routes(static_dir: &Path) -> Router {
    if !static_dir.is_dir() {
        tracing::warn!(dir = %static_dir.display(), "static directory missing; landing page disabled");
        return Router::new();
    }
    Router::new()
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .nest_service("/static", ServeDir::new(static_dir))
}
