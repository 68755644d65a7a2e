//! Todo CRUD routes under `/api/todos`.

use crate::handlers::todo::{create, delete as delete_handler, list, update};
use crate::routes::common::method_not_allowed;
use crate::state::AppState;
use axum::{routing::get, routing::put, Router};

pub fn todo_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/todos", get(list).post(create).fallback(method_not_allowed))
        .route(
            "/api/todos/:id",
            put(update).delete(delete_handler).fallback(method_not_allowed),
        )
        .with_state(state)
}
