//! Todo Routes
//!
//! The two read endpoints over the record store:
//! - `GET /todos` runs the query pipeline over the full collection
//! - `GET /todos/:id` looks up a single record

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};

use crate::api::{pipeline, ApiError, QueryParams};
use crate::store::{Todo, TodoStore};

/// Build the todo router
pub fn todo_routes(store: Arc<TodoStore>) -> Router {
    Router::new()
        .route("/todos", get(list_todos))
        .route("/todos/:id", get(get_todo))
        .with_state(store)
}

/// List todos, filtered/sorted/limited by query parameters.
///
/// The raw ordered pair list is handed to the parser so that repeated
/// keys keep first-value semantics. Returns a bare JSON array; no
/// matches is an empty array, not an error.
async fn list_todos(
    State(store): State<Arc<TodoStore>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<Todo>>, ApiError> {
    let params = QueryParams::parse(&pairs)?;
    Ok(Json(pipeline::run(store.all(), &params)))
}

/// Get a single todo by id.
async fn get_todo(
    State(store): State<Arc<TodoStore>>,
    Path(id): Path<String>,
) -> Result<Json<Todo>, ApiError> {
    store
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or(ApiError::NotFound(id))
}
