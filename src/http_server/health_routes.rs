//! Health Routes
//!
//! Liveness probe reporting the loaded collection size.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};

use crate::store::TodoStore;

/// Build the health router
pub fn health_routes(store: Arc<TodoStore>) -> Router {
    Router::new()
        .route("/health", get(health))
        .with_state(store)
}

async fn health(State(store): State<Arc<TodoStore>>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "todos": store.len(),
    }))
}
