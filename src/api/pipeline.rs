//! # Query Pipeline
//!
//! Transforms the full collection into the requested view.
//!
//! Stages run in a fixed order regardless of which parameters are present:
//! owner filter, category filter, body-contains filter, status filter,
//! ordering, then limit. Each stage is a passthrough when its parameter is
//! absent and produces a new sequence rather than mutating the input, so
//! the limit always applies to the post-filter, post-sort result. Filters
//! combine as a conjunction: a record must satisfy every present filter.
//!
//! The pipeline is a pure function of (collection, parameters); no state
//! is retained between calls.

use super::params::{OrderField, QueryParams};
use crate::store::Todo;

/// Run the pipeline over the collection with the given parameters.
pub fn run(todos: &[Todo], params: &QueryParams) -> Vec<Todo> {
    let mut result = todos.to_vec();

    if let Some(owner) = &params.owner {
        result = filter_owner(result, owner);
    }
    if let Some(category) = &params.category {
        result = filter_category(result, category);
    }
    if let Some(target) = &params.contains {
        result = filter_body_contains(result, target);
    }
    if let Some(wanted) = params.status {
        result = filter_status(result, wanted);
    }
    if let Some(field) = params.order_by {
        result = order_by(result, field);
    }
    if let Some(limit) = params.limit {
        result.truncate(limit);
    }

    result
}

/// Keep todos whose owner is exactly the target (case-sensitive).
fn filter_owner(todos: Vec<Todo>, owner: &str) -> Vec<Todo> {
    todos.into_iter().filter(|t| t.owner == owner).collect()
}

/// Keep todos whose category is exactly the target (case-sensitive).
fn filter_category(todos: Vec<Todo>, category: &str) -> Vec<Todo> {
    todos.into_iter().filter(|t| t.category == category).collect()
}

/// Keep todos whose body contains the target substring (case-sensitive).
fn filter_body_contains(todos: Vec<Todo>, target: &str) -> Vec<Todo> {
    todos.into_iter().filter(|t| t.body.contains(target)).collect()
}

/// Keep todos with the wanted completion status.
fn filter_status(todos: Vec<Todo>, wanted: bool) -> Vec<Todo> {
    todos.into_iter().filter(|t| t.status == wanted).collect()
}

/// Stable ascending sort by the textual value of the given field.
fn order_by(mut todos: Vec<Todo>, field: OrderField) -> Vec<Todo> {
    todos.sort_by(|a, b| field.key(a).cmp(field.key(b)));
    todos
}
