//! todosvc - a read-only HTTP API over a fixed collection of todo records
//!
//! The record store loads once at startup; the query pipeline derives
//! filtered/sorted/limited views per request.

pub mod api;
pub mod cli;
pub mod http_server;
pub mod observability;
pub mod store;
