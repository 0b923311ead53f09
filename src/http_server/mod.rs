//! # HTTP Server
//!
//! Thin HTTP plumbing over the record store and query pipeline: routing,
//! CORS, and serialization. All decision logic lives in `api`.

pub mod config;
pub mod health_routes;
pub mod server;
pub mod todo_routes;

pub use config::ServerConfig;
pub use server::HttpServer;
pub use todo_routes::todo_routes;
