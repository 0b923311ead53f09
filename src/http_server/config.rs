//! HTTP Server Configuration
//!
//! Configuration for the HTTP server including host, port, CORS settings,
//! and the path of the todo data file.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 4567)
    #[serde(default = "default_port")]
    pub port: u16,

    /// CORS allowed origins (default: empty = permissive)
    #[serde(default)]
    pub cors_origins: Vec<String>,

    /// Path to the todo data file (default: "./data/todos.json")
    #[serde(default = "default_data_file")]
    pub data_file: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    4567
}

fn default_data_file() -> String {
    "./data/todos.json".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
            data_file: default_data_file(),
        }
    }
}

impl ServerConfig {
    /// Create a new config with the specified port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the data file as a Path
    pub fn data_path(&self) -> &Path {
        Path::new(&self.data_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 4567);
        assert!(config.cors_origins.is_empty());
        assert_eq!(config.data_file, "./data/todos.json");
    }

    #[test]
    fn test_socket_addr() {
        let config = ServerConfig::with_port(8080);
        assert_eq!(config.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: ServerConfig =
            serde_json::from_str(r#"{"port": 9000, "data_file": "/srv/todos.json"}"#).unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.data_file, "/srv/todos.json");
    }
}
