mod config;

pub use self::config::{AppConfig, DatabaseConfig, ServerConfig};
