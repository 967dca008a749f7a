use std::net::SocketAddr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_UPLOAD_DIR: &str = "uploads";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";

pub struct Config {
    pub database_url: String,

    /// Directory holding uploaded PDF artifacts.
    pub upload_dir: String,
    pub bind_addr: SocketAddr,

    /// Single allowed CORS origin; any origin is allowed when unset.
    pub cors_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let bind_addr =
            std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            upload_dir: std::env::var("UPLOAD_DIR")
                .unwrap_or_else(|_| DEFAULT_UPLOAD_DIR.to_string()),
            bind_addr: bind_addr
                .parse()
                .map_err(|_| ConfigError::InvalidValue {
                    name: "BIND_ADDR".to_string(),
                    value: bind_addr.clone(),
                })?,
            cors_origin: std::env::var("CORS_ORIGIN")
                .ok()
                .filter(|origin| !origin.trim().is_empty()),
        })
    }
}
