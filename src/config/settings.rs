//! Application settings loaded from environment variables.

use std::env;
use std::path::PathBuf;

use super::constants::{
    DEFAULT_DATABASE_URL, DEFAULT_DATE_POLICY, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
    DEFAULT_STATIC_DIR,
};
use crate::domain::DatePolicy;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub server_host: String,
    pub server_port: u16,
    pub static_dir: PathBuf,
    pub date_policy: DatePolicy,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// An unrecognised `DATE_POLICY` falls back to the default with a warning.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let date_policy = env::var("DATE_POLICY")
            .unwrap_or_else(|_| DEFAULT_DATE_POLICY.to_string())
            .parse()
            .unwrap_or_else(|e| {
                tracing::warn!("{}, using {}", e, DEFAULT_DATE_POLICY);
                DatePolicy::default()
            });

        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            server_host: env::var("SERVER_HOST")
                .unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SERVER_PORT),
            static_dir: env::var("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_STATIC_DIR)),
            date_policy,
        }
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            server_host: DEFAULT_SERVER_HOST.to_string(),
            server_port: DEFAULT_SERVER_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            date_policy: DatePolicy::default(),
        }
    }
}
