//! # API Configuration Module
//!
//! This module handles loading and managing configuration for the timetable
//! API server. Values come from environment variables, with defaults where
//! appropriate.
//!
//! ## Environment Variables
//!
//! - `API_HOST`: The host address to bind the server to (default: "0.0.0.0")
//! - `API_PORT`: The port to listen on (default: 8083)
//! - `DATABASE_URL`: PostgreSQL connection string (required)
//! - `DATABASE_MAX_CONNECTIONS`: Connection pool size (default: 5)
//! - `LOG_LEVEL`: Logging level (default: "info")
//! - `API_CORS_ORIGINS`: Comma-separated list of allowed CORS origins
//! - `API_REQUEST_TIMEOUT_SECONDS`: Server-side request timeout (default: 30)
//! - `AUTH_SERVICE_URL`: Token validation endpoint of the account service
//! - `HOSPITAL_SERVICE_URL`: Base URL of the hospital directory
//! - `COLLABORATOR_TIMEOUT_SECONDS`: Timeout for calls to either service (default: 5)

use axum::http::HeaderValue;
use eyre::{eyre, Result, WrapErr};
use std::{env, time::Duration};
use tracing::Level;

pub const DEFAULT_AUTH_SERVICE_URL: &str = "http://localhost:8081/api/Authentication/Validate";
pub const DEFAULT_HOSPITAL_SERVICE_URL: &str = "http://localhost:8082/api/Hospitals/";

/// Configuration for the timetable API server
///
/// # Example
///
/// ```no_run
/// use eyre::Result;
/// use timetable_api::config::ApiConfig;
///
/// fn example() -> Result<()> {
///     let config = ApiConfig::from_env()?;
///     println!("Starting server on {}:{}", config.host, config.port);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host address for the API server (e.g., "127.0.0.1", "0.0.0.0")
    pub host: String,

    /// Port for the API server to listen on
    pub port: u16,

    /// PostgreSQL database connection string
    pub database_url: String,

    /// Upper bound on pooled database connections
    pub database_max_connections: u32,

    /// Log level for the application
    pub log_level: Level,

    /// CORS allowed origins (optional)
    pub cors_origins: Option<Vec<HeaderValue>>,

    /// Request timeout in seconds
    pub request_timeout: u64,

    /// Account service endpoint that validates bearer tokens
    pub auth_service_url: String,

    /// Hospital directory base URL; the hospital id is appended to it
    pub hospital_service_url: String,

    /// Timeout in seconds for each call to a collaborator service
    pub collaborator_timeout: u64,
}

impl ApiConfig {
    /// Creates a new ApiConfig from environment variables
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The DATABASE_URL environment variable is not set
    /// - A numeric setting cannot be parsed
    /// - A CORS origin is not a valid header value
    /// - A collaborator URL is not an absolute http(s) URL
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_vars<F>(var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Network settings
        let host = var("API_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = parse_or(&var, "API_PORT", 8083)?;

        // Database settings
        let database_url =
            var("DATABASE_URL").ok_or_else(|| eyre!("DATABASE_URL environment variable must be set"))?;
        let database_max_connections = parse_or(&var, "DATABASE_MAX_CONNECTIONS", 5)?;

        // Logging settings
        let log_level = match var("LOG_LEVEL").unwrap_or_else(|| "info".to_string()).as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        // CORS settings
        let cors_origins = var("API_CORS_ORIGINS")
            .map(|origins| {
                origins
                    .split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(|origin| {
                        origin
                            .parse::<HeaderValue>()
                            .wrap_err_with(|| format!("Invalid CORS origin: {}", origin))
                    })
                    .collect::<Result<Vec<_>>>()
            })
            .transpose()?;

        // Performance settings
        let request_timeout = parse_or(&var, "API_REQUEST_TIMEOUT_SECONDS", 30)?;

        // Collaborator settings
        let auth_service_url = service_url(
            "AUTH_SERVICE_URL",
            var("AUTH_SERVICE_URL").unwrap_or_else(|| DEFAULT_AUTH_SERVICE_URL.to_string()),
        )?;
        let hospital_service_url = service_url(
            "HOSPITAL_SERVICE_URL",
            var("HOSPITAL_SERVICE_URL").unwrap_or_else(|| DEFAULT_HOSPITAL_SERVICE_URL.to_string()),
        )?;
        let collaborator_timeout = parse_or(&var, "COLLABORATOR_TIMEOUT_SECONDS", 5)?;

        Ok(Self {
            host,
            port,
            database_url,
            database_max_connections,
            log_level,
            cors_origins,
            request_timeout,
            auth_service_url,
            hospital_service_url,
            collaborator_timeout,
        })
    }

    /// Returns the server address as a string (e.g., "127.0.0.1:8083")
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }

    pub fn collaborator_timeout(&self) -> Duration {
        Duration::from_secs(self.collaborator_timeout)
    }
}

fn parse_or<F, T>(var: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match var(key) {
        Some(value) => value
            .trim()
            .parse()
            .wrap_err_with(|| format!("Invalid {} value: {}", key, value)),
        None => Ok(default),
    }
}

fn service_url(key: &str, url: String) -> Result<String> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(url)
    } else {
        Err(eyre!("{} must be an http(s) URL, got {}", key, url))
    }
}
