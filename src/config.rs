/// Configuration management for the tasks gateway
///
/// This module loads configuration from environment variables and provides
/// a type-safe configuration struct built once at startup.
///
/// # Environment Variables
///
/// - `ELWOSA_API_HOST`: Host to bind to (default: 0.0.0.0)
/// - `ELWOSA_API_PORT`: Port to bind to (default: 8080)
/// - `ELWOSA_DB_HOST`: PostgreSQL host (default: 192.168.178.200)
/// - `ELWOSA_DB_NAME`: Database name (default: elwosa_pm)
/// - `ELWOSA_DB_USER`: Database user (default: postgres)
/// - `ELWOSA_DB_PASS`: Database password (default: postgres)
/// - `ELWOSA_DB_PORT`: Database port (default: 5432)
/// - `ELWOSA_TASKS_API_URL`: Upstream task API URL
///   (default: http://192.168.178.200:8001/tasks)
/// - `RUST_LOG`: Log level (default: info)
///
/// Every variable has a default, so the gateway starts without any
/// environment at all and targets the standard ELWOSA deployment.
///
/// # Example
///
/// ```no_run
/// use elwosa_tasks_api::config::Config;
///
/// # fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// println!("Server will listen on {}", config.bind_address());
/// # Ok(())
/// # }
/// ```
use serde::{Deserialize, Serialize};
use std::env;

/// Complete application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// API server configuration
    pub api: ApiConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Upstream task API configuration
    pub upstream: UpstreamConfig,
}

/// API server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Host to bind to
    pub host: String,

    /// Port to bind to
    pub port: u16,
}

/// Database configuration
///
/// Individual connection settings rather than a URL: each field is
/// overridable on its own via the `ELWOSA_DB_*` variables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// PostgreSQL host
    pub host: String,

    /// Database name
    pub name: String,

    /// Database user
    pub user: String,

    /// Database password
    pub password: String,

    /// Database port
    pub port: u16,
}

/// Upstream task API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Full URL of the upstream task list endpoint
    pub url: String,

    /// Request timeout in seconds
    pub timeout_seconds: u64,
}

/// Default timeout for the upstream call, in seconds
pub const DEFAULT_UPSTREAM_TIMEOUT_SECONDS: u64 = 10;

impl Config {
    /// Loads configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a port variable is set but not a valid number.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use elwosa_tasks_api::config::Config;
    ///
    /// # fn example() -> anyhow::Result<()> {
    /// let config = Config::from_env()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_env() -> anyhow::Result<Self> {
        // Load .env file if present (for development)
        dotenvy::dotenv().ok();

        let api_host = env::var("ELWOSA_API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let api_port = env::var("ELWOSA_API_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()?;

        let db_host =
            env::var("ELWOSA_DB_HOST").unwrap_or_else(|_| "192.168.178.200".to_string());
        let db_name = env::var("ELWOSA_DB_NAME").unwrap_or_else(|_| "elwosa_pm".to_string());
        let db_user = env::var("ELWOSA_DB_USER").unwrap_or_else(|_| "postgres".to_string());
        let db_password = env::var("ELWOSA_DB_PASS").unwrap_or_else(|_| "postgres".to_string());
        let db_port = env::var("ELWOSA_DB_PORT")
            .unwrap_or_else(|_| "5432".to_string())
            .parse::<u16>()?;

        let upstream_url = env::var("ELWOSA_TASKS_API_URL")
            .unwrap_or_else(|_| "http://192.168.178.200:8001/tasks".to_string());

        Ok(Self {
            api: ApiConfig {
                host: api_host,
                port: api_port,
            },
            database: DatabaseConfig {
                host: db_host,
                name: db_name,
                user: db_user,
                password: db_password,
                port: db_port,
            },
            upstream: UpstreamConfig {
                url: upstream_url,
                timeout_seconds: DEFAULT_UPSTREAM_TIMEOUT_SECONDS,
            },
        })
    }

    /// Returns the server bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.api.host, self.api.port)
    }
}
