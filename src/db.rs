/// Database connection handling
///
/// The gateway opens one short-lived PostgreSQL connection per fallback
/// query instead of holding a pool: the database is only touched when the
/// upstream task API is down, and each request closes its connection when
/// the query finishes.
///
/// # Example
///
/// ```no_run
/// use elwosa_tasks_api::config::DatabaseConfig;
/// use elwosa_tasks_api::db;
///
/// # async fn example(config: &DatabaseConfig) -> Result<(), elwosa_tasks_api::error::ApiError> {
/// let mut conn = db::connect(config).await?;
/// // run queries...
/// # Ok(())
/// # }
/// ```
use crate::config::DatabaseConfig;
use crate::error::ApiError;
use sqlx::postgres::{PgConnectOptions, PgConnection};
use sqlx::ConnectOptions;
use tracing::{debug, error};

/// Builds PostgreSQL connection options from configuration
pub fn connect_options(config: &DatabaseConfig) -> PgConnectOptions {
    PgConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .username(&config.user)
        .password(&config.password)
        .database(&config.name)
}

/// Opens a single database connection
///
/// The caller is responsible for closing the connection with
/// [`sqlx::Connection::close`] once it is done.
///
/// # Errors
///
/// Returns [`ApiError::DatabaseUnavailable`] if the connection cannot be
/// opened; the underlying cause is logged, the response body carries the
/// fixed message only.
pub async fn connect(config: &DatabaseConfig) -> Result<PgConnection, ApiError> {
    debug!(
        host = %config.host,
        port = config.port,
        database = %config.name,
        "Opening database connection"
    );

    connect_options(config).connect().await.map_err(|e| {
        error!(error = %e, host = %config.host, "Database connection failed");
        ApiError::DatabaseUnavailable
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_db_config() -> DatabaseConfig {
        DatabaseConfig {
            host: "db.example.internal".to_string(),
            name: "elwosa_pm".to_string(),
            user: "postgres".to_string(),
            password: "secret".to_string(),
            port: 5433,
        }
    }

    #[test]
    fn test_connect_options_from_config() {
        let options = connect_options(&test_db_config());

        assert_eq!(options.get_host(), "db.example.internal");
        assert_eq!(options.get_port(), 5433);
        assert_eq!(options.get_username(), "postgres");
        assert_eq!(options.get_database(), Some("elwosa_pm"));
    }

    #[tokio::test]
    async fn test_connect_failure_maps_to_fixed_error() {
        // Port 1 on localhost: connection refused immediately
        let config = DatabaseConfig {
            host: "127.0.0.1".to_string(),
            name: "nope".to_string(),
            user: "nobody".to_string(),
            password: "nothing".to_string(),
            port: 1,
        };

        let err = connect(&config).await.unwrap_err();
        assert_eq!(err.to_string(), "Database connection failed");
    }
}
