/// Common test utilities for integration tests
///
/// This module provides shared infrastructure for integration tests:
/// - Building a test router with a controlled configuration
/// - Stub upstream servers on ephemeral ports
/// - Response body extraction helpers

use axum::{routing::get, Json, Router};
use elwosa_tasks_api::app::{build_router, AppState};
use elwosa_tasks_api::config::{
    ApiConfig, Config, DatabaseConfig, UpstreamConfig, DEFAULT_UPSTREAM_TIMEOUT_SECONDS,
};
use elwosa_tasks_api::upstream;

/// An upstream URL that refuses connections immediately
///
/// Port 1 on localhost is never listening, so the client fails fast and the
/// handler takes the database fallback path without waiting for a timeout.
pub const DEAD_UPSTREAM_URL: &str = "http://127.0.0.1:1/tasks";

/// Test context holding the router under test
pub struct TestContext {
    pub app: Router,
    pub config: Config,
}

impl TestContext {
    /// Creates a test context pointing at the given upstream URL
    ///
    /// The database settings also point at a dead port so that fallback
    /// attempts fail fast; DB-backed tests build their own context with
    /// [`TestContext::with_database`].
    pub fn new(upstream_url: &str) -> anyhow::Result<Self> {
        Self::with_database(
            upstream_url,
            DatabaseConfig {
                host: "127.0.0.1".to_string(),
                name: "elwosa_pm".to_string(),
                user: "postgres".to_string(),
                password: "postgres".to_string(),
                port: 1,
            },
        )
    }

    /// Creates a test context with explicit database settings
    pub fn with_database(upstream_url: &str, database: DatabaseConfig) -> anyhow::Result<Self> {
        let config = Config {
            api: ApiConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
            },
            database,
            upstream: UpstreamConfig {
                url: upstream_url.to_string(),
                timeout_seconds: DEFAULT_UPSTREAM_TIMEOUT_SECONDS,
            },
        };

        let client = upstream::build_client(&config.upstream)?;
        let state = AppState::new(config.clone(), client);
        let app = build_router(state);

        Ok(TestContext { app, config })
    }
}

/// Spawns a stub upstream server returning the given JSON for GET /tasks
///
/// Returns the full URL of the stub's /tasks endpoint. The server lives on
/// an ephemeral port for the remainder of the test process.
pub async fn spawn_upstream(body: serde_json::Value) -> anyhow::Result<String> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    let app = Router::new().route(
        "/tasks",
        get(move || {
            let body = body.clone();
            async move { Json(body) }
        }),
    );

    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    Ok(format!("http://{}/tasks", addr))
}

/// Spawns a stub upstream server that always answers 500
pub async fn spawn_failing_upstream() -> anyhow::Result<String> {
    use axum::http::StatusCode;

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    let app = Router::new().route(
        "/tasks",
        get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );

    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    Ok(format!("http://{}/tasks", addr))
}

/// Reads a response body to bytes
pub async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

/// Reads a response body as JSON
pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
