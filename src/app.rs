/// Application state and router builder
///
/// This module defines the shared application state and provides
/// a function to build the Axum router with all routes and middleware.
///
/// # Example
///
/// ```no_run
/// use elwosa_tasks_api::{app::AppState, config::Config, upstream};
///
/// # fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let client = upstream::build_client(&config.upstream)?;
/// let state = AppState::new(config, client);
/// let app = elwosa_tasks_api::app::build_router(state);
/// # Ok(())
/// # }
/// ```
use crate::config::Config;
use axum::{
    http::{header, Method},
    routing::{any, get},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

/// Shared application state
///
/// This is cloned for each request handler via Axum's `State` extractor.
/// Uses Arc internally for cheap cloning; `reqwest::Client` is already
/// reference-counted.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<Config>,

    /// HTTP client for upstream calls (carries the request timeout)
    pub http: reqwest::Client,
}

impl AppState {
    /// Creates new application state
    pub fn new(config: Config, http: reqwest::Client) -> Self {
        Self {
            config: Arc::new(config),
            http,
        }
    }
}

/// Builds the complete Axum router with all routes and middleware
///
/// # Architecture
///
/// ```text
/// /
/// ├── /health        # Health check
/// └── /tasks         # Task list (any method; OPTIONS short-circuits)
/// ```
///
/// # Middleware Stack
///
/// Applied in order (bottom to top):
/// 1. Logging (tower-http TraceLayer)
/// 2. CORS (tower-http CorsLayer, wildcard origin)
///
/// The CORS layer is deliberately wide open: the gateway fronts a browser
/// frontend served from arbitrary origins, so every response carries
/// `Access-Control-Allow-Origin: *`, with GET/POST/PUT/PATCH/DELETE/OPTIONS
/// and Content-Type/Authorization allowed on preflight.
pub fn build_router(state: AppState) -> Router {
    use crate::routes;

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/tasks", any(routes::tasks::list_tasks))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors)
        .with_state(state)
}
