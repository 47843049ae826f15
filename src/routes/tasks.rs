/// Task list endpoint
///
/// The sole data endpoint of the gateway. Every request follows the same
/// linear sequence:
///
/// 1. Try the upstream task API (10 second timeout).
/// 2. On any upstream failure, open a database connection and read the 50
///    most recent rows from the `tasks` table, newest first.
/// 3. Serialize whichever result was obtained and respond with it.
///
/// The two sources are never attempted concurrently; the fallback only
/// starts after the upstream call has failed or timed out. An unreachable
/// upstream is an expected branch and is logged at WARN, not surfaced to
/// the client.
///
/// # Endpoint
///
/// `ANY /tasks`
///
/// All methods are routed here (the frontend sends whatever it sends);
/// OPTIONS is answered immediately with 200 and no body for CORS preflight,
/// every other method gets the task list.
///
/// # Example Response
///
/// ```json
/// [
///   {
///     "id": 3,
///     "task_id": "ELWOSA-3",
///     "title": "Wire up the frontend",
///     "status": "QUEUED",
///     ...
///   }
/// ]
/// ```
use crate::app::AppState;
use crate::db;
use crate::error::ApiResult;
use crate::models::task::Task;
use crate::upstream;
use axum::{
    extract::State,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use sqlx::Connection;
use tracing::{debug, info, warn};

/// Task list handler
///
/// # Errors
///
/// - 500 `{"error": "Database connection failed"}` if the upstream is down
///   and the fallback connection cannot be opened
/// - 500 `{"error": "Failed to fetch tasks: <message>"}` if the fallback
///   query itself fails
pub async fn list_tasks(State(state): State<AppState>, method: Method) -> ApiResult<Response> {
    // CORS preflight: answer before touching any backend
    if method == Method::OPTIONS {
        return Ok(StatusCode::OK.into_response());
    }

    match upstream::fetch_tasks(&state.http, &state.config.upstream).await {
        Ok(tasks) => {
            debug!("Served task list from upstream API");
            Ok(Json(tasks).into_response())
        }
        Err(err) => {
            warn!(
                error = %err,
                url = %state.config.upstream.url,
                "Upstream task API unavailable, falling back to database"
            );

            let mut conn = db::connect(&state.config.database).await?;
            let result = Task::list_recent(&mut conn).await;
            if let Err(e) = conn.close().await {
                warn!(error = %e, "Failed to close database connection cleanly");
            }

            let tasks = result?;
            info!(count = tasks.len(), "Served task list from database fallback");
            Ok(Json(tasks).into_response())
        }
    }
}
