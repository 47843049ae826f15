/// Task model and the fallback database query
///
/// This module provides a read-only projection of the ELWOSA `tasks` table.
/// Tasks are created and mutated by other ELWOSA services; this gateway only
/// ever reads the most recent rows.
///
/// # Schema (relevant columns)
///
/// ```sql
/// CREATE TABLE tasks (
///     id SERIAL PRIMARY KEY,
///     task_id TEXT,
///     title TEXT,
///     description TEXT,
///     status TEXT,
///     priority INTEGER,
///     assigned_to TEXT,
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
///     estimated_hours DOUBLE PRECISION,
///     actual_hours DOUBLE PRECISION
/// );
/// ```
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgConnection;

/// Maximum number of rows returned by the fallback query
pub const RECENT_TASK_LIMIT: i64 = 50;

/// Read-only task row
///
/// Field nullability mirrors the table: everything except the primary key
/// and the creation timestamp may be absent.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Task {
    /// Primary key
    pub id: i32,

    /// ELWOSA task identifier (distinct from the primary key)
    pub task_id: Option<String>,

    /// Task title
    pub title: Option<String>,

    /// Detailed description
    pub description: Option<String>,

    /// Current status (e.g. "QUEUED", "IN_PROGRESS", "DONE")
    pub status: Option<String>,

    /// Priority level
    pub priority: Option<i32>,

    /// Assigned user
    pub assigned_to: Option<String>,

    /// When the task was created
    pub created_at: DateTime<Utc>,

    /// Estimated effort in hours
    pub estimated_hours: Option<f64>,

    /// Actual effort in hours
    pub actual_hours: Option<f64>,
}

impl Task {
    /// Fetches the most recent tasks, newest first
    ///
    /// Runs the fixed fallback query: the ten projected columns, ordered by
    /// `id DESC`, limited to [`RECENT_TASK_LIMIT`] rows.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn list_recent(conn: &mut PgConnection) -> Result<Vec<Self>, sqlx::Error> {
        let tasks = sqlx::query_as::<_, Task>(
            r#"
            SELECT id, task_id, title, description, status, priority,
                   assigned_to, created_at, estimated_hours, actual_hours
            FROM tasks
            ORDER BY id DESC
            LIMIT $1
            "#,
        )
        .bind(RECENT_TASK_LIMIT)
        .fetch_all(conn)
        .await?;

        Ok(tasks)
    }
}
