/// Database models
///
/// - `task`: read-only task row and the fallback query

pub mod task;
