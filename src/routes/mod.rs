/// API route handlers
///
/// - `health`: Health check endpoint
/// - `tasks`: Task list endpoint with database fallback

pub mod health;
pub mod tasks;
