//! # ELWOSA Tasks Gateway
//!
//! HTTP gateway serving the ELWOSA task list as JSON. Each request tries the
//! upstream Task API first and falls back to a direct PostgreSQL query when
//! the upstream is unreachable.
//!
//! ## Modules
//!
//! - `app`: Application state and router builder
//! - `config`: Configuration management
//! - `db`: Per-request database connections
//! - `error`: Error handling and HTTP response mapping
//! - `models`: Database models
//! - `routes`: API route handlers
//! - `upstream`: Upstream task API client

pub mod app;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod upstream;
