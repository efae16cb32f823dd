/// Clinic Service Library
///
/// Patient self-registration, a staff-only patient list behind HTTP Basic
/// auth, and a small blog with comments, all backed by an embedded SQLite
/// database.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers
/// - `models`: Patient, blog post and comment records plus their input forms
/// - `services`: Transactional business logic
/// - `db`: Schema creation and repositories
/// - `templates`: HTML rendering
/// - `routes`: Route table and per-route middleware
/// - `error`: Error types and HTTP mapping
/// - `config`: Configuration management
pub mod app_state;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod templates;

pub use app_state::AppState;
pub use config::Config;
pub use error::{AppError, Result};
