/// Database access layer
///
/// - `schema`: eager, idempotent table creation at startup
/// - `patient_repo`, `post_repo`, `comment_repo`: per-table queries
///
/// Writes take a `&mut SqliteConnection` so callers can run them inside a
/// transaction; reads take the pool.
pub mod comment_repo;
pub mod patient_repo;
pub mod post_repo;
pub mod schema;

pub use schema::ensure_schema;
