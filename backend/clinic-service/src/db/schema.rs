use sqlx::SqlitePool;
use tracing::info;

/// Ensure the patient and blog tables exist.
///
/// Runs once at startup. Existing tables are left untouched.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    info!("Ensuring database tables exist");

    let mut tx = pool.begin().await?;
    sqlx::query(PATIENTS_TABLE).execute(&mut *tx).await?;
    sqlx::query(BLOG_POSTS_TABLE).execute(&mut *tx).await?;
    sqlx::query(COMMENTS_TABLE).execute(&mut *tx).await?;
    sqlx::query(COMMENTS_POST_INDEX).execute(&mut *tx).await?;
    tx.commit().await?;

    Ok(())
}

const PATIENTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS patients (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    first_name VARCHAR(50) NOT NULL,
    last_name VARCHAR(50) NOT NULL,
    email VARCHAR(120) NOT NULL UNIQUE,
    phone VARCHAR(15)
)
"#;

const BLOG_POSTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS blog_posts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title VARCHAR(200) NOT NULL,
    content TEXT NOT NULL,
    author VARCHAR(100) NOT NULL DEFAULT 'Admin',
    date_created TIMESTAMP NOT NULL
)
"#;

const COMMENTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS comments (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    content TEXT NOT NULL,
    author VARCHAR(100) NOT NULL DEFAULT 'Anonymous',
    date_created TIMESTAMP NOT NULL,
    post_id INTEGER NOT NULL REFERENCES blog_posts(id)
)
"#;

const COMMENTS_POST_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_comments_post_id ON comments(post_id)";
