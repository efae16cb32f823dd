use crate::models::{Comment, NewComment};
use chrono::{DateTime, Utc};
use sqlx::{SqliteConnection, SqlitePool};

/// Create a new comment on a post
pub async fn insert_comment(
    conn: &mut SqliteConnection,
    comment: &NewComment,
    date_created: DateTime<Utc>,
) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        INSERT INTO comments (content, author, date_created, post_id)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(&comment.content)
    .bind(&comment.author)
    .bind(date_created)
    .bind(comment.post_id)
    .execute(conn)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Get all comments for a post, newest first
pub async fn get_comments_by_post(
    pool: &SqlitePool,
    post_id: i64,
) -> Result<Vec<Comment>, sqlx::Error> {
    sqlx::query_as::<_, Comment>(
        r#"
        SELECT id, content, author, date_created, post_id
        FROM comments
        WHERE post_id = ?
        ORDER BY date_created DESC, id DESC
        "#,
    )
    .bind(post_id)
    .fetch_all(pool)
    .await
}
