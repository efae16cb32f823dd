use crate::models::{BlogPost, NewBlogPost};
use chrono::{DateTime, Utc};
use sqlx::{SqliteConnection, SqlitePool};

pub async fn insert_post(
    conn: &mut SqliteConnection,
    post: &NewBlogPost,
    date_created: DateTime<Utc>,
) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        INSERT INTO blog_posts (title, content, author, date_created)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(&post.title)
    .bind(&post.content)
    .bind(&post.author)
    .bind(date_created)
    .execute(conn)
    .await?;

    Ok(result.last_insert_rowid())
}

/// All posts, newest first
pub async fn list_posts(pool: &SqlitePool) -> Result<Vec<BlogPost>, sqlx::Error> {
    sqlx::query_as::<_, BlogPost>(
        r#"
        SELECT id, title, content, author, date_created
        FROM blog_posts
        ORDER BY date_created DESC, id DESC
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn find_post(pool: &SqlitePool, post_id: i64) -> Result<Option<BlogPost>, sqlx::Error> {
    sqlx::query_as::<_, BlogPost>(
        r#"
        SELECT id, title, content, author, date_created
        FROM blog_posts
        WHERE id = ?
        "#,
    )
    .bind(post_id)
    .fetch_optional(pool)
    .await
}
