/// Blog service - posts and their comments
use crate::db::{comment_repo, post_repo};
use crate::error::{AppError, Result};
use crate::models::{BlogPost, Comment, NewBlogPost, NewComment};
use chrono::Utc;
use sqlx::SqlitePool;
use validator::Validate;

#[derive(Clone)]
pub struct BlogService {
    pool: SqlitePool,
}

impl BlogService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// All posts, newest first
    pub async fn list_posts(&self) -> Result<Vec<BlogPost>> {
        Ok(post_repo::list_posts(&self.pool).await?)
    }

    pub async fn get_post(&self, post_id: i64) -> Result<BlogPost> {
        post_repo::find_post(&self.pool, post_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Blog post {} not found", post_id)))
    }

    /// A post together with its comments, newest first
    pub async fn get_post_with_comments(&self, post_id: i64) -> Result<(BlogPost, Vec<Comment>)> {
        let post = self.get_post(post_id).await?;
        let comments = comment_repo::get_comments_by_post(&self.pool, post_id).await?;
        Ok((post, comments))
    }

    pub async fn create_post(&self, post: NewBlogPost) -> Result<i64> {
        post.validate()?;

        let mut tx = self.pool.begin().await?;
        let id = match post_repo::insert_post(&mut *tx, &post, Utc::now()).await {
            Ok(id) => id,
            Err(e) => {
                tx.rollback().await?;
                return Err(e.into());
            }
        };
        tx.commit().await?;

        tracing::info!(post_id = id, author = %post.author, "Blog post created");
        Ok(id)
    }

    pub async fn add_comment(&self, comment: NewComment) -> Result<i64> {
        let mut tx = self.pool.begin().await?;
        let id = match comment_repo::insert_comment(&mut *tx, &comment, Utc::now()).await {
            Ok(id) => id,
            Err(e) => {
                tx.rollback().await?;
                return Err(e.into());
            }
        };
        tx.commit().await?;

        tracing::info!(comment_id = id, post_id = comment.post_id, "Comment added");
        Ok(id)
    }
}
