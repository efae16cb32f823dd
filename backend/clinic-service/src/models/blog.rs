use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::non_empty;

pub const DEFAULT_POST_AUTHOR: &str = "Admin";
pub const DEFAULT_COMMENT_AUTHOR: &str = "Anonymous";

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct BlogPost {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author: String,
    pub date_created: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Comment {
    pub id: i64,
    pub content: String,
    pub author: String,
    pub date_created: DateTime<Utc>,
    pub post_id: i64,
}

/// Form body for `/blog/new`
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct BlogPostForm {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
}

/// Form body for comment submission on `/blog/{id}`
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct CommentForm {
    pub content: Option<String>,
    pub author: Option<String>,
}

#[derive(Debug, Clone, Validate)]
pub struct NewBlogPost {
    #[validate(length(max = 200, message = "Title must be at most 200 characters."))]
    pub title: String,
    pub content: String,
    pub author: String,
}

#[derive(Debug, Clone)]
pub struct NewComment {
    pub post_id: i64,
    pub content: String,
    pub author: String,
}

impl BlogPostForm {
    pub fn into_new_post(self) -> Option<NewBlogPost> {
        Some(NewBlogPost {
            title: non_empty(self.title)?,
            content: non_empty(self.content)?,
            author: non_empty(self.author).unwrap_or_else(|| DEFAULT_POST_AUTHOR.to_string()),
        })
    }
}

impl CommentForm {
    pub fn into_new_comment(self, post_id: i64) -> Option<NewComment> {
        Some(NewComment {
            post_id,
            content: non_empty(self.content)?,
            author: non_empty(self.author)
                .unwrap_or_else(|| DEFAULT_COMMENT_AUTHOR.to_string()),
        })
    }
}
