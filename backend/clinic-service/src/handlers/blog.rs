/// Blog handlers - listing, detail with comments, post creation
use super::redirect;
use crate::app_state::AppState;
use crate::error::{AppError, Result};
use crate::models::{BlogPost, BlogPostForm, Comment, CommentForm};
use actix_web::{web, HttpResponse};
use tera::Context;

pub const MISSING_COMMENT_CONTENT: &str = "Comment content is required.";
pub const MISSING_POST_FIELDS: &str = "Title and content are required.";

/// GET /blog
pub async fn blog_index(state: web::Data<AppState>) -> Result<HttpResponse> {
    let posts = state.blog.list_posts().await?;

    let mut ctx = Context::new();
    ctx.insert("posts", &posts);
    state.templates.page("blog.html", &ctx)
}

/// GET /blog/{id}
pub async fn blog_post(state: web::Data<AppState>, post_id: web::Path<i64>) -> Result<HttpResponse> {
    let (post, comments) = state.blog.get_post_with_comments(*post_id).await?;
    render_post(&state, &post, &comments, None)
}

/// POST /blog/{id}
pub async fn add_comment(
    state: web::Data<AppState>,
    post_id: web::Path<i64>,
    form: web::Form<CommentForm>,
) -> Result<HttpResponse> {
    let post_id = post_id.into_inner();
    let (post, comments) = state.blog.get_post_with_comments(post_id).await?;

    let Some(comment) = form.into_inner().into_new_comment(post_id) else {
        return render_post(&state, &post, &comments, Some(MISSING_COMMENT_CONTENT));
    };

    state.blog.add_comment(comment).await?;
    Ok(redirect(&format!("/blog/{}", post_id)))
}

fn render_post(
    state: &AppState,
    post: &BlogPost,
    comments: &[Comment],
    error: Option<&str>,
) -> Result<HttpResponse> {
    let mut ctx = Context::new();
    ctx.insert("post", post);
    ctx.insert("comments", comments);
    if let Some(error) = error {
        ctx.insert("error", error);
    }
    state.templates.page("blog_post.html", &ctx)
}

/// GET /blog/new (Basic auth)
pub async fn new_post_form(state: web::Data<AppState>) -> Result<HttpResponse> {
    state.templates.page("new_post.html", &Context::new())
}

/// POST /blog/new (Basic auth)
pub async fn create_post(
    state: web::Data<AppState>,
    form: web::Form<BlogPostForm>,
) -> Result<HttpResponse> {
    let Some(post) = form.into_inner().into_new_post() else {
        return render_new_post_error(&state, MISSING_POST_FIELDS);
    };

    match state.blog.create_post(post).await {
        Ok(_) => Ok(redirect("/blog")),
        Err(e @ AppError::Validation(_)) => render_new_post_error(&state, &e.public_message()),
        Err(e) => Err(e),
    }
}

fn render_new_post_error(state: &AppState, error: &str) -> Result<HttpResponse> {
    let mut ctx = Context::new();
    ctx.insert("error", error);
    state.templates.page("new_post.html", &ctx)
}
