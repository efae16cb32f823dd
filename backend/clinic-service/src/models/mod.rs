/// Data models for clinic-service
///
/// - `patient`: self-registered patients
/// - `blog`: blog posts and the comments attached to them
pub mod blog;
pub mod patient;

pub use blog::{BlogPost, BlogPostForm, Comment, CommentForm, NewBlogPost, NewComment};
pub use patient::{NewPatient, Patient, RegisterPatientRequest};

/// Treat empty or absent form/JSON values the same way
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
