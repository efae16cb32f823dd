//! HTML rendering
//!
//! Templates are compiled into the binary and rendered with Tera, which
//! escapes every interpolated value in `.html` templates.

use crate::error::Result;
use actix_web::HttpResponse;
use tera::{Context, Tera};

const TEMPLATES: &[(&str, &str)] = &[
    ("base.html", include_str!("../templates/base.html")),
    ("home.html", include_str!("../templates/home.html")),
    ("register.html", include_str!("../templates/register.html")),
    ("patients.html", include_str!("../templates/patients.html")),
    ("blog.html", include_str!("../templates/blog.html")),
    ("blog_post.html", include_str!("../templates/blog_post.html")),
    ("new_post.html", include_str!("../templates/new_post.html")),
];

pub struct Templates {
    tera: Tera,
    blog_enabled: bool,
}

impl Templates {
    pub fn new(blog_enabled: bool) -> std::result::Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_templates(TEMPLATES.to_vec())?;
        Ok(Self { tera, blog_enabled })
    }

    pub fn render(&self, name: &str, context: &Context) -> Result<String> {
        let mut context = context.clone();
        context.insert("blog_enabled", &self.blog_enabled);
        Ok(self.tera.render(name, &context)?)
    }

    /// Render `name` into a `200 OK` HTML response
    pub fn page(&self, name: &str, context: &Context) -> Result<HttpResponse> {
        let body = self.render(name, context)?;
        Ok(HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body))
    }
}
