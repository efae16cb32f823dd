/// HTTP handlers
///
/// - `home`: landing page and health probe
/// - `patients`: registration (JSON and form) and the staff patient list
/// - `blog`: post listing, detail with comments, post creation
pub mod blog;
pub mod home;
pub mod patients;

pub use blog::{add_comment, blog_index, blog_post, create_post, new_post_form};
pub use home::{health_check, home};
pub use patients::{list_patients, register_patient_api, register_patient_form, submit_patient_form};

use actix_web::{http::header::LOCATION, HttpResponse};

/// `302 Found` pointing at `location`
pub(crate) fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((LOCATION, location))
        .finish()
}
