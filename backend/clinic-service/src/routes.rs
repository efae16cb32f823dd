//! Route configuration
//!
//! Staff-only resources get the Basic auth middleware attached here, at
//! registration time. Blog routes are only mounted when the blog is enabled.

use crate::app_state::AppState;
use crate::error::AppError;
use crate::handlers;
use actix_web::web;

/// Body limit for JSON and form payloads
const MAX_PAYLOAD_BYTES: usize = 2 * 1024 * 1024;

/// Configure all routes for the application
pub fn configure_routes(cfg: &mut web::ServiceConfig, state: &web::Data<AppState>) {
    let auth = state.basic_auth();

    cfg.app_data(state.clone())
        .app_data(json_config())
        .app_data(form_config())
        .route("/", web::get().to(handlers::home))
        .route("/health", web::get().to(handlers::health_check))
        .service(
            web::resource("/register").route(web::post().to(handlers::register_patient_api)),
        )
        .service(
            web::resource("/register-patient")
                .route(web::get().to(handlers::register_patient_form))
                .route(web::post().to(handlers::submit_patient_form)),
        )
        .service(
            web::resource("/patients")
                .wrap(auth.clone())
                .route(web::get().to(handlers::list_patients)),
        );

    if state.config.app.blog_enabled {
        cfg.route("/blog", web::get().to(handlers::blog_index))
            // Registered before /blog/{id} so "new" is never read as an id
            .service(
                web::resource("/blog/new")
                    .wrap(auth)
                    .route(web::get().to(handlers::new_post_form))
                    .route(web::post().to(handlers::create_post)),
            )
            .service(
                web::resource("/blog/{id}")
                    .route(web::get().to(handlers::blog_post))
                    .route(web::post().to(handlers::add_comment)),
            );
    }
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(MAX_PAYLOAD_BYTES)
        .error_handler(|err, _req| {
            tracing::debug!(error = %err, "Rejected JSON payload");
            AppError::Validation(format!("Invalid JSON payload: {}", err)).into()
        })
}

fn form_config() -> web::FormConfig {
    web::FormConfig::default()
        .limit(MAX_PAYLOAD_BYTES)
        .error_handler(|err, _req| {
            tracing::debug!(error = %err, "Rejected form payload");
            AppError::Validation(format!("Invalid form payload: {}", err)).into()
        })
}
