/// Patient handlers - registration and the staff-only listing
use super::redirect;
use crate::app_state::AppState;
use crate::error::{AppError, Result};
use crate::models::RegisterPatientRequest;
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use tera::Context;

pub const MISSING_API_FIELDS: &str = "First name, last name, and email are required";
pub const MISSING_FORM_FIELDS: &str = "All fields except phone are required.";
pub const REGISTERED_MESSAGE: &str = "Patient registered successfully!";

#[derive(Debug, Deserialize)]
pub struct RegisterFormQuery {
    pub success: Option<String>,
}

/// POST /register
pub async fn register_patient_api(
    state: web::Data<AppState>,
    req: web::Json<RegisterPatientRequest>,
) -> Result<HttpResponse> {
    let patient = req
        .into_inner()
        .into_new_patient()
        .ok_or_else(|| AppError::Validation(MISSING_API_FIELDS.to_string()))?;

    state.patients.register(patient).await?;

    Ok(HttpResponse::Created().json(serde_json::json!({
        "message": REGISTERED_MESSAGE,
    })))
}

/// GET /register-patient
pub async fn register_patient_form(
    state: web::Data<AppState>,
    query: web::Query<RegisterFormQuery>,
) -> Result<HttpResponse> {
    let mut ctx = Context::new();
    if let Some(success) = &query.success {
        ctx.insert("success", success);
    }
    state.templates.page("register.html", &ctx)
}

/// POST /register-patient
pub async fn submit_patient_form(
    state: web::Data<AppState>,
    form: web::Form<RegisterPatientRequest>,
) -> Result<HttpResponse> {
    let Some(patient) = form.into_inner().into_new_patient() else {
        return render_form_error(&state, MISSING_FORM_FIELDS);
    };

    match state.patients.register(patient).await {
        Ok(_) => Ok(redirect(&format!(
            "/register-patient?success={}",
            urlencoding::encode(REGISTERED_MESSAGE)
        ))),
        Err(e @ (AppError::Validation(_) | AppError::Conflict(_))) => {
            render_form_error(&state, &e.public_message())
        }
        Err(e) => Err(e),
    }
}

fn render_form_error(state: &AppState, error: &str) -> Result<HttpResponse> {
    let mut ctx = Context::new();
    ctx.insert("error", error);
    state.templates.page("register.html", &ctx)
}

/// GET /patients (Basic auth)
pub async fn list_patients(state: web::Data<AppState>) -> Result<HttpResponse> {
    let patients = state.patients.list().await?;

    let mut ctx = Context::new();
    ctx.insert("patients", &patients);
    state.templates.page("patients.html", &ctx)
}
