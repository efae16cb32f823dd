use serde::{Deserialize, Serialize};
use validator::Validate;

use super::non_empty;

/// Patient row as stored
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Patient {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
}

/// Registration payload shared by the JSON API and the HTML form.
///
/// Every field is optional at this layer so that absent values surface as a
/// validation error rather than a deserialization failure.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct RegisterPatientRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Validated patient ready to insert
#[derive(Debug, Clone, Validate)]
pub struct NewPatient {
    #[validate(length(max = 50, message = "First name must be at most 50 characters."))]
    pub first_name: String,
    #[validate(length(max = 50, message = "Last name must be at most 50 characters."))]
    pub last_name: String,
    #[validate(length(max = 120, message = "Email must be at most 120 characters."))]
    pub email: String,
    #[validate(length(max = 15, message = "Phone must be at most 15 characters."))]
    pub phone: Option<String>,
}

impl RegisterPatientRequest {
    /// Split into a `NewPatient`, or `None` when a required field is missing
    pub fn into_new_patient(self) -> Option<NewPatient> {
        Some(NewPatient {
            first_name: non_empty(self.first_name)?,
            last_name: non_empty(self.last_name)?,
            email: non_empty(self.email)?,
            phone: non_empty(self.phone),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> RegisterPatientRequest {
        RegisterPatientRequest {
            first_name: Some("Jan".into()),
            last_name: Some("Kowalski".into()),
            email: Some("jan@example.com".into()),
            phone: None,
        }
    }

    #[test]
    fn test_complete_request_converts() {
        let patient = request().into_new_patient().unwrap();
        assert_eq!(patient.first_name, "Jan");
        assert!(patient.phone.is_none());
        assert!(patient.validate().is_ok());
    }

    #[test]
    fn test_missing_or_empty_required_field() {
        let mut req = request();
        req.last_name = None;
        assert!(req.into_new_patient().is_none());

        let mut req = request();
        req.email = Some(String::new());
        assert!(req.into_new_patient().is_none());
    }

    #[test]
    fn test_empty_phone_is_dropped() {
        let mut req = request();
        req.phone = Some(String::new());
        assert!(req.into_new_patient().unwrap().phone.is_none());
    }

    #[test]
    fn test_length_limits() {
        let mut req = request();
        req.phone = Some("1".repeat(16));
        let patient = req.into_new_patient().unwrap();
        assert!(patient.validate().is_err());

        let mut req = request();
        req.first_name = Some("a".repeat(50));
        assert!(req.into_new_patient().unwrap().validate().is_ok());
    }
}
