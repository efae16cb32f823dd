/// Patient service - registration and listing
use crate::db::patient_repo;
use crate::error::{AppError, Result};
use crate::models::{NewPatient, Patient};
use sqlx::SqlitePool;
use validator::Validate;

pub const DUPLICATE_EMAIL_MESSAGE: &str = "Email already exists.";

#[derive(Clone)]
pub struct PatientService {
    pool: SqlitePool,
}

impl PatientService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Register a patient.
    ///
    /// Uniqueness of the email is left to the store; a duplicate comes back as
    /// `AppError::Conflict` after the transaction has been rolled back.
    pub async fn register(&self, patient: NewPatient) -> Result<i64> {
        patient.validate()?;

        let mut tx = self.pool.begin().await?;
        let id = match patient_repo::insert_patient(&mut *tx, &patient).await {
            Ok(id) => id,
            Err(e) => {
                tx.rollback().await?;
                let err = AppError::from_write(e, DUPLICATE_EMAIL_MESSAGE);
                if matches!(err, AppError::Conflict(_)) {
                    tracing::info!("Rejected registration with duplicate email");
                }
                return Err(err);
            }
        };
        tx.commit()
            .await
            .map_err(|e| AppError::from_write(e, DUPLICATE_EMAIL_MESSAGE))?;

        tracing::info!(patient_id = id, "Patient registered");
        Ok(id)
    }

    pub async fn list(&self) -> Result<Vec<Patient>> {
        Ok(patient_repo::list_patients(&self.pool).await?)
    }

    pub async fn count(&self) -> Result<i64> {
        Ok(patient_repo::count_patients(&self.pool).await?)
    }
}
