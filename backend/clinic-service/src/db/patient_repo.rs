use crate::models::{NewPatient, Patient};
use sqlx::{SqliteConnection, SqlitePool};

/// Insert a patient; the email UNIQUE constraint rejects duplicates
pub async fn insert_patient(
    conn: &mut SqliteConnection,
    patient: &NewPatient,
) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        INSERT INTO patients (first_name, last_name, email, phone)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(&patient.first_name)
    .bind(&patient.last_name)
    .bind(&patient.email)
    .bind(&patient.phone)
    .execute(conn)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Every registered patient, in storage order
pub async fn list_patients(pool: &SqlitePool) -> Result<Vec<Patient>, sqlx::Error> {
    sqlx::query_as::<_, Patient>(
        r#"
        SELECT id, first_name, last_name, email, phone
        FROM patients
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn count_patients(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM patients")
        .fetch_one(pool)
        .await
}
