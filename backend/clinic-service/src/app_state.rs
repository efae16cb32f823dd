//! Central application state
//!
//! Built once at startup and handed to every handler through `web::Data`.
//! The pool inside is the only connection to the store; it is closed when
//! the server stops.

use crate::config::Config;
use crate::db;
use crate::services::{BlogService, PatientService};
use crate::templates::Templates;
use actix_middleware::{BasicAuthMiddleware, CredentialVerifier, StaticCredentials};
use db_pool::{create_pool, DbConfig};
use sqlx::SqlitePool;
use std::sync::Arc;

pub const SERVICE_NAME: &str = "clinic-service";

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub patients: PatientService,
    pub blog: BlogService,
    pub templates: Arc<Templates>,
    pub config: Arc<Config>,
    verifier: Arc<dyn CredentialVerifier>,
}

impl AppState {
    /// Wire handlers' dependencies around an already-prepared pool
    pub fn new(db: SqlitePool, config: Config) -> Result<Self, tera::Error> {
        let verifier: Arc<dyn CredentialVerifier> = Arc::new(StaticCredentials::new(
            config.auth.username.clone(),
            config.auth.password.clone(),
        ));
        Self::with_verifier(db, config, verifier)
    }

    pub fn with_verifier(
        db: SqlitePool,
        config: Config,
        verifier: Arc<dyn CredentialVerifier>,
    ) -> Result<Self, tera::Error> {
        let templates = Templates::new(config.app.blog_enabled)?;

        Ok(Self {
            patients: PatientService::new(db.clone()),
            blog: BlogService::new(db.clone()),
            db,
            templates: Arc::new(templates),
            config: Arc::new(config),
            verifier,
        })
    }

    /// Open the store, create missing tables and build the state
    pub async fn initialize(config: Config) -> anyhow::Result<Self> {
        tracing::info!("Initializing application state...");

        let db_config = DbConfig::new(SERVICE_NAME, &config.database.url)
            .with_max_connections(config.database.max_connections);
        db_config.log_config();
        let pool = create_pool(db_config).await?;

        db::ensure_schema(&pool).await?;
        tracing::info!("Database schema ready");

        Ok(Self::new(pool, config)?)
    }

    /// Middleware guarding the staff-only resources
    pub fn basic_auth(&self) -> BasicAuthMiddleware {
        BasicAuthMiddleware::from_shared(self.verifier.clone(), &self.config.auth.realm)
    }
}
