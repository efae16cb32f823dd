#![allow(dead_code)]

use actix_web::web;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use clinic_service::config::{AppConfig, AuthConfig, Config, DatabaseConfig};
use clinic_service::{db, AppState};
use db_pool::{create_pool, DbConfig};
use tempfile::TempDir;

pub const USERNAME: &str = "admin";
pub const PASSWORD: &str = "secret";

/// Application state over a throwaway SQLite file
pub struct TestContext {
    pub state: web::Data<AppState>,
    _dir: TempDir,
}

pub fn test_config(url: &str, blog_enabled: bool) -> Config {
    Config {
        app: AppConfig {
            env: "test".into(),
            host: "127.0.0.1".into(),
            port: 0,
            blog_enabled,
        },
        database: DatabaseConfig {
            url: url.into(),
            max_connections: 2,
        },
        auth: AuthConfig {
            username: USERNAME.into(),
            password: PASSWORD.into(),
            realm: "Login Required".into(),
        },
    }
}

pub async fn setup(blog_enabled: bool) -> TestContext {
    let dir = tempfile::tempdir().expect("tempdir");
    let url = format!("sqlite://{}", dir.path().join("clinic.db").display());

    let pool = create_pool(DbConfig::new("clinic-service-test", &url))
        .await
        .expect("create pool");
    db::ensure_schema(&pool).await.expect("ensure schema");

    let state = AppState::new(pool, test_config(&url, blog_enabled)).expect("app state");
    TestContext {
        state: web::Data::new(state),
        _dir: dir,
    }
}

pub fn basic_auth(user: &str, pass: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{}:{}", user, pass)))
}

pub fn admin_auth() -> String {
    basic_auth(USERNAME, PASSWORD)
}

/// Build the service with the full route table
macro_rules! init_app {
    ($ctx:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .configure(|cfg| clinic_service::routes::configure_routes(cfg, &$ctx.state)),
        )
        .await
    };
}
