/// Configuration management for Clinic Service
///
/// All settings come from environment variables (a `.env` file is honored
/// by the binary before this runs).
use serde::{Deserialize, Serialize};

const DEFAULT_AUTH_PASSWORD: &str = "secret";

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application settings
    pub app: AppConfig,
    /// Database configuration
    pub database: DatabaseConfig,
    /// Basic auth credentials for the staff-only routes
    pub auth: AuthConfig,
}

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application environment (development, staging, production)
    pub env: String,
    /// Server host to bind to
    pub host: String,
    /// Server port to bind to
    pub port: u16,
    /// Expose the blog routes alongside patient registration
    pub blog_enabled: bool,
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// SQLite URL
    pub url: String,
    /// Max connections in pool
    pub max_connections: u32,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    pub username: String,
    pub password: String,
    pub realm: String,
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("realm", &self.realm)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, String> {
        let config = Config {
            app: AppConfig {
                env: std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                host: std::env::var("CLINIC_SERVICE_HOST")
                    .unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: parse_env_or_default("CLINIC_SERVICE_PORT", 5000)?,
                blog_enabled: parse_env_or_default("BLOG_ENABLED", true)?,
            },
            database: DatabaseConfig {
                url: std::env::var("DATABASE_URL")
                    .unwrap_or_else(|_| "sqlite://patients.db".to_string()),
                max_connections: parse_env_or_default("DATABASE_MAX_CONNECTIONS", 5)?,
            },
            auth: AuthConfig {
                username: std::env::var("BASIC_AUTH_USERNAME")
                    .unwrap_or_else(|_| "admin".to_string()),
                password: std::env::var("BASIC_AUTH_PASSWORD")
                    .unwrap_or_else(|_| DEFAULT_AUTH_PASSWORD.to_string()),
                realm: std::env::var("BASIC_AUTH_REALM")
                    .unwrap_or_else(|_| "Login Required".to_string()),
            },
        };

        let password = &config.auth.password;
        if config.is_production() && (password.is_empty() || password == DEFAULT_AUTH_PASSWORD) {
            return Err(
                "BASIC_AUTH_PASSWORD must be set to a non-default value in production".to_string(),
            );
        }

        Ok(config)
    }

    pub fn is_production(&self) -> bool {
        self.app.env.eq_ignore_ascii_case("production")
    }
}

fn parse_env_or_default<T>(key: &str, default: T) -> Result<T, String>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(val) => val
            .trim()
            .parse()
            .map_err(|e| format!("Failed to parse {}='{}': {}", key, val, e)),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const KEYS: &[&str] = &[
        "APP_ENV",
        "CLINIC_SERVICE_HOST",
        "CLINIC_SERVICE_PORT",
        "BLOG_ENABLED",
        "DATABASE_URL",
        "DATABASE_MAX_CONNECTIONS",
        "BASIC_AUTH_USERNAME",
        "BASIC_AUTH_PASSWORD",
        "BASIC_AUTH_REALM",
    ];

    fn clear_env() {
        for key in KEYS {
            std::env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();
        let config = Config::from_env().unwrap();
        assert_eq!(config.app.env, "development");
        assert_eq!(config.app.port, 5000);
        assert!(config.app.blog_enabled);
        assert_eq!(config.database.url, "sqlite://patients.db");
        assert_eq!(config.auth.username, "admin");
        assert_eq!(config.auth.password, "secret");
        assert_eq!(config.auth.realm, "Login Required");
        assert!(!config.is_production());
    }

    #[test]
    #[serial]
    fn test_overrides() {
        clear_env();
        std::env::set_var("CLINIC_SERVICE_PORT", "8088");
        std::env::set_var("BLOG_ENABLED", "false");
        std::env::set_var("BASIC_AUTH_USERNAME", "doctor");
        let config = Config::from_env().unwrap();
        assert_eq!(config.app.port, 8088);
        assert!(!config.app.blog_enabled);
        assert_eq!(config.auth.username, "doctor");
        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_port_is_an_error() {
        clear_env();
        std::env::set_var("CLINIC_SERVICE_PORT", "not-a-port");
        let err = Config::from_env().unwrap_err();
        assert!(err.contains("CLINIC_SERVICE_PORT"));
        clear_env();
    }

    #[test]
    #[serial]
    fn test_production_requires_real_password() {
        clear_env();
        std::env::set_var("APP_ENV", "production");
        assert!(Config::from_env().is_err());

        std::env::set_var("BASIC_AUTH_PASSWORD", "a-much-better-one");
        let config = Config::from_env().unwrap();
        assert!(config.is_production());
        clear_env();
    }

    #[test]
    #[serial]
    fn test_production_env_is_case_insensitive() {
        clear_env();
        std::env::set_var("APP_ENV", "PRODUCTION");
        let err = Config::from_env().unwrap_err();
        assert!(err.contains("BASIC_AUTH_PASSWORD"));
        clear_env();
    }

    #[test]
    fn test_auth_debug_redacts_password() {
        let auth = AuthConfig {
            username: "admin".into(),
            password: "hunter2".into(),
            realm: "Login Required".into(),
        };
        assert!(!format!("{:?}", auth).contains("hunter2"));
    }
}
