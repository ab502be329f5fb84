//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables using the
//! `config` and `dotenvy` crates. Variables carry the `HR_ASSIST` prefix and
//! nested values are separated by double underscores.
//!
//! # Example
//!
//! ```no_run
//! use hr_assist::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod ai;
mod auth;
mod database;
mod error;
mod generation;
mod server;

pub use ai::AiConfig;
pub use auth::AuthConfig;
pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use generation::GenerationLimits;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;
use std::path::Path;

/// Root application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration (PostgreSQL connection)
    pub database: DatabaseConfig,

    /// Token signing and password hashing
    pub auth: AuthConfig,

    /// Completion API configuration
    #[serde(default)]
    pub ai: AiConfig,

    /// Generation request field limits
    #[serde(default)]
    pub generation: GenerationLimits,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `HR_ASSIST` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `HR_ASSIST__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `HR_ASSIST__AUTH__JWT_SECRET=...` -> `auth.jwt_secret = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or cannot be
    /// parsed into their expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();
        Self::from_environment()
    }

    /// Load configuration after reading variables from an explicit env file.
    ///
    /// Unlike [`AppConfig::load`], a missing or unreadable file is an error.
    pub fn load_with_env_file(path: &Path) -> Result<Self, ConfigError> {
        dotenvy::from_path(path)?;
        Self::from_environment()
    }

    fn from_environment() -> Result<Self, ConfigError> {
        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("HR_ASSIST")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for the first invalid section.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate(&self.server.environment)?;
        self.ai.validate()?;
        self.generation.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::env;
    use std::io::Write;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "HR_ASSIST__DATABASE__URL",
        "HR_ASSIST__AUTH__JWT_SECRET",
        "HR_ASSIST__AI__OPENAI_API_KEY",
        "HR_ASSIST__AI__TEMPERATURE",
        "HR_ASSIST__SERVER__PORT",
        "HR_ASSIST__SERVER__ENVIRONMENT",
        "HR_ASSIST__GENERATION__TITLE_MAX_LENGTH",
    ];

    fn set_minimal_env() {
        env::set_var("HR_ASSIST__DATABASE__URL", "postgresql://test@localhost/test");
        env::set_var("HR_ASSIST__AUTH__JWT_SECRET", "dev-secret");
        env::set_var("HR_ASSIST__AI__OPENAI_API_KEY", "sk-test");
    }

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        let config = result.expect("config should load");
        assert_eq!(config.database.url, "postgresql://test@localhost/test");
        assert_eq!(config.auth.jwt_secret.expose_secret(), "dev-secret");
        assert_eq!(config.ai.model, "gpt-4o-mini");
        assert_eq!(config.generation, GenerationLimits::default());
    }

    #[test]
    fn test_validate_full_config() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        assert!(result.unwrap().validate().is_ok());
    }

    #[test]
    fn test_nested_overrides() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("HR_ASSIST__SERVER__PORT", "3000");
        env::set_var("HR_ASSIST__AI__TEMPERATURE", "0.2");
        env::set_var("HR_ASSIST__GENERATION__TITLE_MAX_LENGTH", "80");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.ai.temperature, 0.2);
        assert_eq!(config.generation.title_max_length, 80);
    }

    #[test]
    fn test_production_rejects_short_secret() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("HR_ASSIST__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.is_production());
        assert_eq!(config.validate(), Err(ValidationError::JwtSecretTooShort));
    }

    #[test]
    fn test_missing_env_file_is_an_error() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("HR_ASSIST__DATABASE__URL", "postgresql://test@localhost/test");
        let result = AppConfig::load_with_env_file(Path::new("/nonexistent/.env"));
        clear_env();

        assert!(matches!(result, Err(ConfigError::EnvFile(_))));
    }

    #[test]
    fn test_load_with_env_file() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "HR_ASSIST__DATABASE__URL=postgres://file@localhost/hr").unwrap();
        writeln!(file, "HR_ASSIST__AUTH__JWT_SECRET=from-file").unwrap();
        writeln!(file, "HR_ASSIST__AI__OPENAI_API_KEY=sk-file").unwrap();

        let result = AppConfig::load_with_env_file(file.path());
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.database.url, "postgres://file@localhost/hr");
        assert_eq!(config.auth.jwt_secret.expose_secret(), "from-file");
    }
}
