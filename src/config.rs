//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//! A `.env` file in the working directory is honoured (loaded in `main.rs`).
//!
//! ## Variables
//!
//! - `HOST` - Bind host (default: `0.0.0.0`)
//! - `PORT` - Bind port (default: `3001`)
//! - `UPLOAD_LIMIT` - Maximum upload size in MB (default: `20`, range: 1-1024)
//! - `UPLOAD_DIR` - Directory for temporary upload files (default: `uploads`)
//! - `UPLOAD_STORAGE` - `disk` or `none` (default: `disk`)
//! - `APP_ENV` - `development` or `production` (default: `development`);
//!   when unset, `NODE_ENV=production` selects production and any other
//!   `NODE_ENV` value is development
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use crate::error::ErrorExposure;
use anyhow::{Context, Result};
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Upper bound for `UPLOAD_LIMIT`, in MB.
const MAX_UPLOAD_LIMIT_MB: u64 = 1024;

/// Deployment environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    /// Production hides internal error details from clients.
    pub fn error_exposure(self) -> ErrorExposure {
        match self {
            Environment::Development => ErrorExposure::Detailed,
            Environment::Production => ErrorExposure::Generic,
        }
    }
}

impl FromStr for Environment {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" | "test" => Ok(Environment::Development),
            "production" | "prod" => Ok(Environment::Production),
            other => anyhow::bail!(
                "APP_ENV must be 'development' or 'production', got '{}'",
                other
            ),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Where uploaded files are written while a request is processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKind {
    Disk,
    Disabled,
}

impl FromStr for StorageKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "disk" => Ok(StorageKind::Disk),
            "none" => Ok(StorageKind::Disabled),
            other => anyhow::bail!("UPLOAD_STORAGE must be 'disk' or 'none', got '{}'", other),
        }
    }
}

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Maximum upload size in megabytes.
    pub upload_limit_mb: u64,
    pub upload_dir: PathBuf,
    pub storage: StorageKind,
    pub environment: Environment,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = match env::var("PORT") {
            Ok(v) => v
                .parse()
                .with_context(|| format!("PORT must be a valid port number, got '{}'", v))?,
            Err(_) => 3001,
        };

        let upload_limit_mb = match env::var("UPLOAD_LIMIT") {
            Ok(v) => v
                .parse()
                .with_context(|| format!("UPLOAD_LIMIT must be a whole number of MB, got '{}'", v))?,
            Err(_) => 20,
        };

        let upload_dir = env::var("UPLOAD_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("uploads"));

        let storage = env::var("UPLOAD_STORAGE")
            .ok()
            .map(|v| v.parse::<StorageKind>())
            .transpose()?
            .unwrap_or(StorageKind::Disk);

        let environment = Self::load_environment()?;

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            host,
            port,
            upload_limit_mb,
            upload_dir,
            storage,
            environment,
            log_level,
            log_format,
        })
    }

    /// Loads the deployment environment.
    ///
    /// Priority:
    /// 1. `APP_ENV` (must be a recognised value)
    /// 2. `NODE_ENV` (only `production` counts as production)
    /// 3. Development
    fn load_environment() -> Result<Environment> {
        if let Ok(v) = env::var("APP_ENV") {
            return v.parse();
        }

        match env::var("NODE_ENV") {
            Ok(v) if v.trim().eq_ignore_ascii_case("production") => Ok(Environment::Production),
            _ => Ok(Environment::Development),
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `upload_limit_mb` is outside 1-1024
    /// - `log_format` is not `text` or `json`
    /// - `host` is empty
    /// - disk storage is selected with an empty `upload_dir`
    pub fn validate(&self) -> Result<()> {
        if self.upload_limit_mb == 0 || self.upload_limit_mb > MAX_UPLOAD_LIMIT_MB {
            anyhow::bail!(
                "UPLOAD_LIMIT must be between 1 and {} MB, got {}",
                MAX_UPLOAD_LIMIT_MB,
                self.upload_limit_mb
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.host.trim().is_empty() {
            anyhow::bail!("HOST must not be empty");
        }

        if self.storage == StorageKind::Disk && self.upload_dir.as_os_str().is_empty() {
            anyhow::bail!("UPLOAD_DIR must not be empty when UPLOAD_STORAGE=disk");
        }

        Ok(())
    }

    /// Returns the `host:port` bind address.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr());
        tracing::info!("  Environment: {}", self.environment);
        tracing::info!("  Upload limit: {}MB", self.upload_limit_mb);

        match self.storage {
            StorageKind::Disk => {
                tracing::info!("  Upload storage: disk ({})", self.upload_dir.display())
            }
            StorageKind::Disabled => tracing::info!("  Upload storage: none"),
        }

        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: &[&str] = &[
        "HOST",
        "PORT",
        "UPLOAD_LIMIT",
        "UPLOAD_DIR",
        "UPLOAD_STORAGE",
        "APP_ENV",
        "NODE_ENV",
        "LOG_FORMAT",
    ];

    fn clear_env() {
        // SAFETY: Tests touching the environment are run serially
        unsafe {
            for var in VARS {
                env::remove_var(var);
            }
        }
    }

    fn sample() -> Config {
        Config {
            host: "0.0.0.0".to_string(),
            port: 3001,
            upload_limit_mb: 20,
            upload_dir: PathBuf::from("uploads"),
            storage: StorageKind::Disk,
            environment: Environment::Development,
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = sample();
        assert!(config.validate().is_ok());

        config.upload_limit_mb = 0;
        assert!(config.validate().is_err());

        config.upload_limit_mb = 2048;
        assert!(config.validate().is_err());

        config.upload_limit_mb = 5;
        config.log_format = "xml".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.upload_dir = PathBuf::new();
        assert!(config.validate().is_err());

        config.storage = StorageKind::Disabled;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_environment_parsing() {
        assert_eq!(
            "production".parse::<Environment>().unwrap(),
            Environment::Production
        );
        assert_eq!(
            "Development".parse::<Environment>().unwrap(),
            Environment::Development
        );
        assert!("staging".parse::<Environment>().is_err());

        assert_eq!(
            Environment::Production.error_exposure(),
            ErrorExposure::Generic
        );
        assert_eq!(
            Environment::Development.error_exposure(),
            ErrorExposure::Detailed
        );
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();

        let config = Config::from_env().unwrap();

        assert_eq!(config.listen_addr(), "0.0.0.0:3001");
        assert_eq!(config.upload_limit_mb, 20);
        assert_eq!(config.upload_dir, PathBuf::from("uploads"));
        assert_eq!(config.storage, StorageKind::Disk);
        assert_eq!(config.environment, Environment::Development);
    }

    #[test]
    #[serial]
    fn test_values_from_env() {
        clear_env();
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("PORT", "8080");
            env::set_var("UPLOAD_LIMIT", "5");
            env::set_var("UPLOAD_STORAGE", "none");
            env::set_var("NODE_ENV", "production");
        }

        let config = load_from_env().unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.upload_limit_mb, 5);
        assert_eq!(config.storage, StorageKind::Disabled);
        assert_eq!(config.environment, Environment::Production);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_app_env_takes_priority() {
        clear_env();
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("APP_ENV", "development");
            env::set_var("NODE_ENV", "production");
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.environment, Environment::Development);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_unknown_node_env_is_development() {
        clear_env();
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("NODE_ENV", "staging");
        }

        let config = load_from_env().unwrap();
        assert_eq!(config.environment, Environment::Development);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_unknown_app_env_rejected() {
        clear_env();
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("APP_ENV", "staging");
        }

        assert!(Config::from_env().is_err());

        clear_env();
    }

    #[test]
    #[serial]
    fn test_malformed_values_rejected() {
        clear_env();
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("PORT", "not-a-port");
        }
        assert!(Config::from_env().is_err());

        clear_env();
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("UPLOAD_STORAGE", "s3");
        }
        assert!(Config::from_env().is_err());

        clear_env();
    }
}
