use std::path::PathBuf;

use crate::utils::validation::DEFAULT_MAX_IMAGE_BYTES;

/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | WORK_DIR | ./data | Directory holding the database and logs |
/// | HTTP_PORT | 5000 | HTTP API port |
/// | DB_FILE | bakery.redb | Database file name inside `WORK_DIR` |
/// | LOG_LEVEL | info | Fallback log level when `RUST_LOG` is unset |
/// | LOG_JSON | false | Emit JSON log lines |
/// | LOG_DIR | unset | Directory for daily rolling log files (stdout when unset) |
/// | ENVIRONMENT | development | development / staging / production |
/// | SEED_DEFAULTS | true | Seed empty collections with the default catalog |
/// | MAX_IMAGE_BYTES | 2097152 | Largest accepted embedded image payload |
/// | CORS_ALLOW_ANY | true | Allow any origin (the storefront is served elsewhere) |
///
/// # Example
///
/// ```ignore
/// WORK_DIR=/srv/bakery HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory for the database file and logs
    pub work_dir: String,
    pub http_port: u16,
    pub db_file: String,
    pub log_level: String,
    pub log_json: bool,
    pub log_dir: Option<String>,
    /// development | staging | production
    pub environment: String,
    pub seed_defaults: bool,
    pub max_image_bytes: usize,
    pub cors_allow_any: bool,
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl Config {
    /// Load configuration from the environment, falling back to defaults
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "./data".into()),
            http_port: env_or("HTTP_PORT", 5000),
            db_file: std::env::var("DB_FILE").unwrap_or_else(|_| "bakery.redb".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_json: env_or("LOG_JSON", false),
            log_dir: std::env::var("LOG_DIR").ok(),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            seed_defaults: env_or("SEED_DEFAULTS", true),
            max_image_bytes: env_or("MAX_IMAGE_BYTES", DEFAULT_MAX_IMAGE_BYTES),
            cors_allow_any: env_or("CORS_ALLOW_ANY", true),
        }
    }

    /// Override the work dir and port
    ///
    /// Mostly used by tests.
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config
    }

    pub fn db_path(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join(&self.db_file)
    }

    /// Upper bound for a request body: one embedded image plus room for the JSON around it
    pub fn body_limit(&self) -> usize {
        // base64 inflates by 4/3
        self.max_image_bytes / 3 * 4 + 64 * 1024
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
