use std::env;

use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "info";
const DEFAULT_CURRENT_USER: &str = "local-organizer";

#[derive(Debug, Clone)]
pub struct Config {
    pub log_filter: String,
    pub is_production: bool,
    /// Identity the development binary acts as.
    pub current_user: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            log_filter: env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string()),
            is_production: env::var("RUST_ENV")
                .map(|v| v.to_lowercase() == "production")
                .unwrap_or(false),
            current_user: env::var("BONFIRE_CURRENT_USER")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_CURRENT_USER.to_string()),
        }
    }
}

/// Installs the global fmt subscriber. Production output drops ANSI colours.
pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_filter).unwrap_or_else(|e| {
        eprintln!(
            "Invalid log filter '{}': {}, falling back to '{}'",
            config.log_filter, e, DEFAULT_LOG_FILTER
        );
        EnvFilter::new(DEFAULT_LOG_FILTER)
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(!config.is_production)
        .init();

    if config.is_production {
        tracing::info!("Logging: production mode");
    } else {
        tracing::info!("Logging: development mode");
    }
}
