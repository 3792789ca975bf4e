use config::{Config, ConfigError, Environment};
use log::debug;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub bind_address: String,
    pub port: u16,
    pub log_level: String,
    pub claude_model: String,
    pub claude_timeout: u64,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        debug!("Initializing settings");

        // Load .env file first
        dotenvy::dotenv().ok();

        let config = Config::builder()
            .set_default("bind_address", "0.0.0.0")?
            .set_default("port", 8080)?
            .set_default("log_level", "info")?
            .set_default("claude_model", "claude-sonnet-4-20250514")?
            .set_default("claude_timeout", 30)?
            // Environment variables (PORT, CLAUDE_MODEL, ...) override defaults
            .add_source(Environment::default().try_parsing(true))
            .build()?;

        config.try_deserialize()
    }
}
