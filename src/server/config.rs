use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_EXPORT_CONCURRENCY: usize = 10;

pub struct Config {
    pub database_url: String,

    pub discord_bot_token: String,

    /// Base URL of the transcript archive service.
    pub archive_url: String,

    pub bind_address: String,

    /// Upper bound on concurrent per-entity lookups within a single export.
    pub export_concurrency: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required_var("DATABASE_URL")?,
            discord_bot_token: required_var("DISCORD_BOT_TOKEN")?,
            archive_url: required_var("ARCHIVE_URL")?
                .trim_end_matches('/')
                .to_string(),
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
            export_concurrency: match std::env::var("EXPORT_CONCURRENCY") {
                Ok(value) => parse_concurrency(&value)?,
                Err(_) => DEFAULT_EXPORT_CONCURRENCY,
            },
        })
    }
}

fn required_var(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn parse_concurrency(value: &str) -> Result<usize, ConfigError> {
    match value.parse::<usize>() {
        Ok(limit) if limit > 0 => Ok(limit),
        _ => Err(ConfigError::InvalidEnvVar {
            name: "EXPORT_CONCURRENCY".to_string(),
            value: value.to_string(),
        }),
    }
}
