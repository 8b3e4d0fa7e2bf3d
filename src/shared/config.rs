// src/shared/config.rs
use std::env;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} has an invalid value: {value}")]
    InvalidValue { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssistantConfig {
    pub base_url: String,
    pub timeout: Duration,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Replaces the embedded portfolio document when set.
    pub portfolio_data_path: Option<PathBuf>,
    /// `None` leaves the assistant client unconstructed.
    pub assistant: Option<AssistantConfig>,
}

impl AppConfig {
    /// Loads `.env.{RUST_ENV}` (falling back to `.env`) and reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let rust_env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        if dotenvy::from_filename(format!(".env.{}", rust_env)).is_err() {
            dotenvy::dotenv().ok();
        }

        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let host = read("HOST").unwrap_or_else(|| "127.0.0.1".to_string());

        let port = match read("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                name: "PORT",
                value: raw,
            })?,
            None => 8080,
        };

        let portfolio_data_path = read("PORTFOLIO_DATA_PATH").map(PathBuf::from);

        let assistant = match read("ASSISTANT_API_URL") {
            Some(base_url) => {
                let timeout_secs = match read("ASSISTANT_API_TIMEOUT_SECS") {
                    Some(raw) => raw
                        .trim()
                        .parse::<u64>()
                        .ok()
                        .filter(|secs| *secs > 0)
                        .ok_or(ConfigError::InvalidValue {
                            name: "ASSISTANT_API_TIMEOUT_SECS",
                            value: raw,
                        })?,
                    None => 10,
                };

                Some(AssistantConfig {
                    base_url: base_url.trim_end_matches('/').to_string(),
                    timeout: Duration::from_secs(timeout_secs),
                })
            }
            None => None,
        };

        Ok(Self {
            host,
            port,
            portfolio_data_path,
            assistant,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
