use serde::Deserialize;
use std::env;
use std::sync::OnceLock;
use thiserror::Error;

/// Sample size substituted when a retrieval limit is absent from the environment.
const DEFAULT_SAMPLE_LIMIT: usize = 5;

/// Port used when `SERVER_PORT` is not provided.
pub const DEFAULT_SERVER_PORT: u16 = 8000;

/// Errors encountered while loading configuration from environment variables.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Environment variable contained a value that could not be parsed.
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}

/// Runtime configuration for the flashdeck server.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Optional override for the HTTP server port.
    pub server_port: Option<u16>,
    /// Deployment environment controlling how much error detail responses expose.
    pub environment: Environment,
    /// Sample size substituted when a retrieval limit fails to parse.
    pub sample_default_limit: usize,
}

/// Deployment environments recognized by the server.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development; failure responses carry diagnostic detail.
    Development,
    /// Production; failure responses stay generic.
    Production,
}

impl Environment {
    /// Whether failure responses may include diagnostic detail.
    pub fn expose_error_detail(self) -> bool {
        matches!(self, Self::Development)
    }
}

impl Config {
    /// Load configuration from environment variables, performing validation along the way.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            server_port: load_env_optional("SERVER_PORT")
                .map(|value| {
                    value
                        .parse()
                        .map_err(|_| ConfigError::InvalidValue("SERVER_PORT".into()))
                })
                .transpose()?,
            environment: load_env_optional("APP_ENV")
                .map(|value| {
                    value
                        .parse()
                        .map_err(|()| ConfigError::InvalidValue("APP_ENV".into()))
                })
                .transpose()?
                .unwrap_or(Environment::Production),
            sample_default_limit: load_env_optional("SAMPLE_DEFAULT_LIMIT")
                .map(|value| {
                    value
                        .parse()
                        .map_err(|_| ConfigError::InvalidValue("SAMPLE_DEFAULT_LIMIT".into()))
                })
                .transpose()?
                .unwrap_or(DEFAULT_SAMPLE_LIMIT),
        })
    }
}

fn load_env_optional(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

impl std::str::FromStr for Environment {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" => Ok(Self::Development),
            "production" => Ok(Self::Production),
            _ => Err(()),
        }
    }
}

/// Global configuration cache populated during process start.
pub static CONFIG: OnceLock<Config> = OnceLock::new();

/// Retrieve the loaded configuration, panicking if initialization has not occurred.
pub fn get_config() -> &'static Config {
    CONFIG.get().expect("Config not initialized")
}

/// Load configuration from the environment and install it in the global cache.
pub fn init_config() {
    dotenvy::dotenv().ok();
    let config = Config::from_env().expect("Failed to load config from environment");
    tracing::debug!(
        server_port = ?config.server_port,
        environment = ?config.environment,
        sample_default_limit = config.sample_default_limit,
        "Loaded configuration"
    );
    CONFIG.set(config).expect("Failed to set config");
}
