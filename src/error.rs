use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReporterError {
    #[error("No Strava access token configured (set STRAVA_ACCESS_TOKEN or strava.access_token)")]
    MissingToken,
    #[error("Invalid value '{value}' for setting '{key}'")]
    InvalidSetting { key: String, value: String },
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Invalid API URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("Access token rejected by Strava: {0}")]
    Unauthorized(String),
    #[error("Strava rate limit exceeded")]
    RateLimited,
    #[error("Strava request failed with HTTP {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Output error: {0}")]
    Io(#[from] std::io::Error)
}

impl ReporterError {
    pub fn invalid_setting(key: &str, value: impl ToString) -> Self {
        Self::InvalidSetting { key: key.to_string(), value: value.to_string() }
    }
}
