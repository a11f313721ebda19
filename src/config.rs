use std::env;
use config::{Config, ConfigError, File};
use log::debug;
use crate::error::ReporterError;
use crate::oauth::token::Bearer;
use crate::util::iso8601;

pub const CONFIG_YAML: &str = "conf/application.yaml";

pub const DEFAULT_API_URL: &str = "https://www.strava.com/api/v3";
pub const DEFAULT_PER_PAGE: u16 = 200;

// Upper bound accepted by the Strava API
const MAX_PER_PAGE: i64 = 200;

const ENV_ACCESS_TOKEN: &str = "STRAVA_ACCESS_TOKEN";
const ENV_API_URL: &str = "STRAVA_API_URL";

/// Settings supplied at startup. The access token never lives in source code.
#[derive(Clone, Debug)]
pub struct ReporterConfig {
    pub api_url: String,
    pub bearer: Bearer,
    pub per_page: u16,
    pub before: Option<i64>, // Epoch seconds
    pub after: Option<i64>
}

impl ReporterConfig {
    pub fn new(api_url: &str, bearer: Bearer) -> Self {
        Self {
            api_url: api_url.to_string(),
            bearer,
            per_page: DEFAULT_PER_PAGE,
            before: None,
            after: None
        }
    }

    /// Reads the optional config file and overlays the environment.
    pub fn load(path: &str) -> Result<Self, ReporterError> {
        let config = Config::builder()
            .add_source(File::with_name(path).required(false))
            .build()?;
        Self::from_sources(&config, |key| env::var(key).ok())
    }

    /// Environment precedes config.
    pub fn from_sources<E>(config: &Config, env: E) -> Result<Self, ReporterError>
        where E: Fn(&str) -> Option<String> {
        let token = env(ENV_ACCESS_TOKEN)
            .filter(|token| !token.trim().is_empty())
            .or(optional(config.get_string("strava.access_token"))?)
            .ok_or(ReporterError::MissingToken)?;
        let bearer = Bearer::from_access_token(&token).ok_or(ReporterError::MissingToken)?;

        let api_url = env(ENV_API_URL)
            .or(optional(config.get_string("strava.api_url"))?)
            .unwrap_or(DEFAULT_API_URL.to_string());

        let per_page = match optional(config.get_int("strava.activities_per_page"))? {
            Some(value) if (1..=MAX_PER_PAGE).contains(&value) => value as u16,
            Some(value) => return Err(ReporterError::invalid_setting("strava.activities_per_page", value)),
            None => DEFAULT_PER_PAGE
        };

        let before = timestamp_setting(config, "strava.before")?;
        let after = timestamp_setting(config, "strava.after")?;

        debug!("Using API {api_url} with {per_page} activities per page");
        Ok(Self { api_url, bearer, per_page, before, after })
    }
}

fn timestamp_setting(config: &Config, key: &str) -> Result<Option<i64>, ReporterError> {
    match optional(config.get_string(key))? {
        Some(value) => iso8601::string_to_secs(&value)
            .map(Some)
            .ok_or_else(|| ReporterError::invalid_setting(key, value)),
        None => Ok(None)
    }
}

fn optional<T>(result: Result<T, ConfigError>) -> Result<Option<T>, ConfigError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(ConfigError::NotFound(_)) => Ok(None),
        Err(error) => Err(error)
    }
}
