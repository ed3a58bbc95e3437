use std::time::Duration;

use crate::errors::ServerError;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_SELECTION_TIMEOUT_MS: u64 = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeMode {
    Production,
    Development,
}

impl RuntimeMode {
    /// Anything other than `production` counts as development.
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("production") => RuntimeMode::Production,
            _ => RuntimeMode::Development,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Left empty when unset: the server still starts and every database
    /// operation reports the missing setting instead.
    pub database_url: Option<String>,
    pub mode: RuntimeMode,
    pub port: u16,
    pub selection_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ServerError> {
        let database_url = std::env::var("DATABASE_URL")
            .ok()
            .filter(|url| !url.trim().is_empty());
        let mode = RuntimeMode::parse(std::env::var("APP_ENV").ok().as_deref());
        let port = match std::env::var("PORT") {
            Ok(port) => port.parse::<u16>()?,
            Err(_) => DEFAULT_PORT,
        };
        let selection_timeout = match std::env::var("DATABASE_SERVER_SELECTION_TIMEOUT_MS") {
            Ok(ms) => Duration::from_millis(ms.parse::<u64>()?),
            Err(_) => Duration::from_millis(DEFAULT_SELECTION_TIMEOUT_MS),
        };

        Ok(Config {
            database_url,
            mode,
            port,
            selection_timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_production_disables_fallback() {
        assert_eq!(RuntimeMode::parse(Some("production")), RuntimeMode::Production);
        assert_eq!(RuntimeMode::parse(Some(" Production ")), RuntimeMode::Production);
        assert_eq!(RuntimeMode::parse(Some("staging")), RuntimeMode::Development);
        assert_eq!(RuntimeMode::parse(None), RuntimeMode::Development);
    }
}
