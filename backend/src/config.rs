use std::path::PathBuf;
use std::str::FromStr;

use axum::http::HeaderValue;
use thiserror::Error;

const DEFAULT_FRONTEND_URL: &str = "http://localhost:8080";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("PORT must be a number between 1 and 65535, got {0:?}")]
    InvalidPort(String),
    #[error("FRONTEND_URL is not a valid origin: {0:?}")]
    InvalidFrontendUrl(String),
    #[error("ENVIRONMENT must be development, staging or production, got {0:?}")]
    UnknownEnvironment(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }

    fn default_port(&self) -> u16 {
        match self {
            Environment::Staging => 3100,
            _ => 3000,
        }
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "staging" => Ok(Environment::Staging),
            "production" | "prod" => Ok(Environment::Production),
            _ => Err(ConfigError::UnknownEnvironment(s.to_string())),
        }
    }
}

/// Settings the server reads once at start-up.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub environment: Environment,
    pub port: u16,
    /// Origin allowed by the CORS layer.
    pub frontend_url: HeaderValue,
    /// Directory holding the compiled landing page (trunk's `dist`).
    pub static_dir: Option<PathBuf>,
    pub sentry_dsn: Option<String>,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let environment = match non_empty("ENVIRONMENT") {
            Some(raw) => raw.parse()?,
            None => Environment::Development,
        };
        let port = match non_empty("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .ok()
                .filter(|p| *p != 0)
                .ok_or(ConfigError::InvalidPort(raw))?,
            None => environment.default_port(),
        };
        let frontend_url = non_empty("FRONTEND_URL").unwrap_or_else(|| DEFAULT_FRONTEND_URL.to_string());
        let frontend_url = HeaderValue::from_str(frontend_url.trim_end_matches('/'))
            .map_err(|_| ConfigError::InvalidFrontendUrl(frontend_url.clone()))?;

        Ok(Self {
            environment,
            port,
            frontend_url,
            static_dir: non_empty("STATIC_DIR").map(PathBuf::from),
            sentry_dsn: non_empty("SENTRY_DSN"),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_to_development_on_port_3000() {
        let config = load(&[]).expect("config");
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.port, 3000);
        assert_eq!(config.frontend_url, "http://localhost:8080");
        assert!(config.static_dir.is_none());
        assert!(config.sentry_dsn.is_none());
    }

    #[test]
    fn staging_listens_on_3100_unless_port_is_given() {
        assert_eq!(load(&[("ENVIRONMENT", "staging")]).expect("config").port, 3100);
        let config = load(&[("ENVIRONMENT", "staging"), ("PORT", "4000")]).expect("config");
        assert_eq!(config.port, 4000);
    }

    #[test]
    fn trailing_slash_is_stripped_from_frontend_url() {
        let config = load(&[("FRONTEND_URL", "https://example.com/")]).expect("config");
        assert_eq!(config.frontend_url, "https://example.com");
    }

    #[test]
    fn empty_values_count_as_unset() {
        let config = load(&[("STATIC_DIR", ""), ("SENTRY_DSN", "  ")]).expect("config");
        assert!(config.static_dir.is_none());
        assert!(config.sentry_dsn.is_none());
    }

    #[test]
    fn rejects_bad_values() {
        assert_eq!(
            load(&[("PORT", "http")]).unwrap_err(),
            ConfigError::InvalidPort("http".to_string())
        );
        assert_eq!(
            load(&[("PORT", "0")]).unwrap_err(),
            ConfigError::InvalidPort("0".to_string())
        );
        assert_eq!(
            load(&[("ENVIRONMENT", "qa")]).unwrap_err(),
            ConfigError::UnknownEnvironment("qa".to_string())
        );
        assert!(matches!(
            load(&[("FRONTEND_URL", "http://bad\nhost")]),
            Err(ConfigError::InvalidFrontendUrl(_))
        ));
    }
}
