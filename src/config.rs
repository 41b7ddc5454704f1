//! Configuration management for the `CanWeGoYet` skill
//!
//! Settings come from the process environment, optionally seeded from a `.env`
//! file. The API keys are read under the names the skill has always used
//! (`BESTTIMEPRIVATEKEY`, `BESTTIMEPUBLICKEY`); everything else lives under the
//! `CANWEGOYET_` prefix.

use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use chrono_tz::Tz;
use reqwest::Url;
use secrecy::{ExposeSecret, SecretString};
use tracing::warn;

use crate::{Result, SkillError};

const ENV_PREFIX: &str = "CANWEGOYET_";
pub const PRIVATE_KEY_VAR: &str = "BESTTIMEPRIVATEKEY";
pub const PUBLIC_KEY_VAR: &str = "BESTTIMEPUBLICKEY";

/// Root configuration structure
#[derive(Debug, Clone)]
pub struct SkillConfig {
    /// Analytics provider settings
    pub besttime: BestTimeConfig,
    /// Inbound HTTP server settings
    pub server: ServerConfig,
    /// Logging settings
    pub logging: LoggingConfig,
    /// Timezone used to decide what "now" means
    pub timezone: Tz,
}

/// BestTime API settings
#[derive(Debug, Clone)]
pub struct BestTimeConfig {
    /// Base URL, without trailing slash
    pub base_url: String,
    /// Key sent with forecast requests
    pub api_key_private: SecretString,
    /// Key sent with quiet-hours requests
    pub api_key_public: SecretString,
    /// Request timeout in seconds
    pub timeout_seconds: u32,
}

/// Inbound server settings
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Upper bound for handling one skill request
    pub request_timeout_seconds: u32,
}

/// Logging settings
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset
    pub level: String,
    /// Log format (pretty or compact)
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Compact,
}

// Default value functions
fn default_besttime_base_url() -> String {
    "https://besttime.app/api/v1".to_string()
}

fn default_http_timeout() -> u32 {
    10
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_request_timeout() -> u32 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for SkillConfig {
    fn default() -> Self {
        Self {
            besttime: BestTimeConfig {
                base_url: default_besttime_base_url(),
                api_key_private: SecretString::from(String::new()),
                api_key_public: SecretString::from(String::new()),
                timeout_seconds: default_http_timeout(),
            },
            server: ServerConfig {
                host: default_host(),
                port: default_port(),
                request_timeout_seconds: default_request_timeout(),
            },
            logging: LoggingConfig {
                level: default_log_level(),
                format: LogFormat::Compact,
            },
            timezone: Tz::UTC,
        }
    }
}

impl SkillConfig {
    /// Load configuration from `.env` (if present) and the process environment
    pub fn load() -> Result<Self> {
        // A missing .env file is the normal case in deployment
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let prefixed = |name: &str| {
            lookup(&format!("{ENV_PREFIX}{name}")).filter(|value| !value.trim().is_empty())
        };

        let mut config = Self::default();

        if let Some(key) = lookup(PRIVATE_KEY_VAR) {
            config.besttime.api_key_private = SecretString::from(key);
        }
        if let Some(key) = lookup(PUBLIC_KEY_VAR) {
            config.besttime.api_key_public = SecretString::from(key);
        }
        if let Some(url) = prefixed("BESTTIME_BASE_URL") {
            config.besttime.base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(timeout) = prefixed("HTTP_TIMEOUT_SECONDS") {
            config.besttime.timeout_seconds = parse_number("HTTP_TIMEOUT_SECONDS", &timeout)?;
        }
        if let Some(host) = prefixed("HOST") {
            config.server.host = host;
        }
        if let Some(port) = prefixed("PORT") {
            config.server.port = parse_number("PORT", &port)?;
        }
        if let Some(timeout) = prefixed("REQUEST_TIMEOUT_SECONDS") {
            config.server.request_timeout_seconds =
                parse_number("REQUEST_TIMEOUT_SECONDS", &timeout)?;
        }
        if let Some(zone) = prefixed("TIMEZONE") {
            config.timezone = zone.trim().parse::<Tz>().map_err(|_| {
                SkillError::config(format!("Unknown timezone '{zone}' in {ENV_PREFIX}TIMEZONE"))
            })?;
        }
        if let Some(level) = prefixed("LOG_LEVEL") {
            config.logging.level = level;
        }
        if let Some(format) = prefixed("LOG_FORMAT") {
            config.logging.format = match format.trim().to_ascii_lowercase().as_str() {
                "pretty" => LogFormat::Pretty,
                "compact" => LogFormat::Compact,
                other => {
                    return Err(SkillError::config(format!(
                        "Invalid log format '{other}'. Must be one of: pretty, compact"
                    )));
                }
            };
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration settings.
    ///
    /// Missing API keys are not an error; the provider rejects the first call.
    pub fn validate(&self) -> Result<()> {
        Url::parse(&self.besttime.base_url).map_err(|e| {
            SkillError::config(format!(
                "Invalid BestTime base URL '{}': {e}",
                self.besttime.base_url
            ))
        })?;

        if self.besttime.timeout_seconds == 0 {
            return Err(SkillError::config("HTTP timeout must be greater than 0"));
        }
        if self.server.request_timeout_seconds == 0 {
            return Err(SkillError::config("Request timeout must be greater than 0"));
        }

        self.socket_addr()?;
        Ok(())
    }

    /// Log a warning for each API key that is not set
    pub fn warn_missing_keys(&self) {
        if self.besttime.api_key_private.expose_secret().is_empty() {
            warn!("{PRIVATE_KEY_VAR} is not set, forecast requests will be rejected");
        }
        if self.besttime.api_key_public.expose_secret().is_empty() {
            warn!("{PUBLIC_KEY_VAR} is not set, quiet-hours requests will be rejected");
        }
    }

    /// Address the HTTP server binds to
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| {
                SkillError::config(format!(
                    "Invalid bind address {}:{}: {e}",
                    self.server.host, self.server.port
                ))
            })
    }
}

impl BestTimeConfig {
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds.into())
    }
}

fn parse_number<T: std::str::FromStr>(name: &str, value: &str) -> Result<T> {
    value.trim().parse::<T>().map_err(|_| {
        SkillError::config(format!("{ENV_PREFIX}{name} must be a number, got '{value}'"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = SkillConfig::default();
        assert_eq!(config.besttime.base_url, "https://besttime.app/api/v1");
        assert_eq!(config.besttime.timeout_seconds, 10);
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.timezone, Tz::UTC);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_keys_are_read_from_legacy_names() {
        let config = SkillConfig::from_lookup(lookup_from(&[
            ("BESTTIMEPRIVATEKEY", "pri_abc"),
            ("BESTTIMEPUBLICKEY", "pub_def"),
        ]))
        .unwrap();

        assert_eq!(config.besttime.api_key_private.expose_secret(), "pri_abc");
        assert_eq!(config.besttime.api_key_public.expose_secret(), "pub_def");
    }

    #[test]
    fn test_missing_keys_are_not_fatal() {
        let config = SkillConfig::from_lookup(lookup_from(&[])).unwrap();
        assert!(config.besttime.api_key_private.expose_secret().is_empty());
    }

    #[test]
    fn test_prefixed_overrides() {
        let config = SkillConfig::from_lookup(lookup_from(&[
            ("CANWEGOYET_BESTTIME_BASE_URL", "http://127.0.0.1:9000/api/v1/"),
            ("CANWEGOYET_PORT", "3000"),
            ("CANWEGOYET_TIMEZONE", "America/New_York"),
            ("CANWEGOYET_LOG_FORMAT", "Pretty"),
        ]))
        .unwrap();

        assert_eq!(config.besttime.base_url, "http://127.0.0.1:9000/api/v1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.timezone, chrono_tz::America::New_York);
        assert_eq!(config.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn test_invalid_values_are_config_errors() {
        let bad_port = SkillConfig::from_lookup(lookup_from(&[("CANWEGOYET_PORT", "eighty")]));
        assert!(matches!(bad_port, Err(SkillError::Config { .. })));

        let bad_zone =
            SkillConfig::from_lookup(lookup_from(&[("CANWEGOYET_TIMEZONE", "Mars/Olympus")]));
        assert!(matches!(bad_zone, Err(SkillError::Config { .. })));

        let zero_timeout =
            SkillConfig::from_lookup(lookup_from(&[("CANWEGOYET_HTTP_TIMEOUT_SECONDS", "0")]));
        assert!(matches!(zero_timeout, Err(SkillError::Config { .. })));
    }

    #[test]
    fn test_secrets_are_redacted_in_debug_output() {
        let config =
            SkillConfig::from_lookup(lookup_from(&[("BESTTIMEPRIVATEKEY", "pri_secret")])).unwrap();
        assert!(!format!("{config:?}").contains("pri_secret"));
    }
}
