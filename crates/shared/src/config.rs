use std::env;
use std::str::FromStr;

use chrono::Duration;
use thiserror::Error;

use crate::config_env::{optional_trimmed_env, parse_u64_env, require_env};
use crate::session_memo::{
    DEFAULT_SESSION_KEY_PREFIX, DEFAULT_SESSION_TTL_SECONDS, RedisSessionMemoStore,
    SessionMemoError,
};

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";
pub const DEFAULT_CORS_ALLOWED_ORIGIN: &str = "http://localhost:5173";
pub const MAX_SESSION_TTL_SECONDS: u64 = 7 * 24 * 3_600;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStoreBackend {
    Memory,
    Redis,
}

impl FromStr for SessionStoreBackend {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "memory" | "in-memory" | "in_memory" => Ok(Self::Memory),
            "redis" => Ok(Self::Redis),
            _ => Err(format!(
                "SESSION_STORE must be one of memory, redis; got '{}'",
                raw
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "text" | "pretty" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("LOG_FORMAT must be one of text, json; got '{}'", raw)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub bind_addr: String,
    pub cors_allowed_origin: String,
    pub log_format: LogFormat,
    pub session_ttl_seconds: u64,
    pub session_store: SessionStoreBackend,
    pub redis_url: Option<String>,
    pub session_key_prefix: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required env var {0}")]
    MissingVar(String),
    #[error("invalid integer in env var {0}")]
    ParseInt(String),
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl ApiConfig {
    /// Reads configuration from the process environment. A `.env` file, if
    /// present, is loaded first and never overrides variables already set.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();

        let session_store = env::var("SESSION_STORE")
            .unwrap_or_else(|_| "memory".to_string())
            .parse::<SessionStoreBackend>()
            .map_err(ConfigError::InvalidConfiguration)?;
        let redis_url = match session_store {
            SessionStoreBackend::Redis => Some(require_env("REDIS_URL")?),
            SessionStoreBackend::Memory => optional_trimmed_env("REDIS_URL"),
        };

        let config = Self {
            bind_addr: env::var("API_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            cors_allowed_origin: optional_trimmed_env("CORS_ALLOWED_ORIGIN")
                .unwrap_or_else(|| DEFAULT_CORS_ALLOWED_ORIGIN.to_string()),
            log_format: env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "text".to_string())
                .parse::<LogFormat>()
                .map_err(ConfigError::InvalidConfiguration)?,
            session_ttl_seconds: parse_u64_env("SESSION_TTL_SECONDS", DEFAULT_SESSION_TTL_SECONDS)?,
            session_store,
            redis_url,
            session_key_prefix: optional_trimmed_env("SESSION_KEY_PREFIX")
                .unwrap_or_else(|| DEFAULT_SESSION_KEY_PREFIX.to_string()),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.session_ttl_seconds == 0 {
            return Err(ConfigError::InvalidConfiguration(
                "SESSION_TTL_SECONDS must be greater than 0".to_string(),
            ));
        }
        if self.session_ttl_seconds > MAX_SESSION_TTL_SECONDS {
            return Err(ConfigError::InvalidConfiguration(format!(
                "SESSION_TTL_SECONDS must be at most {MAX_SESSION_TTL_SECONDS}"
            )));
        }
        if !self.cors_allowed_origin.starts_with("http://")
            && !self.cors_allowed_origin.starts_with("https://")
        {
            return Err(ConfigError::InvalidConfiguration(format!(
                "CORS_ALLOWED_ORIGIN must be an http(s) origin; got '{}'",
                self.cors_allowed_origin
            )));
        }
        if self.session_store == SessionStoreBackend::Redis && self.redis_url.is_none() {
            return Err(ConfigError::MissingVar("REDIS_URL".to_string()));
        }
        Ok(())
    }

    pub fn session_ttl(&self) -> Duration {
        Duration::seconds(self.session_ttl_seconds.min(MAX_SESSION_TTL_SECONDS) as i64)
    }

    pub async fn connect_redis_store(
        &self,
    ) -> Result<Option<RedisSessionMemoStore>, SessionMemoError> {
        let (SessionStoreBackend::Redis, Some(redis_url)) = (self.session_store, &self.redis_url)
        else {
            return Ok(None);
        };

        RedisSessionMemoStore::connect(redis_url, &self.session_key_prefix, self.session_ttl())
            .await
            .map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::{ApiConfig, ConfigError, LogFormat, SessionStoreBackend};

    fn config() -> ApiConfig {
        ApiConfig {
            bind_addr: "127.0.0.1:8000".to_string(),
            cors_allowed_origin: "http://localhost:5173".to_string(),
            log_format: LogFormat::Text,
            session_ttl_seconds: 3_600,
            session_store: SessionStoreBackend::Memory,
            redis_url: None,
            session_key_prefix: "petcoach:session:v1".to_string(),
        }
    }

    #[test]
    fn parses_session_store_backend() {
        assert_eq!(
            " Redis ".parse::<SessionStoreBackend>(),
            Ok(SessionStoreBackend::Redis)
        );
        assert_eq!(
            "in-memory".parse::<SessionStoreBackend>(),
            Ok(SessionStoreBackend::Memory)
        );
        assert!("postgres".parse::<SessionStoreBackend>().is_err());
    }

    #[test]
    fn parses_log_format() {
        assert_eq!("JSON".parse::<LogFormat>(), Ok(LogFormat::Json));
        assert!("xml".parse::<LogFormat>().is_err());
    }

    #[test]
    fn default_config_is_valid() {
        let config = config();
        config.validate().expect("default config should validate");
        assert_eq!(config.session_ttl().num_minutes(), 60);
    }

    #[test]
    fn rejects_zero_ttl_and_non_http_origin() {
        let mut zero_ttl = config();
        zero_ttl.session_ttl_seconds = 0;
        assert!(matches!(
            zero_ttl.validate(),
            Err(ConfigError::InvalidConfiguration(message)) if message.contains("SESSION_TTL_SECONDS")
        ));

        let mut huge_ttl = config();
        huge_ttl.session_ttl_seconds = u64::MAX;
        assert!(huge_ttl.validate().is_err());
        assert_eq!(huge_ttl.session_ttl().num_days(), 7);

        let mut bad_origin = config();
        bad_origin.cors_allowed_origin = "localhost:5173".to_string();
        assert!(bad_origin.validate().is_err());
    }

    #[test]
    fn redis_backend_requires_url() {
        let mut redis = config();
        redis.session_store = SessionStoreBackend::Redis;
        assert!(matches!(
            redis.validate(),
            Err(ConfigError::MissingVar(name)) if name == "REDIS_URL"
        ));

        redis.redis_url = Some("redis://127.0.0.1:6379".to_string());
        redis.validate().expect("redis config should validate");
    }
}
