use std::time::Duration;

use crate::constants::{
    CORS_ALLOWED_ORIGINS, DB_CONNECT_RETRIES, MAX_BODY_SIZE_BYTES, RATE_LIMIT_BURST,
    RATE_LIMIT_PER_MINUTE, REQUEST_TIMEOUT_SECS, SHUTDOWN_TIMEOUT_SECS, USER_API_PORT,
};

#[derive(Debug, Clone, PartialEq)]
pub struct MiddlewareConfig {
    pub port: u16,
    pub db_connect_retries: u32,
    pub rate_limit_per_minute: u32,
    pub rate_limit_burst: u32,
    pub request_timeout: Duration,
    pub max_body_size: usize,
    pub shutdown_timeout: Duration,
    pub cors_allowed_origins: Vec<String>,
}

impl Default for MiddlewareConfig {
    fn default() -> Self {
        Self {
            port: 3333,
            db_connect_retries: 10,
            rate_limit_per_minute: 100,
            rate_limit_burst: 150,
            request_timeout: Duration::from_secs(30),
            max_body_size: 1_048_576, // 1MB
            shutdown_timeout: Duration::from_secs(30),
            cors_allowed_origins: vec!["*".to_string()],
        }
    }
}

impl MiddlewareConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Unset or unparsable values fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let default = Self::default();
        fn parse_with<T: std::str::FromStr>(
            lookup: &impl Fn(&str) -> Option<String>,
            key: &str,
        ) -> Option<T> {
            lookup(key).and_then(|v| v.trim().parse().ok())
        }

        let request_timeout_secs: u64 =
            parse_with(&lookup, REQUEST_TIMEOUT_SECS).unwrap_or(default.request_timeout.as_secs());
        let shutdown_timeout_secs: u64 =
            parse_with(&lookup, SHUTDOWN_TIMEOUT_SECS).unwrap_or(default.shutdown_timeout.as_secs());

        let cors_allowed_origins = lookup(CORS_ALLOWED_ORIGINS)
            .map(|v| {
                v.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect::<Vec<_>>()
            })
            .filter(|origins| !origins.is_empty())
            .unwrap_or(default.cors_allowed_origins);

        Self {
            port: parse_with(&lookup, USER_API_PORT).unwrap_or(default.port),
            db_connect_retries: parse_with(&lookup, DB_CONNECT_RETRIES).unwrap_or(default.db_connect_retries),
            rate_limit_per_minute: parse_with(&lookup, RATE_LIMIT_PER_MINUTE)
                .unwrap_or(default.rate_limit_per_minute),
            rate_limit_burst: parse_with(&lookup, RATE_LIMIT_BURST).unwrap_or(default.rate_limit_burst),
            request_timeout: Duration::from_secs(request_timeout_secs),
            max_body_size: parse_with(&lookup, MAX_BODY_SIZE_BYTES).unwrap_or(default.max_body_size),
            shutdown_timeout: Duration::from_secs(shutdown_timeout_secs),
            cors_allowed_origins,
        }
    }

    pub fn allows_any_origin(&self) -> bool {
        self.cors_allowed_origins.iter().any(|o| o == "*")
    }

    /// Milliseconds between replenished rate limit tokens.
    pub fn replenish_interval_ms(&self) -> u64 {
        60_000 / u64::from(self.rate_limit_per_minute.max(1))
    }
}
