use std::{str::FromStr, time::Duration};

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_RATE_LIMIT_MAX_REQUESTS: u32 = 100;
pub const DEFAULT_RATE_LIMIT_WINDOW_SECS: u64 = 15 * 60;
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} environment variable must be set")]
    Missing(&'static str),

    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// When a burn-after-read paste gets marked deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BurnPolicy {
    /// Burn once a read observes at least one earlier read, so the paste is
    /// served twice before it disappears. This is how existing deployments behave.
    #[default]
    SecondRead,
    /// Burn on the first successful read.
    FirstRead,
}

impl BurnPolicy {
    /// Minimum pre-increment view count at which a read burns the paste.
    pub fn views_threshold(self) -> u64 {
        match self {
            BurnPolicy::SecondRead => 1,
            BurnPolicy::FirstRead => 0,
        }
    }

    pub fn burns_at(self, views_before_read: u64) -> bool {
        views_before_read >= self.views_threshold()
    }
}

impl FromStr for BurnPolicy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "second-read" | "second_read" => Ok(BurnPolicy::SecondRead),
            "first-read" | "first_read" => Ok(BurnPolicy::FirstRead),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
    pub max_requests: u32,
    pub window: Duration,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: DEFAULT_RATE_LIMIT_MAX_REQUESTS,
            window: Duration::from_secs(DEFAULT_RATE_LIMIT_WINDOW_SECS),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub database_url: String,
    pub port: u16,
    pub cors_allowed_origins: Option<Vec<String>>,
    pub rate_limit: RateLimitConfig,
    pub burn_policy: BurnPolicy,
    pub db_max_connections: u32,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let port = parse_or(&lookup, "PORT", DEFAULT_PORT)?;

        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS").map(|origins| {
            origins
                .split(',')
                .map(|origin| origin.trim().to_string())
                .filter(|origin| !origin.is_empty())
                .collect::<Vec<_>>()
        });

        let max_requests = parse_or(
            &lookup,
            "RATE_LIMIT_MAX_REQUESTS",
            DEFAULT_RATE_LIMIT_MAX_REQUESTS,
        )?;
        let window_secs: u64 = parse_or(
            &lookup,
            "RATE_LIMIT_WINDOW_SECS",
            DEFAULT_RATE_LIMIT_WINDOW_SECS,
        )?;
        if window_secs == 0 {
            return Err(ConfigError::Invalid {
                key: "RATE_LIMIT_WINDOW_SECS",
                value: "0".to_string(),
            });
        }

        let burn_policy = match lookup("BURN_POLICY") {
            Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
                key: "BURN_POLICY",
                value,
            })?,
            None => BurnPolicy::default(),
        };

        let db_max_connections =
            parse_or(&lookup, "DB_MAX_CONNECTIONS", DEFAULT_DB_MAX_CONNECTIONS)?;

        Ok(Self {
            database_url,
            port,
            cors_allowed_origins,
            rate_limit: RateLimitConfig {
                max_requests,
                window: Duration::from_secs(window_secs),
            },
            burn_policy,
            db_max_connections,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&'static str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&'static str, &str)]) -> Result<ServerConfig, ConfigError> {
        let env: HashMap<&'static str, String> =
            pairs.iter().map(|(k, v)| (*k, v.to_string())).collect();
        ServerConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_only_database_url_is_set() {
        let config = config_from(&[("DATABASE_URL", "postgres://localhost/pastes")]).unwrap();
        assert_eq!(config.port, 3001);
        assert_eq!(config.cors_allowed_origins, None);
        assert_eq!(config.rate_limit, RateLimitConfig::default());
        assert_eq!(config.rate_limit.window, Duration::from_secs(900));
        assert_eq!(config.burn_policy, BurnPolicy::SecondRead);
        assert_eq!(config.db_max_connections, 5);
    }

    #[test]
    fn database_url_is_required() {
        assert_eq!(config_from(&[]), Err(ConfigError::Missing("DATABASE_URL")));
        assert_eq!(
            config_from(&[("DATABASE_URL", "  ")]),
            Err(ConfigError::Missing("DATABASE_URL"))
        );
    }

    #[test]
    fn overrides_are_parsed() {
        let config = config_from(&[
            ("DATABASE_URL", "postgres://db/pastes"),
            ("PORT", "8080"),
            ("CORS_ALLOWED_ORIGINS", "http://a.test, http://b.test,"),
            ("RATE_LIMIT_MAX_REQUESTS", "5"),
            ("RATE_LIMIT_WINDOW_SECS", "60"),
            ("BURN_POLICY", "first-read"),
        ])
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(
            config.cors_allowed_origins,
            Some(vec!["http://a.test".to_string(), "http://b.test".to_string()])
        );
        assert_eq!(config.rate_limit.max_requests, 5);
        assert_eq!(config.rate_limit.window, Duration::from_secs(60));
        assert_eq!(config.burn_policy, BurnPolicy::FirstRead);
    }

    #[test]
    fn invalid_values_are_reported() {
        let err = config_from(&[("DATABASE_URL", "postgres://db"), ("PORT", "http")]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid {
                key: "PORT",
                value: "http".to_string()
            }
        );

        let err =
            config_from(&[("DATABASE_URL", "postgres://db"), ("BURN_POLICY", "never")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "BURN_POLICY", .. }));

        let err = config_from(&[("DATABASE_URL", "postgres://db"), ("RATE_LIMIT_WINDOW_SECS", "0")])
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "RATE_LIMIT_WINDOW_SECS", .. }));
    }

    #[test]
    fn burn_policy_thresholds() {
        assert!(!BurnPolicy::SecondRead.burns_at(0));
        assert!(BurnPolicy::SecondRead.burns_at(1));
        assert!(BurnPolicy::FirstRead.burns_at(0));
    }
}
