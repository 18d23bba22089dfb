// src/common/config.rs
//! Runtime configuration loaded from environment variables

use std::env;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{var} must be a non-negative integer, got '{value}'")]
    InvalidNumber { var: &'static str, value: String },

    #[error("{var} must be between {min} and {max}, got {value}")]
    OutOfRange {
        var: &'static str,
        value: u64,
        min: u64,
        max: u64,
    },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub fetch_timeout: Duration,
    pub match_threshold: u8,
    /// `None` leaves DNS lookups bounded only by the system resolver
    pub dns_timeout: Option<Duration>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            fetch_timeout: Duration::from_secs(5),
            match_threshold: 60,
            dns_timeout: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup, falling back to defaults for unset keys
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match read_number(&lookup, "PORT")? {
            Some(value) => range_checked("PORT", value, 1, u16::MAX as u64)? as u16,
            None => defaults.port,
        };

        let fetch_timeout = match read_number(&lookup, "FETCH_TIMEOUT_SECS")? {
            Some(secs) => Duration::from_secs(range_checked("FETCH_TIMEOUT_SECS", secs, 1, 300)?),
            None => defaults.fetch_timeout,
        };

        let match_threshold = match read_number(&lookup, "MATCH_THRESHOLD")? {
            Some(value) => range_checked("MATCH_THRESHOLD", value, 0, 100)? as u8,
            None => defaults.match_threshold,
        };

        let dns_timeout = read_number(&lookup, "DNS_TIMEOUT_SECS")?
            .map(|secs| range_checked("DNS_TIMEOUT_SECS", secs, 1, 300))
            .transpose()?
            .map(Duration::from_secs);

        Ok(Self {
            port,
            fetch_timeout,
            match_threshold,
            dns_timeout,
        })
    }
}

fn read_number<F>(lookup: &F, var: &'static str) -> Result<Option<u64>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<u64>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidNumber { var, value: raw }),
        _ => Ok(None),
    }
}

fn range_checked(var: &'static str, value: u64, min: u64, max: u64) -> Result<u64, ConfigError> {
    if value < min || value > max {
        return Err(ConfigError::OutOfRange {
            var,
            value,
            min,
            max,
        });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.fetch_timeout, Duration::from_secs(5));
        assert_eq!(config.match_threshold, 60);
        assert!(config.dns_timeout.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("PORT", "3000"),
            ("FETCH_TIMEOUT_SECS", "10"),
            ("MATCH_THRESHOLD", "75"),
            ("DNS_TIMEOUT_SECS", "3"),
        ]))
        .unwrap();

        assert_eq!(config.port, 3000);
        assert_eq!(config.fetch_timeout, Duration::from_secs(10));
        assert_eq!(config.match_threshold, 75);
        assert_eq!(config.dns_timeout, Some(Duration::from_secs(3)));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = AppConfig::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidNumber { var: "PORT", .. }));

        let err = AppConfig::from_lookup(lookup_from(&[("MATCH_THRESHOLD", "101")])).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::OutOfRange {
                var: "MATCH_THRESHOLD",
                ..
            }
        ));
    }

    #[test]
    fn test_blank_values_use_defaults() {
        let config = AppConfig::from_lookup(lookup_from(&[("PORT", "  ")])).unwrap();
        assert_eq!(config.port, 8080);
    }
}
