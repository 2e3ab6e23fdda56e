use std::time::Duration;

#[cfg(feature = "serde-derive")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration for a playback [`Controller`](crate::Controller).
///
/// With the `serde-derive` feature, a config (de)serializes as
/// `{ "cadence_ms": 800 }` and is validated on the way in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde-derive", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde-derive",
    serde(try_from = "RawConfig", into = "RawConfig")
)]
pub struct Config {
    cadence: Duration,
}

/// Errors that can occur when validating a playback config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("cadence must be greater than zero")]
    ZeroCadence,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cadence: Duration::from_millis(800),
        }
    }
}

impl Config {
    /// Creates a new config with a validated cadence.
    ///
    /// # Errors
    ///
    /// Returns an error if `cadence` is zero.
    pub fn new(cadence: Duration) -> Result<Self, ConfigError> {
        if cadence.is_zero() {
            return Err(ConfigError::ZeroCadence);
        }
        Ok(Self { cadence })
    }

    /// Returns the time between two ticks.
    #[must_use]
    pub fn cadence(&self) -> Duration {
        self.cadence
    }
}

#[cfg(feature = "serde-derive")]
#[derive(Serialize, Deserialize)]
struct RawConfig {
    cadence_ms: u64,
}

#[cfg(feature = "serde-derive")]
impl TryFrom<RawConfig> for Config {
    type Error = ConfigError;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        Config::new(Duration::from_millis(raw.cadence_ms))
    }
}

#[cfg(feature = "serde-derive")]
impl From<Config> for RawConfig {
    fn from(config: Config) -> Self {
        Self {
            cadence_ms: u64::try_from(config.cadence.as_millis()).unwrap_or(u64::MAX),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_cadence() {
        assert_eq!(Config::default().cadence(), Duration::from_millis(800));
    }

    #[test]
    fn rejects_zero_cadence() {
        assert_eq!(Config::new(Duration::ZERO), Err(ConfigError::ZeroCadence));
        assert_eq!(
            ConfigError::ZeroCadence.to_string(),
            "cadence must be greater than zero"
        );
    }

    #[test]
    fn keeps_valid_cadence() {
        let config = Config::new(Duration::from_millis(500)).unwrap();
        assert_eq!(config.cadence(), Duration::from_millis(500));
    }
}
