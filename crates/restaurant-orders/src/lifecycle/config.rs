//! Runtime configuration, read from the environment.

use thiserror::Error;

/// Channel capacity of every actor's request queue.
pub const CHANNEL_BUFFER_ENV: &str = "RESTAURANT_CHANNEL_BUFFER";
/// Whether to load the sample menu, customers and order at startup.
pub const SAMPLE_DATA_ENV: &str = "RESTAURANT_SAMPLE_DATA";

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemConfig {
    pub channel_buffer: usize,
    pub load_sample_data: bool,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            channel_buffer: 32,
            load_sample_data: false,
        }
    }
}

impl SystemConfig {
    /// Reads [`CHANNEL_BUFFER_ENV`] and [`SAMPLE_DATA_ENV`]; unset keys keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(CHANNEL_BUFFER_ENV) {
            config.channel_buffer = match value.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: CHANNEL_BUFFER_ENV,
                        value,
                    })
                }
            };
        }

        if let Some(value) = lookup(SAMPLE_DATA_ENV) {
            config.load_sample_data = match value.trim() {
                "true" | "1" => true,
                "false" | "0" => false,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: SAMPLE_DATA_ENV,
                        value,
                    })
                }
            };
        }

        Ok(config)
    }
}
