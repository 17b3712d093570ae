//! Configuration management for the contact assistant.
//!
//! This module handles loading and validating configuration from environment
//! variables. Everything has a default, so the assistant starts with no
//! environment at all; a `.env` file is honored when present.

use crate::error::{ConfigError, ConfigResult};
use crate::models::DEFAULT_HORIZON_DAYS;
use std::env;

/// Configuration for the contact assistant.
#[derive(Debug, Clone)]
pub struct Config {
    /// Inclusive number of days ahead of today the `birthdays` command
    /// looks at (default: 7)
    pub birthday_horizon_days: u32,

    /// Prompt printed before each command is read
    pub prompt: String,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `BIRTHDAY_HORIZON_DAYS`: upcoming-birthday window in days (default: 7)
    /// - `PROMPT`: REPL prompt text (default: "Enter a command: ")
    /// - `LOG_LEVEL`: logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Load .env if present; never fail or print when it is missing
        let _ = dotenvy::dotenv();

        let birthday_horizon_days =
            Self::parse_env_u32("BIRTHDAY_HORIZON_DAYS", DEFAULT_HORIZON_DAYS)?;

        if birthday_horizon_days == 0 {
            return Err(ConfigError::InvalidValue {
                var: "BIRTHDAY_HORIZON_DAYS".to_string(),
                reason: "Must be at least 1".to_string(),
            });
        }

        let prompt = env::var("PROMPT").unwrap_or_else(|_| "Enter a command: ".to_string());
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            birthday_horizon_days,
            prompt,
            log_level,
        })
    }

    /// Parse an environment variable as u32 with a default value.
    fn parse_env_u32(var_name: &str, default: u32) -> ConfigResult<u32> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            birthday_horizon_days: DEFAULT_HORIZON_DAYS,
            prompt: "Enter a command: ".to_string(),
            log_level: "error".to_string(),
        }
    }
}
