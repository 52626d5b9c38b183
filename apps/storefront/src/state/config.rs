//! # Configuration State
//!
//! Storefront configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`STOREFRONT_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use storefront_core::{INITIAL_POINTS_BALANCE, NOTICE_DISMISS_MS, POINTS_PER_CURRENCY_UNIT};
use thiserror::Error;
use tracing::warn;

/// Errors reading configuration from the environment.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a non-negative integer, got '{value}'")]
    InvalidInteger { var: &'static str, value: String },
}

/// Storefront configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Store name shown in the navigation bar
    pub store_name: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Number of decimal places for currency
    pub currency_decimals: u8,

    /// Points a new session starts with
    pub initial_points: u64,

    /// Points earned per currency unit on currency checkout
    pub points_per_currency_unit: u64,

    /// How long a notice stays visible, in milliseconds
    pub notice_dismiss_ms: u64,
}

impl Default for ConfigState {
    /// ## Default Values
    /// - Store: "Codestrive Store"
    /// - Currency: USD ($, 2 decimals)
    /// - 5000 starting points, 10 points per dollar
    /// - Notices dismissed after 3 seconds
    fn default() -> Self {
        ConfigState {
            store_name: "Codestrive Store".to_string(),
            currency_symbol: "$".to_string(),
            currency_decimals: 2,
            initial_points: INITIAL_POINTS_BALANCE,
            points_per_currency_unit: POINTS_PER_CURRENCY_UNIT,
            notice_dismiss_ms: NOTICE_DISMISS_MS,
        }
    }
}

impl ConfigState {
    /// Reads overrides from the environment.
    ///
    /// ## Environment Variables
    /// - `STOREFRONT_STORE_NAME`: Override store name
    /// - `STOREFRONT_INITIAL_POINTS`: Starting balance
    /// - `STOREFRONT_NOTICE_MS`: Notice display time
    pub fn try_from_env() -> Result<Self, ConfigError> {
        Self::try_from_lookup(|var| std::env::var(var).ok())
    }

    /// Like `try_from_env`, but falls back to defaults on a bad value.
    pub fn from_env() -> Self {
        Self::try_from_env().unwrap_or_else(|err| {
            warn!(error = %err, "Ignoring invalid configuration, using defaults");
            ConfigState::default()
        })
    }

    fn try_from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(store_name) = lookup("STOREFRONT_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Some(points) = parse_u64(&lookup, "STOREFRONT_INITIAL_POINTS")? {
            config.initial_points = points;
        }

        if let Some(ms) = parse_u64(&lookup, "STOREFRONT_NOTICE_MS")? {
            config.notice_dismiss_ms = ms;
        }

        Ok(config)
    }

    pub fn notice_dismiss_after(&self) -> Duration {
        Duration::from_millis(self.notice_dismiss_ms)
    }

    /// Formats a cent amount as a currency string.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_app::state::ConfigState;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(59_998), "$599.98");
    /// ```
    pub fn format_currency(&self, cents: i64) -> String {
        let divisor = 10_i64.pow(self.currency_decimals as u32);
        let whole = cents / divisor;
        let frac = (cents % divisor).abs();

        format!(
            "{}{}{}",
            if cents < 0 { "-" } else { "" },
            self.currency_symbol,
            if self.currency_decimals > 0 {
                format!(
                    "{}.{:0width$}",
                    whole.abs(),
                    frac,
                    width = self.currency_decimals as usize
                )
            } else {
                whole.abs().to_string()
            }
        )
    }
}

fn parse_u64<F>(lookup: &F, var: &'static str) -> Result<Option<u64>, ConfigError>
where
    F: Fn(&'static str) -> Option<String>,
{
    match lookup(var) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse::<u64>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidInteger { var, value }),
    }
}
