//! # Configuration
//!
//! Application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`SHOP_*`)
//! 2. Defaults (this file)
//!
//! Configuration is read-only after startup.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

use shop_core::Money;
use shop_db::{StoreConfig, DEFAULT_DATABASE_FILE};

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopConfig {
    /// Purchase history database file.
    /// Default: `shop.db` in the working directory
    pub database_path: PathBuf,

    /// Currency label appended to amounts on screen.
    pub currency: String,

    /// Balance the session starts with. Never negative.
    pub opening_balance: Money,
}

impl Default for ShopConfig {
    fn default() -> Self {
        ShopConfig {
            database_path: PathBuf::from(DEFAULT_DATABASE_FILE),
            currency: "RUB".to_string(),
            opening_balance: Money::zero(),
        }
    }
}

impl ShopConfig {
    /// Loads configuration from the process environment.
    ///
    /// ## Environment Variables
    /// - `SHOP_DB_PATH`: database file path
    /// - `SHOP_CURRENCY`: currency label (e.g. "RUB", "₽")
    /// - `SHOP_OPENING_BALANCE`: starting balance (e.g. "1500.50")
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Loads configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ShopConfig::default();

        if let Some(path) = lookup("SHOP_DB_PATH").filter(|p| !p.trim().is_empty()) {
            config.database_path = PathBuf::from(path);
        }

        if let Some(currency) = lookup("SHOP_CURRENCY") {
            config.currency = currency.trim().to_string();
        }

        if let Some(raw) = lookup("SHOP_OPENING_BALANCE") {
            let invalid = |reason: String| ConfigError::InvalidValue {
                var: "SHOP_OPENING_BALANCE".to_string(),
                reason,
            };
            let balance: Money = raw.parse().map_err(|e| invalid(format!("{e}")))?;
            if balance.is_negative() {
                return Err(invalid("must not be negative".to_string()));
            }
            config.opening_balance = balance;
        }

        Ok(config)
    }

    /// Purchase store configuration for this app.
    pub fn store_config(&self) -> StoreConfig {
        StoreConfig::new(&self.database_path)
    }

    /// Formats an amount for display.
    ///
    /// ```rust
    /// use shop_cli::config::ShopConfig;
    /// use shop_core::Money;
    ///
    /// let config = ShopConfig::default();
    /// assert_eq!(config.format_money(Money::from_major(500)), "500.00 RUB");
    /// ```
    pub fn format_money(&self, amount: Money) -> String {
        if self.currency.is_empty() {
            amount.to_string()
        } else {
            format!("{} {}", amount, self.currency)
        }
    }
}
