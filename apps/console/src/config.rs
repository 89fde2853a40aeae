//! Console configuration.
//!
//! Configuration is loaded from environment variables with fallback to defaults.
//!
//! | Variable                 | Default  | Meaning                           |
//! |--------------------------|----------|-----------------------------------|
//! | `COMANDA_RECEIPT_FORMAT` | `text`   | `text` or `json` receipt          |
//! | `COMANDA_ORDER_NUMBER`   | random   | Fixed order number for the run    |
//! | `RUST_LOG`               | `warn`   | Log filter (see `init_tracing`)   |

use comanda_core::OrderNumber;
use serde::Serialize;
use std::env;
use std::str::FromStr;

pub const RECEIPT_FORMAT_VAR: &str = "COMANDA_RECEIPT_FORMAT";
pub const ORDER_NUMBER_VAR: &str = "COMANDA_ORDER_NUMBER";

/// How the final receipt is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReceiptFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for ReceiptFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(ReceiptFormat::Text),
            "json" => Ok(ReceiptFormat::Json),
            _ => Err(()),
        }
    }
}

/// Console configuration.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConsoleConfig {
    /// Receipt output format
    pub receipt_format: ReceiptFormat,

    /// Fixed order number; drawn at random when absent
    pub order_number: Option<OrderNumber>,
}

impl ConsoleConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let receipt_format = match lookup(RECEIPT_FORMAT_VAR) {
            Some(value) => value
                .parse()
                .map_err(|_| ConfigError::invalid(RECEIPT_FORMAT_VAR, &value))?,
            None => ReceiptFormat::default(),
        };

        let order_number = match lookup(ORDER_NUMBER_VAR) {
            Some(value) => Some(
                value
                    .trim()
                    .parse()
                    .map(OrderNumber::new)
                    .map_err(|_| ConfigError::invalid(ORDER_NUMBER_VAR, &value))?,
            ),
            None => None,
        };

        Ok(ConsoleConfig {
            receipt_format,
            order_number,
        })
    }

    /// The configured order number, or a fresh random one.
    pub fn order_number(&self) -> OrderNumber {
        self.order_number.unwrap_or_else(OrderNumber::random)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: String, value: String },
}

impl ConfigError {
    fn invalid(key: &str, value: &str) -> Self {
        ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        }
    }
}
