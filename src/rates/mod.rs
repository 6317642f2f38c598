//! Currency rate data: row model, USD-relative rate book, file loading.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

/// A single currency entry: code plus its USD-relative rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyRow {
    pub code: String,
    pub rate: f64,
}

/// Lookup table from currency code to USD-relative rate.
#[derive(Debug, Clone, Default)]
pub struct RateBook {
    rates: HashMap<String, f64>,
}

impl RateBook {
    pub fn from_rows(rows: &[CurrencyRow]) -> Self {
        Self {
            rates: rows
                .iter()
                .map(|row| (row.code.clone(), row.rate))
                .collect(),
        }
    }

    /// Returns the rate for `code`, or `None` if the code is unknown.
    pub fn get(&self, code: &str) -> Option<f64> {
        self.rates.get(code).copied()
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

/// Error types that can occur while loading a rates file.
#[derive(Debug, Clone)]
pub enum RatesError {
    /// I/O error while reading the file.
    Io(String),
    /// Error parsing the file contents.
    Parse(String),
}

impl std::fmt::Display for RatesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RatesError::Io(msg) => write!(f, "I/O error: {}", msg),
            RatesError::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for RatesError {}

/// Loads an ordered currency list from a JSON file.
///
/// The expected format is an array of `{"code": "...", "rate": ...}` objects;
/// order is preserved because it defines the table's original row order.
pub fn load_rates(path: &Path) -> Result<Vec<CurrencyRow>, RatesError> {
    let contents =
        std::fs::read_to_string(path).map_err(|e| RatesError::Io(e.to_string()))?;
    let rows: Vec<CurrencyRow> =
        serde_json::from_str(&contents).map_err(|e| RatesError::Parse(e.to_string()))?;
    info!("Loaded {} rates from {}", rows.len(), path.display());
    Ok(rows)
}

/// Built-in static rate set, used when no rates file is given.
pub fn builtin_rows() -> Vec<CurrencyRow> {
    const DEFAULTS: &[(&str, f64)] = &[
        ("USD", 1.0),
        ("EUR", 0.9),
        ("GBP", 0.79),
        ("JPY", 147.3),
        ("CNY", 7.12),
        ("RUB", 92.5),
        ("CHF", 0.88),
        ("CAD", 1.36),
        ("AUD", 1.52),
        ("INR", 83.1),
    ];
    DEFAULTS
        .iter()
        .map(|&(code, rate)| CurrencyRow {
            code: code.to_string(),
            rate,
        })
        .collect()
}
