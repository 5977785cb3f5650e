//! Currency rate table.
//!
//! # Responsibility
//! - Hold a USD-based table of exchange rates.
//! - Convert amounts between any two codes of the table.
//!
//! # Invariants
//! - A table is never empty.
//! - Codes are uppercase and unique.
//! - Every rate is finite and `> 0`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Code used when no source currency is given.
pub const DEFAULT_FROM_CODE: &str = "USD";
/// Code used when no target currency is given.
pub const DEFAULT_TO_CODE: &str = "NPR";

const BUILTIN_RATES: &[(&str, &str, f64, &str)] = &[
    ("USD", "US Dollar", 1.0, "🇺🇸"),
    ("NPR", "Nepalese Rupee", 134.5, "🇳🇵"),
    ("INR", "Indian Rupee", 84.0, "🇮🇳"),
    ("EUR", "Euro", 0.92, "🇪🇺"),
    ("GBP", "British Pound", 0.79, "🇬🇧"),
    ("AUD", "Australian Dollar", 1.52, "🇦🇺"),
    ("CAD", "Canadian Dollar", 1.36, "🇨🇦"),
    ("JPY", "Japanese Yen", 151.0, "🇯🇵"),
    ("CNY", "Chinese Yuan", 7.23, "🇨🇳"),
    ("AED", "UAE Dirham", 3.67, "🇦🇪"),
    ("QAR", "Qatari Riyal", 3.64, "🇶🇦"),
    ("SAR", "Saudi Riyal", 3.75, "🇸🇦"),
    ("MYR", "Malaysian Ringgit", 4.73, "🇲🇾"),
    ("KRW", "South Korean Won", 1350.0, "🇰🇷"),
];

/// One currency and its rate against the table base (USD).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyRate {
    /// ISO-like currency code, e.g. `NPR`.
    pub code: String,
    /// Display name.
    pub name: String,
    /// Units of this currency per one base unit.
    pub rate: f64,
    /// Flag glyph shown next to the code.
    #[serde(default)]
    pub flag: String,
}

/// Errors raised by rate table construction and lookups.
#[derive(Debug)]
pub enum CurrencyError {
    EmptyTable,
    EmptyCode,
    DuplicateCode(String),
    InvalidRate { code: String, rate: f64 },
    UnknownCurrency(String),
    Json(serde_json::Error),
}

impl Display for CurrencyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTable => write!(f, "currency rate table cannot be empty"),
            Self::EmptyCode => write!(f, "currency code cannot be empty"),
            Self::DuplicateCode(code) => write!(f, "duplicate currency code `{code}`"),
            Self::InvalidRate { code, rate } => {
                write!(f, "rate for `{code}` must be finite and > 0, got {rate}")
            }
            Self::UnknownCurrency(code) => write!(f, "unknown currency code `{code}`"),
            Self::Json(err) => write!(f, "invalid rate table json: {err}"),
        }
    }
}

impl Error for CurrencyError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for CurrencyError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Validated table of currency rates.
#[derive(Debug, Clone, PartialEq)]
pub struct RateTable {
    rates: Vec<CurrencyRate>,
}

impl RateTable {
    /// Built-in table shipped with the toolkit.
    pub fn builtin() -> Self {
        let rates = BUILTIN_RATES
            .iter()
            .map(|(code, name, rate, flag)| CurrencyRate {
                code: (*code).to_string(),
                name: (*name).to_string(),
                rate: *rate,
                flag: (*flag).to_string(),
            })
            .collect();
        Self { rates }
    }

    /// Builds a table from caller-provided rates.
    ///
    /// Codes are trimmed and uppercased before validation.
    ///
    /// # Errors
    /// - Empty input, empty or duplicate codes, non-positive or non-finite rates.
    pub fn new(rates: Vec<CurrencyRate>) -> Result<Self, CurrencyError> {
        if rates.is_empty() {
            return Err(CurrencyError::EmptyTable);
        }

        let mut seen = BTreeSet::<String>::new();
        let mut normalized = Vec::with_capacity(rates.len());
        for mut entry in rates {
            let code = normalize_code(&entry.code);
            if code.is_empty() {
                return Err(CurrencyError::EmptyCode);
            }
            if !entry.rate.is_finite() || entry.rate <= 0.0 {
                return Err(CurrencyError::InvalidRate {
                    code,
                    rate: entry.rate,
                });
            }
            if !seen.insert(code.clone()) {
                return Err(CurrencyError::DuplicateCode(code));
            }
            entry.code = code;
            normalized.push(entry);
        }

        Ok(Self { rates: normalized })
    }

    /// Parses a JSON array of `{code, name, rate, flag}` objects.
    pub fn from_json_str(json: &str) -> Result<Self, CurrencyError> {
        let rates: Vec<CurrencyRate> = serde_json::from_str(json)?;
        Self::new(rates)
    }

    /// All rates in table order.
    pub fn rates(&self) -> &[CurrencyRate] {
        &self.rates
    }

    /// Looks up one rate by code (case-insensitive).
    pub fn get(&self, code: &str) -> Result<&CurrencyRate, CurrencyError> {
        let code = normalize_code(code);
        self.rates
            .iter()
            .find(|entry| entry.code == code)
            .ok_or(CurrencyError::UnknownCurrency(code))
    }

    /// Units of `to` per one unit of `from`.
    pub fn unit_rate(&self, from: &str, to: &str) -> Result<f64, CurrencyError> {
        let from = self.get(from)?;
        let to = self.get(to)?;
        Ok(to.rate / from.rate)
    }

    /// Converts `amount` of `from` into `to`.
    pub fn convert(&self, amount: f64, from: &str, to: &str) -> Result<f64, CurrencyError> {
        Ok(amount * self.unit_rate(from, to)?)
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self::builtin()
    }
}

fn normalize_code(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}
