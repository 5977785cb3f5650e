//! Currency conversion use-case.
//!
//! # Responsibility
//! - Convert amounts with a `RateTable` and render display text.
//! - Accept raw amount text from a form with parse-or-zero semantics.

use crate::model::currency::{CurrencyError, CurrencyRate, RateTable};
use crate::service::input::{format_fixed, parse_or_zero};
use log::{debug, warn};
use serde::Serialize;

/// Result of one conversion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrencyQuote {
    pub amount: f64,
    pub from: String,
    pub to: String,
    pub converted: f64,
    /// Units of `to` per one unit of `from`.
    pub unit_rate: f64,
}

impl CurrencyQuote {
    /// Converted amount with two decimals.
    pub fn converted_text(&self) -> String {
        format_fixed(self.converted, 2)
    }

    /// Unit rate with four decimals.
    pub fn unit_rate_text(&self) -> String {
        format_fixed(self.unit_rate, 4)
    }

    /// One-line rate summary, e.g. `1 USD = 134.5000 NPR`.
    pub fn rate_summary(&self) -> String {
        format!("1 {} = {} {}", self.from, self.unit_rate_text(), self.to)
    }
}

/// Converter bound to one rate table.
#[derive(Debug, Clone, Default)]
pub struct CurrencyConverter {
    table: RateTable,
}

impl CurrencyConverter {
    pub fn new(table: RateTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &RateTable {
        &self.table
    }

    pub fn rates(&self) -> &[CurrencyRate] {
        self.table.rates()
    }

    /// Converts `amount` from one code to another.
    pub fn quote(&self, amount: f64, from: &str, to: &str) -> Result<CurrencyQuote, CurrencyError> {
        let from_rate = self.table.get(from).map_err(log_lookup_failure)?;
        let to_rate = self.table.get(to).map_err(log_lookup_failure)?;
        let unit_rate = to_rate.rate / from_rate.rate;
        debug!(
            "event=currency_quote module=currency status=ok from={} to={}",
            from_rate.code, to_rate.code
        );
        Ok(CurrencyQuote {
            amount,
            from: from_rate.code.clone(),
            to: to_rate.code.clone(),
            converted: amount * unit_rate,
            unit_rate,
        })
    }

    /// Converts raw amount text; malformed text counts as `0`.
    pub fn quote_raw(
        &self,
        raw_amount: &str,
        from: &str,
        to: &str,
    ) -> Result<CurrencyQuote, CurrencyError> {
        self.quote(parse_or_zero(raw_amount), from, to)
    }
}

fn log_lookup_failure(err: CurrencyError) -> CurrencyError {
    warn!("event=currency_quote module=currency status=error reason=unknown_currency");
    err
}
