//! Core converters for the digital toolkit.
//! This crate is the single source of truth for converter arithmetic and invariants.

pub mod logging;
pub mod model;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::area::{
    AreaError, AreaQuantity, AreaResult, Breakdown, HillBreakdown, HillField, LandField,
    TeraiBreakdown, TeraiField, UnitSystem,
};
pub use model::currency::{CurrencyError, CurrencyRate, RateTable};
pub use model::loan::{LoanError, LoanTerms};
pub use service::currency_service::{CurrencyConverter, CurrencyQuote};
pub use service::input::parse_or_zero;
pub use service::land_service::{LandConverter, LandDisplay, LandDisplayText};
pub use service::loan_service::{quote_emi, quote_emi_raw, EmiQuote};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
