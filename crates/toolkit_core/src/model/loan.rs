//! Loan terms and equated monthly instalment (EMI) math.
//!
//! # Invariants
//! - `principal > 0` and `years > 0`.
//! - `annual_rate_percent` is finite and `>= 0`; a zero rate amortizes evenly.

use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

const MONTHS_PER_YEAR: f64 = 12.0;

/// Errors raised by loan term validation.
#[derive(Debug, Clone, PartialEq)]
pub enum LoanError {
    NonPositivePrincipal(f64),
    NonPositiveTenure(f64),
    InvalidRate(f64),
    /// Terms are valid but the instalment is not representable.
    Overflow,
}

impl Display for LoanError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonPositivePrincipal(value) => {
                write!(f, "loan amount must be > 0, got {value}")
            }
            Self::NonPositiveTenure(value) => write!(f, "tenure must be > 0 years, got {value}"),
            Self::InvalidRate(value) => {
                write!(f, "interest rate must be finite and >= 0, got {value}")
            }
            Self::Overflow => write!(f, "loan terms are too large to compute an instalment"),
        }
    }
}

impl LoanError {
    /// Stable reason id for metadata-only logs.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::NonPositivePrincipal(_) => "non_positive_principal",
            Self::NonPositiveTenure(_) => "non_positive_tenure",
            Self::InvalidRate(_) => "invalid_rate",
            Self::Overflow => "overflow",
        }
    }
}

impl Error for LoanError {}

/// Validated loan terms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LoanTerms {
    principal: f64,
    annual_rate_percent: f64,
    years: f64,
}

impl LoanTerms {
    /// Validates and creates loan terms.
    ///
    /// # Errors
    /// - `NonPositivePrincipal` / `NonPositiveTenure` for values `<= 0` or non-finite.
    /// - `InvalidRate` for a negative or non-finite annual rate.
    pub fn new(principal: f64, annual_rate_percent: f64, years: f64) -> Result<Self, LoanError> {
        if !principal.is_finite() || principal <= 0.0 {
            return Err(LoanError::NonPositivePrincipal(principal));
        }
        if !annual_rate_percent.is_finite() || annual_rate_percent < 0.0 {
            return Err(LoanError::InvalidRate(annual_rate_percent));
        }
        if !years.is_finite() || years <= 0.0 {
            return Err(LoanError::NonPositiveTenure(years));
        }
        Ok(Self {
            principal,
            annual_rate_percent,
            years,
        })
    }

    pub fn principal(&self) -> f64 {
        self.principal
    }

    pub fn annual_rate_percent(&self) -> f64 {
        self.annual_rate_percent
    }

    pub fn years(&self) -> f64 {
        self.years
    }

    /// Interest rate per month as a fraction.
    pub fn monthly_rate(&self) -> f64 {
        self.annual_rate_percent / (MONTHS_PER_YEAR * 100.0)
    }

    /// Number of monthly instalments.
    pub fn months(&self) -> f64 {
        self.years * MONTHS_PER_YEAR
    }

    /// Equated monthly instalment.
    pub fn monthly_instalment(&self) -> f64 {
        let rate = self.monthly_rate();
        let months = self.months();
        if rate == 0.0 {
            return self.principal / months;
        }
        let growth = (1.0 + rate).powf(months);
        // Why: for very long tenures `growth` overflows, and the instalment
        // converges to the interest-only payment.
        if !growth.is_finite() {
            return self.principal * rate;
        }
        // Why: for rates too small to move `1 + r` the annuity factor rounds
        // to zero; the loan then amortizes like an interest-free one.
        if growth - 1.0 <= 0.0 {
            return self.principal / months;
        }
        self.principal * rate * growth / (growth - 1.0)
    }

    /// Sum of all instalments.
    pub fn total_payment(&self) -> f64 {
        self.monthly_instalment() * self.months()
    }

    /// Interest paid over the whole tenure.
    pub fn total_interest(&self) -> f64 {
        self.total_payment() - self.principal
    }
}
