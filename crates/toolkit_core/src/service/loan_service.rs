//! EMI calculator use-case.

use crate::model::loan::{LoanError, LoanTerms};
use crate::service::input::{format_fixed, parse_or_zero};
use log::{debug, warn};
use serde::Serialize;

/// Monthly instalment breakdown for one loan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EmiQuote {
    pub terms: LoanTerms,
    pub emi: f64,
    pub total_payment: f64,
    pub total_interest: f64,
}

impl EmiQuote {
    /// Builds a quote, rejecting terms whose totals are not finite.
    pub fn from_terms(terms: LoanTerms) -> Result<Self, LoanError> {
        let quote = Self {
            terms,
            emi: terms.monthly_instalment(),
            total_payment: terms.total_payment(),
            total_interest: terms.total_interest(),
        };
        if ![quote.emi, quote.total_payment, quote.total_interest]
            .iter()
            .all(|value| value.is_finite())
        {
            return Err(LoanError::Overflow);
        }
        Ok(quote)
    }

    /// Instalment with two decimals.
    pub fn emi_text(&self) -> String {
        format_fixed(self.emi, 2)
    }

    pub fn total_payment_text(&self) -> String {
        format_fixed(self.total_payment, 2)
    }

    pub fn total_interest_text(&self) -> String {
        format_fixed(self.total_interest, 2)
    }
}

/// Computes an EMI quote from numeric inputs.
pub fn quote_emi(
    principal: f64,
    annual_rate_percent: f64,
    years: f64,
) -> Result<EmiQuote, LoanError> {
    let quote =
        LoanTerms::new(principal, annual_rate_percent, years).and_then(EmiQuote::from_terms);
    match quote {
        Ok(quote) => {
            debug!("event=emi_quote module=loan status=ok");
            Ok(quote)
        }
        Err(err) => {
            warn!(
                "event=emi_quote module=loan status=error reason={}",
                err.reason()
            );
            Err(err)
        }
    }
}

/// Computes an EMI quote from raw form text.
///
/// Malformed text counts as `0`, which then fails validation for principal
/// and tenure.
pub fn quote_emi_raw(
    principal: &str,
    annual_rate_percent: &str,
    years: &str,
) -> Result<EmiQuote, LoanError> {
    quote_emi(
        parse_or_zero(principal),
        parse_or_zero(annual_rate_percent),
        parse_or_zero(years),
    )
}
