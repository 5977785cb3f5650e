//! Numeric form input normalization.
//!
//! # Responsibility
//! - Turn raw form text into a number without ever failing.
//! - Classify raw text for metadata-only logging.
//!
//! # Invariants
//! - `parse_or_zero` always returns a finite value.
//! - Only the longest leading decimal prefix is read; trailing junk is ignored.

use once_cell::sync::Lazy;
use regex::Regex;

static LEADING_NUMBER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?").expect("valid number regex")
});

/// Coarse shape of raw input text, safe to log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputClass {
    /// Blank or whitespace only.
    Empty,
    /// Whole text is a number.
    Numeric,
    /// Text starts with a number followed by other characters.
    Partial,
    /// No leading number.
    Invalid,
}

impl InputClass {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Numeric => "numeric",
            Self::Partial => "partial",
            Self::Invalid => "invalid",
        }
    }
}

/// Parses the leading number of `raw`, or returns `0`.
///
/// `"12.5"` -> 12.5, `" 8 "` -> 8, `"12abc"` -> 12, `""` / `"abc"` -> 0.
/// Results that overflow to infinity are also folded to 0.
pub fn parse_or_zero(raw: &str) -> f64 {
    LEADING_NUMBER_RE
        .find(raw.trim())
        .and_then(|found| found.as_str().parse::<f64>().ok())
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

/// Classifies `raw` without exposing its content.
pub fn classify(raw: &str) -> InputClass {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return InputClass::Empty;
    }
    match LEADING_NUMBER_RE.find(trimmed) {
        Some(found) if found.end() == trimmed.len() => InputClass::Numeric,
        Some(_) => InputClass::Partial,
        None => InputClass::Invalid,
    }
}

/// Renders a value with `decimals` fixed decimal places.
pub fn format_fixed(value: f64, decimals: usize) -> String {
    // Why: tiny negative float noise would otherwise render as `-0.00`.
    let rendered = format!("{value:.decimals$}");
    match rendered.strip_prefix('-') {
        Some(unsigned) if unsigned.chars().all(|c| c == '0' || c == '.') => unsigned.to_string(),
        _ => rendered,
    }
}

/// Renders a value with up to six decimals and no trailing zeros.
pub fn format_trimmed(value: f64) -> String {
    let rendered = format_fixed(value, 6);
    if !rendered.contains('.') {
        return rendered;
    }
    rendered
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::{classify, format_fixed, format_trimmed, parse_or_zero, InputClass};

    #[test]
    fn parse_or_zero_reads_plain_numbers() {
        assert_eq!(parse_or_zero("12.5"), 12.5);
        assert_eq!(parse_or_zero(" 8 "), 8.0);
        assert_eq!(parse_or_zero("-3"), -3.0);
        assert_eq!(parse_or_zero(".5"), 0.5);
        assert_eq!(parse_or_zero("1e3"), 1000.0);
    }

    #[test]
    fn parse_or_zero_uses_leading_prefix() {
        assert_eq!(parse_or_zero("12abc"), 12.0);
        assert_eq!(parse_or_zero("4."), 4.0);
        assert_eq!(parse_or_zero("2e"), 2.0);
    }

    #[test]
    fn parse_or_zero_folds_malformed_input_to_zero() {
        assert_eq!(parse_or_zero(""), 0.0);
        assert_eq!(parse_or_zero("   "), 0.0);
        assert_eq!(parse_or_zero("abc"), 0.0);
        assert_eq!(parse_or_zero("NaN"), 0.0);
        assert_eq!(parse_or_zero("-"), 0.0);
        assert_eq!(parse_or_zero("1e999"), 0.0);
    }

    #[test]
    fn classify_reports_input_shape() {
        assert_eq!(classify(""), InputClass::Empty);
        assert_eq!(classify("42"), InputClass::Numeric);
        assert_eq!(classify("42 ropani"), InputClass::Partial);
        assert_eq!(classify("ropani"), InputClass::Invalid);
    }

    #[test]
    fn formatting_trims_or_fixes_decimals() {
        assert_eq!(format_fixed(15.1234, 2), "15.12");
        assert_eq!(format_fixed(-0.0001, 2), "0.00");
        assert_eq!(format_trimmed(13690.0), "13690");
        assert_eq!(format_trimmed(0.5), "0.5");
    }
}
