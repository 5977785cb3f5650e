use toolkit_core::{
    quote_emi, quote_emi_raw, CurrencyConverter, CurrencyError, CurrencyRate, LoanError,
    LoanTerms, RateTable,
};

fn rate(code: &str, value: f64) -> CurrencyRate {
    CurrencyRate {
        code: code.to_string(),
        name: format!("{code} name"),
        rate: value,
        flag: String::new(),
    }
}

#[test]
fn builtin_table_converts_usd_to_npr() {
    let converter = CurrencyConverter::default();
    let quote = converter.quote(1.0, "USD", "NPR").unwrap();

    assert_eq!(quote.converted, 134.5);
    assert_eq!(quote.converted_text(), "134.50");
    assert_eq!(quote.rate_summary(), "1 USD = 134.5000 NPR");
}

#[test]
fn conversion_goes_through_base_rate() {
    let converter = CurrencyConverter::default();
    let quote = converter.quote(100.0, "inr", "npr").unwrap();

    assert_eq!(quote.from, "INR");
    assert_eq!(quote.to, "NPR");
    assert!((quote.converted - 100.0 * 134.5 / 84.0).abs() < 1e-9);
    assert_eq!(quote.converted_text(), "160.12");
    assert_eq!(quote.unit_rate_text(), "1.6012");
}

#[test]
fn raw_amount_uses_parse_or_zero() {
    let converter = CurrencyConverter::default();
    assert_eq!(converter.quote_raw("", "USD", "EUR").unwrap().converted, 0.0);
    assert_eq!(converter.quote_raw("10 dollars", "USD", "USD").unwrap().converted, 10.0);
}

#[test]
fn unknown_currency_is_rejected() {
    let converter = CurrencyConverter::default();
    let err = converter.quote(1.0, "USD", "xyz").unwrap_err();
    assert!(matches!(err, CurrencyError::UnknownCurrency(code) if code == "XYZ"));
}

#[test]
fn custom_table_is_validated() {
    assert!(matches!(RateTable::new(Vec::new()), Err(CurrencyError::EmptyTable)));
    assert!(matches!(
        RateTable::new(vec![rate("usd", 1.0), rate("USD ", 2.0)]),
        Err(CurrencyError::DuplicateCode(code)) if code == "USD"
    ));
    assert!(matches!(
        RateTable::new(vec![rate("NPR", 0.0)]),
        Err(CurrencyError::InvalidRate { .. })
    ));
    assert!(matches!(
        RateTable::new(vec![rate("NPR", f64::NAN)]),
        Err(CurrencyError::InvalidRate { .. })
    ));
    assert!(matches!(
        RateTable::new(vec![rate("  ", 1.0)]),
        Err(CurrencyError::EmptyCode)
    ));
}

#[test]
fn rate_table_loads_from_json() {
    let table = RateTable::from_json_str(
        r#"[
            {"code": "usd", "name": "US Dollar", "rate": 1.0},
            {"code": "NPR", "name": "Nepalese Rupee", "rate": 140.0, "flag": "NP"}
        ]"#,
    )
    .unwrap();

    assert_eq!(table.rates().len(), 2);
    assert_eq!(table.rates()[0].code, "USD");
    assert_eq!(table.rates()[0].flag, "");
    assert_eq!(table.convert(2.0, "USD", "NPR").unwrap(), 280.0);
}

#[test]
fn rate_table_rejects_malformed_json() {
    let err = RateTable::from_json_str("{not json").unwrap_err();
    assert!(matches!(err, CurrencyError::Json(_)));
    assert!(err.to_string().starts_with("invalid rate table json"));
}

#[test]
fn emi_matches_amortization_formula() {
    let quote = quote_emi(100_000.0, 12.0, 1.0).unwrap();

    let r: f64 = 0.01;
    let growth = (1.0 + r).powf(12.0);
    let expected = 100_000.0 * r * growth / (growth - 1.0);
    assert!((quote.emi - expected).abs() < 1e-9);
    assert_eq!(quote.emi_text(), "8884.88");
    assert!((quote.total_payment - expected * 12.0).abs() < 1e-6);
    assert!((quote.total_interest - (expected * 12.0 - 100_000.0)).abs() < 1e-6);
}

#[test]
fn zero_interest_spreads_principal_evenly() {
    let quote = quote_emi(12_000.0, 0.0, 1.0).unwrap();
    assert_eq!(quote.emi, 1000.0);
    assert_eq!(quote.total_interest_text(), "0.00");
}

#[test]
fn rate_too_small_to_compound_amortizes_evenly() {
    let quote = quote_emi(1000.0, 1e-14, 1.0).unwrap();
    assert!(quote.emi.is_finite());
    assert!((quote.emi - 1000.0 / 12.0).abs() < 1e-9);
    assert_eq!(quote.emi_text(), "83.33");
}

#[test]
fn very_long_tenure_converges_to_interest_only_payment() {
    let quote = quote_emi(1000.0, 10.0, 1e6).unwrap();
    assert!(quote.emi.is_finite());
    assert!((quote.emi - 1000.0 * 10.0 / 1200.0).abs() < 1e-9);
    assert_eq!(quote.emi_text(), "8.33");
}

#[test]
fn unrepresentable_totals_are_rejected() {
    let err = quote_emi(1.7e308, 10.0, 30.0).unwrap_err();
    assert_eq!(err, LoanError::Overflow);
    assert_eq!(err.reason(), "overflow");
}

#[test]
fn invalid_loan_terms_are_rejected() {
    assert_eq!(
        LoanTerms::new(0.0, 10.0, 5.0).unwrap_err(),
        LoanError::NonPositivePrincipal(0.0)
    );
    assert_eq!(
        LoanTerms::new(1000.0, -1.0, 5.0).unwrap_err(),
        LoanError::InvalidRate(-1.0)
    );
    assert_eq!(
        LoanTerms::new(1000.0, 10.0, 0.0).unwrap_err(),
        LoanError::NonPositiveTenure(0.0)
    );
}

#[test]
fn raw_emi_input_treats_blank_principal_as_missing() {
    let err = quote_emi_raw("", "10", "5").unwrap_err();
    assert_eq!(err, LoanError::NonPositivePrincipal(0.0));

    let quote = quote_emi_raw("500000", "10.5", "20").unwrap();
    assert_eq!(quote.terms.months(), 240.0);
}
