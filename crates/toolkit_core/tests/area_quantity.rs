use toolkit_core::{
    AreaError, AreaQuantity, Breakdown, HillBreakdown, HillField, LandField, TeraiBreakdown,
    TeraiField, UnitSystem,
};

const TOLERANCE: f64 = 1e-6;

const SAMPLE_AREAS: &[f64] = &[
    0.0, 0.5, 21.390625, 85.5625, 100.0, 342.25, 1000.0, 5476.0, 10952.0, 13690.0, 72900.0,
    123456.789, 1_000_000.0,
];

// Values a hair below a unit boundary; the shortfall is real area, not noise.
const NEAR_BOUNDARY_AREAS: &[f64] = &[
    72900.0 - 5e-5,
    5476.0 - 5e-6,
    3645.0 - 1e-7,
    342.25 - 2e-6,
    72900.0 * 3.0 - 1e-6,
];

fn all_samples() -> impl Iterator<Item = f64> {
    SAMPLE_AREAS
        .iter()
        .chain(NEAR_BOUNDARY_AREAS.iter())
        .copied()
}

fn area(value: f64) -> AreaQuantity {
    AreaQuantity::from_sq_ft(value).expect("sample area should be valid")
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < TOLERANCE,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn hill_breakdown_recomposes_to_canonical_value() {
    for value in all_samples() {
        assert_close(area(value).hill().recompose(), value);
    }
}

#[test]
fn terai_breakdown_recomposes_to_canonical_value() {
    for value in all_samples() {
        assert_close(area(value).terai().recompose(), value);
    }
}

#[test]
fn both_systems_describe_the_same_area() {
    for value in all_samples() {
        let quantity = area(value);
        assert_close(
            quantity.decompose(UnitSystem::Hill).recompose(),
            quantity.decompose(UnitSystem::Terai).recompose(),
        );
    }
}

#[test]
fn coarse_units_are_whole_and_within_radix() {
    for value in all_samples() {
        let hill = area(value).hill();
        assert_eq!(hill.ropani.fract(), 0.0);
        assert_eq!(hill.aana.fract(), 0.0);
        assert_eq!(hill.paisa.fract(), 0.0);
        assert!(hill.aana < 16.0);
        assert!(hill.paisa < 4.0);
        assert!(hill.dam < 4.0);

        let terai = area(value).terai();
        assert_eq!(terai.bigha.fract(), 0.0);
        assert_eq!(terai.kattha.fract(), 0.0);
        assert!(terai.kattha < 20.0);
        assert!(terai.dhur < 20.0);
    }
}

#[test]
fn area_just_below_one_bigha_stays_in_kattha_and_dhur() {
    let terai = area(72900.0 - 5e-5).terai();
    assert_eq!(terai.bigha, 0.0);
    assert_eq!(terai.kattha, 19.0);
    assert!(terai.dhur > 19.99 && terai.dhur < 20.0);

    let hill = area(5476.0 - 5e-6).hill();
    assert_eq!(hill.ropani, 0.0);
    assert_eq!(hill.aana, 15.0);
    assert_eq!(hill.paisa, 3.0);
    assert!(hill.dam > 3.99 && hill.dam < 4.0);
}

#[test]
fn zero_decomposes_to_all_zero_fields() {
    assert_eq!(AreaQuantity::ZERO.hill(), HillBreakdown::default());
    assert_eq!(AreaQuantity::ZERO.terai(), TeraiBreakdown::default());
}

#[test]
fn one_ropani_and_one_bigha_are_exact() {
    assert_eq!(
        area(5476.0).hill(),
        HillBreakdown {
            ropani: 1.0,
            aana: 0.0,
            paisa: 0.0,
            dam: 0.0,
        }
    );
    assert_eq!(
        area(72900.0).terai(),
        TeraiBreakdown {
            bigha: 1.0,
            kattha: 0.0,
            dhur: 0.0,
        }
    );
}

#[test]
fn editing_one_hill_field_keeps_its_siblings() {
    let start = area(5476.0 * 3.0 + 342.25 * 5.0 + 85.5625 * 2.0 + 21.390625 * 1.5);
    let before = start.hill();
    assert_eq!(before.aana, 5.0);

    let edited = start.set_field(HillField::Aana, 11.0).unwrap().hill();
    assert_eq!(edited.ropani, before.ropani);
    assert_eq!(edited.aana, 11.0);
    assert_eq!(edited.paisa, before.paisa);
    assert_close(edited.dam, before.dam);
}

#[test]
fn editing_any_coarse_hill_field_keeps_the_rest() {
    let start = area(5476.0 * 3.0 + 342.25 * 5.0 + 85.5625 * 2.0 + 21.390625 * 1.5);
    let before = start.hill();

    for (field, value) in [
        (HillField::Ropani, 7.0),
        (HillField::Aana, 0.0),
        (HillField::Paisa, 1.0),
    ] {
        let edited = start.set_field(field, value).unwrap().hill();
        for sibling in HillField::ALL {
            if sibling == field {
                assert_eq!(edited.get(sibling), value, "{field:?} should take the new value");
            } else {
                assert_close(edited.get(sibling), before.get(sibling));
            }
        }
    }
}

#[test]
fn editing_bigha_keeps_kattha_and_dhur() {
    let start = area(72900.0 * 2.0 + 3645.0 * 7.0 + 182.25 * 4.25);
    let edited = start.set_field(TeraiField::Bigha, 5.0).unwrap();

    assert_eq!(edited.sq_ft(), 390789.5625);
    let terai = edited.terai();
    assert_eq!(terai.bigha, 5.0);
    assert_eq!(terai.kattha, 7.0);
    assert_close(terai.dhur, 4.25);
}

#[test]
fn edit_that_overflows_is_rejected() {
    let start = area(13690.0);

    let err = start.set_field(TeraiField::Bigha, 1e305).unwrap_err();
    assert_eq!(
        err,
        AreaError::OutOfRange {
            field: LandField::Bigha,
        }
    );
    assert_eq!(err.reason(), "out_of_range");

    let err = start.set_field(HillField::Ropani, 1e306).unwrap_err();
    assert_eq!(
        err,
        AreaError::OutOfRange {
            field: LandField::Ropani,
        }
    );
    assert_eq!(start.sq_ft(), 13690.0);
}

#[test]
fn area_errors_report_stable_reasons() {
    assert_eq!(
        AreaError::UnknownField("acre".to_string()).reason(),
        "unknown_field"
    );
    assert_eq!(
        AreaError::NegativeValue {
            field: LandField::Dam,
            value: -1.0,
        }
        .reason(),
        "negative_value"
    );
}

#[test]
fn editing_one_terai_field_keeps_its_siblings() {
    let start = area(72900.0 * 2.0 + 3645.0 * 7.0 + 182.25 * 4.25);
    let before = start.terai();

    let edited = start.set_field(TeraiField::Kattha, 12.0).unwrap().terai();
    assert_eq!(edited.bigha, before.bigha);
    assert_eq!(edited.kattha, 12.0);
    assert_close(edited.dhur, before.dhur);
}

#[test]
fn terminal_field_edit_replaces_fraction() {
    let start = area(5476.0 + 21.390625 * 2.75);
    let edited = start.set_field(HillField::Dam, 1.5).unwrap();
    assert_close(edited.sq_ft(), 5476.0 + 21.390625 * 1.5);
    assert_close(edited.hill().dam, 1.5);
}

#[test]
fn oversized_field_value_carries_into_coarser_units() {
    let edited = AreaQuantity::ZERO.set_field(HillField::Aana, 20.0).unwrap();
    assert_eq!(edited.sq_ft(), 6845.0);
    let hill = edited.hill();
    assert_eq!(hill.ropani, 1.0);
    assert_eq!(hill.aana, 4.0);
}

#[test]
fn ropani_then_aana_scenario() {
    let quantity = AreaQuantity::ZERO
        .set_field(LandField::Ropani, 2.0)
        .unwrap();
    assert_eq!(quantity.sq_ft(), 10952.0);

    let quantity = quantity.set_field(LandField::Aana, 8.0).unwrap();
    assert_eq!(quantity.sq_ft(), 13690.0);

    let terai = quantity.terai();
    assert_eq!(terai.bigha, 0.0);
    assert_eq!(terai.kattha, 3.0);
    assert_close(terai.dhur, (13690.0 - 10935.0) / 182.25);
}

#[test]
fn non_finite_values_behave_like_zero() {
    let start = area(5476.0 + 21.390625 * 3.0);
    let by_zero = start.set_field(HillField::Dam, 0.0).unwrap();
    assert_eq!(start.set_field(HillField::Dam, f64::NAN).unwrap(), by_zero);
    assert_eq!(start.set_field(HillField::Dam, f64::INFINITY).unwrap(), by_zero);
    assert_eq!(AreaQuantity::from_sq_ft(f64::NAN).unwrap(), AreaQuantity::ZERO);
}

#[test]
fn negative_values_are_rejected() {
    let err = AreaQuantity::from_sq_ft(-1.0).unwrap_err();
    assert_eq!(
        err,
        AreaError::NegativeValue {
            field: LandField::SqFt,
            value: -1.0,
        }
    );

    let start = area(5476.0 * 2.0);
    let err = start.set_field(HillField::Aana, -3.0).unwrap_err();
    assert_eq!(
        err,
        AreaError::NegativeValue {
            field: LandField::Aana,
            value: -3.0,
        }
    );
}

#[test]
fn set_field_does_not_mutate_the_receiver() {
    let start = area(1000.0);
    let _ = start.set_field(LandField::SqFt, 50.0).unwrap();
    assert_eq!(start.sq_ft(), 1000.0);
}

#[test]
fn land_field_parses_stable_names() {
    assert_eq!("Aana".parse::<LandField>().unwrap(), LandField::Aana);
    assert_eq!(" sqft ".parse::<LandField>().unwrap(), LandField::SqFt);
    assert_eq!("sq_ft".parse::<LandField>().unwrap(), LandField::SqFt);
    for field in LandField::ALL {
        assert_eq!(field.as_str().parse::<LandField>().unwrap(), field);
    }
    assert_eq!(
        "acre".parse::<LandField>().unwrap_err(),
        AreaError::UnknownField("acre".to_string())
    );
}

#[test]
fn land_field_reports_its_system() {
    assert_eq!(LandField::SqFt.system(), None);
    assert_eq!(LandField::Paisa.system(), Some(UnitSystem::Hill));
    assert_eq!(LandField::Dhur.system(), Some(UnitSystem::Terai));
    assert!(LandField::Dam.is_terminal());
    assert!(!LandField::Kattha.is_terminal());
}

#[test]
fn area_serialization_uses_expected_wire_fields() {
    let json = serde_json::to_value(area(13690.0)).unwrap();
    assert_eq!(json, serde_json::json!({ "sq_ft": 13690.0 }));

    let decoded: AreaQuantity = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, area(13690.0));

    let breakdown = serde_json::to_value(area(5476.0).decompose(UnitSystem::Hill)).unwrap();
    assert_eq!(breakdown["system"], "hill");
    assert_eq!(breakdown["ropani"], 1.0);

    let field = serde_json::to_value(LandField::SqFt).unwrap();
    assert_eq!(field, "sqft");
}

#[test]
fn deserialize_rejects_negative_area() {
    let err = serde_json::from_value::<AreaQuantity>(serde_json::json!({ "sq_ft": -5.0 }))
        .unwrap_err();
    assert!(
        err.to_string().contains("sqft must be >= 0"),
        "unexpected error: {err}"
    );
}

#[test]
fn breakdown_reports_its_system() {
    assert_eq!(
        Breakdown::Terai(TeraiBreakdown::default()).system(),
        UnitSystem::Terai
    );
}
