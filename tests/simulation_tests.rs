//! Integration tests for the Selic simulator
//!
//! These tests verify the offline pipeline end-to-end:
//! - Wire decoding of SGS response bodies
//! - Daily compounding over the decoded series
//! - CSV rendering and the empty-range guard

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use selic::sgs::{decode_latest, decode_series, RateRecord};
use selic::simulation::{compound, render_csv};

fn record(date: &str, rate: &str) -> RateRecord {
    RateRecord {
        date: date.to_string(),
        rate: rate.to_string(),
    }
}

#[test]
fn simulate_concrete_scenario_from_provider_body() {
    // fraction = 0.0500/100 = 0.0005; 1000 * (1 + 0.0005/252) rounds to 1000.00
    let body = r#"[{"data":"02/01/2024","valor":"0,0500"}]"#;
    let series = decode_series(body).unwrap();

    assert_eq!(compound(dec!(1000), &series), dec!(1000.00));
}

#[test]
fn simulate_matches_product_formula_over_decoded_series() {
    let body = r#"[
        {"data":"02/01/2024","valor":"0.044813"},
        {"data":"03/01/2024","valor":"0.044813"},
        {"data":"04/01/2024","valor":"0.052531"},
        {"data":"05/01/2024","valor":"0.052531"},
        {"data":"08/01/2024","valor":"0.052531"}
    ]"#;
    let series = decode_series(body).unwrap();

    let mut expected = dec!(15000);
    for record in &series {
        let rate: Decimal = record.rate.replace(',', ".").parse().unwrap();
        expected *= Decimal::ONE + (rate / dec!(100)) / dec!(252);
    }
    let expected = expected.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

    assert_eq!(compound(dec!(15000), &series), expected);
}

#[test]
fn simulate_empty_series_returns_principal_rounded() {
    let series = decode_series("[]").unwrap();
    assert_eq!(compound(dec!(1234.567), &series), dec!(1234.57));
}

#[test]
fn simulate_fold_preserves_given_order() {
    // The contract is a left-to-right fold; feeding a reordered series must
    // produce the fold of that reordered series, not of the original.
    let forward = vec![record("02/01/2024", "0,01"), record("03/01/2024", "50")];
    let swapped = vec![forward[1].clone(), forward[0].clone()];

    let fold = |series: &[RateRecord]| {
        let mut total = dec!(777777.77);
        for r in series {
            let rate: Decimal = r.rate.replace(',', ".").parse().unwrap();
            total *= Decimal::ONE + (rate / dec!(100)) / dec!(252);
        }
        total.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    };

    assert_eq!(compound(dec!(777777.77), &forward), fold(&forward));
    assert_eq!(compound(dec!(777777.77), &swapped), fold(&swapped));
}

#[test]
fn export_renders_exact_csv() {
    let series = vec![record("01/01/2024", "0.035")];
    let csv = render_csv(&series, "01/01/2024", "01/01/2024").unwrap();
    assert_eq!(csv, "Data;Valor\n01/01/2024;0,035000\n");
}

#[test]
fn export_empty_range_names_both_dates() {
    let err = render_csv(&[], "01/06/2024", "30/06/2024").unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("01/06/2024"), "message was: {}", msg);
    assert!(msg.contains("30/06/2024"), "message was: {}", msg);
}

#[test]
fn latest_is_absent_for_empty_or_malformed_bodies() {
    assert_eq!(decode_latest("[]"), None);
    assert_eq!(decode_latest(r#"{"erro":"serviço indisponível"}"#), None);

    let record = decode_latest(r#"[{"data":"05/08/2026","valor":"0,055131"}]"#).unwrap();
    assert_eq!(record.rate, "0,055131");
}

#[test]
fn decoded_series_roundtrips_through_csv() {
    let body = r#"[
        {"data":"02/01/2024","valor":"0,044813"},
        {"data":"03/01/2024","valor":"0,052531"}
    ]"#;
    let series = decode_series(body).unwrap();
    let csv = render_csv(&series, "02/01/2024", "03/01/2024").unwrap();

    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("Data;Valor"));
    assert_eq!(lines.next(), Some("02/01/2024;0,044813"));
    assert_eq!(lines.next(), Some("03/01/2024;0,052531"));
    assert_eq!(lines.next(), None);
}
