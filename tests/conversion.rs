//! 단위 변환 회귀 테스트.
use universal_unit_converter::catalog;
use universal_unit_converter::conversion::{convert, convert_auto, kind_of_unit, ConversionError};
use universal_unit_converter::quantity::QuantityKind;

#[test]
fn temperature_conversion_is_affine() {
    // 0°C = 32°F, 100°C = 212°F, 0°C = 273.15K
    let f = convert_auto(0.0, "celsius", "fahrenheit").unwrap();
    assert!((f - 32.0).abs() < 1e-9, "0C -> {f}F");
    let f = convert_auto(100.0, "celsius", "fahrenheit").unwrap();
    assert!((f - 212.0).abs() < 1e-9, "100C -> {f}F");
    let k = convert_auto(0.0, "celsius", "kelvin").unwrap();
    assert!((k - 273.15).abs() < 1e-12, "0C -> {k}K");
}

#[test]
fn temperature_offset_is_not_a_pure_ratio() {
    // 배율만 적용했다면 0°C는 0°F가 된다.
    let f = convert_auto(0.0, "celsius", "fahrenheit").unwrap();
    assert!(f > 31.0);
}

#[test]
fn identity_returns_input_for_every_catalog_unit() {
    for kind in catalog::CATEGORIES {
        for unit in catalog::units_for(kind) {
            let v = convert_auto(12.34, unit, unit).unwrap();
            assert_eq!(v, 12.34, "identity broken for {unit}");
        }
    }
}

#[test]
fn round_trip_recovers_value_within_tolerance() {
    let value = 7.25;
    for kind in catalog::CATEGORIES {
        let units = catalog::units_for(kind);
        let first = units[0];
        for unit in &units[1..] {
            let there = convert(kind, value, first, unit).unwrap();
            let back = convert(kind, there, unit, first).unwrap();
            assert!(
                (back - value).abs() < 1e-9,
                "round trip {first} -> {unit} -> {first}: {back}"
            );
        }
    }
}

#[test]
fn known_conversion_factors() {
    let m = convert_auto(1.0, "mile", "meter").unwrap();
    assert!((m - 1609.344).abs() < 1e-9);
    let g = convert_auto(1.0, "pound", "gram").unwrap();
    assert!((g - 453.592_37).abs() < 1e-9);
    let l = convert_auto(1.0, "gallon", "liter").unwrap();
    assert!((l - 3.785_411_784).abs() < 1e-9);
    let mps = convert_auto(36.0, "kilometer/hour", "meter/second").unwrap();
    assert!((mps - 10.0).abs() < 1e-9);
    let s = convert_auto(1.0, "day", "second").unwrap();
    assert!((s - 86_400.0).abs() < 1e-9);
    let min = convert_auto(2.5, "hour", "minute").unwrap();
    assert!((min - 150.0).abs() < 1e-9);
}

#[test]
fn abbreviations_match_full_identifiers() {
    let full = convert_auto(3.0, "kilometer", "mile").unwrap();
    let short = convert_auto(3.0, "km", "mi").unwrap();
    assert_eq!(full, short);
    let full = convert_auto(50.0, "mile/hour", "foot/second").unwrap();
    let short = convert_auto(50.0, "mph", "fps").unwrap();
    assert_eq!(full, short);
}

#[test]
fn incompatible_dimensions_are_rejected() {
    let err = convert_auto(5.0, "meter", "kilogram").unwrap_err();
    match err {
        ConversionError::IncompatibleUnits { from, to } => {
            assert_eq!(from, "meter");
            assert_eq!(to, "kilogram");
        }
        other => panic!("expected IncompatibleUnits, got {other:?}"),
    }
}

#[test]
fn unknown_units_are_rejected() {
    let err = convert_auto(1.0, "parsec", "meter").unwrap_err();
    assert_eq!(err, ConversionError::UnknownUnit("parsec".to_string()));
    // kind를 고정한 변환에서도 다른 물리량의 단위는 미등록으로 처리된다.
    let err = convert(QuantityKind::Length, 1.0, "meter", "kilogram").unwrap_err();
    assert_eq!(err, ConversionError::UnknownUnit("kilogram".to_string()));
}

#[test]
fn kind_of_unit_detects_category_from_aliases() {
    assert_eq!(kind_of_unit("mph"), Some(QuantityKind::Speed));
    assert_eq!(kind_of_unit("°C"), Some(QuantityKind::Temperature));
    assert_eq!(kind_of_unit("min"), Some(QuantityKind::Time));
    assert_eq!(kind_of_unit("oz"), Some(QuantityKind::Weight));
    assert_eq!(kind_of_unit("parsec"), None);
}
