//! 카탈로그 일관성 테스트.
use universal_unit_converter::catalog::{self, CatalogError};
use universal_unit_converter::conversion::kind_of_unit;
use universal_unit_converter::quantity::QuantityKind;

#[test]
fn categories_keep_display_order() {
    let names: Vec<&str> = catalog::CATEGORIES
        .into_iter()
        .map(catalog::category_name)
        .collect();
    assert_eq!(
        names,
        vec!["Length", "Weight", "Volume", "Temperature", "Speed", "Time"]
    );
}

#[test]
fn every_catalog_identifier_parses_to_its_own_category() {
    for kind in catalog::CATEGORIES {
        for unit in catalog::units_for(kind) {
            assert_eq!(kind_of_unit(unit), Some(kind), "identifier {unit}");
        }
    }
}

#[test]
fn find_category_ignores_case_and_whitespace() {
    assert_eq!(
        catalog::find_category("length").unwrap(),
        QuantityKind::Length
    );
    assert_eq!(
        catalog::find_category(" TEMPERATURE ").unwrap(),
        QuantityKind::Temperature
    );
}

#[test]
fn unknown_category_is_reported() {
    let err = catalog::find_category("Currency").unwrap_err();
    assert_eq!(err, CatalogError::NotFound("Currency".to_string()));
}

#[test]
fn default_unit_pairs_belong_to_their_category() {
    for kind in catalog::CATEGORIES {
        let units = catalog::units_for(kind);
        let (from, to) = catalog::default_units_for(kind);
        assert!(units.contains(&from), "{from} not in {kind:?}");
        assert!(units.contains(&to), "{to} not in {kind:?}");
        assert_ne!(from, to);
    }
}
