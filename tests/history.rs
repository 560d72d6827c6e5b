//! 변환 기록 저장소 회귀 테스트.
use std::fs;
use tempfile::tempdir;
use universal_unit_converter::catalog;
use universal_unit_converter::history::{ConversionRecord, HistoryStore};

#[test]
fn missing_file_seeds_every_catalog_category() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("conversion_history.json");
    let store = HistoryStore::load(path);
    for kind in catalog::CATEGORIES {
        assert_eq!(store.record_count(catalog::category_name(kind)), 0);
    }
}

#[test]
fn corrupted_file_recovers_to_empty_store() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("conversion_history.json");
    fs::write(&path, "{ this is not json").unwrap();
    let store = HistoryStore::load(&path);
    for kind in catalog::CATEGORIES {
        assert_eq!(store.record_count(catalog::category_name(kind)), 0);
    }
}

#[test]
fn append_then_reload_round_trip() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("conversion_history.json");
    let record = ConversionRecord::new(100.0, "celsius", "fahrenheit", 212.0);
    {
        let mut store = HistoryStore::load(&path);
        store.append("Temperature", record.clone()).unwrap();
    }
    let store = HistoryStore::load(&path);
    let records = store.view("Temperature");
    assert_eq!(records.last(), Some(&record));
}

#[test]
fn append_preserves_insertion_order() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("conversion_history.json");
    let mut store = HistoryStore::load(&path);
    for value in [1.0, 2.0, 3.0] {
        let record = ConversionRecord::new(value, "meter", "foot", value / 0.3048);
        store.append("Length", record).unwrap();
    }
    let values: Vec<f64> = store.view("Length").iter().map(|r| r.value).collect();
    assert_eq!(values, vec![1.0, 2.0, 3.0]);
}

#[test]
fn clear_only_affects_target_category() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("conversion_history.json");
    let mut store = HistoryStore::load(&path);
    store
        .append("Length", ConversionRecord::new(1.0, "meter", "foot", 3.280_839_895))
        .unwrap();
    store
        .append("Weight", ConversionRecord::new(1.0, "kilogram", "pound", 2.204_622_622))
        .unwrap();
    store.clear("Length").unwrap();
    assert_eq!(store.record_count("Length"), 0);
    assert_eq!(store.record_count("Weight"), 1);

    // 재로드 후에도 같은 상태가 유지된다.
    let store = HistoryStore::load(&path);
    assert_eq!(store.record_count("Length"), 0);
    assert_eq!(store.record_count("Weight"), 1);
}

#[test]
fn wire_format_field_names_are_stable() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("conversion_history.json");
    let mut store = HistoryStore::load(&path);
    store
        .append("Length", ConversionRecord::new(1.0, "meter", "foot", 3.280_839_895))
        .unwrap();
    let content = fs::read_to_string(&path).unwrap();
    for field in ["\"Value\"", "\"From\"", "\"To\"", "\"Result\""] {
        assert!(content.contains(field), "missing {field} in {content}");
    }
    assert!(content.contains("3.2808"));
}

#[test]
fn unknown_categories_survive_a_round_trip() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("conversion_history.json");
    fs::write(
        &path,
        r#"{ "Currency": [{ "Value": 1.0, "From": "usd", "To": "eur", "Result": "0.9000" }] }"#,
    )
    .unwrap();
    let mut store = HistoryStore::load(&path);
    assert_eq!(store.record_count("Currency"), 1);
    // 다른 카테고리를 갱신해도 미등록 카테고리는 함께 저장된다.
    store
        .append("Length", ConversionRecord::new(1.0, "meter", "foot", 3.280_839_895))
        .unwrap();
    let store = HistoryStore::load(&path);
    assert_eq!(store.record_count("Currency"), 1);
    assert_eq!(store.record_count("Length"), 1);
}

#[test]
fn record_result_is_formatted_to_four_decimals() {
    let record = ConversionRecord::new(1.0, "meter", "foot", 3.280_839_895);
    assert_eq!(record.result, "3.2808");
    let record = ConversionRecord::new(0.0, "celsius", "fahrenheit", 32.0);
    assert_eq!(record.result, "32.0000");
}
