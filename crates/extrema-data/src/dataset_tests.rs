//! Tests for table loading

use extrema_config::{DatasetConfig, ValueColumn};

use super::dataset::*;
use super::error::DataError;

const COFFEE_SHOP: &str = "\
transaction_id,transaction_date,transaction_qty,unit_price,product_category
1,2023-01-01,2,3.0,Coffee
2,2023-01-01,1,2.5,Tea
3,2023-01-02,4,2.5,Coffee
4,2023-01-02,1,,Bakery
5,2023-01-03,x,1.0,Tea
6,2023-01-03,3,4.75,Bakery
";

#[test]
fn test_revenue_is_quantity_times_price() {
    let dataset = Dataset::from_reader(COFFEE_SHOP.as_bytes(), &DatasetConfig::default()).unwrap();

    assert_eq!(dataset.values(), vec![6.0, 2.5, 10.0, 14.25]);
    assert_eq!(dataset.len(), 4);
    assert_eq!(dataset.skipped(), 2);
    assert!(dataset.has_categories());
    assert_eq!(dataset.records()[1].category.as_deref(), Some("Tea"));
}

#[test]
fn test_single_column_value() {
    let config = DatasetConfig {
        value: ValueColumn::Column {
            name: "unit_price".to_string(),
        },
        category_column: None,
        ..DatasetConfig::default()
    };

    let dataset = Dataset::from_reader(COFFEE_SHOP.as_bytes(), &config).unwrap();
    assert_eq!(dataset.values(), vec![3.0, 2.5, 2.5, 1.0, 4.75]);
    assert_eq!(dataset.skipped(), 1);
    assert!(!dataset.has_categories());
}

#[test]
fn test_missing_value_column() {
    let config = DatasetConfig {
        value: ValueColumn::Column {
            name: "discount".to_string(),
        },
        ..DatasetConfig::default()
    };

    let err = Dataset::from_reader(COFFEE_SHOP.as_bytes(), &config).unwrap_err();
    assert!(matches!(err, DataError::MissingColumn(ref c) if c == "discount"));
}

#[test]
fn test_missing_category_column_is_not_fatal() {
    let csv = "transaction_qty,unit_price\n2,2\n3,3\n";
    let dataset = Dataset::from_reader(csv.as_bytes(), &DatasetConfig::default()).unwrap();
    assert_eq!(dataset.values(), vec![4.0, 9.0]);
    assert!(!dataset.has_categories());
}

#[test]
fn test_no_usable_rows() {
    let csv = "transaction_qty,unit_price\n,1\nabc,2\n";
    let err = Dataset::from_reader(csv.as_bytes(), &DatasetConfig::default()).unwrap_err();
    assert!(matches!(err, DataError::NoUsableRows { skipped: 2 }));
}

#[test]
fn test_short_rows_and_non_finite_values_are_skipped() {
    let csv = "transaction_qty,unit_price\n2\ninf,1\n1,NaN\n5,2\n";
    let dataset = Dataset::from_reader(csv.as_bytes(), &DatasetConfig::default()).unwrap();
    assert_eq!(dataset.values(), vec![10.0]);
    assert_eq!(dataset.skipped(), 3);
}

#[test]
fn test_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("transactions.csv");
    std::fs::write(&path, COFFEE_SHOP).unwrap();

    let dataset = Dataset::load(&path, &DatasetConfig::default()).unwrap();
    assert_eq!(dataset.len(), 4);

    let missing = Dataset::load(dir.path().join("nope.csv"), &DatasetConfig::default());
    assert!(matches!(missing, Err(DataError::Io(_))));
}

#[test]
fn test_load_from_workbook() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("transactions.xlsx");

    let mut workbook = rust_xlsxwriter::Workbook::new();
    let sheet = workbook.add_worksheet();
    for (col, header) in ["transaction_qty", "unit_price", "product_category"]
        .iter()
        .enumerate()
    {
        sheet.write_string(0, col as u16, *header).unwrap();
    }
    sheet.write_number(1, 0, 2.0).unwrap();
    sheet.write_number(1, 1, 3.0).unwrap();
    sheet.write_string(1, 2, "Coffee").unwrap();
    sheet.write_number(2, 0, 1.0).unwrap();
    sheet.write_string(2, 2, "Tea").unwrap();
    sheet.write_number(3, 0, 4.0).unwrap();
    sheet.write_number(3, 1, 2.5).unwrap();
    sheet.write_string(3, 2, "Bakery").unwrap();
    workbook.save(&path).unwrap();

    let dataset = Dataset::load(&path, &DatasetConfig::default()).unwrap();
    assert_eq!(dataset.values(), vec![6.0, 10.0]);
    assert_eq!(dataset.skipped(), 1);
    assert_eq!(dataset.records()[1].category.as_deref(), Some("Bakery"));
}

#[test]
fn test_load_rejects_corrupt_workbook() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("transactions.xlsx");
    std::fs::write(&path, COFFEE_SHOP).unwrap();

    let result = Dataset::load(&path, &DatasetConfig::default());
    assert!(matches!(result, Err(DataError::Xlsx(_))));
}

#[test]
fn test_category_breakdown_from_loaded_rows() {
    let dataset = Dataset::from_reader(COFFEE_SHOP.as_bytes(), &DatasetConfig::default()).unwrap();
    let groups = crate::category_extrema(dataset.records());

    let names: Vec<&str> = groups.iter().map(|g| g.category.as_str()).collect();
    assert_eq!(names, vec!["Bakery", "Coffee", "Tea"]);

    let coffee = &groups[1];
    assert_eq!((coffee.minimum, coffee.maximum, coffee.count), (6.0, 10.0, 2));
    let bakery = &groups[0];
    assert_eq!((bakery.minimum, bakery.maximum, bakery.count), (14.25, 14.25, 1));
}

#[test]
fn test_generator_rejects_inverted_range() {
    let err = crate::SampleGenerator::new(10, 1, None).unwrap_err();
    assert!(matches!(err, DataError::InvalidSampleRange { min: 10, max: 1 }));
}

#[test]
fn test_generator_from_config() {
    let config = extrema_config::SampleConfig {
        seed: Some(3),
        min_value: -5,
        max_value: 5,
    };
    let samples = crate::SampleGenerator::from_config(&config)
        .unwrap()
        .generate(500);
    assert!(samples.iter().all(|v| (-5..=5).contains(v)));
    assert!(samples.iter().any(|&v| v != samples[0]));
}
