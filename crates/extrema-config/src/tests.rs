//! Tests for Extrema configuration.

use super::*;

#[test]
fn test_defaults() {
    let config = ExtremaConfig::default();
    assert_eq!(config.dataset.path, None);
    assert_eq!(
        config.dataset.category_column.as_deref(),
        Some("product_category")
    );
    assert_eq!(
        config.dataset.value.required_columns(),
        vec!["transaction_qty", "unit_price"]
    );
    assert_eq!(config.sweep.max_size, 5000);
    assert_eq!(config.sweep.step, 100);
    assert_eq!(config.sweep.repeat_count, 3);
    assert_eq!(config.sweep.recursion_ceiling, Some(2000));
    assert_eq!(config.search.size, 10_000);
    assert_eq!(config.search.recursion_ceiling, Some(1_000_000));
    assert_eq!(config.samples.min_value, 50_000);
    assert_eq!(config.samples.max_value, 5_000_000);
}

#[test]
fn test_toml_parsing() {
    let toml = r#"
        [dataset]
        path = "coffee.csv"
        category_column = "store_location"

        [dataset.value]
        type = "column"
        name = "amount"

        [samples]
        seed = 42

        [sweep]
        max_size = 1000
        step = 100
        repeat_count = 2
        recursion_ceiling = 500

        [search]
        size = 2500
    "#;

    let config = ExtremaConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.dataset.path, Some(PathBuf::from("coffee.csv")));
    assert_eq!(
        config.dataset.value,
        ValueColumn::Column {
            name: "amount".to_string()
        }
    );
    assert_eq!(config.samples.seed, Some(42));
    assert_eq!(config.samples.max_value, 5_000_000);
    assert_eq!(config.sweep.max_size, 1000);
    assert_eq!(config.sweep.recursion_ceiling, Some(500));
    assert_eq!(config.sweep.warmup_count, 0);
    assert_eq!(config.search.size, 2500);
    assert_eq!(config.search.recursion_ceiling, Some(1_000_000));
}

#[test]
fn test_toml_revenue_defaults_columns() {
    let toml = r#"
        [dataset.value]
        type = "revenue"
        price_column = "price"
    "#;

    let config = ExtremaConfig::from_toml_str(toml).unwrap();
    assert_eq!(
        config.dataset.value.required_columns(),
        vec!["transaction_qty", "price"]
    );
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        sweep:
          max_size: 4000
          step: 1000
          repeat_count: 10
          recursion_ceiling: null
        search:
          size: 1000
    "#;

    let config = ExtremaConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.sweep.max_size, 4000);
    assert_eq!(config.sweep.repeat_count, 10);
    assert_eq!(config.sweep.recursion_ceiling, None);
    assert_eq!(config.search.size, 1000);
}

#[test]
fn test_load_by_extension() {
    let dir = tempfile::tempdir().unwrap();

    let toml_path = dir.path().join("extrema.toml");
    std::fs::write(&toml_path, "[sweep]\nstep = 500\nmax_size = 5000\n").unwrap();
    assert_eq!(ExtremaConfig::load(&toml_path).unwrap().sweep.step, 500);

    let yaml_path = dir.path().join("extrema.yml");
    std::fs::write(&yaml_path, "sweep:\n  step: 250\n").unwrap();
    assert_eq!(ExtremaConfig::load(&yaml_path).unwrap().sweep.step, 250);
}

#[test]
fn test_load_missing_file() {
    let result = ExtremaConfig::load("definitely/not/here.toml");
    assert!(matches!(result, Err(ConfigError::Io(_))));
}

#[test]
fn test_invalid_toml() {
    let result = ExtremaConfig::from_toml_str("[sweep]\nstep = \"many\"\n");
    assert!(matches!(result, Err(ConfigError::Toml(_))));
}

#[test]
fn test_validate() {
    let mut config = ExtremaConfig::default();
    config.samples.min_value = 10;
    config.samples.max_value = 1;
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

    let mut config = ExtremaConfig::default();
    config.sweep.repeat_count = 0;
    assert!(config.validate().is_err());

    let mut config = ExtremaConfig::default();
    config.sweep.max_size = 50;
    assert!(config.validate().is_err());

    let mut config = ExtremaConfig::default();
    config.search.size = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_builder() {
    let config = ExtremaConfig::new()
        .with_dataset_path("data.csv")
        .with_seed(123);

    assert_eq!(config.dataset.path, Some(PathBuf::from("data.csv")));
    assert_eq!(config.samples.seed, Some(123));
    assert!(config.validate().is_ok());
}
