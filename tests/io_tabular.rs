//! Integration tests for the delimited tabular reader.

use std::path::PathBuf;

use perceptron_classifiers::io::{read_delimited, TabularReaderConfig};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data")
        .join(name)
}

#[test]
fn reads_labels_features_and_names() {
    let dataset =
        read_delimited(fixture("diagnosis_small.csv"), &TabularReaderConfig::default()).unwrap();

    // Two rows carry a non-numeric or missing value and get dropped.
    assert_eq!(dataset.n_samples(), 5);
    assert_eq!(dataset.n_features(), 2);
    assert_eq!(
        dataset.feature_names,
        vec!["radius_mean".to_string(), "texture_mean".to_string()]
    );

    // 'M' maps to 1, everything else to 0; the id column is ignored.
    assert_eq!(dataset.y.to_vec(), vec![0u8, 1, 0, 1, 1]);
    assert_eq!(dataset.x.row_slice(0), &[1.2, 0.8]);
    assert_eq!(dataset.x.row_slice(4), &[3.6, 2.8]);
}

#[test]
fn missing_label_column_is_an_error() {
    let config = TabularReaderConfig {
        label_column: "outcome".to_string(),
        ..TabularReaderConfig::default()
    };
    let err = read_delimited(fixture("diagnosis_small.csv"), &config).unwrap_err();
    assert!(err.to_string().contains("outcome"));
}

#[test]
fn missing_file_is_an_error() {
    let err =
        read_delimited(fixture("no_such_file.csv"), &TabularReaderConfig::default()).unwrap_err();
    assert!(err.to_string().contains("no_such_file.csv"));
}

#[test]
fn headerless_files_need_column_names() {
    let config = TabularReaderConfig {
        has_headers: false,
        column_names: None,
        ..TabularReaderConfig::default()
    };
    let err = read_delimited(fixture("diagnosis_small.csv"), &config).unwrap_err();
    assert!(err.to_string().contains("column_names"));
}

#[test]
fn headerless_read_with_supplied_names() {
    let config = TabularReaderConfig {
        has_headers: false,
        column_names: Some(
            ["id", "diagnosis", "radius_mean", "texture_mean"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        ),
        ..TabularReaderConfig::default()
    };
    // The header row now parses as data; its feature fields are not numeric,
    // so it is simply dropped like any other dirty row.
    let dataset = read_delimited(fixture("diagnosis_small.csv"), &config).unwrap();
    assert_eq!(dataset.n_samples(), 5);
    assert_eq!(dataset.n_features(), 2);
}
