//! Delimited tabular reader for labeled numeric data.
//!
//! Reads a CSV-style file into a [`Dataset`]: one configurable column is
//! mapped to a binary label through a positive-class token, every remaining
//! non-ignored column is coerced to `f32`, and rows holding any missing or
//! non-numeric value are dropped (and counted), matching the coerce-then-drop
//! cleaning step of the upstream analysis.
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use csv::StringRecord;

use crate::data_handling::Dataset;
use crate::math::{Array1, Array2};

/// Configuration for reading delimited label + feature files.
#[derive(Debug, Clone)]
pub struct TabularReaderConfig {
    /// Field delimiter byte.
    pub delimiter: u8,
    /// Whether the first row names the columns.
    pub has_headers: bool,
    /// Column names for headerless files; ignored when `has_headers` is set.
    pub column_names: Option<Vec<String>>,
    /// Column holding the class label.
    pub label_column: String,
    /// Label value mapped to 1; every other value maps to 0.
    pub positive_label: String,
    /// Columns excluded from the feature matrix (identifiers and the like).
    pub ignore_columns: Vec<String>,
}

impl Default for TabularReaderConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            has_headers: true,
            column_names: None,
            label_column: "diagnosis".to_string(),
            positive_label: "M".to_string(),
            ignore_columns: vec!["id".to_string()],
        }
    }
}

/// Read a delimited file into a labeled dataset.
pub fn read_delimited<P: AsRef<Path>>(path: P, config: &TabularReaderConfig) -> Result<Dataset> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(config.delimiter)
        .has_headers(config.has_headers)
        .flexible(true)
        .from_path(&path)
        .with_context(|| format!("Failed to open data file: {}", path.as_ref().display()))?;

    let column_names: Vec<String> = if config.has_headers {
        reader
            .headers()
            .context("Failed to read header row")?
            .iter()
            .map(|name| name.trim().to_string())
            .collect()
    } else {
        config
            .column_names
            .clone()
            .ok_or_else(|| anyhow!("column_names are required for a headerless file"))?
    };

    let label_idx = column_names
        .iter()
        .position(|name| name == &config.label_column)
        .ok_or_else(|| anyhow!("Missing label column '{}'", config.label_column))?;

    let feature_columns: Vec<(usize, String)> = column_names
        .iter()
        .enumerate()
        .filter(|(idx, name)| *idx != label_idx && !config.ignore_columns.contains(name))
        .map(|(idx, name)| (idx, name.clone()))
        .collect();
    if feature_columns.is_empty() {
        return Err(anyhow!("No feature columns left after exclusions"));
    }

    let mut rows: Vec<Vec<f32>> = Vec::new();
    let mut labels: Vec<u8> = Vec::new();
    let mut dropped = 0usize;

    for (line, record) in reader.records().enumerate() {
        let record =
            record.with_context(|| format!("Failed to parse record on line {}", line + 1))?;
        match parse_row(&record, label_idx, &feature_columns, &config.positive_label) {
            Some((features, label)) => {
                rows.push(features);
                labels.push(label);
            }
            None => dropped += 1,
        }
    }

    if dropped > 0 {
        log::warn!("dropped {} rows with missing or non-numeric values", dropped);
    }
    if rows.is_empty() {
        return Err(anyhow!(
            "No usable rows in {}",
            path.as_ref().display()
        ));
    }

    let feature_names: Vec<String> = feature_columns.into_iter().map(|(_, name)| name).collect();
    let x = Array2::from_rows(&rows).map_err(|e| anyhow!("Inconsistent row widths: {}", e))?;
    let dataset = Dataset::new(x, Array1::from_vec(labels), feature_names)?;
    log::debug!(
        "loaded {} samples x {} features from {}",
        dataset.n_samples(),
        dataset.n_features(),
        path.as_ref().display()
    );
    Ok(dataset)
}

/// Coerce one record into features + label, or `None` when any value is
/// missing or fails numeric parsing.
fn parse_row(
    record: &StringRecord,
    label_idx: usize,
    feature_columns: &[(usize, String)],
    positive_label: &str,
) -> Option<(Vec<f32>, u8)> {
    let label_field = record.get(label_idx)?.trim();
    if label_field.is_empty() {
        return None;
    }
    let label = u8::from(label_field == positive_label);

    let mut features = Vec::with_capacity(feature_columns.len());
    for (idx, _) in feature_columns {
        let field = record.get(*idx)?.trim();
        let value: f32 = field.parse().ok()?;
        if !value.is_finite() {
            return None;
        }
        features.push(value);
    }
    Some((features, label))
}
