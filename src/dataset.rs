//! Training table loading and encoding.
//!
//! A training file is a comma-separated table with a header row. It must carry one
//! column per interest indicator plus a `Courses` column with the target label.
//! Columns are matched by header name, so their order in the file is irrelevant.

use std::collections::{BTreeSet, HashMap};
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, Trim};
use thiserror::Error;

use crate::interests::{INTEREST_COUNT, INTEREST_NAMES};

/// Header of the target label column.
pub const LABEL_COLUMN: &str = "Courses";

/// Errors raised while reading or encoding a training table.
#[derive(Debug, Error)]
pub enum TrainingDataError {
    #[error("Failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Malformed CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("Missing required columns: {}", .missing.join(", "))]
    MissingColumns { missing: Vec<String> },
    #[error("Training file has no data rows")]
    NoRows,
    #[error("Row {row} has an empty Courses value")]
    EmptyLabel { row: usize },
    #[error("Need at least 2 distinct courses, found {found}")]
    TooFewClasses { found: usize },
}

/// Label encoder fitted on a set of strings: classes are the sorted unique values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelEncoder {
    classes: Vec<String>,
}

impl LabelEncoder {
    pub fn fit<'a>(values: impl IntoIterator<Item = &'a str>) -> Self {
        let unique: BTreeSet<&str> = values.into_iter().collect();
        Self {
            classes: unique.into_iter().map(str::to_string).collect(),
        }
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn into_classes(self) -> Vec<String> {
        self.classes
    }

    pub fn transform(&self, value: &str) -> Option<usize> {
        self.classes
            .binary_search_by(|class| class.as_str().cmp(value))
            .ok()
    }
}

/// Raw string cells for the required columns, in canonical indicator order.
#[derive(Debug, Clone)]
pub struct TrainingTable {
    /// `features[row][indicator]`.
    features: Vec<Vec<String>>,
    labels: Vec<String>,
}

/// Numeric training rows plus the fitted label mapping.
#[derive(Debug, Clone)]
pub struct EncodedDataset {
    pub x: Vec<Vec<f32>>,
    pub y: Vec<usize>,
    pub classes: Vec<String>,
}

impl TrainingTable {
    /// Read a training table from a file path.
    pub fn from_path(path: &Path) -> Result<Self, TrainingDataError> {
        let file = std::fs::File::open(path).map_err(|source| TrainingDataError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(file)
    }

    /// Read a training table from any CSV byte stream.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, TrainingDataError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(Trim::All)
            .from_reader(reader);
        let headers = reader.headers()?.clone();
        let positions: HashMap<&str, usize> = headers
            .iter()
            .enumerate()
            .map(|(idx, name)| (name, idx))
            .collect();

        let mut missing = Vec::new();
        let mut feature_columns = Vec::with_capacity(INTEREST_COUNT);
        for name in INTEREST_NAMES {
            match positions.get(name) {
                Some(&idx) => feature_columns.push(idx),
                None => missing.push(name.to_string()),
            }
        }
        let label_column = positions.get(LABEL_COLUMN).copied();
        if label_column.is_none() {
            missing.push(LABEL_COLUMN.to_string());
        }
        let Some(label_column) = label_column.filter(|_| missing.is_empty()) else {
            return Err(TrainingDataError::MissingColumns { missing });
        };

        let mut features = Vec::new();
        let mut labels = Vec::new();
        for record in reader.records() {
            let record = record?;
            let row: Vec<String> = feature_columns
                .iter()
                .map(|&idx| record.get(idx).unwrap_or_default().to_string())
                .collect();
            features.push(row);
            labels.push(record.get(label_column).unwrap_or_default().to_string());
        }
        if labels.is_empty() {
            return Err(TrainingDataError::NoRows);
        }
        Ok(Self { features, labels })
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Encode every column to numbers and fit the label mapping.
    pub fn encode(&self) -> Result<EncodedDataset, TrainingDataError> {
        if let Some(row) = self.labels.iter().position(|label| label.is_empty()) {
            return Err(TrainingDataError::EmptyLabel { row: row + 1 });
        }
        let encoder = LabelEncoder::fit(self.labels.iter().map(String::as_str));
        if encoder.classes().len() < 2 {
            return Err(TrainingDataError::TooFewClasses {
                found: encoder.classes().len(),
            });
        }
        let y = self
            .labels
            .iter()
            .filter_map(|label| encoder.transform(label))
            .collect();

        let mut x = vec![vec![0.0f32; INTEREST_COUNT]; self.len()];
        for column in 0..INTEREST_COUNT {
            let cells = self.features.iter().map(|row| row[column].as_str());
            for (row, value) in encode_feature_column(cells).into_iter().enumerate() {
                x[row][column] = value;
            }
        }

        Ok(EncodedDataset {
            x,
            y,
            classes: encoder.into_classes(),
        })
    }
}

/// Keep numeric columns as they are; label-encode anything else.
fn encode_feature_column<'a>(cells: impl Iterator<Item = &'a str> + Clone) -> Vec<f32> {
    let numeric: Option<Vec<f32>> = cells
        .clone()
        .map(|cell| cell.parse::<f32>().ok().filter(|v| v.is_finite()))
        .collect();
    if let Some(values) = numeric {
        return values;
    }
    let encoder = LabelEncoder::fit(cells.clone());
    cells
        .map(|cell| encoder.transform(cell).unwrap_or(0) as f32)
        .collect()
}
