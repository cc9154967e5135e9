use serde::Serialize;

use super::model::{Dataset, Scalar};

// ---------------------------------------------------------------------------
// Column classification
// ---------------------------------------------------------------------------

/// Whether a column holds quantities or labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Numeric,
    Categorical,
}

/// Classification of every column of a dataset.
///
/// Derived on demand and never cached: call [`classify`] again whenever the
/// dataset changes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Schema {
    /// All column names, in column order.
    pub columns: Vec<String>,
    /// Numeric columns, in column order.
    pub numeric: Vec<String>,
    /// Categorical columns, in column order.
    pub categorical: Vec<String>,
}

impl Schema {
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Classify every column of `dataset`. Never fails; an empty dataset gives
/// an empty schema.
pub fn classify(dataset: &Dataset) -> Schema {
    let columns = column_names(dataset);
    let (numeric, categorical): (Vec<String>, Vec<String>) = columns
        .iter()
        .cloned()
        .partition(|col| column_kind(dataset, col) == ColumnKind::Numeric);

    log::debug!("classified columns: numeric={numeric:?} categorical={categorical:?}");
    Schema {
        columns,
        numeric,
        categorical,
    }
}

/// Column names: the first record's keys in order, followed by keys first
/// seen in later records, in encounter order.
pub fn column_names(dataset: &Dataset) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for record in dataset {
        for key in record.keys() {
            if !names.iter().any(|n| n == key) {
                names.push(key.to_string());
            }
        }
    }
    names
}

pub fn numeric_columns(dataset: &Dataset) -> Vec<String> {
    classify(dataset).numeric
}

pub fn categorical_columns(dataset: &Dataset) -> Vec<String> {
    classify(dataset).categorical
}

/// A column is numeric when it has at least one non-null value and every
/// non-null value reads as a finite number. Booleans count as categorical.
pub fn column_kind(dataset: &Dataset, column: &str) -> ColumnKind {
    let mut values = dataset
        .iter()
        .filter_map(|record| record.get(column))
        .filter(|value| !value.is_null())
        .peekable();

    if values.peek().is_none() {
        return ColumnKind::Categorical;
    }
    if values.all(Scalar::is_numeric) {
        ColumnKind::Numeric
    } else {
        ColumnKind::Categorical
    }
}
