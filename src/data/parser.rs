use std::fmt;

use serde_json::Value as JsonValue;

use super::error::{ParseError, ParseResult};
use super::model::{parse_finite, Dataset, Record, Scalar};

// ---------------------------------------------------------------------------
// Input format
// ---------------------------------------------------------------------------

/// The declared format of pasted text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DataFormat {
    #[default]
    Csv,
    Json,
}

impl DataFormat {
    pub const ALL: [DataFormat; 2] = [DataFormat::Csv, DataFormat::Json];

    pub fn label(self) -> &'static str {
        match self {
            DataFormat::Csv => "CSV",
            DataFormat::Json => "JSON",
        }
    }
}

impl fmt::Display for DataFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DataFormat::Csv => "csv",
            DataFormat::Json => "json",
        })
    }
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Parse raw text into a [`Dataset`].  Dispatch by declared format.
pub fn parse_data(raw: &str, format: DataFormat) -> ParseResult<Dataset> {
    if raw.trim().is_empty() {
        return Err(ParseError::EmptyInput);
    }
    let dataset = match format {
        DataFormat::Csv => parse_csv(raw)?,
        DataFormat::Json => parse_json(raw)?,
    };
    log::debug!("parsed {} {format} records", dataset.len());
    Ok(dataset)
}

// ---------------------------------------------------------------------------
// CSV
// ---------------------------------------------------------------------------

/// Header row followed by data rows, RFC 4180 quoting.
///
/// Blank records (every field empty after trimming) are skipped, so the
/// first non-blank record is the header. Quoted fields are passed through
/// untouched, blank lines inside them included. Rows shorter or longer than
/// the header are zipped up to the shorter length: missing trailing cells
/// are simply absent from the record.
pub fn parse_csv(raw: &str) -> ParseResult<Dataset> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(raw.as_bytes());

    let mut rows = reader.records().filter(|row| match row {
        Ok(row) => !is_blank(row),
        Err(_) => true,
    });

    let headers: Vec<String> = match rows.next() {
        Some(row) => row?.iter().map(str::to_string).collect(),
        None => return Err(ParseError::EmptyInput),
    };

    let mut records = Vec::new();
    for row in rows {
        let row = row?;
        let record: Record = headers
            .iter()
            .zip(row.iter())
            .map(|(name, field)| (name.as_str(), coerce_field(field)))
            .collect();
        records.push(record);
    }

    Ok(Dataset::from_records(records))
}

fn is_blank(row: &csv::StringRecord) -> bool {
    row.iter().all(|field| field.trim().is_empty())
}

/// Coerce one raw CSV field: a whole-string finite number becomes
/// [`Scalar::Number`], anything else (including the empty string) stays text.
pub fn coerce_field(field: &str) -> Scalar {
    let field = field.trim();
    match parse_finite(field) {
        Some(n) => Scalar::Number(n),
        None => Scalar::String(field.to_string()),
    }
}

// ---------------------------------------------------------------------------
// JSON
// ---------------------------------------------------------------------------

/// Expected layout (records-oriented):
///
/// ```json
/// [
///   { "name": "Product A", "value": 42, "category": "Electronics" },
///   { "name": "Product B", "value": 28, "category": "Clothing" }
/// ]
/// ```
///
/// Each object keeps its own keys in source order; no unification of key
/// sets happens here.
pub fn parse_json(raw: &str) -> ParseResult<Dataset> {
    let root: JsonValue = serde_json::from_str(raw)?;

    let items = match root {
        JsonValue::Array(items) => items,
        other => {
            return Err(ParseError::UnexpectedShape {
                found: describe(&other).to_string(),
            })
        }
    };

    let records = items
        .into_iter()
        .enumerate()
        .map(|(i, item)| match item {
            JsonValue::Object(obj) => Ok(obj
                .into_iter()
                .map(|(key, val)| (key, json_to_scalar(val)))
                .collect::<Record>()),
            other => Err(ParseError::UnexpectedShape {
                found: format!("{} at index {i}", describe(&other)),
            }),
        })
        .collect::<ParseResult<Vec<_>>>()?;

    Ok(Dataset::from_records(records))
}

/// Nested arrays and objects are flattened to their JSON text.
fn json_to_scalar(val: JsonValue) -> Scalar {
    match val {
        JsonValue::String(s) => Scalar::String(s),
        JsonValue::Number(n) => Scalar::Number(n.as_f64().unwrap_or_default()),
        JsonValue::Bool(b) => Scalar::Bool(b),
        JsonValue::Null => Scalar::Null,
        other => Scalar::String(other.to_string()),
    }
}

fn describe(val: &JsonValue) -> &'static str {
    match val {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}
