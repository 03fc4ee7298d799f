//! Tabular records and typed column extraction.
//!
//! A [`Dataset`] is an ordered sequence of [`Record`]s. Every record is
//! expected to carry the same keys, and each key holds values of a single
//! [`FieldKind`] across all records. The kind is inferred once, from the
//! first record, and every other record is checked against it.
//!
//! # Example
//!
//! ```rust
//! use tabular_codec::dataset::{Column, Record};
//!
//! let dataset: Vec<Record> = vec![
//!     [("planet", "mars")].into_iter().collect(),
//!     [("planet", "saturn")].into_iter().collect(),
//! ];
//!
//! let column = Column::extract(&dataset, "planet").unwrap();
//! assert!(matches!(column, Column::String(ref v) if v == &["mars", "saturn"]));
//! ```

mod record;

pub use record::{Record, Value};

use crate::preprocessing::error::PreprocessingError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An ordered sequence of records.
pub type Dataset = Vec<Record>;

/// The value type of a field, inferred from its first record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    String,
    Number,
    Boolean,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FieldKind::String => "string",
            FieldKind::Number => "number",
            FieldKind::Boolean => "boolean",
        })
    }
}

/// All values of one field, typed by the field's inferred kind.
#[derive(Clone, Debug, PartialEq)]
pub enum Column<'a> {
    String(Vec<&'a str>),
    Number(Vec<f64>),
    Boolean(Vec<bool>),
}

impl<'a> Column<'a> {
    /// Extract the column stored under `key`.
    ///
    /// # Errors
    /// - [`PreprocessingError::EmptyData`] if `dataset` is empty.
    /// - [`PreprocessingError::MissingField`] if any record lacks `key`.
    /// - [`PreprocessingError::TypeMismatch`] if a record's value kind differs
    ///   from the kind of the first record's value.
    pub fn extract(dataset: &'a [Record], key: &str) -> Result<Self, PreprocessingError> {
        let first = dataset
            .first()
            .ok_or_else(|| PreprocessingError::EmptyData("dataset has no records".to_string()))?;
        let kind = lookup(first, key, 0)?.kind();

        let mut column = match kind {
            FieldKind::String => Column::String(Vec::with_capacity(dataset.len())),
            FieldKind::Number => Column::Number(Vec::with_capacity(dataset.len())),
            FieldKind::Boolean => Column::Boolean(Vec::with_capacity(dataset.len())),
        };

        for (row, record) in dataset.iter().enumerate() {
            match (&mut column, lookup(record, key, row)?) {
                (Column::String(values), Value::String(s)) => values.push(s.as_str()),
                (Column::Number(values), Value::Number(n)) => values.push(*n),
                (Column::Boolean(values), Value::Boolean(b)) => values.push(*b),
                (_, other) => {
                    return Err(PreprocessingError::TypeMismatch {
                        key: key.to_string(),
                        row,
                        expected: kind,
                        found: other.kind(),
                    })
                }
            }
        }

        Ok(column)
    }
}

fn lookup<'a>(record: &'a Record, key: &str, row: usize) -> Result<&'a Value, PreprocessingError> {
    record
        .get(key)
        .ok_or_else(|| PreprocessingError::MissingField {
            key: key.to_string(),
            row,
        })
}

/// Keys of the first record, in insertion order. Empty for an empty dataset.
pub fn first_record_keys(dataset: &[Record]) -> Vec<String> {
    dataset
        .first()
        .map(|r| r.keys().map(str::to_string).collect())
        .unwrap_or_default()
}
