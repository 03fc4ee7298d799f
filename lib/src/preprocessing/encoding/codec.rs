//! Dataset-level encode/decode orchestration.

use super::decoder::total_width;
use super::{boolean, number, string, EncodedColumn, FieldDecoder};
use crate::dataset::{first_record_keys, Column, Record};
use crate::preprocessing::error::PreprocessingError;
use serde::{Deserialize, Serialize};

/// Which fields to encode, and in what order.
///
/// Data keys (independent variables) come first in every encoded row,
/// label keys (dependent variables) after them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EncodeOptions {
    /// `None` means every key of the first record, in record order.
    pub data_keys: Option<Vec<String>>,
    pub label_keys: Vec<String>,
}

impl EncodeOptions {
    /// All keys of the first record as data keys, no labels.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.data_keys = Some(keys.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_label_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.label_keys = keys.into_iter().map(Into::into).collect();
        self
    }

    /// Resolve the full traversal order: data keys, then label keys.
    fn resolve(&self, dataset: &[Record]) -> (Vec<String>, Vec<String>) {
        let data_keys = self
            .data_keys
            .clone()
            .unwrap_or_else(|| first_record_keys(dataset));
        (data_keys, self.label_keys.clone())
    }
}

/// Encoded rows plus the decoders needed to invert them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Encoded {
    /// Row-major feature matrix: data-key columns, then label-key columns.
    pub data: Vec<Vec<f64>>,
    /// One decoder per encoded field, in column order.
    pub decoders: Vec<FieldDecoder>,
}

impl Encoded {
    pub fn n_rows(&self) -> usize {
        self.data.len()
    }

    /// Row length, i.e. the sum of all decoder widths (saturating).
    pub fn n_columns(&self) -> usize {
        self.decoders
            .iter()
            .map(FieldDecoder::width)
            .fold(0, usize::saturating_add)
    }

    /// Copy the rows into a dense `(n_rows, n_columns)` array.
    #[cfg(feature = "ndarray")]
    pub fn to_array(&self) -> Result<ndarray::Array2<f64>, PreprocessingError> {
        let shape = (self.n_rows(), self.n_columns());
        let flat: Vec<f64> = self.data.iter().flatten().copied().collect();
        ndarray::Array2::from_shape_vec(shape, flat).map_err(|e| {
            PreprocessingError::InvalidParameter(format!("encoded rows are ragged: {}", e))
        })
    }
}

/// Encodes records into numeric rows and decodes them back.
///
/// The codec holds no state: every call to [`encode`](RecordCodec::encode)
/// computes fresh field statistics and returns fresh decoders.
#[derive(Clone, Copy, Debug, Default)]
pub struct RecordCodec;

impl RecordCodec {
    pub fn new() -> Self {
        Self
    }

    /// Encode `dataset` into numeric rows.
    ///
    /// Field statistics (lookup tables, mean, std) are computed over the full
    /// column before any row is assembled.
    ///
    /// # Errors
    /// - [`PreprocessingError::EmptyData`] if `dataset` is empty.
    /// - [`PreprocessingError::MissingField`] if a requested key is absent from a record.
    /// - [`PreprocessingError::TypeMismatch`] if a field's value kind is not consistent.
    /// - [`PreprocessingError::DegenerateColumn`] for a zero-variance number field.
    /// - [`PreprocessingError::NonNumericValue`] for NaN/infinite number values.
    pub fn encode(
        &self,
        dataset: &[Record],
        options: &EncodeOptions,
    ) -> Result<Encoded, PreprocessingError> {
        if dataset.is_empty() {
            return Err(PreprocessingError::EmptyData(
                "Cannot encode an empty dataset".to_string(),
            ));
        }

        let (data_keys, label_keys) = options.resolve(dataset);

        let mut columns: Vec<EncodedColumn> = Vec::with_capacity(data_keys.len() + label_keys.len());
        let mut decoders: Vec<FieldDecoder> = Vec::with_capacity(columns.capacity());
        // Label columns always land after every data column
        for key in data_keys.iter().chain(label_keys.iter()) {
            let (column, decoder) = encode_field(dataset, key)?;
            tracing::debug!(
                key = key.as_str(),
                kind = %decoder.kind(),
                width = column.width(),
                "Encoded field"
            );
            columns.push(column);
            decoders.push(decoder);
        }

        let n_columns: usize = columns.iter().map(EncodedColumn::width).sum();
        let data: Vec<Vec<f64>> = (0..dataset.len())
            .map(|row| {
                let mut encoded = Vec::with_capacity(n_columns);
                for column in &columns {
                    encoded.extend_from_slice(column.row(row));
                }
                debug_assert_eq!(encoded.len(), n_columns);
                encoded
            })
            .collect();

        tracing::debug!(
            rows = data.len(),
            columns = n_columns,
            data_fields = data_keys.len(),
            label_fields = label_keys.len(),
            "Encoded dataset"
        );

        Ok(Encoded { data, decoders })
    }

    /// Decode every row of an encoded matrix. An empty matrix decodes to an
    /// empty dataset.
    pub fn decode(
        &self,
        encoded: &[Vec<f64>],
        decoders: &[FieldDecoder],
    ) -> Result<Vec<Record>, PreprocessingError> {
        let records = encoded
            .iter()
            .map(|row| self.decode_row(row, decoders))
            .collect::<Result<Vec<_>, _>>()?;
        tracing::debug!(
            rows = records.len(),
            fields = decoders.len(),
            "Decoded dataset"
        );
        Ok(records)
    }

    /// Decode a single encoded row.
    ///
    /// Decoders are consumed in order, each taking the next
    /// [`width`](FieldDecoder::width) columns.
    ///
    /// # Errors
    /// - [`PreprocessingError::DecoderMismatch`] if the decoder widths do not
    ///   sum to `row.len()`, or their sum overflows. Checked before any column
    ///   is read.
    /// - Any error from [`FieldDecoder::decode_value`].
    pub fn decode_row(
        &self,
        row: &[f64],
        decoders: &[FieldDecoder],
    ) -> Result<Record, PreprocessingError> {
        let expected = total_width(decoders).unwrap_or(usize::MAX);
        if expected != row.len() {
            return Err(PreprocessingError::DecoderMismatch {
                expected,
                found: row.len(),
            });
        }

        let mut record = Record::with_capacity(decoders.len());
        let mut cursor = 0usize;
        for decoder in decoders {
            let slice = cursor
                .checked_add(decoder.width())
                .and_then(|end| row.get(cursor..end))
                .ok_or(PreprocessingError::DecoderMismatch {
                    expected,
                    found: row.len(),
                })?;
            record.insert(decoder.key(), decoder.decode_value(slice)?);
            cursor += slice.len();
        }

        Ok(record)
    }

    /// Decode the rows of a dense array.
    #[cfg(feature = "ndarray")]
    pub fn decode_array(
        &self,
        array: &ndarray::Array2<f64>,
        decoders: &[FieldDecoder],
    ) -> Result<Vec<Record>, PreprocessingError> {
        array
            .rows()
            .into_iter()
            .map(|row| self.decode_row(&row.to_vec(), decoders))
            .collect()
    }
}

/// Dispatch one field to the encoder matching its inferred kind.
fn encode_field(
    dataset: &[Record],
    key: &str,
) -> Result<(EncodedColumn, FieldDecoder), PreprocessingError> {
    match Column::extract(dataset, key)? {
        Column::String(values) => string::encode_column(key, &values),
        Column::Number(values) => number::encode_column(key, &values),
        Column::Boolean(values) => boolean::encode_column(key, &values),
    }
}
