//! Per-field decoding descriptors.

use super::{boolean, number, string};
use crate::dataset::{FieldKind, Value};
use crate::preprocessing::error::PreprocessingError;
use serde::{Deserialize, Serialize};

/// Metadata sufficient to invert one field's encoding.
///
/// Serializes to plain JSON, tagged by `type`:
///
/// ```text
/// {"type":"string","key":"weather","offset":2,"lookupTable":["RAIN","SUN"]}
/// {"type":"number","key":"value","mean":20.0,"std":10.0}
/// {"type":"boolean","key":"isGasGiant"}
/// ```
///
/// A list of decoders is consumed positionally: the i-th decoder owns the
/// next [`width`](FieldDecoder::width) columns of a row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FieldDecoder {
    /// One-hot block; `lookup_table[i]` is the value of column `i`.
    #[serde(rename_all = "camelCase")]
    String {
        key: String,
        offset: usize,
        lookup_table: Vec<String>,
    },
    /// Standardized number.
    Number { key: String, mean: f64, std: f64 },
    /// 0/1 flag.
    Boolean { key: String },
}

impl FieldDecoder {
    /// The record key this decoder restores.
    pub fn key(&self) -> &str {
        match self {
            FieldDecoder::String { key, .. }
            | FieldDecoder::Number { key, .. }
            | FieldDecoder::Boolean { key } => key.as_str(),
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            FieldDecoder::String { .. } => FieldKind::String,
            FieldDecoder::Number { .. } => FieldKind::Number,
            FieldDecoder::Boolean { .. } => FieldKind::Boolean,
        }
    }

    /// Number of encoded columns this field occupies.
    pub fn width(&self) -> usize {
        match self {
            FieldDecoder::String { offset, .. } => *offset,
            FieldDecoder::Number { .. } | FieldDecoder::Boolean { .. } => 1,
        }
    }

    /// Reconstruct the original value from this field's slice of a row.
    ///
    /// # Errors
    /// - [`PreprocessingError::DecoderMismatch`] if `slice.len() != self.width()`.
    /// - [`PreprocessingError::InvalidEncoding`] for a malformed one-hot slice.
    /// - [`PreprocessingError::NonNumericValue`] for NaN/infinite input or output.
    pub fn decode_value(&self, slice: &[f64]) -> Result<Value, PreprocessingError> {
        if slice.len() != self.width() {
            return Err(PreprocessingError::DecoderMismatch {
                expected: self.width(),
                found: slice.len(),
            });
        }

        match self {
            FieldDecoder::String {
                key, lookup_table, ..
            } => string::decode_value(key, lookup_table, slice).map(Value::from),
            FieldDecoder::Number { key, mean, std } => {
                number::decode_value(key, *mean, *std, slice[0]).map(Value::Number)
            }
            FieldDecoder::Boolean { key } => {
                boolean::decode_value(key, slice[0]).map(Value::Boolean)
            }
        }
    }
}

/// Total number of columns covered by a decoder list, or `None` if the
/// widths overflow `usize`.
pub fn total_width(decoders: &[FieldDecoder]) -> Option<usize> {
    decoders
        .iter()
        .try_fold(0usize, |total, decoder| total.checked_add(decoder.width()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decoders() -> Vec<FieldDecoder> {
        vec![
            FieldDecoder::String {
                key: "weather".to_string(),
                offset: 2,
                lookup_table: vec!["RAIN".to_string(), "SUN".to_string()],
            },
            FieldDecoder::Number {
                key: "temp".to_string(),
                mean: 20.0,
                std: 5.0,
            },
            FieldDecoder::Boolean {
                key: "windy".to_string(),
            },
        ]
    }

    #[test]
    fn test_widths() {
        let d = decoders();
        assert_eq!(d[0].width(), 2);
        assert_eq!(d[1].width(), 1);
        assert_eq!(d[2].width(), 1);
        assert_eq!(total_width(&d), Some(4));
    }

    #[test]
    fn test_total_width_overflow() {
        let d = vec![
            FieldDecoder::String {
                key: "huge".to_string(),
                offset: usize::MAX,
                lookup_table: vec!["x".to_string()],
            },
            FieldDecoder::Boolean {
                key: "flag".to_string(),
            },
        ];
        assert_eq!(total_width(&d), None);
        assert_eq!(total_width(&d[..1]), Some(usize::MAX));
    }

    #[test]
    fn test_keys_and_kinds() {
        let d = decoders();
        assert_eq!(d[0].key(), "weather");
        assert_eq!(d[1].kind(), FieldKind::Number);
        assert_eq!(d[2].kind(), FieldKind::Boolean);
    }

    #[test]
    fn test_decode_value_dispatch() {
        let d = decoders();
        assert_eq!(d[0].decode_value(&[0.0, 1.0]).unwrap(), Value::from("SUN"));
        assert_eq!(d[1].decode_value(&[-1.0]).unwrap(), Value::from(15.0));
        assert_eq!(d[2].decode_value(&[1.0]).unwrap(), Value::from(true));
    }

    #[test]
    fn test_decode_value_width_mismatch() {
        let d = decoders();
        assert_eq!(
            d[1].decode_value(&[0.0, 1.0]).unwrap_err(),
            PreprocessingError::DecoderMismatch {
                expected: 1,
                found: 2
            }
        );
    }
}
