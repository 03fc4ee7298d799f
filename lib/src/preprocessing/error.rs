//! Error types for preprocessing operations.

use crate::dataset::FieldKind;
use thiserror::Error;

/// Error type for preprocessing operations.
///
/// Every variant is raised synchronously, as soon as the violated
/// precondition is observed. None of them are retryable.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PreprocessingError {
    /// Empty data provided where non-empty was required.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// A requested field key is absent from a record.
    #[error("Missing field: '{key}' not present in record {row}")]
    MissingField { key: String, row: usize },

    /// A record carries a different value type than the one inferred for the field.
    #[error("Type mismatch: field '{key}' is {expected} but record {row} holds {found}")]
    TypeMismatch {
        key: String,
        row: usize,
        expected: FieldKind,
        found: FieldKind,
    },

    /// Zero (or undefined) spread, so standardization would divide by zero.
    #[error("Degenerate column: {0}")]
    DegenerateColumn(String),

    /// A one-hot slice does not contain exactly one set entry equal to 1.
    #[error("Invalid encoding for field '{key}': {reason}")]
    InvalidEncoding { key: String, reason: String },

    /// Decoder widths do not add up to the row length.
    #[error("Decoder mismatch: decoders cover {expected} columns, row has {found}")]
    DecoderMismatch { expected: usize, found: usize },

    /// A value that must be a finite number is not.
    #[error("Non-numeric value {value} at {location}")]
    NonNumericValue { value: String, location: String },

    /// Invalid hyperparameter value.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_empty_data() {
        let err = PreprocessingError::EmptyData("no rows".to_string());
        assert!(err.to_string().contains("Empty data"));
    }

    #[test]
    fn test_error_display_missing_field() {
        let err = PreprocessingError::MissingField {
            key: "planet".to_string(),
            row: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains("'planet'"));
        assert!(msg.contains("record 3"));
    }

    #[test]
    fn test_error_display_type_mismatch() {
        let err = PreprocessingError::TypeMismatch {
            key: "value".to_string(),
            row: 1,
            expected: FieldKind::Number,
            found: FieldKind::String,
        };
        assert_eq!(
            err.to_string(),
            "Type mismatch: field 'value' is number but record 1 holds string"
        );
    }

    #[test]
    fn test_error_display_decoder_mismatch() {
        let err = PreprocessingError::DecoderMismatch {
            expected: 4,
            found: 5,
        };
        assert!(err.to_string().contains("cover 4 columns, row has 5"));
    }

    #[test]
    fn test_error_display_non_numeric() {
        let err = PreprocessingError::NonNumericValue {
            value: "\"abc\"".to_string(),
            location: "row 0, column 2".to_string(),
        };
        assert!(err.to_string().contains("row 0, column 2"));
    }

    #[test]
    fn test_error_is_std_error() {
        let err = PreprocessingError::InvalidParameter("test".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
