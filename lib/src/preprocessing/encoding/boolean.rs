//! Binary encoding for boolean fields: `true -> 1`, `false -> 0`.

use super::{EncodedColumn, FieldDecoder};
use crate::preprocessing::error::PreprocessingError;

/// Encode a boolean column as 0/1.
pub fn encode_column(
    key: &str,
    values: &[bool],
) -> Result<(EncodedColumn, FieldDecoder), PreprocessingError> {
    if values.is_empty() {
        return Err(PreprocessingError::EmptyData(format!(
            "Cannot encode empty field '{}'",
            key
        )));
    }

    let encoded = values.iter().map(|&b| if b { 1.0 } else { 0.0 }).collect();

    Ok((
        EncodedColumn::new(1, encoded),
        FieldDecoder::Boolean {
            key: key.to_string(),
        },
    ))
}

/// Any non-zero value decodes to `true`.
pub fn decode_value(key: &str, value: f64) -> Result<bool, PreprocessingError> {
    if !value.is_finite() {
        return Err(PreprocessingError::NonNumericValue {
            value: value.to_string(),
            location: format!("encoded field '{}'", key),
        });
    }
    Ok(value != 0.0)
}
