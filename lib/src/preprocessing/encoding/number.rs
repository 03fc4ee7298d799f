//! Standardization of number fields.
//!
//! ```text
//! z = (x - mean) / std
//! ```
//!
//! `std` is the sample standard deviation (N - 1 denominator), so a column
//! needs at least two distinct values to be encodable.

use super::{EncodedColumn, FieldDecoder};
use crate::preprocessing::error::PreprocessingError;

/// Sample mean and sample standard deviation of a column.
fn mean_and_sample_std(values: &[f64]) -> (f64, f64) {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let sum_sq: f64 = values.iter().map(|&x| (x - mean).powi(2)).sum();
    (mean, (sum_sq / (n - 1.0)).sqrt())
}

/// Standardize a number column.
///
/// # Errors
/// - [`PreprocessingError::EmptyData`] if `values` is empty.
/// - [`PreprocessingError::NonNumericValue`] if any value is NaN or infinite.
/// - [`PreprocessingError::DegenerateColumn`] if the sample standard deviation
///   is zero or undefined (a single row).
pub fn encode_column(
    key: &str,
    values: &[f64],
) -> Result<(EncodedColumn, FieldDecoder), PreprocessingError> {
    if values.is_empty() {
        return Err(PreprocessingError::EmptyData(format!(
            "Cannot standardize empty field '{}'",
            key
        )));
    }

    if let Some((row, value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(PreprocessingError::NonNumericValue {
            value: value.to_string(),
            location: format!("field '{}', record {}", key, row),
        });
    }

    if values.len() < 2 {
        return Err(PreprocessingError::DegenerateColumn(format!(
            "field '{}' has a single value, sample std is undefined",
            key
        )));
    }

    let (mean, std) = mean_and_sample_std(values);
    if !mean.is_finite() || !std.is_finite() {
        return Err(PreprocessingError::DegenerateColumn(format!(
            "field '{}' statistics overflow (mean {}, std {})",
            key, mean, std
        )));
    }
    if std == 0.0 {
        return Err(PreprocessingError::DegenerateColumn(format!(
            "field '{}' has zero variance (all values equal {})",
            key, mean
        )));
    }

    let encoded = values.iter().map(|&x| (x - mean) / std).collect();

    Ok((
        EncodedColumn::new(1, encoded),
        FieldDecoder::Number {
            key: key.to_string(),
            mean,
            std,
        },
    ))
}

/// Invert standardization: `std * z + mean`.
pub fn decode_value(key: &str, mean: f64, std: f64, z: f64) -> Result<f64, PreprocessingError> {
    let value = std * z + mean;
    if !value.is_finite() {
        return Err(PreprocessingError::NonNumericValue {
            value: z.to_string(),
            location: format!("encoded field '{}'", key),
        });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_encoder_sample_std() {
        let (column, decoder) = encode_column("value", &[10.0, 20.0, 30.0]).unwrap();

        match decoder {
            FieldDecoder::Number { mean, std, .. } => {
                assert!((mean - 20.0).abs() < 1e-12);
                assert!((std - 10.0).abs() < 1e-12);
            }
            other => panic!("unexpected decoder {:?}", other),
        }

        let expected = [-1.0, 0.0, 1.0];
        for (row, e) in expected.iter().enumerate() {
            assert!((column.row(row)[0] - e).abs() < 1e-12);
        }
    }

    #[test]
    fn test_number_decode_recovers_values() {
        let values = [10.0, 20.0, 30.0];
        let (column, _) = encode_column("value", &values).unwrap();

        for (row, &original) in values.iter().enumerate() {
            let decoded = decode_value("value", 20.0, 10.0, column.row(row)[0]).unwrap();
            assert!((decoded - original).abs() < 1e-9, "{} vs {}", decoded, original);
        }
    }

    #[test]
    fn test_number_encoder_degenerate_column() {
        let err = encode_column("value", &[5.0, 5.0, 5.0]).unwrap_err();
        assert!(matches!(err, PreprocessingError::DegenerateColumn(_)));
    }

    #[test]
    fn test_number_encoder_single_row_is_degenerate() {
        let err = encode_column("value", &[5.0]).unwrap_err();
        assert!(matches!(err, PreprocessingError::DegenerateColumn(_)));
    }

    #[test]
    fn test_number_encoder_rejects_nan() {
        let err = encode_column("value", &[1.0, f64::NAN, 3.0]).unwrap_err();
        match err {
            PreprocessingError::NonNumericValue { location, .. } => {
                assert_eq!(location, "field 'value', record 1");
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_number_decode_rejects_non_finite() {
        assert!(decode_value("value", 20.0, 10.0, f64::INFINITY).is_err());
        assert!(decode_value("value", 20.0, 10.0, f64::NAN).is_err());
    }
}
