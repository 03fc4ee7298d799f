//! One-hot encoding for string fields.
//!
//! Distinct values are numbered by first occurrence (not sorted), so the
//! column index of a category is stable for a given input order:
//!
//! ```text
//! ["RAIN", "RAIN", "SUN"]  ->  lookup table ["RAIN", "SUN"]
//!                          ->  [1, 0], [1, 0], [0, 1]
//! ```

use super::{EncodedColumn, FieldDecoder};
use crate::preprocessing::error::PreprocessingError;
use std::collections::HashMap;

/// One-hot widths above this are almost always an identifier column by mistake.
const HIGH_CARDINALITY_WARN: usize = 1000;

/// One-hot encode a string column.
///
/// Returns the encoded column (width = number of distinct values) and a
/// [`FieldDecoder::String`] whose lookup table maps column index back to
/// the original value.
///
/// # Errors
/// Returns [`PreprocessingError::EmptyData`] if `values` is empty.
pub fn encode_column(
    key: &str,
    values: &[&str],
) -> Result<(EncodedColumn, FieldDecoder), PreprocessingError> {
    if values.is_empty() {
        return Err(PreprocessingError::EmptyData(format!(
            "Cannot one-hot encode empty field '{}'",
            key
        )));
    }

    // Index of each distinct value, by first occurrence
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut lookup_table: Vec<String> = Vec::new();
    let positions: Vec<usize> = values
        .iter()
        .map(|&value| {
            *index.entry(value).or_insert_with(|| {
                lookup_table.push(value.to_string());
                lookup_table.len() - 1
            })
        })
        .collect();

    let width = lookup_table.len();
    if width > HIGH_CARDINALITY_WARN {
        tracing::warn!(
            key,
            width,
            "String field expands to a very wide one-hot block"
        );
    }

    let mut encoded = vec![0.0f64; values.len() * width];
    for (row, &pos) in positions.iter().enumerate() {
        encoded[row * width + pos] = 1.0;
    }

    Ok((
        EncodedColumn::new(width, encoded),
        FieldDecoder::String {
            key: key.to_string(),
            offset: width,
            lookup_table,
        },
    ))
}

/// Recover the original string from a one-hot slice.
///
/// The slice must contain exactly one non-zero entry, and that entry must
/// be exactly `1.0`.
pub fn decode_value<'t>(
    key: &str,
    lookup_table: &'t [String],
    slice: &[f64],
) -> Result<&'t str, PreprocessingError> {
    let invalid = |reason: String| PreprocessingError::InvalidEncoding {
        key: key.to_string(),
        reason,
    };

    if slice.len() != lookup_table.len() {
        return Err(invalid(format!(
            "expected {} one-hot columns, got {}",
            lookup_table.len(),
            slice.len()
        )));
    }

    let mut set = slice.iter().enumerate().filter(|&(_, &v)| v != 0.0);
    match (set.next(), set.next()) {
        (Some((idx, &v)), None) if v == 1.0 => Ok(lookup_table[idx].as_str()),
        (Some((idx, &v)), None) => Err(invalid(format!(
            "entry {} is {} instead of 1",
            idx, v
        ))),
        (None, _) => Err(invalid("no entry is set".to_string())),
        (Some(_), Some(_)) => Err(invalid("more than one entry is set".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weather_table() -> Vec<String> {
        vec!["RAIN".to_string(), "SUN".to_string()]
    }

    #[test]
    fn test_string_encoder_first_occurrence_order() {
        let (column, decoder) = encode_column("weather", &["RAIN", "RAIN", "SUN"]).unwrap();

        assert_eq!(column.width(), 2);
        assert_eq!(column.row(0), &[1.0, 0.0]);
        assert_eq!(column.row(1), &[1.0, 0.0]);
        assert_eq!(column.row(2), &[0.0, 1.0]);
        assert_eq!(
            decoder,
            FieldDecoder::String {
                key: "weather".to_string(),
                offset: 2,
                lookup_table: weather_table(),
            }
        );
    }

    #[test]
    fn test_string_encoder_is_not_sorted() {
        let (column, decoder) = encode_column("planet", &["saturn", "mars", "saturn"]).unwrap();

        match decoder {
            FieldDecoder::String { lookup_table, .. } => {
                assert_eq!(lookup_table, vec!["saturn", "mars"]);
            }
            other => panic!("unexpected decoder {:?}", other),
        }
        assert_eq!(column.row(1), &[0.0, 1.0]);
    }

    #[test]
    fn test_string_decode_rows() {
        let table = weather_table();
        let decoded: Vec<&str> = [[1.0, 0.0], [1.0, 0.0], [0.0, 1.0]]
            .iter()
            .map(|row| decode_value("weather", &table, row).unwrap())
            .collect();
        assert_eq!(decoded, vec!["RAIN", "RAIN", "SUN"]);
    }

    #[test]
    fn test_string_decode_no_bit_set_fails() {
        // Must not wrap around to the last table entry
        let err = decode_value("weather", &weather_table(), &[0.0, 0.0]).unwrap_err();
        assert!(matches!(err, PreprocessingError::InvalidEncoding { .. }));
    }

    #[test]
    fn test_string_decode_two_bits_set_fails() {
        let err = decode_value("weather", &weather_table(), &[1.0, 1.0]).unwrap_err();
        assert!(matches!(err, PreprocessingError::InvalidEncoding { .. }));
    }

    #[test]
    fn test_string_decode_soft_value_fails() {
        let err = decode_value("weather", &weather_table(), &[0.0, 0.7]).unwrap_err();
        assert!(err.to_string().contains("0.7"));
    }

    #[test]
    fn test_string_decode_wrong_width_fails() {
        let err = decode_value("weather", &weather_table(), &[1.0]).unwrap_err();
        assert!(matches!(err, PreprocessingError::InvalidEncoding { .. }));
    }

    #[test]
    fn test_string_encoder_empty() {
        assert!(matches!(
            encode_column("weather", &[]),
            Err(PreprocessingError::EmptyData(_))
        ));
    }
}
