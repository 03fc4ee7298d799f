//! Threshold binarization of a value matrix.
//!
//! Every entry `<= threshold` becomes 0, every entry above it becomes 1.
//! Entries must be finite numbers; strings and booleans are rejected.
//!
//! ```text
//! [[1, -1,  2],        [[1, 0, 1],
//!  [2,  0,  0],   ->    [1, 0, 0],
//!  [0,  1, -1]]         [0, 1, 0]]
//! ```

use crate::dataset::Value;
use crate::preprocessing::error::PreprocessingError;
use crate::preprocessing::traits::{FittedTransformer, Transformer};
use serde::{Deserialize, Serialize};

/// Configuration for Binarizer.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BinarizerConfig {
    /// Entries strictly above this map to 1.
    pub threshold: f64,
}

/// Serializable parameters for a fitted Binarizer (just the threshold).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BinarizerParams {
    pub threshold: f64,
}

/// Binarizer transformer.
///
/// Fitting learns nothing; it only checks that the input is not empty.
#[derive(Clone, Debug, Default)]
pub struct Binarizer {
    config: BinarizerConfig,
}

impl Binarizer {
    /// Create a new Binarizer with threshold 0.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.config.threshold = threshold;
        self
    }

    pub fn config(&self) -> &BinarizerConfig {
        &self.config
    }
}

impl Transformer for Binarizer {
    type Input = [Vec<Value>];
    type Output = Vec<Vec<f64>>;
    type Fitted = FittedBinarizer;

    fn fit(&self, data: &[Vec<Value>]) -> Result<FittedBinarizer, PreprocessingError> {
        if data.is_empty() {
            return Err(PreprocessingError::EmptyData(
                "Cannot fit Binarizer on empty data".to_string(),
            ));
        }
        if self.config.threshold.is_nan() {
            return Err(PreprocessingError::InvalidParameter(
                "Binarizer threshold must not be NaN".to_string(),
            ));
        }
        tracing::debug!(
            threshold = self.config.threshold,
            rows = data.len(),
            "Binarizer fit only validates input; nothing is learned"
        );

        Ok(FittedBinarizer {
            threshold: self.config.threshold,
        })
    }
}

/// Fitted Binarizer.
#[derive(Clone, Debug)]
pub struct FittedBinarizer {
    threshold: f64,
}

impl FittedBinarizer {
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Binarize `data` in place, replacing each entry with `Value::Number(0 | 1)`.
    ///
    /// The whole matrix is validated first, so on error `data` is untouched.
    pub fn transform_in_place(&self, data: &mut [Vec<Value>]) -> Result<(), PreprocessingError> {
        let binarized = self.transform(data)?;
        for (row, encoded) in data.iter_mut().zip(binarized) {
            for (entry, bit) in row.iter_mut().zip(encoded) {
                *entry = Value::Number(bit);
            }
        }
        Ok(())
    }
}

impl FittedTransformer for FittedBinarizer {
    type Input = [Vec<Value>];
    type Output = Vec<Vec<f64>>;
    type Params = BinarizerParams;

    fn transform(&self, data: &[Vec<Value>]) -> Result<Vec<Vec<f64>>, PreprocessingError> {
        if data.is_empty() {
            return Err(PreprocessingError::EmptyData(
                "Cannot binarize empty data".to_string(),
            ));
        }

        data.iter()
            .enumerate()
            .map(|(row, values)| {
                values
                    .iter()
                    .enumerate()
                    .map(|(column, value)| match value.as_f64() {
                        Some(x) if x.is_finite() => {
                            Ok(if x <= self.threshold { 0.0 } else { 1.0 })
                        }
                        _ => Err(PreprocessingError::NonNumericValue {
                            value: value.to_string(),
                            location: format!("row {}, column {}", row, column),
                        }),
                    })
                    .collect::<Result<Vec<f64>, _>>()
            })
            .collect()
    }

    fn extract_params(&self) -> BinarizerParams {
        BinarizerParams {
            threshold: self.threshold,
        }
    }

    fn from_params(params: BinarizerParams) -> Result<Self, PreprocessingError> {
        if params.threshold.is_nan() {
            return Err(PreprocessingError::InvalidParameter(
                "Binarizer threshold must not be NaN".to_string(),
            ));
        }
        Ok(Self {
            threshold: params.threshold,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(rows: &[&[f64]]) -> Vec<Vec<Value>> {
        rows.iter()
            .map(|r| r.iter().map(|&x| Value::Number(x)).collect())
            .collect()
    }

    #[test]
    fn test_binarizer_default_threshold() {
        let data = matrix(&[&[1.0, -1.0, 2.0], &[2.0, 0.0, 0.0], &[0.0, 1.0, -1.0]]);
        let out = Binarizer::new().fit_transform(&data).unwrap();

        assert_eq!(
            out,
            vec![
                vec![1.0, 0.0, 1.0],
                vec![1.0, 0.0, 0.0],
                vec![0.0, 1.0, 0.0]
            ]
        );
    }

    #[test]
    fn test_binarizer_threshold_boundary() {
        let data = matrix(&[&[5.0, 6.0]]);
        let out = Binarizer::new()
            .with_threshold(5.0)
            .fit_transform(&data)
            .unwrap();
        // Equal to threshold maps to 0, one unit above maps to 1
        assert_eq!(out, vec![vec![0.0, 1.0]]);
    }

    #[test]
    fn test_binarizer_in_place() {
        let mut data = matrix(&[&[0.5, 3.0]]);
        let fitted = Binarizer::new().with_threshold(1.0).fit(&data).unwrap();
        fitted.transform_in_place(&mut data).unwrap();

        assert_eq!(data, matrix(&[&[0.0, 1.0]]));
    }

    #[test]
    fn test_binarizer_in_place_leaves_data_on_error() {
        let mut data = vec![vec![Value::from(3.0), Value::from("x")]];
        let fitted = Binarizer::new().fit(&data).unwrap();
        let before = data.clone();

        assert!(fitted.transform_in_place(&mut data).is_err());
        assert_eq!(data, before);
    }

    #[test]
    fn test_binarizer_rejects_non_numbers() {
        let data = vec![vec![Value::from(1.0)], vec![Value::from(true)]];
        let fitted = Binarizer::new().fit(&data).unwrap();

        match fitted.transform(&data).unwrap_err() {
            PreprocessingError::NonNumericValue { value, location } => {
                assert_eq!(value, "true");
                assert_eq!(location, "row 1, column 0");
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_binarizer_rejects_nan() {
        let data = matrix(&[&[f64::NAN]]);
        let fitted = Binarizer::new().fit(&data).unwrap();
        assert!(fitted.transform(&data).is_err());
    }

    #[test]
    fn test_binarizer_empty() {
        let data: Vec<Vec<Value>> = Vec::new();
        assert!(matches!(
            Binarizer::new().fit(&data),
            Err(PreprocessingError::EmptyData(_))
        ));

        let fitted = Binarizer::new().fit(&matrix(&[&[1.0]])).unwrap();
        assert!(fitted.transform(&data).is_err());
    }

    #[test]
    fn test_binarizer_params_round_trip() {
        let fitted = Binarizer::new().with_threshold(2.5).fit(&matrix(&[&[1.0]])).unwrap();
        let restored = FittedBinarizer::from_params(fitted.extract_params()).unwrap();
        assert_eq!(restored.threshold(), 2.5);
    }
}
