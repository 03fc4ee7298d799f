//! Min-Max Scaler.
//!
//! Linearly maps a flat sequence of numbers onto a feature range
//! (default [0, 1]):
//!
//! ```text
//! scale    = (range_max - range_min) / (data_max - data_min)
//! base_min = range_min - data_min * scale
//! x'       = x * scale + base_min
//! ```
//!
//! # Example
//! ```rust
//! use tabular_codec::preprocessing::{FittedTransformer, MinMaxScaler, Transformer};
//!
//! let scaler = MinMaxScaler::new().with_range(-1.0, 1.0);
//! let fitted = scaler.fit(&[2.0, 4.0, 6.0]).unwrap();
//! assert_eq!(fitted.transform(&[2.0, 4.0, 6.0]).unwrap(), vec![-1.0, 0.0, 1.0]);
//! ```

use crate::preprocessing::error::PreprocessingError;
use crate::preprocessing::traits::{FittedTransformer, Transformer};
use serde::{Deserialize, Serialize};

/// Configuration for MinMaxScaler.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MinMaxScalerConfig {
    /// Minimum value of the target range.
    pub min: f64,
    /// Maximum value of the target range.
    pub max: f64,
}

impl Default for MinMaxScalerConfig {
    fn default() -> Self {
        Self { min: 0.0, max: 1.0 }
    }
}

/// Serializable parameters for a fitted MinMaxScaler.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MinMaxScalerParams {
    /// Configuration options.
    pub config: MinMaxScalerConfig,
    /// Minimum of the fitted data.
    pub data_min: f64,
    /// Maximum of the fitted data.
    pub data_max: f64,
    /// Multiplicative factor.
    pub scale: f64,
    /// Additive offset applied after scaling.
    pub base_min: f64,
}

/// MinMaxScaler transformer (unfitted).
#[derive(Clone, Debug, Default)]
pub struct MinMaxScaler {
    config: MinMaxScalerConfig,
}

impl MinMaxScaler {
    /// Create a new MinMaxScaler with default range [0, 1].
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target range for scaling. Validated at fit time.
    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.config.min = min;
        self.config.max = max;
        self
    }

    pub fn config(&self) -> &MinMaxScalerConfig {
        &self.config
    }
}

impl Transformer for MinMaxScaler {
    type Input = [f64];
    type Output = Vec<f64>;
    type Fitted = FittedMinMaxScaler;

    fn fit(&self, data: &[f64]) -> Result<FittedMinMaxScaler, PreprocessingError> {
        let MinMaxScalerConfig { min, max } = self.config;
        if !(min.is_finite() && max.is_finite() && max > min) {
            return Err(PreprocessingError::InvalidParameter(format!(
                "feature range [{}, {}] must be finite with max > min",
                min, max
            )));
        }

        if data.is_empty() {
            return Err(PreprocessingError::EmptyData(
                "Cannot fit MinMaxScaler on empty data".to_string(),
            ));
        }

        if let Some((idx, value)) = data.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(PreprocessingError::NonNumericValue {
                value: value.to_string(),
                location: format!("index {}", idx),
            });
        }

        let data_min = data.iter().copied().fold(f64::INFINITY, f64::min);
        let data_max = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let data_range = data_max - data_min;

        if data_range == 0.0 {
            return Err(PreprocessingError::DegenerateColumn(format!(
                "MinMaxScaler input is constant ({}), range is zero",
                data_min
            )));
        }

        let scale = (max - min) / data_range;
        let base_min = min - data_min * scale;
        if !(data_range.is_finite() && scale.is_finite() && base_min.is_finite()) {
            return Err(PreprocessingError::InvalidParameter(format!(
                "feature range [{}, {}] over data range {} overflows",
                min, max, data_range
            )));
        }
        tracing::debug!(data_min, data_max, scale, base_min, "Fitted MinMaxScaler");

        Ok(FittedMinMaxScaler {
            config: self.config.clone(),
            data_min,
            data_max,
            scale,
            base_min,
        })
    }
}

/// Fitted MinMaxScaler ready for inference.
#[derive(Clone, Debug)]
pub struct FittedMinMaxScaler {
    config: MinMaxScalerConfig,
    data_min: f64,
    data_max: f64,
    scale: f64,
    base_min: f64,
}

impl FittedMinMaxScaler {
    pub fn data_min(&self) -> f64 {
        self.data_min
    }

    pub fn data_max(&self) -> f64 {
        self.data_max
    }

    /// Multiplicative factor applied to every value.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Offset added after scaling.
    pub fn base_min(&self) -> f64 {
        self.base_min
    }
}

impl FittedTransformer for FittedMinMaxScaler {
    type Input = [f64];
    type Output = Vec<f64>;
    type Params = MinMaxScalerParams;

    fn transform(&self, data: &[f64]) -> Result<Vec<f64>, PreprocessingError> {
        // Values outside the fitted range map outside the feature range; no clipping
        data.iter()
            .enumerate()
            .map(|(idx, &x)| {
                let scaled = x * self.scale + self.base_min;
                if x.is_finite() && scaled.is_finite() {
                    Ok(scaled)
                } else {
                    Err(PreprocessingError::NonNumericValue {
                        value: x.to_string(),
                        location: format!("index {}", idx),
                    })
                }
            })
            .collect()
    }

    fn extract_params(&self) -> MinMaxScalerParams {
        MinMaxScalerParams {
            config: self.config.clone(),
            data_min: self.data_min,
            data_max: self.data_max,
            scale: self.scale,
            base_min: self.base_min,
        }
    }

    fn from_params(params: MinMaxScalerParams) -> Result<Self, PreprocessingError> {
        if !params.scale.is_finite() || !params.base_min.is_finite() {
            return Err(PreprocessingError::InvalidParameter(
                "MinMaxScaler parameters must be finite".to_string(),
            ));
        }
        Ok(Self {
            config: params.config,
            data_min: params.data_min,
            data_max: params.data_max,
            scale: params.scale,
            base_min: params.base_min,
        })
    }
}
