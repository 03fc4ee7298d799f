//! Core traits for the array transformers.
//!
//! This module defines the two central traits:
//! - [`Transformer`]: Used during fitting; has hyperparameters and can learn from data.
//! - [`FittedTransformer`]: After fitting; ready to transform data.
//!
//! The record codec does not implement these: it is stateless, and its
//! "fitted state" is the decoder list returned with every encoding.

use crate::preprocessing::error::PreprocessingError;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Trait for unfitted transformers with hyperparameters.
///
/// # Example
/// ```rust
/// use tabular_codec::preprocessing::{FittedTransformer, MinMaxScaler, Transformer};
///
/// let scaler = MinMaxScaler::new();
/// let fitted = scaler.fit(&[0.0, 4.0]).unwrap();
/// assert_eq!(fitted.transform(&[2.0]).unwrap(), vec![0.5]);
/// ```
pub trait Transformer: Clone {
    /// Input data type for fitting and transformation.
    type Input: ?Sized;
    /// Output data type after transformation.
    type Output;
    /// The fitted transformer type.
    type Fitted: FittedTransformer<Input = Self::Input, Output = Self::Output>;

    /// Fit the transformer to the training data.
    ///
    /// # Errors
    /// Returns [`PreprocessingError`] if:
    /// - Data is empty
    /// - Data contains invalid values (NaN, Inf, non-numbers)
    fn fit(&self, data: &Self::Input) -> Result<Self::Fitted, PreprocessingError>;

    /// Fit the transformer and transform the data in one step.
    fn fit_transform(&self, data: &Self::Input) -> Result<Self::Output, PreprocessingError> {
        self.fit(data)?.transform(data)
    }
}

/// Trait for fitted transformers.
///
/// # Guarantees
/// - `extract_params()` + `from_params()` is a round-trip.
pub trait FittedTransformer: Clone {
    /// Input data type for transformation.
    type Input: ?Sized;
    /// Output data type after transformation.
    type Output;
    /// Serializable snapshot of learned parameters.
    type Params: Serialize + DeserializeOwned;

    /// Transform data using learned parameters.
    fn transform(&self, data: &Self::Input) -> Result<Self::Output, PreprocessingError>;

    /// Extract learned parameters.
    fn extract_params(&self) -> Self::Params;

    /// Reconstruct a fitted transformer from parameters.
    fn from_params(params: Self::Params) -> Result<Self, PreprocessingError>
    where
        Self: Sized;
}
