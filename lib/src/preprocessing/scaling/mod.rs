//! Scaling transformers for flat numeric sequences.
//!
//! | Transformer | Description |
//! |-------------|-------------|
//! | [`MinMaxScaler`] | Linear map of `[data_min, data_max]` onto a feature range |
//!
//! Scalers share no state with the record codec and have no inverse.

pub mod minmax;

pub use minmax::{FittedMinMaxScaler, MinMaxScaler, MinMaxScalerConfig, MinMaxScalerParams};
