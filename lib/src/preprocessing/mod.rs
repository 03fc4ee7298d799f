//! Data preprocessing for tabular records and numeric arrays.
//!
//! # Core
//!
//! - [`encoding`]: the reversible record codec. Records are turned into
//!   numeric rows (one-hot strings, standardized numbers, 0/1 booleans)
//!   together with a list of [`FieldDecoder`]s that turns them back.
//!
//! # Array transformers
//!
//! Following the unfitted → fitted pattern of [`Transformer`] /
//! [`FittedTransformer`]:
//!
//! - [`MinMaxScaler`]: Linear map of a flat sequence onto a feature range
//! - [`Binarizer`]: 0/1 thresholding of a value matrix
//!
//! These share no state with the codec.
//!
//! # Example
//!
//! ```rust
//! use tabular_codec::dataset::{Record, Value};
//! use tabular_codec::preprocessing::{EncodeOptions, RecordCodec};
//!
//! let dataset: Vec<Record> = vec![
//!     [("weather", Value::from("RAIN")), ("windy", Value::from(true))].into_iter().collect(),
//!     [("weather", Value::from("SUN")), ("windy", Value::from(false))].into_iter().collect(),
//! ];
//!
//! let codec = RecordCodec::new();
//! let options = EncodeOptions::new()
//!     .with_data_keys(["weather"])
//!     .with_label_keys(["windy"]);
//! let encoded = codec.encode(&dataset, &options)?;
//! assert_eq!(encoded.data, vec![vec![1.0, 0.0, 1.0], vec![0.0, 1.0, 0.0]]);
//!
//! let restored = codec.decode(&encoded.data, &encoded.decoders)?;
//! assert_eq!(restored, dataset);
//! # Ok::<(), tabular_codec::preprocessing::PreprocessingError>(())
//! ```

pub mod binarizer;
pub mod encoding;
pub mod error;
pub mod scaling;
pub mod traits;

// Re-export main types
pub use binarizer::{Binarizer, BinarizerConfig, BinarizerParams, FittedBinarizer};
pub use encoding::{EncodeOptions, Encoded, EncodedColumn, FieldDecoder, RecordCodec};
pub use error::PreprocessingError;
pub use scaling::{FittedMinMaxScaler, MinMaxScaler, MinMaxScalerConfig, MinMaxScalerParams};
pub use traits::{FittedTransformer, Transformer};
