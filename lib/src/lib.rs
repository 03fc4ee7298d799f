//! # tabular-codec
//!
//! Reversible feature encoding for tabular records.
//!
//! Heterogeneous records (strings, numbers, booleans) are converted into
//! numeric feature rows for downstream numeric processing, and can be
//! reconstructed exactly (numbers up to floating-point rounding) from those
//! rows plus the decoder list produced during encoding.
//!
//! ## Core Design Principles
//!
//! - **Typed fields**: Each field's kind is inferred once, from the first
//!   record, and every encoder/decoder matches on it exhaustively.
//! - **Self-describing decoders**: Each [`FieldDecoder`] carries its column
//!   width; decoding validates that the widths cover a row exactly.
//! - **Stateless codec**: [`RecordCodec`] keeps nothing between calls. The
//!   decoder list is plain data the caller can serialize with serde.
//! - **Loud failures**: Degenerate columns, malformed one-hot slices and
//!   width mismatches are errors, never NaN or a silently wrong value.
//!
//! ## Quick Start
//!
//! ```rust
//! use tabular_codec::dataset::{Record, Value};
//! use tabular_codec::{EncodeOptions, RecordCodec};
//!
//! let dataset: Vec<Record> = [("mars", false, 10), ("saturn", true, 20), ("jupiter", true, 30)]
//!     .into_iter()
//!     .map(|(planet, gas, value)| {
//!         [
//!             ("planet", Value::from(planet)),
//!             ("isGasGiant", Value::from(gas)),
//!             ("value", Value::from(value)),
//!         ]
//!         .into_iter()
//!         .collect()
//!     })
//!     .collect();
//!
//! let codec = RecordCodec::new();
//! let options = EncodeOptions::new()
//!     .with_data_keys(["planet", "isGasGiant"])
//!     .with_label_keys(["value"]);
//! let encoded = codec.encode(&dataset, &options).unwrap();
//!
//! // 3 one-hot columns for "planet", 1 for "isGasGiant", 1 for "value"
//! assert_eq!(encoded.n_columns(), 5);
//!
//! let decoded = codec.decode(&encoded.data, &encoded.decoders).unwrap();
//! assert_eq!(decoded[0].get("planet"), Some(&Value::from("mars")));
//! ```
//!
//! ## Module Structure
//!
//! - `dataset`: `Value`, `Record`, typed column extraction
//! - `preprocessing::encoding`: field encoders, decoders and the record codec
//! - `preprocessing::scaling`: min-max scaling of flat sequences
//! - `preprocessing::binarizer`: threshold binarization
//!
//! ## Features
//!
//! - `ndarray`: `Encoded::to_array` and `RecordCodec::decode_array`

/// Records, values and typed columns.
pub mod dataset;

/// Record codec and array transformers.
pub mod preprocessing;

pub use dataset::{Dataset, FieldKind, Record, Value};
pub use preprocessing::{EncodeOptions, Encoded, FieldDecoder, PreprocessingError, RecordCodec};
