//! Reversible encoding of tabular records into numeric feature rows.
//!
//! Each requested field is encoded by the encoder matching its inferred
//! [`FieldKind`](crate::dataset::FieldKind):
//!
//! | Kind    | Encoding                       | Width               |
//! |---------|--------------------------------|---------------------|
//! | string  | one-hot, first-occurrence order | distinct values    |
//! | number  | `(x - mean) / std` (sample std) | 1                  |
//! | boolean | `true -> 1`, `false -> 0`       | 1                  |
//!
//! Every encoder also returns a [`FieldDecoder`] describing how to invert
//! its columns. [`RecordCodec`] drives the encoders over a whole dataset and
//! turns the encoded rows back into records.
//!
//! # Example
//!
//! ```rust
//! use tabular_codec::dataset::{Record, Value};
//! use tabular_codec::preprocessing::encoding::{EncodeOptions, RecordCodec};
//!
//! let dataset: Vec<Record> = vec![
//!     [("planet", Value::from("mars")), ("value", Value::from(10))].into_iter().collect(),
//!     [("planet", Value::from("saturn")), ("value", Value::from(20))].into_iter().collect(),
//!     [("planet", Value::from("jupiter")), ("value", Value::from(30))].into_iter().collect(),
//! ];
//!
//! let codec = RecordCodec::new();
//! let encoded = codec
//!     .encode(&dataset, &EncodeOptions::new().with_data_keys(["planet", "value"]))
//!     .unwrap();
//! assert_eq!(encoded.data[0].len(), 4);
//!
//! let decoded = codec.decode(&encoded.data, &encoded.decoders).unwrap();
//! assert_eq!(decoded[1].get("planet"), Some(&Value::from("saturn")));
//! ```

pub mod boolean;
mod codec;
mod decoder;
pub mod number;
pub mod string;

pub use codec::{EncodeOptions, Encoded, RecordCodec};
pub use decoder::{total_width, FieldDecoder};

/// One field's encoded values, row-major with a fixed width per row.
#[derive(Clone, Debug, PartialEq)]
pub struct EncodedColumn {
    width: usize,
    values: Vec<f64>,
}

impl EncodedColumn {
    pub(crate) fn new(width: usize, values: Vec<f64>) -> Self {
        debug_assert!(width == 0 || values.len() % width == 0);
        Self { width, values }
    }

    /// Number of numeric columns per row.
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn n_rows(&self) -> usize {
        if self.width == 0 {
            0
        } else {
            self.values.len() / self.width
        }
    }

    /// The encoded slice for one row.
    ///
    /// # Panics
    /// If `row >= self.n_rows()`.
    pub fn row(&self, row: usize) -> &[f64] {
        &self.values[row * self.width..(row + 1) * self.width]
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }
}
