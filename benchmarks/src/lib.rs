//! Benchmark utilities for tabular-codec.
//!
//! - Synthetic record generation with a controllable one-hot width
//! - CSV loading into records

pub mod data;

pub use data::{load_records, load_records_from_path, synthetic_records};
