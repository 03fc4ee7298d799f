//! Dataset loading for the benchmarks.

mod csv_records;
mod synthetic;

pub use csv_records::{load_records, load_records_from_path};
pub use synthetic::synthetic_records;
