//! Adapters from byte streams to datasets. Fetching the bytes stays with the caller.

pub mod csv_source;

pub use csv_source::{load_dataset, read_raw_records};
