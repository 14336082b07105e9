//! # thermowave-io
//!
//! Read observation tables from CSV, write annotated tables back, and
//! export episode summaries as JSON.

mod error;
mod json;
mod reader;
mod writer;

pub use error::IoError;
pub use json::{to_json, write_json};
pub use reader::{ReaderConfig, read_csv};
pub use writer::{WriterConfig, write_csv};
