//! Loading registration records from delimited text files.

pub mod error;
pub mod records;

pub use error::{IngestError, Result};
pub use records::{IngestOptions, parse_records, read_records};
