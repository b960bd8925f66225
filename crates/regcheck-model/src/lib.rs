pub mod error;
pub mod field;
pub mod record;
pub mod verdict;

pub use error::{ModelError, Result};
pub use field::FieldRole;
pub use record::Record;
pub use verdict::{CheckSummary, RecordReport, Verdict};
