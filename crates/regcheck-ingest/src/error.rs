use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    /// The source could not be opened or read as UTF-8 text.
    #[error("cannot read {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Not produced for text input with quoting off and flexible record
    /// lengths; kept so reader errors are never swallowed.
    #[error("malformed record near line {line}: {source}")]
    Parse {
        line: u64,
        #[source]
        source: csv::Error,
    },
}

pub type Result<T> = std::result::Result<T, IngestError>;
