use std::fs;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, info};

use regcheck_model::Record;

use crate::error::{IngestError, Result};

#[derive(Debug, Clone)]
pub struct IngestOptions {
    /// Field separator byte.
    pub delimiter: u8,
    /// Whether the first line is a header to skip.
    pub has_header: bool,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            delimiter: b';',
            has_header: true,
        }
    }
}

impl IngestOptions {
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }
}

/// Read the whole file, then split it into records.
///
/// The file handle is closed before parsing starts.
pub fn read_records(path: &Path, options: &IngestOptions) -> Result<Vec<Record>> {
    let contents = fs::read_to_string(path).map_err(|source| IngestError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = contents.len(), "read input");
    let records = parse_records(&contents, options)?;
    info!(path = %path.display(), records = records.len(), "loaded records");
    Ok(records)
}

/// Split delimited text into records.
///
/// Quotes have no special meaning. Each line is trimmed at both ends, so
/// only the outer edges of the first and last fields lose whitespace.
/// Blank lines, including a trailing terminator line, yield no record. A
/// line made only of delimiters is still a record with empty fields.
pub fn parse_records(contents: &str, options: &IngestOptions) -> Result<Vec<Record>> {
    let mut reader = ReaderBuilder::new()
        .delimiter(options.delimiter)
        .has_headers(options.has_header)
        .flexible(true)
        .quoting(false)
        .trim(Trim::None)
        .from_reader(contents.as_bytes());

    let first_line = if options.has_header { 2 } else { 1 };
    let mut records = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        let fallback_line = first_line + idx as u64;
        let raw = result.map_err(|source| IngestError::Parse {
            line: source
                .position()
                .map(csv::Position::line)
                .unwrap_or(fallback_line),
            source,
        })?;
        let line = raw
            .position()
            .map(csv::Position::line)
            .unwrap_or(fallback_line);
        if is_blank_line(&raw) {
            debug!(line, "skipping blank line");
            continue;
        }
        records.push(Record::new(line, trim_line(&raw)));
    }
    Ok(records)
}

// A line with any delimiter is a record, even if every field is empty.
fn is_blank_line(raw: &StringRecord) -> bool {
    raw.len() <= 1 && raw.iter().all(|value| value.trim().is_empty())
}

fn trim_line(raw: &StringRecord) -> Vec<String> {
    let mut fields: Vec<String> = raw.iter().map(str::to_string).collect();
    if let Some(first) = fields.first_mut() {
        *first = first.trim_start().to_string();
    }
    if let Some(last) = fields.last_mut() {
        *last = last.trim_end().to_string();
    }
    fields
}
