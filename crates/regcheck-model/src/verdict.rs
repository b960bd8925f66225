use std::fmt;

use serde::{Deserialize, Serialize};

use crate::field::FieldRole;

/// Outcome of checking a single record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Verdict {
    Ok,
    /// The first field, in precedence order, whose rule failed.
    Invalid { field: FieldRole, value: String },
}

impl Verdict {
    pub fn invalid(field: FieldRole, value: impl Into<String>) -> Self {
        Verdict::Invalid {
            field,
            value: value.into(),
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Verdict::Ok)
    }

    pub fn failed_field(&self) -> Option<FieldRole> {
        match self {
            Verdict::Ok => None,
            Verdict::Invalid { field, .. } => Some(*field),
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Ok => f.write_str("Register OK"),
            Verdict::Invalid { field, value } => {
                write!(f, "Invalid Registration - {}: {}", field.label(), value)
            }
        }
    }
}

/// Verdict for one record, tagged with its source line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordReport {
    pub line: u64,
    #[serde(flatten)]
    pub verdict: Verdict,
}

/// Totals across a checked file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckSummary {
    pub records: usize,
    pub ok: usize,
    pub invalid: usize,
    /// Invalid counts keyed by the reported field, in first-seen order.
    pub by_field: Vec<(FieldRole, usize)>,
}

impl CheckSummary {
    pub fn from_reports(reports: &[RecordReport]) -> Self {
        let mut summary = CheckSummary {
            records: reports.len(),
            ..CheckSummary::default()
        };
        for report in reports {
            match report.verdict.failed_field() {
                None => summary.ok += 1,
                Some(field) => {
                    summary.invalid += 1;
                    match summary.by_field.iter_mut().find(|(f, _)| *f == field) {
                        Some((_, count)) => *count += 1,
                        None => summary.by_field.push((field, 1)),
                    }
                }
            }
        }
        summary
    }

    pub fn invalid_count(&self, field: FieldRole) -> usize {
        self.by_field
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }

    pub fn has_invalid(&self) -> bool {
        self.invalid > 0
    }
}
