use serde::{Deserialize, Serialize};

use crate::field::FieldRole;

/// One line of the input file split into positional fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// 1-based line number in the source file.
    pub line: u64,
    pub fields: Vec<String>,
}

impl Record {
    pub fn new(line: u64, fields: Vec<String>) -> Self {
        Self { line, fields }
    }

    /// Value at the role's position, or `""` when the record is too short.
    pub fn field(&self, role: FieldRole) -> &str {
        self.fields
            .get(role.index())
            .map(String::as_str)
            .unwrap_or("")
    }
}

impl<S: Into<String>> FromIterator<S> for Record {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            line: 0,
            fields: iter.into_iter().map(Into::into).collect(),
        }
    }
}
