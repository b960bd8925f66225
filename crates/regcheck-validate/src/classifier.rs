//! Record classification.
//!
//! A record is checked rule by rule in [`Rule::PRECEDENCE`] order. The first
//! failing rule decides the verdict; later rules are not consulted.

use regcheck_model::{Record, RecordReport, Verdict};

use crate::rules::{Rule, Strictness};

/// Outcome of a single rule against a record, used for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleOutcome {
    pub rule: Rule,
    pub passed: bool,
}

/// Applies the fixed rule set to records.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordClassifier {
    strictness: Strictness,
}

impl RecordClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_strictness(mut self, strictness: Strictness) -> Self {
        self.strictness = strictness;
        self
    }

    pub fn strictness(&self) -> Strictness {
        self.strictness
    }

    /// Verdict for one record.
    pub fn classify(&self, record: &Record) -> Verdict {
        for rule in Rule::PRECEDENCE {
            let value = record.field(rule.role());
            if !rule.matches_with(value, self.strictness) {
                return Verdict::invalid(rule.role(), value);
            }
        }
        Verdict::Ok
    }

    /// Verdicts for all records, in input order.
    pub fn classify_all(&self, records: &[Record]) -> Vec<RecordReport> {
        records
            .iter()
            .map(|record| RecordReport {
                line: record.line,
                verdict: self.classify(record),
            })
            .collect()
    }

    /// Every rule's outcome, in precedence order, without short-circuiting.
    pub fn evaluate(&self, record: &Record) -> Vec<RuleOutcome> {
        Rule::PRECEDENCE
            .iter()
            .map(|rule| RuleOutcome {
                rule: *rule,
                passed: rule.matches_with(record.field(rule.role()), self.strictness),
            })
            .collect()
    }
}
