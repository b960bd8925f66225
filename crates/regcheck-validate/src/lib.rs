//! Format rules and the record classifier.

mod classifier;
mod rules;

pub use classifier::{RecordClassifier, RuleOutcome};
pub use rules::{Rule, Strictness, is_leap_year};
