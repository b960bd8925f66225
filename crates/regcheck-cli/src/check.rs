//! Load a file, classify every record, and collect the results.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span, trace};

use regcheck_ingest::{IngestOptions, read_records};
use regcheck_model::{CheckSummary, Record, RecordReport, Verdict};
use regcheck_validate::{RecordClassifier, Strictness};

use crate::logging::redact_value;

#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    pub strictness: Strictness,
    pub ingest: IngestOptions,
}

#[derive(Debug)]
pub struct CheckResult {
    pub path: PathBuf,
    pub reports: Vec<RecordReport>,
    pub summary: CheckSummary,
}

/// Check every record in `path`.
///
/// An unreadable file aborts the run. Invalid records never do.
pub fn check_file(path: &Path, options: &CheckOptions) -> Result<CheckResult> {
    let span = info_span!("check", path = %path.display());
    let _guard = span.enter();
    let start = Instant::now();

    let records = read_records(path, &options.ingest)
        .with_context(|| format!("load records: {}", path.display()))?;

    let classifier = RecordClassifier::new().with_strictness(options.strictness);
    let reports = check_records(&classifier, &records);
    let summary = CheckSummary::from_reports(&reports);

    info!(
        records = summary.records,
        ok = summary.ok,
        invalid = summary.invalid,
        strictness = ?classifier.strictness(),
        duration_ms = start.elapsed().as_millis() as u64,
        "check complete"
    );

    Ok(CheckResult {
        path: path.to_path_buf(),
        reports,
        summary,
    })
}

/// Classify records and emit per-record diagnostics.
pub fn check_records(classifier: &RecordClassifier, records: &[Record]) -> Vec<RecordReport> {
    let reports = classifier.classify_all(records);
    for (record, report) in records.iter().zip(&reports) {
        log_record(classifier, record, &report.verdict);
    }
    reports
}

fn log_record(classifier: &RecordClassifier, record: &Record, verdict: &Verdict) {
    trace!(
        line = record.line,
        fields = record.fields.len(),
        data = %redact_value(&record.fields.join(";")),
        "record"
    );
    if !tracing::enabled!(tracing::Level::DEBUG) {
        return;
    }
    let failed: Vec<String> = classifier
        .evaluate(record)
        .into_iter()
        .filter(|outcome| !outcome.passed)
        .map(|outcome| outcome.rule.to_string())
        .collect();
    match verdict {
        Verdict::Ok => debug!(line = record.line, "record ok"),
        Verdict::Invalid { field, value } => debug!(
            line = record.line,
            field = %field,
            value = %redact_value(value),
            failed_rules = ?failed,
            "record invalid"
        ),
    }
}
