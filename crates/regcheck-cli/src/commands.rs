use anyhow::{Context, Result};

use regcheck_cli::check::{CheckOptions, check_file};
use regcheck_cli::render::{render_json, render_text, rules_table, summary_table};
use regcheck_ingest::IngestOptions;
use regcheck_validate::Strictness;

use crate::cli::{CheckArgs, OutputFormatArg, RulesArgs};

/// Result of `regcheck check` that drives the exit code.
pub struct CheckOutcome {
    pub has_invalid: bool,
}

pub fn run_check(args: &CheckArgs) -> Result<CheckOutcome> {
    let options = CheckOptions {
        strictness: strictness(args.strict),
        ingest: IngestOptions::default().with_delimiter(args.delimiter),
    };
    let result = check_file(&args.file, &options)?;

    match args.format {
        OutputFormatArg::Text => {
            print!("{}", render_text(&result.reports));
            if args.summary {
                println!("{}", summary_table(&result.summary));
            }
        }
        OutputFormatArg::Json => {
            let json = render_json(&result.reports).context("serialize verdicts")?;
            println!("{json}");
            if args.summary {
                // Keep stdout a single JSON document.
                eprintln!("{}", summary_table(&result.summary));
            }
        }
    }

    Ok(CheckOutcome {
        has_invalid: result.summary.has_invalid(),
    })
}

pub fn run_rules(args: &RulesArgs) {
    println!("{}", rules_table(strictness(args.strict)));
}

fn strictness(strict: bool) -> Strictness {
    if strict {
        Strictness::Strict
    } else {
        Strictness::Lenient
    }
}
