//! Prints the inversion report for the reference scores, then runs the LCS
//! fold over five valid and five invalid generated batches.
//!
//! Usage: `seqreport [DIR]`. With `DIR`, the batches are written there as
//! `positive_test_case_N.csv` / `negative_test_case_N.csv` and read back;
//! without it they stay in memory. Library log output goes to stderr and is
//! filtered by `RUST_LOG` (default `warn`).

use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

use seqalgos::data::{save_records, GradeGenerator};
use seqalgos::report::lcs::test_case_file_name;
use seqalgos::{Error, InversionReport, LcsBatchRunner, LcsOutcome, Result};

const CASES: usize = 5;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    println!("{}", InversionReport::reference());

    let dir = std::env::args().nth(1).map(PathBuf::from);
    if let Err(err) = run_lcs_cases(dir) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run_lcs_cases(dir: Option<PathBuf>) -> Result<()> {
    let mut generator = GradeGenerator::seeded(2024);
    let runner: LcsBatchRunner = LcsBatchRunner::default();
    if let Some(dir) = &dir {
        std::fs::create_dir_all(dir).map_err(|source| Error::Io {
            path: dir.clone(),
            source,
        })?;
    }

    for (case_type, valid) in [("positive", true), ("negative", false)] {
        println!("\n{} Test Cases:", capitalize(case_type));
        for i in 1..=CASES {
            let batch = generator.generate_batch(valid);
            let outcome = match &dir {
                Some(dir) => {
                    let path = dir.join(test_case_file_name(case_type, i));
                    save_records(&path, &batch)?;
                    runner.run_file(&path)?
                }
                None => runner.run_batch(&batch)?,
            };
            print_outcome(case_type, i, &outcome);
        }
    }
    Ok(())
}

fn print_outcome(case_type: &str, i: usize, outcome: &LcsOutcome) {
    let label = capitalize(case_type);
    match outcome {
        LcsOutcome::Found(lcs) => println!("LCS for {label} Test Case {i}: {lcs}"),
        LcsOutcome::Aborted { .. } => {
            println!("{outcome}");
            println!("Error detected in {label} Test Case {i}. Skipping LCS calculation.");
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
