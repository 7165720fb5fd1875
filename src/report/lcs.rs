//! Running the LCS fold over whole batches and reporting what happened.

use std::fmt;
use std::path::Path;

use log::{debug, info};

use crate::cs::dynamic::lcs_fold::LcsFold;
use crate::cs::string::grade_validator::{SequenceValidator, StandardGradeValidator};
use crate::data::records::{read_records, GradeRecord};
use crate::error::{Error, Result, ValidationError};

/// What a single batch produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LcsOutcome {
    /// Every record was valid; this is the cumulative LCS.
    Found(String),
    /// A record was rejected and no LCS was computed for the batch.
    Aborted {
        position: usize,
        record: Option<String>,
        reason: ValidationError,
    },
}

impl LcsOutcome {
    /// Turns a fold result into an outcome. Rejections become
    /// [`LcsOutcome::Aborted`]; any other error is passed through.
    pub fn from_fold(result: Result<String>) -> Result<Self> {
        match result {
            Ok(lcs) => Ok(LcsOutcome::Found(lcs)),
            Err(Error::Rejected {
                position,
                record,
                source,
            }) => Ok(LcsOutcome::Aborted {
                position,
                record,
                reason: source,
            }),
            Err(other) => Err(other),
        }
    }

    pub fn lcs(&self) -> Option<&str> {
        match self {
            LcsOutcome::Found(lcs) => Some(lcs.as_str()),
            LcsOutcome::Aborted { .. } => None,
        }
    }

    pub fn is_aborted(&self) -> bool {
        matches!(self, LcsOutcome::Aborted { .. })
    }
}

impl fmt::Display for LcsOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LcsOutcome::Found(lcs) => write!(f, "LCS: {lcs}"),
            LcsOutcome::Aborted {
                position,
                record: Some(id),
                reason,
            } => write!(f, "Error for student {id} (row {position}): {reason}"),
            LcsOutcome::Aborted {
                position,
                record: None,
                reason,
            } => write!(f, "Error at row {position}: {reason}"),
        }
    }
}

/// Runs the fold over many independent batches. One aborted batch never
/// stops the others.
#[derive(Debug, Clone, Default)]
pub struct LcsBatchRunner<V = StandardGradeValidator> {
    fold: LcsFold<V>,
}

impl<V: SequenceValidator> LcsBatchRunner<V> {
    pub fn new(validator: V) -> Self {
        Self {
            fold: LcsFold::new(validator),
        }
    }

    /// Folds one batch of records, validating every record.
    pub fn run_batch(&self, records: &[GradeRecord]) -> Result<LcsOutcome> {
        debug!("folding batch of {} records", records.len());
        LcsOutcome::from_fold(self.fold.fold_records(records))
    }

    /// Reads a CSV batch from `path` and folds it.
    pub fn run_file(&self, path: impl AsRef<Path>) -> Result<LcsOutcome> {
        let records = read_records(path)?;
        self.run_batch(&records)
    }

    /// Runs `{case_type}_test_case_{i}.csv` for `i` in `1..=cases` under
    /// `dir`, returning each case number with its result.
    pub fn run_test_cases(
        &self,
        dir: impl AsRef<Path>,
        case_type: &str,
        cases: usize,
    ) -> Vec<(usize, Result<LcsOutcome>)> {
        let dir = dir.as_ref();
        (1..=cases)
            .map(|i| {
                let path = dir.join(test_case_file_name(case_type, i));
                info!("running {}", path.display());
                (i, self.run_file(&path))
            })
            .collect()
    }
}

/// File name of the `i`-th test case of a kind, e.g. `positive_test_case_1.csv`.
pub fn test_case_file_name(case_type: &str, i: usize) -> String {
    format!("{case_type}_test_case_{i}.csv")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::generator::GradeGenerator;
    use crate::data::records::{parse_records, save_records};

    fn runner() -> LcsBatchRunner {
        LcsBatchRunner::default()
    }

    #[test]
    fn test_valid_batch_found() {
        let records = GradeGenerator::seeded(21).generate_batch(true);
        let outcome = runner().run_batch(&records).unwrap();
        let lcs = outcome.lcs().unwrap();
        assert!(lcs.len() <= 40);
        assert!(outcome.to_string().starts_with("LCS: "));
    }

    #[test]
    fn test_invalid_batch_aborted() {
        let records = GradeGenerator::seeded(22).generate_batch(false);
        let outcome = runner().run_batch(&records).unwrap();
        assert!(outcome.is_aborted());
        assert_eq!(outcome.lcs(), None);
        match &outcome {
            LcsOutcome::Aborted {
                position, record, ..
            } => {
                assert_eq!(*position, 1);
                assert_eq!(record.as_deref(), Some("S1"));
            }
            LcsOutcome::Found(_) => unreachable!(),
        }
        assert!(outcome.to_string().starts_with("Error for student S1 (row 1): "));
    }

    #[test]
    fn test_empty_batch_is_an_error() {
        assert!(matches!(runner().run_batch(&[]), Err(Error::EmptyBatch)));
    }

    #[test]
    fn test_from_fold_passes_other_errors() {
        let err = LcsOutcome::from_fold(Err(Error::EmptyBatch)).unwrap_err();
        assert!(matches!(err, Error::EmptyBatch));
        assert_eq!(
            LcsOutcome::from_fold(Ok("AB".to_string())).unwrap(),
            LcsOutcome::Found("AB".to_string())
        );
    }

    #[test]
    fn test_run_test_cases_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let mut generator = GradeGenerator::seeded(23);
        for i in 1..=2 {
            let batch = generator.generate_batch(i == 1);
            save_records(dir.path().join(test_case_file_name("mixed", i)), &batch).unwrap();
        }

        let results = runner().run_test_cases(dir.path(), "mixed", 3);
        assert_eq!(results.len(), 3);
        assert!(matches!(results[0].1, Ok(LcsOutcome::Found(_))));
        assert!(matches!(results[1].1, Ok(LcsOutcome::Aborted { .. })));
        assert!(matches!(results[2].1, Err(Error::Io { .. })));
    }

    #[test]
    fn test_padded_csv_cell_is_rejected() {
        let grades = "AABBCCDDFFAABBCCDDFFAABBCCDDFFAABBCCDDFF";
        let text = format!("Student ID,Grades\nS1,{grades}\nS2, {grades} \n");
        let records = parse_records(&text).unwrap();
        assert_eq!(records[1].grades.len(), 42);

        let outcome = runner().run_batch(&records).unwrap();
        assert_eq!(
            outcome,
            LcsOutcome::Aborted {
                position: 2,
                record: Some("S2".to_string()),
                reason: ValidationError::LengthMismatch {
                    expected: 40,
                    found: 42
                },
            }
        );
    }

    #[test]
    fn test_padded_cell_on_disk_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("padded.csv");
        let mut records = GradeGenerator::seeded(24).generate_batch(true);
        records[4].grades = format!(" {} ", records[4].grades);
        save_records(&path, &records).unwrap();

        let outcome = runner().run_file(&path).unwrap();
        assert!(matches!(
            outcome,
            LcsOutcome::Aborted {
                position: 5,
                reason: ValidationError::LengthMismatch { found: 42, .. },
                ..
            }
        ));
    }
}
