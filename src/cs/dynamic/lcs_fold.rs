//! Sequential LCS reduction over an ordered batch of sequences.
//!
//! The accumulator starts as the first sequence and is replaced by
//! `lcs(accumulator, next)` for every following sequence, left to right.
//! This is not the LCS of all sequences at once (NP-hard in general); the
//! result depends on input order. Its length never grows from one step to
//! the next.
//!
//! Each sequence after the first is validated before it is folded in. The
//! first rejection aborts the whole fold and nothing partial is returned.

use log::{debug, warn};

use crate::cs::dynamic::longest_common_subsequence::lcs_of;
use crate::cs::string::grade_validator::{SequenceValidator, StandardGradeValidator};
use crate::data::records::GradeRecord;
use crate::error::{Error, Result};

/// Folds the LCS engine across sequences, guarded by a validator.
#[derive(Debug, Clone, Default)]
pub struct LcsFold<V = StandardGradeValidator> {
    validator: V,
}

impl<V: SequenceValidator> LcsFold<V> {
    pub fn new(validator: V) -> Self {
        Self { validator }
    }

    pub fn validator(&self) -> &V {
        &self.validator
    }

    /// Folds `sequences` in order. The first element seeds the accumulator
    /// without being validated; checking it is the caller's job.
    ///
    /// Errors with [`Error::Rejected`] carrying the 1-based position of the
    /// first rejected sequence, or [`Error::EmptyBatch`].
    pub fn fold<S: AsRef<str>>(&self, sequences: &[S]) -> Result<String> {
        let items = sequences.iter().map(|s| (None, s.as_ref()));
        run(&self.validator, items, false)
    }

    /// Like [`LcsFold::fold`] but the seed is validated too.
    pub fn fold_validated<S: AsRef<str>>(&self, sequences: &[S]) -> Result<String> {
        let items = sequences.iter().map(|s| (None, s.as_ref()));
        run(&self.validator, items, true)
    }

    /// Folds the grade column of `records`, validating every record. A
    /// rejection names the offending record's identifier.
    pub fn fold_records(&self, records: &[GradeRecord]) -> Result<String> {
        let items = records
            .iter()
            .map(|r| (Some(r.id.as_str()), r.grades.as_str()));
        run(&self.validator, items, true)
    }
}

/// Folds `sequences` with the given validator. See [`LcsFold::fold`].
pub fn reduce_lcs<S, V>(sequences: &[S], validator: &V) -> Result<String>
where
    S: AsRef<str>,
    V: SequenceValidator + ?Sized,
{
    run(validator, sequences.iter().map(|s| (None, s.as_ref())), false)
}

fn run<'a, V, I>(validator: &V, mut items: I, validate_seed: bool) -> Result<String>
where
    V: SequenceValidator + ?Sized,
    I: Iterator<Item = (Option<&'a str>, &'a str)>,
{
    let (seed_id, seed) = items.next().ok_or(Error::EmptyBatch)?;
    if validate_seed {
        check(validator, 1, seed_id, seed)?;
    }

    let mut acc: Vec<char> = seed.chars().collect();
    for (offset, (id, sequence)) in items.enumerate() {
        let position = offset + 2;
        check(validator, position, id, sequence)?;

        let next: Vec<char> = sequence.chars().collect();
        acc = lcs_of(&acc, &next);
        debug!("lcs fold step {position}: accumulator length {}", acc.len());
    }

    Ok(acc.into_iter().collect())
}

fn check<V>(validator: &V, position: usize, id: Option<&str>, sequence: &str) -> Result<()>
where
    V: SequenceValidator + ?Sized,
{
    validator.validate(sequence).map_err(|source| {
        warn!(
            "aborting lcs fold at position {position} ({}): {source}",
            id.unwrap_or("-")
        );
        Error::Rejected {
            position,
            record: id.map(str::to_string),
            source,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cs::dynamic::longest_common_subsequence::lcs_sequence;
    use crate::data::generator::{GradeGenerator, InvalidKind};
    use crate::error::ValidationError;

    const A: &str = "AABBCCDDFFAABBCCDDFFAABBCCDDFFAABBCCDDFF";
    const B: &str = "ABABABABABCDCDCDCDCDFFFFFFFFFFAAAAAAAAAA";
    const C: &str = "FFDDCCBBAAFFDDCCBBAAFFDDCCBBAAFFDDCCBBAA";

    #[test]
    fn test_single_sequence_is_its_own_lcs() {
        let fold = LcsFold::<StandardGradeValidator>::default();
        assert_eq!(fold.fold(&[A]).unwrap(), A);
    }

    #[test]
    fn test_fold_matches_manual_reduction() {
        let fold = LcsFold::<StandardGradeValidator>::default();
        let expected = lcs_sequence(&lcs_sequence(A, B), C);
        assert_eq!(fold.fold(&[A, B, C]).unwrap(), expected);
    }

    #[test]
    fn test_empty_batch() {
        let fold = LcsFold::<StandardGradeValidator>::default();
        let empty: [&str; 0] = [];
        assert!(matches!(fold.fold(&empty), Err(Error::EmptyBatch)));
    }

    #[test]
    fn test_seed_is_not_validated_by_fold() {
        let fold = LcsFold::<StandardGradeValidator>::default();
        assert_eq!(fold.fold(&["AB12", A]).unwrap(), "AB");
        assert!(matches!(
            fold.fold_validated(&["AB12", A]),
            Err(Error::Rejected { position: 1, .. })
        ));
    }

    #[test]
    fn test_aborts_at_first_rejection() {
        let fold = LcsFold::<StandardGradeValidator>::default();
        let short = &A[..20];
        let with_digit = format!("{}1A", &B[..38]);
        let err = fold.fold(&[A, B, short, with_digit.as_str()]).unwrap_err();
        match err {
            Error::Rejected {
                position,
                record,
                source,
            } => {
                assert_eq!(position, 3);
                assert_eq!(record, None);
                assert_eq!(
                    source,
                    ValidationError::LengthMismatch {
                        expected: 40,
                        found: 20
                    }
                );
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_fold_records_names_record() {
        let records = vec![
            GradeRecord::new("S1", A),
            GradeRecord::new("S2", format!("{}$@", &B[..38])),
        ];
        let err = LcsFold::<StandardGradeValidator>::default()
            .fold_records(&records)
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Rejected { position: 2, record: Some(ref id), .. } if id == "S2"
        ));
    }

    #[test]
    fn test_closure_validator_is_substitutable() {
        let reject_f = |s: &str| match s.find('F') {
            Some(position) => Err(ValidationError::InvalidCharacter {
                position,
                found: 'F',
            }),
            None => Ok(()),
        };
        assert_eq!(reduce_lcs(&["ABF", "AB", "B"], &reject_f).unwrap(), "B");
        assert!(matches!(
            reduce_lcs(&["AB", "ABF"], &reject_f),
            Err(Error::Rejected { position: 2, .. })
        ));
    }

    #[test]
    fn test_length_never_increases() {
        let mut generator = GradeGenerator::seeded(11);
        let batch: Vec<String> = (0..20).map(|_| generator.valid_grades()).collect();
        let fold = LcsFold::<StandardGradeValidator>::default();

        let mut previous = usize::MAX;
        for k in 1..=batch.len() {
            let len = fold.fold(&batch[..k]).unwrap().len();
            assert!(len <= previous, "step {k}: {len} > {previous}");
            previous = len;
        }
    }

    #[test]
    fn test_generated_invalid_row_aborts() {
        let mut generator = GradeGenerator::seeded(5);
        let mut batch: Vec<String> = (0..5).map(|_| generator.valid_grades()).collect();
        batch[3] = generator.invalid_grades(InvalidKind::NumberInGrades);
        assert!(matches!(
            LcsFold::<StandardGradeValidator>::default().fold(&batch),
            Err(Error::Rejected { position: 4, .. })
        ));
    }
}
