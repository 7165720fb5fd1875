//! Validation of fixed-length grade sequences.
//!
//! A grade sequence is a run of fixed-width letter codes, e.g. `"AABBCD..."`
//! with two-letter codes. Anything a fold consumes must pass a
//! [`SequenceValidator`] first.

use crate::error::ValidationError;

/// Anything that can accept or reject a sequence.
///
/// Closures of the right shape implement it too, so a plain function can
/// stand in for [`StandardGradeValidator`].
pub trait SequenceValidator {
    fn validate(&self, sequence: &str) -> Result<(), ValidationError>;

    fn is_valid(&self, sequence: &str) -> bool {
        self.validate(sequence).is_ok()
    }
}

impl<F> SequenceValidator for F
where
    F: Fn(&str) -> Result<(), ValidationError>,
{
    fn validate(&self, sequence: &str) -> Result<(), ValidationError> {
        self(sequence)
    }
}

/// Shape and alphabet of a grade sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradeAlphabet {
    /// Characters per grade code.
    pub code_width: usize,
    /// Grade codes in one sequence.
    pub codes_per_sequence: usize,
    /// Lowest letter allowed in a code.
    pub first: char,
    /// Highest letter allowed in a code.
    pub last: char,
}

impl Default for GradeAlphabet {
    fn default() -> Self {
        Self {
            code_width: 2,
            codes_per_sequence: 20,
            first: 'A',
            last: 'F',
        }
    }
}

impl GradeAlphabet {
    /// Total characters in a valid sequence.
    pub fn sequence_len(&self) -> usize {
        self.code_width * self.codes_per_sequence
    }

    pub fn contains(&self, c: char) -> bool {
        (self.first..=self.last).contains(&c)
    }
}

/// The stock validator: fixed length, letters only, every code drawn from
/// the alphabet. Checks run in that order and the first failure wins.
#[derive(Debug, Clone, Default)]
pub struct StandardGradeValidator {
    alphabet: GradeAlphabet,
}

impl StandardGradeValidator {
    pub fn new(alphabet: GradeAlphabet) -> Self {
        Self { alphabet }
    }

    pub fn alphabet(&self) -> &GradeAlphabet {
        &self.alphabet
    }
}

impl SequenceValidator for StandardGradeValidator {
    fn validate(&self, sequence: &str) -> Result<(), ValidationError> {
        let chars: Vec<char> = sequence.chars().collect();
        let expected = self.alphabet.sequence_len();
        if chars.len() != expected {
            return Err(ValidationError::LengthMismatch {
                expected,
                found: chars.len(),
            });
        }

        if let Some((position, &found)) = chars
            .iter()
            .enumerate()
            .find(|(_, c)| !c.is_alphabetic())
        {
            return Err(ValidationError::InvalidCharacter { position, found });
        }

        let width = self.alphabet.code_width.max(1);
        for (position, code) in chars.chunks(width).enumerate() {
            if !code.iter().all(|&c| self.alphabet.contains(c)) {
                return Err(ValidationError::InvalidCodeFormat {
                    position,
                    code: code.iter().collect(),
                });
            }
        }

        Ok(())
    }
}
