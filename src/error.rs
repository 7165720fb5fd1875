//! Error types shared across the crate.
//!
//! The algorithmic cores (inversion counting, LCS, categorization) are total
//! functions and never produce these. Errors only arise at the edges: when a
//! grade sequence is rejected, when a fold has nothing to fold, or when
//! tabular input cannot be read.

use std::path::PathBuf;

/// Why a grade sequence was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The sequence does not have the fixed character length.
    #[error("invalid grade sequence length: expected {expected} characters, found {found}")]
    LengthMismatch { expected: usize, found: usize },

    /// A character that is not a letter (digit, punctuation, whitespace)
    /// appears somewhere in the sequence. `position` is 0-based.
    #[error("invalid character {found:?} at position {position}")]
    InvalidCharacter { position: usize, found: char },

    /// A code made of letters falls outside the grade alphabet.
    /// `position` is the 0-based index of the code, not of the character.
    #[error("invalid grade code {code:?} at code {position}")]
    InvalidCodeFormat { position: usize, code: String },
}

/// Crate-wide error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A sequence in a fold was rejected by the validator. `position` is
    /// 1-based; `record` carries the record identifier when one is known.
    #[error("{} at position {position}: {source}", record_label(.record))]
    Rejected {
        position: usize,
        record: Option<String>,
        #[source]
        source: ValidationError,
    },

    /// A fold was asked to reduce an empty list.
    #[error("cannot fold an empty batch of sequences")]
    EmptyBatch,

    /// Tabular input could not be parsed. `line` is 1-based.
    #[error("parse error on line {line}: {reason}")]
    Parse { line: usize, reason: String },

    /// A CSV record could not be encoded.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// A batch file could not be read or written.
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn record_label(record: &Option<String>) -> String {
    match record {
        Some(id) => format!("record {id} rejected"),
        None => "sequence rejected".to_string(),
    }
}

impl Error {
    /// The validation failure behind a rejected fold, if that is what this is.
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            Error::Rejected { source, .. } => Some(source),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_message_names_record() {
        let err = Error::Rejected {
            position: 3,
            record: Some("S3".to_string()),
            source: ValidationError::LengthMismatch {
                expected: 40,
                found: 20,
            },
        };
        let msg = err.to_string();
        assert!(msg.contains("S3"));
        assert!(msg.contains("position 3"));
        assert!(msg.contains("expected 40"));
        assert!(err.validation().is_some());
    }

    #[test]
    fn test_rejected_without_record() {
        let err = Error::Rejected {
            position: 2,
            record: None,
            source: ValidationError::InvalidCharacter {
                position: 38,
                found: '1',
            },
        };
        assert!(err.to_string().starts_with("sequence rejected at position 2"));
        assert!(Error::EmptyBatch.validation().is_none());
    }
}
