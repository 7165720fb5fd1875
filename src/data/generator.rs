//! Seeded synthetic grade batches, valid and deliberately broken.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::data::records::GradeRecord;

/// Ways a generated sequence can be broken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidKind {
    /// Half the usual number of codes.
    SmallLength,
    /// Full length, but ends in `"1A"`.
    NumberInGrades,
    /// Full length, but ends in `"$@"`.
    SpecialCharacters,
}

impl InvalidKind {
    pub const ALL: [InvalidKind; 3] = [
        InvalidKind::SmallLength,
        InvalidKind::NumberInGrades,
        InvalidKind::SpecialCharacters,
    ];
}

/// Configuration for [`GradeGenerator`].
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Records per generated batch.
    pub records: usize,
    /// Codes in one valid sequence.
    pub codes_per_sequence: usize,
    /// Codes drawn from when building a sequence.
    pub codes: Vec<String>,
    /// Fixed seed for reproducible batches; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            records: 20,
            codes_per_sequence: 20,
            codes: ["AA", "AB", "BB", "BC", "CC", "CD", "DD", "FF"]
                .iter()
                .map(|c| c.to_string())
                .collect(),
            seed: None,
        }
    }
}

#[derive(Debug)]
pub struct GradeGenerator {
    config: GeneratorConfig,
    rng: ChaCha8Rng,
}

impl GradeGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self { config, rng }
    }

    /// Default configuration with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(GeneratorConfig {
            seed: Some(seed),
            ..GeneratorConfig::default()
        })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// A sequence of `codes_per_sequence` codes drawn with replacement.
    pub fn valid_grades(&mut self) -> String {
        self.codes(self.config.codes_per_sequence)
    }

    pub fn invalid_grades(&mut self, kind: InvalidKind) -> String {
        match kind {
            InvalidKind::SmallLength => self.codes(self.config.codes_per_sequence / 2),
            InvalidKind::NumberInGrades => self.with_broken_tail("1A"),
            InvalidKind::SpecialCharacters => self.with_broken_tail("$@"),
        }
    }

    /// An invalid sequence of a randomly chosen kind.
    pub fn random_invalid_grades(&mut self) -> String {
        let kind = InvalidKind::ALL[self.rng.gen_range(0..InvalidKind::ALL.len())];
        self.invalid_grades(kind)
    }

    /// A batch of `records` records with ids `S1..Sn`. When `valid` is
    /// false every record is broken.
    pub fn generate_batch(&mut self, valid: bool) -> Vec<GradeRecord> {
        (1..=self.config.records)
            .map(|n| {
                let grades = if valid {
                    self.valid_grades()
                } else {
                    self.random_invalid_grades()
                };
                GradeRecord::new(format!("S{n}"), grades)
            })
            .collect()
    }

    fn codes(&mut self, count: usize) -> String {
        let mut out = String::new();
        for _ in 0..count {
            if let Some(code) = self.config.codes.choose(&mut self.rng) {
                out.push_str(code);
            }
        }
        out
    }

    fn with_broken_tail(&mut self, tail: &str) -> String {
        let mut grades: Vec<char> = self.valid_grades().chars().collect();
        grades.truncate(grades.len().saturating_sub(tail.chars().count()));
        grades.into_iter().chain(tail.chars()).collect()
    }
}
