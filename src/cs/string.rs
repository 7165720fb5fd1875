pub mod grade_validator;

pub use grade_validator::{GradeAlphabet, SequenceValidator, StandardGradeValidator};
