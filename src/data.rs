//! Inputs for the algorithms: the reference score table, grade records read
//! from CSV, and seeded synthetic grade batches.

pub mod generator;
pub mod records;
pub mod reference;

pub use generator::{GeneratorConfig, GradeGenerator, InvalidKind};
pub use records::{parse_records, read_records, save_records, write_records, GradeRecord};
pub use reference::REFERENCE_SCORES;
