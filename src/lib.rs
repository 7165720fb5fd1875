pub mod cs;
pub mod data;
pub mod error;
pub mod report;

pub use cs::{dynamic, sort, string};
pub use error::{Error, Result, ValidationError};
pub use report::{categorize, CategoryMap, InversionReport, LcsBatchRunner, LcsOutcome};
