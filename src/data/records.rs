//! Grade records in two-column CSV form.
//!
//! ```text
//! Student ID,Grades
//! S1,AABBCCDDFFAABBCCDDFFAABBCCDDFFAABBCCDDFF
//! ```
//!
//! Columns are located by header name, so extra columns and column order
//! do not matter. Quoting follows RFC 4180; cell contents are otherwise kept
//! exactly as written, including surrounding whitespace, so the validator
//! sees what the file holds.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

pub const ID_COLUMN: &str = "Student ID";
pub const GRADES_COLUMN: &str = "Grades";

/// One record: an identifier and its raw, unvalidated grade sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradeRecord {
    pub id: String,
    pub grades: String,
}

impl GradeRecord {
    pub fn new(id: impl Into<String>, grades: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            grades: grades.into(),
        }
    }
}

/// Parses CSV text into records, in file order. Blank lines are skipped.
pub fn parse_records(text: &str) -> Result<Vec<GradeRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(text.as_bytes());

    let columns = reader.headers().map_err(parse_error)?.clone();
    let id_col = find_column(&columns, ID_COLUMN)?;
    let grades_col = find_column(&columns, GRADES_COLUMN)?;

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(parse_error)?;
        records.push(GradeRecord::new(&row[id_col], &row[grades_col]));
    }
    Ok(records)
}

/// Renders records as CSV with a `Student ID,Grades` header. Fields holding
/// commas, quotes or line breaks are quoted.
pub fn write_records(records: &[GradeRecord]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record([ID_COLUMN, GRADES_COLUMN])?;
    for record in records {
        writer.write_record([record.id.as_str(), record.grades.as_str()])?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|err| Error::Csv(err.into_error().into()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Reads and parses a CSV file of records.
pub fn read_records(path: impl AsRef<Path>) -> Result<Vec<GradeRecord>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_records(&text)
}

/// Writes records to `path` as CSV, replacing any existing file.
pub fn save_records(path: impl AsRef<Path>, records: &[GradeRecord]) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, write_records(records)?).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn find_column(columns: &csv::StringRecord, name: &str) -> Result<usize> {
    columns
        .iter()
        .position(|column| column == name)
        .ok_or_else(|| Error::Parse {
            line: 1,
            reason: format!("missing {name:?} column"),
        })
}

fn parse_error(err: csv::Error) -> Error {
    let line = err.position().map_or(1, |pos| pos.line() as usize);
    Error::Parse {
        line,
        reason: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let text = "Student ID,Grades\nS1,AABB\r\nS2,\"CCDD\"\n\n";
        let records = parse_records(text).unwrap();
        assert_eq!(
            records,
            vec![GradeRecord::new("S1", "AABB"), GradeRecord::new("S2", "CCDD")]
        );
    }

    #[test]
    fn test_columns_found_by_name() {
        let text = "Grades,Name,Student ID\nAB$@,Ann,S7\n";
        let records = parse_records(text).unwrap();
        assert_eq!(records, vec![GradeRecord::new("S7", "AB$@")]);
    }

    #[test]
    fn test_missing_column() {
        let err = parse_records("Student ID,Marks\nS1,AA\n").unwrap_err();
        assert!(matches!(err, Error::Parse { line: 1, .. }));
        assert!(matches!(parse_records(""), Err(Error::Parse { .. })));
    }

    #[test]
    fn test_ragged_row() {
        let err = parse_records("Student ID,Grades\nS1,AA\nS2\n").unwrap_err();
        assert!(matches!(err, Error::Parse { line: 3, .. }));
    }

    #[test]
    fn test_write_then_parse() {
        let records = vec![
            GradeRecord::new("S1", "AABBCC"),
            GradeRecord::new("S2", "1A$@"),
        ];
        let text = write_records(&records).unwrap();
        assert!(text.starts_with("Student ID,Grades\n"));
        assert_eq!(parse_records(&text).unwrap(), records);
    }

    #[test]
    fn test_awkward_cells_survive_write_then_parse() {
        let records = vec![
            GradeRecord::new("S1", "AB,CD"),
            GradeRecord::new("S2", "A\"B"),
            GradeRecord::new("S3", "  AABB  "),
            GradeRecord::new("S 4", ",\","),
        ];
        let text = write_records(&records).unwrap();
        assert_eq!(parse_records(&text).unwrap(), records);
    }

    #[test]
    fn test_whitespace_in_cells_is_kept() {
        let text = "Student ID,Grades\nS1, AABB \nS2,\" CCDD\"\n";
        let records = parse_records(text).unwrap();
        assert_eq!(records[0].grades, " AABB ");
        assert_eq!(records[1].grades, " CCDD");
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_records("/nonexistent/seqalgos/batch.csv").unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
