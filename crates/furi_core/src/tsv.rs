//! The TSV file format the backend stores records in.
//!
//! The first non-empty line is the header, every other non-empty line is a record.
//! Tabs and newlines inside cells are stored as the two-character sequences `\t` and `\n`.

use crate::FuriganaRecord;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TsvError {
    #[error("Invalid header {found:?}, expected {expected:?}")]
    InvalidHeader { found: String, expected: String },
    #[error("Too many cells on line {line}: found {found}, expected at most {expected}")]
    TooManyCells {
        line: usize,
        found: usize,
        expected: usize,
    },
}

pub fn escape(cell: &str) -> String {
    cell.replace('\t', "\\t").replace('\n', "\\n")
}

pub fn unescape(cell: &str) -> String {
    cell.replace("\\t", "\t").replace("\\n", "\n")
}

/// The header line without a line terminator.
pub fn header_line() -> String {
    FuriganaRecord::HEADERS
        .iter()
        .map(|header| escape(header))
        .collect::<Vec<_>>()
        .join("\t")
}

/// The record as a single line without a line terminator.
pub fn to_tsv_row(record: &FuriganaRecord) -> String {
    record
        .cells()
        .iter()
        .map(|cell| escape(cell))
        .collect::<Vec<_>>()
        .join("\t")
}

/// Parses the records of a database file.
///
/// A file without any non-empty lines is an empty database.
pub fn parse_database(text: &str) -> Result<Vec<FuriganaRecord>, TsvError> {
    // line numbers are 1-based and count the skipped empty lines as well
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line))
        .filter(|(_, line)| !line.is_empty());

    let Some((_, first)) = lines.next() else {
        return Ok(Vec::new());
    };
    let expected = header_line();
    if first != expected {
        return Err(TsvError::InvalidHeader {
            found: first.to_string(),
            expected,
        });
    }

    let columns = FuriganaRecord::HEADERS.len();
    let mut records = Vec::new();
    for (line_number, line) in lines {
        let mut cells = line.split('\t').map(unescape).collect::<Vec<_>>();
        if cells.len() > columns {
            return Err(TsvError::TooManyCells {
                line: line_number,
                found: cells.len(),
                expected: columns,
            });
        }
        cells.resize(columns, String::new());

        let mut cells = cells.into_iter();
        let mut next = || cells.next().unwrap_or_default();
        records.push(FuriganaRecord {
            word: next(),
            furigana: next(),
            meaning: next(),
            note: next(),
            ruby: next(),
        });
    }
    Ok(records)
}

/// Writes a complete database file, header included.
pub fn write_database(records: &[FuriganaRecord]) -> String {
    let mut text = header_line();
    text.push('\n');
    for record in records {
        text.push_str(&to_tsv_row(record));
        text.push('\n');
    }
    text
}
