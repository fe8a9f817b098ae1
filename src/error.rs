// src/error.rs

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, TallyError>;

#[derive(thiserror::Error, Debug)]
pub enum TallyError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// First line of a sequence file starts with neither `>` nor `@`.
    #[error("file `{}' is not in Fasta or FastQ format", .path.display())]
    UnrecognizedFormat { path: PathBuf },

    /// A thresholded BLAST column that does not parse as a number.
    #[error("line {line}: field `{field}' is not numeric: {value:?}")]
    MalformedNumericField {
        line: usize,
        field: &'static str,
        value: String,
    },

    /// A BLAST row with fewer than the 12 tabular columns.
    #[error("line {line}: expected 12 tab-separated fields, found {found}")]
    MalformedRecord { line: usize, found: usize },

    /// A BLAST row that is not valid UTF-8 text.
    #[error("line {line}: not valid UTF-8 text")]
    InvalidText { line: usize },

    #[error("line {line}: missing line terminator")]
    MissingLineTerminator { line: usize },

    #[error("no input files supplied")]
    MissingInput,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unrecognized_format_names_the_file() {
        let err = TallyError::UnrecognizedFormat {
            path: PathBuf::from("reads/sample.txt"),
        };
        assert_eq!(
            err.to_string(),
            "file `reads/sample.txt' is not in Fasta or FastQ format"
        );
    }
}
