pub mod fasta;
pub mod fastq;
pub mod sniff;

use std::io::BufRead;
use std::path::Path;

pub use fasta::count_fasta;
pub use fastq::count_fastq;
pub use sniff::sniff;

use crate::error::{Result, TallyError};
use crate::input::{open_input, strip_terminator, LineCursor};
use crate::types::{SequenceCountResult, SequenceFormat};

/// Residue bytes on one sequence line.
///
/// A missing terminator is accepted only on the last line of the input.
fn residue_count<R: BufRead>(line: &[u8], cursor: &mut LineCursor<R>) -> Result<u64> {
    let line_number = cursor.line_number();
    match strip_terminator(line, line_number) {
        Ok(body) => Ok(body.len() as u64),
        Err(TallyError::MissingLineTerminator { .. }) if cursor.is_exhausted()? => {
            log::debug!("line {line_number}: final line has no terminator");
            Ok(line.len() as u64)
        }
        Err(e) => Err(e),
    }
}

/// Sniff the format from the first line and run the matching counter.
///
/// Returns `Ok(None)` for an empty input.
pub fn count_sequences<R: BufRead>(
    cursor: &mut LineCursor<R>,
    path: &Path,
) -> Result<Option<SequenceCountResult>> {
    let format = match cursor.peek_line()? {
        Some(first) => sniff(first),
        None => {
            log::warn!("{}: empty file, skipping", path.display());
            return Ok(None);
        }
    };
    log::debug!("{}: detected {:?}", path.display(), format);

    if format == SequenceFormat::Unrecognized {
        return Err(TallyError::UnrecognizedFormat {
            path: path.to_path_buf(),
        });
    }

    // the counters start with the header already consumed
    cursor.skip_line()?;
    let result = match format {
        SequenceFormat::Fasta => count_fasta(cursor)?,
        _ => count_fastq(cursor)?,
    };
    Ok(Some(result))
}

/// Open `path` (plain or gzip) and count its sequences.
pub fn count_file<P: AsRef<Path>>(path: P) -> Result<Option<SequenceCountResult>> {
    let path = path.as_ref();
    let mut cursor = open_input(path)?;
    count_sequences(&mut cursor, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(body: &str) -> Result<Option<SequenceCountResult>> {
        let mut cursor = LineCursor::new(Cursor::new(body));
        count_sequences(&mut cursor, Path::new("test.txt"))
    }

    #[test]
    fn test_dispatch_by_first_line() {
        assert_eq!(
            run(">a\nACGT\n>b\nAC\n").unwrap(),
            Some(SequenceCountResult { sequences: 2, bases: 6 })
        );
        assert_eq!(
            run("@a\nACGT\n+\nIIII\n").unwrap(),
            Some(SequenceCountResult { sequences: 1, bases: 4 })
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(run("").unwrap(), None);
    }

    #[test]
    fn test_unrecognized_format() {
        match run("ACGT\n") {
            Err(TallyError::UnrecognizedFormat { path }) => {
                assert_eq!(path, Path::new("test.txt"))
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_non_utf8_headers_are_counted() {
        let dir = tempfile::tempdir().unwrap();
        let fasta = dir.path().join("latin1.fa");
        std::fs::write(&fasta, b">seq1 caf\xE9\nACGT\n").unwrap();
        assert_eq!(
            count_file(&fasta).unwrap(),
            Some(SequenceCountResult { sequences: 1, bases: 4 })
        );

        let fastq = dir.path().join("latin1.fq");
        std::fs::write(&fastq, b"@r1 \xFF\nACG\n+\nIII\n@r2 \xE9\nAC\n+\nII\n").unwrap();
        assert_eq!(
            count_file(&fastq).unwrap(),
            Some(SequenceCountResult { sequences: 2, bases: 5 })
        );
    }
}
