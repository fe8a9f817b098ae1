use std::io::BufRead;

use super::residue_count;
use crate::error::Result;
use crate::input::LineCursor;
use crate::types::SequenceCountResult;

/// Count sequences and residues in FASTQ layout (header, sequence, `+`, quality).
///
/// The cursor must sit just past the first `@` header, which is already
/// counted as sequence #1. Each pass reads the rest of one record and then
/// probes the following line for the next header. The quality line is
/// skipped unread, so a quality string starting with `@` never opens a record.
pub fn count_fastq<R: BufRead>(cursor: &mut LineCursor<R>) -> Result<SequenceCountResult> {
    let mut result = SequenceCountResult { sequences: 1, bases: 0 };

    loop {
        let Some(seq) = cursor.next_line()? else {
            log::warn!("truncated FASTQ record after line {}", cursor.line_number());
            break;
        };
        result.bases += residue_count(&seq, cursor)?;

        // separator, then quality
        if !cursor.skip_line()? || !cursor.skip_line()? {
            log::warn!("truncated FASTQ record after line {}", cursor.line_number());
            break;
        }

        match cursor.next_line()? {
            None => break,
            Some(header) if header.starts_with(b"@") => result.sequences += 1,
            Some(header) => {
                log::warn!(
                    "line {}: expected a FASTQ header, found {:?}",
                    cursor.line_number(),
                    String::from_utf8_lossy(&header).trim_end()
                );
            }
        }
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn count(body: &str) -> SequenceCountResult {
        let mut cursor = LineCursor::new(Cursor::new(body));
        cursor.skip_line().unwrap();
        count_fastq(&mut cursor).unwrap()
    }

    #[test]
    fn test_simple_records() {
        let fastq = "@r1\nACGT\n+\nIIII\n@r2\nACGTACGTAC\n+r2\nIIIIIIIIII\n";
        assert_eq!(count(fastq), SequenceCountResult { sequences: 2, bases: 14 });
    }

    #[test]
    fn test_quality_starting_with_at() {
        // '@' is a valid Phred+33 quality character (Q31)
        let fastq = "@r1\nACG\n+\n@@I\n@r2\nA\n+\n@\n@r3\nTTTTT\n+\n@IIII\n";
        assert_eq!(count(fastq), SequenceCountResult { sequences: 3, bases: 9 });
    }

    #[test]
    fn test_single_record() {
        assert_eq!(
            count("@only\nNNNN\n+\n####\n"),
            SequenceCountResult { sequences: 1, bases: 4 }
        );
    }

    #[test]
    fn test_truncated_record() {
        assert_eq!(
            count("@r1\nACGT\n+\nIIII\n@r2\nAC\n"),
            SequenceCountResult { sequences: 2, bases: 6 }
        );
        assert_eq!(count("@r1\n"), SequenceCountResult { sequences: 1, bases: 0 });
    }

    #[test]
    fn test_unterminated_quality_line() {
        assert_eq!(
            count("@r1\nACGT\n+\nIIII"),
            SequenceCountResult { sequences: 1, bases: 4 }
        );
    }

    #[test]
    fn test_many_records_sum_sequence_lengths() {
        let seqs = ["A", "ACGTACGTACGT", "NN", "GATTACA", "C"];
        let body: String = seqs
            .iter()
            .enumerate()
            .map(|(i, s)| format!("@read{i}\n{s}\n+\n{}\n", "@".repeat(s.len())))
            .collect();
        let expected = seqs.iter().map(|s| s.len() as u64).sum();
        assert_eq!(
            count(&body),
            SequenceCountResult { sequences: seqs.len() as u64, bases: expected }
        );
    }
}
