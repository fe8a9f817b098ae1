use std::io::BufRead;

use super::residue_count;
use crate::error::Result;
use crate::input::LineCursor;
use crate::types::SequenceCountResult;

/// Count sequences and residues in FASTA layout.
///
/// The cursor must sit just past the first `>` header, which is already
/// counted as sequence #1. Every later `>` line opens a new record; any other
/// line contributes its length minus one terminator.
pub fn count_fasta<R: BufRead>(cursor: &mut LineCursor<R>) -> Result<SequenceCountResult> {
    let mut result = SequenceCountResult { sequences: 1, bases: 0 };

    while let Some(line) = cursor.next_line()? {
        if line.starts_with(b">") {
            result.sequences += 1;
        } else {
            result.bases += residue_count(&line, cursor)?;
        }
    }
    Ok(result)
}
