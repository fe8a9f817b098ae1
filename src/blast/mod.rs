pub mod limits;
pub mod record;

use std::io::{BufRead, Write};

pub use limits::{LimitSet, LimitSetBuilder};
pub use record::TabularRecord;

use crate::error::{Result, TallyError};
use crate::input::LineCursor;
use crate::types::HitCounts;

/// Filter one BLAST tabular stream, writing projected rows for kept hits.
///
/// `#` comment lines and blank lines are skipped and not counted as hits.
pub fn filter_hits<R: BufRead, W: Write + ?Sized>(
    cursor: &mut LineCursor<R>,
    limits: &LimitSet,
    out: &mut W,
) -> Result<HitCounts> {
    let mut counts = HitCounts::default();

    while let Some(bytes) = cursor.next_line()? {
        if bytes.starts_with(b"#") {
            continue;
        }
        let line = std::str::from_utf8(&bytes).map_err(|_| TallyError::InvalidText {
            line: cursor.line_number(),
        })?;
        if line.trim().is_empty() {
            log::debug!("line {}: blank, skipping", cursor.line_number());
            continue;
        }
        counts.hits_in += 1;

        let record = TabularRecord::parse(line, cursor.line_number())?;
        if limits.check_record(&record)? {
            record.write_projection(out)?;
            counts.hits_out += 1;
        }
    }
    Ok(counts)
}
