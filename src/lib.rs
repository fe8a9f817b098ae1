// src/lib.rs
pub mod blast;
pub mod count;
pub mod error;
pub mod input;
pub mod totals;
pub mod types;

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use crate::blast::{filter_hits, LimitSet};
use crate::count::count_file;
use crate::error::{Result, TallyError};
use crate::input::{open_input, LineCursor};
use crate::totals::{
    format_count_row, format_report_row, HitTotals, SequenceTotals, REPORT_HEADER, TOTAL_LABEL,
};
use crate::types::{HitCounts, ReadCountStyle};

/// Presentation switches for the sequence counter.
#[derive(Debug, Clone, Copy, Default)]
pub struct CountOptions {
    /// Append a `Total` row after the per-file rows
    pub total: bool,
    pub style: ReadCountStyle,
}

/// What a counting run produced.
#[derive(Debug, Default)]
pub struct CountRunSummary {
    pub totals: SequenceTotals,
    /// Files that could not be counted, with the reason. These have no row.
    pub failures: Vec<(PathBuf, TallyError)>,
}

/// Count sequences in each file and write one row per file as it completes.
/// `out` is flushed after every row.
///
/// A file that cannot be opened or is not FASTA/FASTQ is logged and recorded
/// in the summary; the remaining files are still counted. Only failures to
/// write to `out` abort the run.
pub fn count_files<P: AsRef<Path>, W: Write + ?Sized>(
    paths: &[P],
    options: &CountOptions,
    out: &mut W,
) -> Result<CountRunSummary> {
    if paths.is_empty() {
        return Err(TallyError::MissingInput);
    }

    let mut summary = CountRunSummary::default();
    for path in paths {
        let path = path.as_ref();
        log::debug!("counting {}", path.display());

        match count_file(path) {
            Ok(Some(result)) => {
                writeln!(
                    out,
                    "{}",
                    format_count_row(&path.display().to_string(), &result, options.style)
                )?;
                out.flush()?;
                log::info!(
                    "{}: {} sequences, {} bases",
                    path.display(),
                    result.sequences,
                    result.bases
                );
                summary.totals.add(&result);
            }
            Ok(None) => {}
            Err(e) => {
                match &e {
                    TallyError::UnrecognizedFormat { .. } => log::error!("{e}"),
                    _ => log::error!("{}: {}", path.display(), e),
                }
                summary.failures.push((path.to_path_buf(), e));
            }
        }
    }

    if options.total {
        writeln!(
            out,
            "{}",
            format_count_row(TOTAL_LABEL, &summary.totals.as_result(), options.style)
        )?;
    }
    out.flush()?;
    Ok(summary)
}

fn filter_labelled<R: BufRead, W: Write + ?Sized>(
    label: &str,
    cursor: &mut LineCursor<R>,
    limits: &LimitSet,
    out: &mut W,
    report: &mut Option<&mut dyn Write>,
) -> Result<HitCounts> {
    log::debug!("filtering {label}");
    let counts = filter_hits(cursor, limits, out)?;
    log::info!("{label}: {} hits in, {} hits out", counts.hits_in, counts.hits_out);

    out.flush()?;
    if let Some(rep) = report {
        writeln!(rep, "{}", format_report_row(label, &counts))?;
        rep.flush()?;
    }
    Ok(counts)
}

/// Filter BLAST tabular files one after another into `out`.
///
/// When `report` is given it receives a header, one row per file and a
/// `Total` row. Any malformed hit aborts the run.
pub fn filter_files<P: AsRef<Path>, W: Write + ?Sized>(
    paths: &[P],
    limits: &LimitSet,
    out: &mut W,
    mut report: Option<&mut dyn Write>,
) -> Result<HitTotals> {
    if paths.is_empty() {
        return Err(TallyError::MissingInput);
    }
    if let Some(rep) = report.as_mut() {
        writeln!(rep, "{REPORT_HEADER}")?;
    }

    let mut totals = HitTotals::default();
    for path in paths {
        let path = path.as_ref();
        let mut cursor = open_input(path)?;
        let counts = filter_labelled(
            &path.display().to_string(),
            &mut cursor,
            limits,
            out,
            &mut report,
        )?;
        totals.add(&counts);
    }

    if let Some(rep) = report.as_mut() {
        writeln!(rep, "{}", format_report_row(TOTAL_LABEL, &totals.as_counts()))?;
        rep.flush()?;
    }
    out.flush()?;
    Ok(totals)
}

/// Filter a single already-open stream, such as standard input.
///
/// The report, if any, gets the header and one row for `label`; no `Total`
/// row is written.
pub fn filter_stream<R: BufRead, W: Write + ?Sized>(
    label: &str,
    cursor: &mut LineCursor<R>,
    limits: &LimitSet,
    out: &mut W,
    mut report: Option<&mut dyn Write>,
) -> Result<HitCounts> {
    if let Some(rep) = report.as_mut() {
        writeln!(rep, "{REPORT_HEADER}")?;
    }
    let counts = filter_labelled(label, cursor, limits, out, &mut report)?;
    if let Some(rep) = report.as_mut() {
        rep.flush()?;
    }
    out.flush()?;
    Ok(counts)
}
