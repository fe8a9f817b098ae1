// src/totals.rs

use crate::types::{HitCounts, ReadCountStyle, SequenceCountResult};

/// Label of the summary row in both tools.
pub const TOTAL_LABEL: &str = "Total";

/// Header row of the per-file BLAST report.
pub const REPORT_HEADER: &str = "File\tHits in\tHits out\tHits %";

/// Printed in place of an average or percentage when the divisor is zero.
pub const NOT_AVAILABLE: &str = "NA";

/// Running sequence/base sums across the files of one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SequenceTotals {
    pub files: usize,
    pub sequences: u64,
    pub bases: u64,
}

impl SequenceTotals {
    pub fn add(&mut self, result: &SequenceCountResult) {
        self.files += 1;
        self.sequences += result.sequences;
        self.bases += result.bases;
    }

    pub fn as_result(&self) -> SequenceCountResult {
        SequenceCountResult {
            sequences: self.sequences,
            bases: self.bases,
        }
    }
}

/// Running hit sums across the inputs of one filter run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HitTotals {
    pub files: usize,
    pub hits_in: u64,
    pub hits_out: u64,
}

impl HitTotals {
    pub fn add(&mut self, counts: &HitCounts) {
        self.files += 1;
        self.hits_in += counts.hits_in;
        self.hits_out += counts.hits_out;
    }

    pub fn as_counts(&self) -> HitCounts {
        HitCounts {
            hits_in: self.hits_in,
            hits_out: self.hits_out,
        }
    }
}

/// `label  sequences  bases  average` with the average to one decimal.
pub fn format_count_row(label: &str, result: &SequenceCountResult, style: ReadCountStyle) -> String {
    let average = result
        .average_length()
        .map(|avg| format!("{avg:.1}"))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());
    format!(
        "{}\t{}\t{}\t{}",
        label,
        style.render(result.sequences),
        result.bases,
        average
    )
}

/// `label  hits in  hits out  percentage%` with two decimals.
pub fn format_report_row(label: &str, counts: &HitCounts) -> String {
    let pct = counts
        .percentage()
        .map(|pct| format!("{pct:.2}%"))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());
    format!("{}\t{}\t{}\t{}", label, counts.hits_in, counts.hits_out, pct)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_row() {
        let result = SequenceCountResult { sequences: 3, bases: 20 };
        assert_eq!(
            format_count_row("a.fa", &result, ReadCountStyle::Raw),
            "a.fa\t3\t20\t6.7"
        );
    }

    #[test]
    fn test_millions_style() {
        let result = SequenceCountResult { sequences: 2_500_000, bases: 375_000_000 };
        assert_eq!(
            format_count_row("big.fq.gz", &result, ReadCountStyle::Millions),
            "big.fq.gz\t2.5M\t375000000\t150.0"
        );
        assert_eq!(
            format_count_row("big.fq.gz", &result, ReadCountStyle::Raw),
            "big.fq.gz\t2500000\t375000000\t150.0"
        );
        assert_eq!(ReadCountStyle::Millions.render(40_000), "0.0M");
    }

    #[test]
    fn test_zero_sequences_uses_sentinel() {
        let row = format_count_row(TOTAL_LABEL, &SequenceCountResult::default(), ReadCountStyle::Raw);
        assert_eq!(row, "Total\t0\t0\tNA");
    }

    #[test]
    fn test_report_row() {
        let counts = HitCounts { hits_in: 3, hits_out: 2 };
        assert_eq!(format_report_row("hits.tsv", &counts), "hits.tsv\t3\t2\t66.67%");
        assert_eq!(
            format_report_row("empty.tsv", &HitCounts::default()),
            "empty.tsv\t0\t0\tNA"
        );
    }

    #[test]
    fn test_totals_are_sums() {
        let per_file = [
            SequenceCountResult { sequences: 1, bases: 0 },
            SequenceCountResult { sequences: 10, bases: 1500 },
            SequenceCountResult { sequences: 7, bases: 70 },
        ];
        let mut totals = SequenceTotals::default();
        per_file.iter().for_each(|r| totals.add(r));
        assert_eq!(totals.files, 3);
        assert_eq!(totals.as_result(), SequenceCountResult { sequences: 18, bases: 1570 });

        let mut hits = HitTotals::default();
        hits.add(&HitCounts { hits_in: 4, hits_out: 1 });
        hits.add(&HitCounts { hits_in: 0, hits_out: 0 });
        hits.add(&HitCounts { hits_in: 6, hits_out: 6 });
        assert_eq!(hits.as_counts(), HitCounts { hits_in: 10, hits_out: 7 });
        assert_eq!(format_report_row(TOTAL_LABEL, &hits.as_counts()), "Total\t10\t7\t70.00%");
    }
}
