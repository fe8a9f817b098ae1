//src/types.rs

/// Layout of a sequence file, decided from its first line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceFormat {
    Fasta,
    Fastq,
    Unrecognized,
}

/// Sequence and residue tally for one file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SequenceCountResult {
    pub sequences: u64,
    /// Residue characters only; headers and line terminators are not counted.
    pub bases: u64,
}

impl SequenceCountResult {
    /// Mean sequence length, `None` when no sequences were seen.
    pub fn average_length(&self) -> Option<f64> {
        if self.sequences == 0 {
            None
        } else {
            Some(self.bases as f64 / self.sequences as f64)
        }
    }
}

/// Hits read and hits kept for one BLAST input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HitCounts {
    pub hits_in: u64,
    pub hits_out: u64,
}

impl HitCounts {
    /// Percentage of hits that passed the limits, `None` when nothing was read.
    pub fn percentage(&self) -> Option<f64> {
        if self.hits_in == 0 {
            None
        } else {
            Some(100.0 * self.hits_out as f64 / self.hits_in as f64)
        }
    }
}

/// How sequence counts are rendered in output rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReadCountStyle {
    #[default]
    Raw,
    Millions,
}

impl ReadCountStyle {
    pub fn render(&self, sequences: u64) -> String {
        match self {
            ReadCountStyle::Raw => sequences.to_string(),
            ReadCountStyle::Millions => format!("{:.1}M", sequences as f64 / 1_000_000.0),
        }
    }
}
