// src/blast/record.rs

use std::io::{self, Write};
use std::str::FromStr;

use crate::error::{Result, TallyError};

/// Number of columns in BLAST tabular output (`-outfmt 6`).
pub const BLAST_FIELDS: usize = 12;

/// Column names, in input order.
pub const FIELD_NAMES: [&str; BLAST_FIELDS] = [
    "query id",
    "subject id",
    "% identity",
    "alignment length",
    "mismatches",
    "gap openings",
    "q. start",
    "q. end",
    "s. start",
    "s. end",
    "evalue",
    "bit score",
];

const QUERY_ID: usize = 0;
const SUBJECT_ID: usize = 1;
const PERCENT_IDENTITY: usize = 2;
const ALIGNMENT_LENGTH: usize = 3;
const MISMATCHES: usize = 4;
const SUBJECT_START: usize = 8;
const SUBJECT_END: usize = 9;
const EVALUE: usize = 10;
const BITSCORE: usize = 11;

/// One BLAST hit, borrowed from its input line.
///
/// Fields are kept as text; numeric columns are only parsed when a limit
/// asks for them.
#[derive(Debug, Clone, Copy)]
pub struct TabularRecord<'a> {
    fields: [&'a str; BLAST_FIELDS],
    line_number: usize,
}

impl<'a> TabularRecord<'a> {
    /// Split a tab-delimited line into its 12 columns. Columns past the
    /// twelfth are ignored.
    pub fn parse(line: &'a str, line_number: usize) -> Result<Self> {
        let line = line.trim_end_matches(|c: char| c == '\r' || c == '\n');

        let mut fields = [""; BLAST_FIELDS];
        let mut found = 0;
        for (slot, value) in fields.iter_mut().zip(line.split('\t')) {
            *slot = value;
            found += 1;
        }
        if found < BLAST_FIELDS {
            return Err(TallyError::MalformedRecord {
                line: line_number,
                found,
            });
        }
        Ok(Self { fields, line_number })
    }

    pub fn query_id(&self) -> &'a str {
        self.fields[QUERY_ID]
    }

    pub fn subject_id(&self) -> &'a str {
        self.fields[SUBJECT_ID]
    }

    fn numeric<T: FromStr>(&self, index: usize) -> Result<T> {
        let raw = self.fields[index];
        raw.trim()
            .parse()
            .map_err(|_| TallyError::MalformedNumericField {
                line: self.line_number,
                field: FIELD_NAMES[index],
                value: raw.to_string(),
            })
    }

    pub fn percent_identity(&self) -> Result<f64> {
        self.numeric(PERCENT_IDENTITY)
    }

    pub fn alignment_length(&self) -> Result<u64> {
        self.numeric(ALIGNMENT_LENGTH)
    }

    pub fn mismatches(&self) -> Result<u64> {
        self.numeric(MISMATCHES)
    }

    pub fn evalue(&self) -> Result<f64> {
        self.numeric(EVALUE)
    }

    pub fn bitscore(&self) -> Result<f64> {
        self.numeric(BITSCORE)
    }

    /// Write the output row: subject id and coordinates first, query id last.
    /// Column text is copied verbatim from the input.
    pub fn write_projection<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        let f = &self.fields;
        writeln!(
            out,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            self.subject_id(),
            f[SUBJECT_START],
            f[SUBJECT_END],
            f[PERCENT_IDENTITY],
            f[ALIGNMENT_LENGTH],
            f[EVALUE],
            f[BITSCORE],
            self.query_id(),
        )
    }
}
