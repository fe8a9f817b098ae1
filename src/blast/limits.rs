// src/blast/limits.rs

use super::record::TabularRecord;
use crate::error::Result;

/// Thresholds a BLAST hit must meet to be kept.
///
/// Every limit is optional; an unset limit accepts anything. A limit set to
/// zero is still active. Built once through [`LimitSetBuilder`] and read-only
/// afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LimitSet {
    min_identity: Option<f64>,
    min_alignment_length: Option<u64>,
    max_mismatches: Option<u64>,
    max_evalue: Option<f64>,
    min_bitscore: Option<f64>,
}

impl LimitSet {
    pub fn builder() -> LimitSetBuilder {
        LimitSetBuilder::default()
    }

    /// True when no limit is configured.
    pub fn is_empty(&self) -> bool {
        self == &LimitSet::default()
    }

    /// Return `Ok(true)` if `record` passes every configured limit.
    ///
    /// Limits are checked in column order and the first failure wins. All
    /// comparisons are inclusive. A column is only parsed when its limit is
    /// set; a non-numeric value there is an error, not a rejection.
    pub fn check_record(&self, record: &TabularRecord) -> Result<bool> {
        if let Some(min) = self.min_identity {
            if record.percent_identity()? < min {
                return Ok(false);
            }
        }
        if let Some(min) = self.min_alignment_length {
            if record.alignment_length()? < min {
                return Ok(false);
            }
        }
        if let Some(max) = self.max_mismatches {
            if record.mismatches()? > max {
                return Ok(false);
            }
        }
        if let Some(max) = self.max_evalue {
            if record.evalue()? > max {
                return Ok(false);
            }
        }
        if let Some(min) = self.min_bitscore {
            if record.bitscore()? < min {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

/// Collects limits before freezing them into a [`LimitSet`].
///
/// Setters take `impl Into<Option<_>>` so both plain values and already
/// optional command-line values can be passed.
#[derive(Debug, Clone, Default)]
pub struct LimitSetBuilder {
    limits: LimitSet,
}

impl LimitSetBuilder {
    pub fn min_identity(mut self, value: impl Into<Option<f64>>) -> Self {
        self.limits.min_identity = value.into();
        self
    }

    pub fn min_alignment_length(mut self, value: impl Into<Option<u64>>) -> Self {
        self.limits.min_alignment_length = value.into();
        self
    }

    pub fn max_mismatches(mut self, value: impl Into<Option<u64>>) -> Self {
        self.limits.max_mismatches = value.into();
        self
    }

    pub fn max_evalue(mut self, value: impl Into<Option<f64>>) -> Self {
        self.limits.max_evalue = value.into();
        self
    }

    pub fn min_bitscore(mut self, value: impl Into<Option<f64>>) -> Self {
        self.limits.min_bitscore = value.into();
        self
    }

    pub fn build(self) -> LimitSet {
        self.limits
    }
}
