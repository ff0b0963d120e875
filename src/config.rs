//! Scan configuration.
//!
//! Built once at startup from resolved command-line values and passed by
//! reference into the pipeline. Nothing in the core reads global state.

use crate::error::{FreqError, Result};
use crate::window::TargetSet;

/// Validated window parameters plus the residue set to count.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Window length in residues.
    pub span: usize,
    /// Residues the window advances between measurements.
    pub step: usize,
    /// Residues counted toward the frequency. May be empty.
    pub targets: TargetSet,
}

impl ScanConfig {
    /// Validate and build a configuration.
    ///
    /// `chars` holds the target residues in any case; membership tests
    /// are case-insensitive because sequences are uppercased before
    /// scanning.
    pub fn new(span: usize, step: usize, chars: &str) -> Result<Self> {
        if span == 0 {
            return Err(FreqError::InvalidConfig(
                "span must be a positive integer".to_string(),
            ));
        }
        if step == 0 {
            return Err(FreqError::InvalidConfig(
                "step must be a positive integer".to_string(),
            ));
        }
        Ok(Self {
            span,
            step,
            targets: TargetSet::from_chars(chars),
        })
    }
}
