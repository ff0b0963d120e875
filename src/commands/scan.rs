//! The scan pipeline: parse records, normalize, measure windows, emit.
//!
//! Fully synchronous and single-pass. One record is parsed, scanned and
//! written before the next record's lines are consumed, so output rows
//! for a record are contiguous and records appear in input order.

use crate::config::ScanConfig;
use crate::error::Result;
use crate::fasta::FastaReader;
use crate::output::FreqWriter;
use crate::window::{normalize_sequence, WindowIter};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// Sliding-window frequency scan over a FASTA stream.
#[derive(Debug, Clone)]
pub struct ScanCommand {
    config: ScanConfig,
}

impl ScanCommand {
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    /// Scan a FASTA file by path.
    pub fn run_path<P: AsRef<Path>, W: Write>(
        &self,
        path: P,
        output: &mut W,
    ) -> Result<ScanStats> {
        let file = File::open(path.as_ref())?;
        self.run_reader(file, output)
    }

    /// Scan FASTA text from any readable source (stdin, file, buffer).
    pub fn run_reader<R: Read, W: Write>(&self, input: R, output: &mut W) -> Result<ScanStats> {
        let mut reader = FastaReader::new(input);
        let mut writer = FreqWriter::new(output);
        let mut stats = ScanStats::default();

        while let Some(mut record) = reader.read_record()? {
            stats.records += 1;

            if record.len() < self.config.span {
                // Too short to hold a single window; skipped by policy.
                stats.skipped_short += 1;
                continue;
            }

            normalize_sequence(&mut record.seq);

            let windows = WindowIter::new(
                &record.seq,
                &self.config.targets,
                self.config.span,
                self.config.step,
            );
            for result in windows {
                writer.write_window(&record.header, &result)?;
                stats.windows += 1;
            }
        }

        writer.flush()?;
        Ok(stats)
    }
}

/// Statistics from a scan run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanStats {
    /// Records assembled from the input.
    pub records: usize,
    /// Window measurements written.
    pub windows: usize,
    /// Records shorter than the span, skipped without output.
    pub skipped_short: usize,
}

impl std::fmt::Display for ScanStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Records: {}, Windows: {}, Skipped (shorter than span): {}",
            self.records, self.windows, self.skipped_short
        )
    }
}
