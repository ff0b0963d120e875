//! freqscan: sliding-window residue frequency profiles over FASTA sequences.
//!
//! This library streams FASTA records and reports, for each record, the
//! density of a chosen set of residues within a window of fixed span
//! advanced in fixed steps across the sequence.
//!
//! # Example
//!
//! ```rust
//! use freqscan::{ScanCommand, ScanConfig};
//!
//! let config = ScanConfig::new(4, 2, "AC").unwrap();
//! let cmd = ScanCommand::new(config);
//!
//! let mut output = Vec::new();
//! let stats = cmd
//!     .run_reader(">seq1\nACGTACGTAC\n".as_bytes(), &mut output)
//!     .unwrap();
//! assert_eq!(stats.windows, 4);
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod fasta;
pub mod output;
pub mod window;

// Re-export commonly used types
pub use commands::{ScanCommand, ScanStats};
pub use config::ScanConfig;
pub use error::{FreqError, Result};
pub use fasta::{FastaReader, Record};
pub use window::{TargetSet, WindowIter, WindowResult};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::commands::{ScanCommand, ScanStats};
    pub use crate::config::ScanConfig;
    pub use crate::error::{FreqError, Result};
    pub use crate::fasta::{FastaReader, Record};
    pub use crate::window::{TargetSet, WindowIter, WindowResult};
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_basic_workflow() {
        use crate::{ScanCommand, ScanConfig};

        let config = ScanConfig::new(4, 2, "AC").unwrap();
        let cmd = ScanCommand::new(config);

        let mut output = Vec::new();
        let stats = cmd
            .run_reader(">seq1\nACGTACGTAC\n".as_bytes(), &mut output)
            .unwrap();

        assert_eq!(stats.records, 1);
        assert_eq!(stats.windows, 4);
        let text = String::from_utf8(output).unwrap();
        assert!(text.starts_with("seq1\t4\t6\t0.5\n"));
    }
}
