//! Streaming FASTA record parser.
//!
//! Records are assembled one at a time from a buffered line stream, so
//! memory usage is proportional to the largest single record rather than
//! the whole input. Sequence data accumulates in a growable owned buffer
//! with no fixed ceiling.

use crate::error::Result;
use memchr::memchr2;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// Input buffer size (256 KB). Good balance for wrapped FASTA lines.
pub const DEFAULT_INPUT_BUFFER: usize = 256 * 1024;

/// One FASTA record: identifier plus the full (possibly line-wrapped)
/// sequence, concatenated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Text after `>` up to the first whitespace. May be empty.
    pub header: String,
    /// Sequence bytes with line breaks and trailing whitespace removed.
    pub seq: Vec<u8>,
}

impl Record {
    pub fn new(header: impl Into<String>, seq: impl Into<Vec<u8>>) -> Self {
        Self {
            header: header.into(),
            seq: seq.into(),
        }
    }

    /// Sequence length in residues.
    #[inline]
    pub fn len(&self) -> usize {
        self.seq.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }
}

/// Extract the record identifier from a marker line (without the `>`).
///
/// The identifier runs up to the first space or tab. A bare `>` line
/// yields an empty identifier, which is preserved rather than rejected.
#[inline]
fn parse_header(rest: &[u8]) -> String {
    let id_end = memchr2(b' ', b'\t', rest).unwrap_or(rest.len());
    String::from_utf8_lossy(&rest[..id_end]).into_owned()
}

/// A streaming FASTA reader.
///
/// Alternates between two states: idle (no marker seen yet) and
/// accumulating sequence lines for the current header. A record is
/// handed out when the next marker line or end of input is reached.
pub struct FastaReader<R: Read> {
    reader: BufReader<R>,
    line_buf: String,
    /// Header of the record currently being accumulated, if any.
    pending_header: Option<String>,
    /// Growable sequence buffer for the in-progress record.
    seq_buf: Vec<u8>,
    done: bool,
}

impl FastaReader<File> {
    /// Open a FASTA file from a path.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Ok(Self::new(file))
    }
}

impl<R: Read> FastaReader<R> {
    /// Create a new FASTA reader from any readable source.
    pub fn new(reader: R) -> Self {
        Self::with_capacity(DEFAULT_INPUT_BUFFER, reader)
    }

    /// Create a FASTA reader with custom input buffer capacity.
    pub fn with_capacity(capacity: usize, reader: R) -> Self {
        Self {
            reader: BufReader::with_capacity(capacity, reader),
            line_buf: String::with_capacity(1024),
            pending_header: None,
            seq_buf: Vec::new(),
            done: false,
        }
    }

    /// Read the next complete record.
    ///
    /// Returns `Ok(None)` once the input is exhausted. Records with an
    /// empty sequence (e.g. two consecutive marker lines) are skipped.
    pub fn read_record(&mut self) -> Result<Option<Record>> {
        if self.done {
            return Ok(None);
        }

        loop {
            self.line_buf.clear();
            let bytes_read = self.reader.read_line(&mut self.line_buf)?;
            if bytes_read == 0 {
                self.done = true;
                return Ok(self.finalize());
            }

            let line = self.line_buf.trim_end();
            if let Some(rest) = line.as_bytes().strip_prefix(b">") {
                let header = parse_header(rest);
                let finished = self.finalize();
                self.pending_header = Some(header);
                if finished.is_some() {
                    return Ok(finished);
                }
            } else if !line.is_empty() {
                // Sequence fragment; lines before any marker accumulate
                // under the default empty header.
                self.seq_buf.extend_from_slice(line.as_bytes());
                self.pending_header.get_or_insert_with(String::new);
            }
        }
    }

    /// Finalize the in-progress record, if it has any sequence content.
    fn finalize(&mut self) -> Option<Record> {
        let header = self.pending_header.take()?;
        if self.seq_buf.is_empty() {
            return None;
        }
        Some(Record {
            header,
            seq: std::mem::take(&mut self.seq_buf),
        })
    }

    /// Get an iterator over all records.
    pub fn records(self) -> RecordIter<R> {
        RecordIter { reader: self }
    }
}

/// Iterator over FASTA records.
pub struct RecordIter<R: Read> {
    reader: FastaReader<R>,
}

impl<R: Read> Iterator for RecordIter<R> {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.reader.read_record() {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => None,
            Err(e) => Some(Err(e)),
        }
    }
}

/// Read all records from a FASTA file.
pub fn read_records<P: AsRef<Path>>(path: P) -> Result<Vec<Record>> {
    let reader = FastaReader::from_path(path)?;
    reader.records().collect()
}

/// Parse records from a string (useful for testing).
pub fn parse_records(content: &str) -> Result<Vec<Record>> {
    let reader = FastaReader::new(content.as_bytes());
    reader.records().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_record() {
        let records = parse_records(">seq1\nACGT\n").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].header, "seq1");
        assert_eq!(records[0].seq, b"ACGT");
    }

    #[test]
    fn test_wrapped_sequence_concatenates() {
        let wrapped = parse_records(">seq1\nACGT\nACGT\nAC\n").unwrap();
        let flat = parse_records(">seq1\nACGTACGTAC\n").unwrap();
        assert_eq!(wrapped, flat);
    }

    #[test]
    fn test_multiple_records() {
        let records = parse_records(">a\nACGT\n>b desc text\nTTTT\n").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].header, "a");
        assert_eq!(records[1].header, "b");
        assert_eq!(records[1].seq, b"TTTT");
    }

    #[test]
    fn test_header_stops_at_whitespace() {
        let records = parse_records(">chr1 Homo sapiens\nACGT\n").unwrap();
        assert_eq!(records[0].header, "chr1");

        let records = parse_records(">chr2\ttab-separated\nACGT\n").unwrap();
        assert_eq!(records[0].header, "chr2");
    }

    #[test]
    fn test_empty_header_preserved() {
        let records = parse_records(">\nACGT\n").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].header, "");
        assert_eq!(records[0].seq, b"ACGT");
    }

    #[test]
    fn test_record_with_no_sequence_skipped() {
        let records = parse_records(">empty\n>real\nACGT\n").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].header, "real");
    }

    #[test]
    fn test_leading_sequence_without_marker() {
        let records = parse_records("ACGT\n>seq1\nTTTT\n").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].header, "");
        assert_eq!(records[0].seq, b"ACGT");
        assert_eq!(records[1].header, "seq1");
    }

    #[test]
    fn test_no_trailing_newline() {
        let records = parse_records(">seq1\nACGT").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].seq, b"ACGT");
    }

    #[test]
    fn test_blank_lines_ignored() {
        let records = parse_records(">seq1\nAC\n\nGT\n").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].seq, b"ACGT");
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_records("").unwrap().is_empty());
    }

    #[test]
    fn test_crlf_line_endings() {
        let records = parse_records(">seq1\r\nACGT\r\nTT\r\n").unwrap();
        assert_eq!(records[0].seq, b"ACGTTT");
    }
}
