//! Efficient output formatting for window measurements.
//!
//! Uses itoa for integer formatting and ryu for float formatting
//! to avoid allocation in the hot path.

use crate::error::FreqError;
use crate::window::WindowResult;
use std::io::{BufWriter, Write};

/// Default output buffer size (2 MB).
pub const DEFAULT_OUTPUT_BUFFER: usize = 2 * 1024 * 1024;

/// Buffered tab-delimited writer for window measurements.
///
/// Emits `header\tstart\tend\tfrequency\n` per window, in the order the
/// scanner produces them.
pub struct FreqWriter<W: Write> {
    writer: BufWriter<W>,
    itoa_buf: itoa::Buffer,
    ryu_buf: ryu::Buffer,
}

impl<W: Write> FreqWriter<W> {
    /// Create a new writer with the default 2MB buffer.
    pub fn new(output: W) -> Self {
        Self::with_capacity(DEFAULT_OUTPUT_BUFFER, output)
    }

    /// Create a new writer with specified buffer size.
    pub fn with_capacity(capacity: usize, output: W) -> Self {
        Self {
            writer: BufWriter::with_capacity(capacity, output),
            itoa_buf: itoa::Buffer::new(),
            ryu_buf: ryu::Buffer::new(),
        }
    }

    /// Write one window measurement line.
    #[inline]
    pub fn write_window(&mut self, header: &str, result: &WindowResult) -> Result<(), FreqError> {
        self.writer
            .write_all(header.as_bytes())
            .map_err(FreqError::Io)?;
        self.writer.write_all(b"\t").map_err(FreqError::Io)?;
        self.writer
            .write_all(self.itoa_buf.format(result.start).as_bytes())
            .map_err(FreqError::Io)?;
        self.writer.write_all(b"\t").map_err(FreqError::Io)?;
        self.writer
            .write_all(self.itoa_buf.format(result.end).as_bytes())
            .map_err(FreqError::Io)?;
        self.writer.write_all(b"\t").map_err(FreqError::Io)?;
        self.writer
            .write_all(self.ryu_buf.format(result.frequency).as_bytes())
            .map_err(FreqError::Io)?;
        self.writer.write_all(b"\n").map_err(FreqError::Io)?;
        Ok(())
    }

    /// Flush the output buffer.
    pub fn flush(&mut self) -> Result<(), FreqError> {
        self.writer.flush().map_err(FreqError::Io)?;
        Ok(())
    }
}
