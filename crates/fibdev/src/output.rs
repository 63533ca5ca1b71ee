//! Harness output formatting.

use std::io::{self, Write};

use serde::Serialize;

use fibdev_core::constants::DEVICE_PATH;

/// How reads and writes are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable lines.
    Text,
    /// Values only, one per line; writes are not reported.
    Quiet,
    /// One JSON object per read; writes are not reported.
    Json,
}

impl OutputMode {
    #[must_use]
    pub fn from_flags(quiet: bool, json: bool) -> Self {
        if json {
            Self::Json
        } else if quiet {
            Self::Quiet
        } else {
            Self::Text
        }
    }
}

/// A single read, as emitted in JSON mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReadRecord {
    /// Offset the harness asked for.
    pub offset: i64,
    /// Cursor position after clamping.
    pub position: i64,
    /// Decimal value read at `position`.
    pub value: String,
}

/// Writes harness events to an output stream.
pub struct Presenter<W: Write> {
    mode: OutputMode,
    out: W,
}

impl<W: Write> Presenter<W> {
    #[must_use]
    pub fn new(mode: OutputMode, out: W) -> Self {
        Self { mode, out }
    }

    /// Report the acknowledgement of one write.
    pub fn present_write(&mut self, ack: usize) -> io::Result<()> {
        if self.mode != OutputMode::Text {
            return Ok(());
        }
        writeln!(self.out, "{}", format_write(ack))
    }

    /// Report one read.
    pub fn present_read(&mut self, record: &ReadRecord) -> io::Result<()> {
        match self.mode {
            OutputMode::Text => writeln!(self.out, "{}", format_read(record.offset, &record.value)),
            OutputMode::Quiet => writeln!(self.out, "{}", record.value),
            OutputMode::Json => {
                serde_json::to_writer(&mut self.out, record)?;
                writeln!(self.out)
            }
        }
    }

    /// Flush and return the underlying stream.
    pub fn finish(mut self) -> io::Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}

/// Line reported for a write.
#[must_use]
pub fn format_write(ack: usize) -> String {
    format!("Writing to {DEVICE_PATH}, returned the sequence {ack}")
}

/// Line reported for a read.
#[must_use]
pub fn format_read(offset: i64, value: &str) -> String {
    format!("Reading from {DEVICE_PATH} at offset {offset}, returned the sequence {value}.")
}
