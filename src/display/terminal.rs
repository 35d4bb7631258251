//! Terminal text sink

use std::io::{self, Write};

use tracing::warn;

use super::{DisplaySink, Frame};

/// Rewrites a single terminal line in place on every update
#[derive(Debug)]
pub struct TerminalSink<W: Write> {
    out: W,
}

impl TerminalSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_frame(&mut self, frame: &Frame<'_>) -> io::Result<()> {
        // Carriage return plus erase-line keeps the countdown on one row.
        write!(self.out, "\r\x1b[2K{}", frame.text)?;
        if frame.is_final() {
            writeln!(self.out)?;
        }
        self.out.flush()
    }
}

impl<W: Write> DisplaySink for TerminalSink<W> {
    fn set_text(&mut self, frame: &Frame<'_>) {
        if let Err(e) = self.write_frame(frame) {
            warn!("Failed to update terminal display: {}", e);
        }
    }
}
