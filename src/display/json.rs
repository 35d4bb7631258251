//! JSON-lines sink for machine consumers

use std::io::{self, Write};

use tracing::warn;

use super::{DisplaySink, Frame};

/// Emits every frame as one JSON object per line
#[derive(Debug)]
pub struct JsonLinesSink<W: Write> {
    out: W,
}

impl JsonLinesSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_frame(&mut self, frame: &Frame<'_>) -> anyhow::Result<()> {
        serde_json::to_writer(&mut self.out, frame)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> DisplaySink for JsonLinesSink<W> {
    fn set_text(&mut self, frame: &Frame<'_>) {
        if let Err(e) = self.write_frame(frame) {
            warn!("Failed to write display frame: {}", e);
        }
    }
}
