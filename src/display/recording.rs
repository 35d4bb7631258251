//! In-memory sink that keeps every update

use tokio::time::Instant;

use super::{DisplaySink, Frame};

/// A display update captured with the time it happened
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedFrame {
    pub text: String,
    pub at: Instant,
}

/// Records displayed text instead of showing it
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    frames: Vec<RecordedFrame>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> &[RecordedFrame] {
        &self.frames
    }

    /// Texts shown so far, oldest first
    pub fn texts(&self) -> Vec<&str> {
        self.frames.iter().map(|frame| frame.text.as_str()).collect()
    }

    /// Text currently on display
    pub fn current(&self) -> Option<&str> {
        self.frames.last().map(|frame| frame.text.as_str())
    }
}

impl DisplaySink for RecordingSink {
    fn set_text(&mut self, frame: &Frame<'_>) {
        self.frames.push(RecordedFrame {
            text: frame.text.to_string(),
            at: Instant::now(),
        });
    }
}
