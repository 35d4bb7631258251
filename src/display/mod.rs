//! Display sink module
//!
//! A sink is whatever surface shows the countdown text. The controller
//! overwrites it on every tick.

pub mod json;
pub mod recording;
pub mod terminal;

use serde::Serialize;

use crate::state::{Phase, TimerState};

// Re-export main types
pub use json::JsonLinesSink;
pub use recording::RecordingSink;
pub use terminal::TerminalSink;

/// One display update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Frame<'a> {
    /// Id of the element being updated
    pub element: &'a str,
    /// Text now shown
    pub text: &'a str,
    /// Seconds the next update will show, if any
    pub remaining_seconds: Option<u64>,
    pub phase: Phase,
}

impl<'a> Frame<'a> {
    pub fn new(element: &'a str, text: &'a str, state: &TimerState) -> Self {
        Self {
            element,
            text,
            remaining_seconds: state.remaining_seconds,
            phase: state.phase,
        }
    }

    /// Whether this is the last frame the countdown will produce
    pub fn is_final(&self) -> bool {
        self.phase == Phase::Expired
    }
}

/// Capability to set the displayed text
pub trait DisplaySink {
    /// Replace the displayed text with `frame.text`
    fn set_text(&mut self, frame: &Frame<'_>);
}

impl<S: DisplaySink + ?Sized> DisplaySink for &mut S {
    fn set_text(&mut self, frame: &Frame<'_>) {
        (**self).set_text(frame);
    }
}

impl<S: DisplaySink + ?Sized> DisplaySink for Box<S> {
    fn set_text(&mut self, frame: &Frame<'_>) {
        (**self).set_text(frame);
    }
}
