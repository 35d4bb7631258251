//! Countdown value handling
//!
//! Pure helpers for turning the host-provided duration into seconds and
//! seconds into display text.

pub mod format;
pub mod parse;

pub use format::{format_remaining, EXPIRED_LABEL};
pub use parse::parse_remaining;
