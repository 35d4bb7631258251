//! Error types for loading the host document
//!
//! The countdown itself never fails; these cover the surfaces around it.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for countdown setup operations.
pub type CountdownResult<T> = Result<T, CountdownError>;

/// Errors produced while preparing a host for the countdown.
#[derive(Debug, Error)]
pub enum CountdownError {
    /// The page document could not be read.
    #[error("failed to read page {path}")]
    PageRead {
        /// Path of the page document.
        path: PathBuf,
        /// Underlying IO error.
        source: io::Error,
    },
    /// An element scanning pattern failed to compile.
    #[error("failed to compile pattern {pattern}")]
    RegexCompile {
        /// Pattern text.
        pattern: &'static str,
        /// Underlying regex error.
        source: regex::Error,
    },
}
