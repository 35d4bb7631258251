//! Verify Countdown - drives a single countdown display element
//!
//! This library reads an initial duration from a host element, shows the
//! remaining time once per second and settles on an "expired" label.

pub mod config;
pub mod controller;
pub mod countdown;
pub mod display;
pub mod error;
pub mod host;
pub mod scheduler;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use controller::{CountdownController, Tick};
pub use countdown::{format_remaining, parse_remaining};
pub use error::{CountdownError, CountdownResult};
pub use state::TimerState;
pub use utils::signals::shutdown_signal;
