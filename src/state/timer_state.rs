//! Timer state structure and management

use serde::Serialize;

/// Phase of the countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Still counting; the next tick updates the display
    Running,
    /// Terminal phase; the display shows the expired label
    Expired,
}

/// Timer state for tracking the countdown
///
/// `remaining_seconds` is the value the next tick will display. It is `None`
/// once there is nothing left to show, which makes the next tick expire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimerState {
    pub phase: Phase,
    pub remaining_seconds: Option<u64>,
}

impl TimerState {
    /// Create a running timer state; zero seconds leaves nothing to show
    pub fn running(remaining_seconds: u64) -> Self {
        Self {
            phase: Phase::Running,
            remaining_seconds: (remaining_seconds > 0).then_some(remaining_seconds),
        }
    }

    /// Create the terminal expired state
    pub fn expired() -> Self {
        Self {
            phase: Phase::Expired,
            remaining_seconds: None,
        }
    }

    /// Check if the countdown has reached its terminal phase
    pub fn is_expired(&self) -> bool {
        self.phase == Phase::Expired
    }

    /// Check if the next tick should switch to the expired label
    pub fn is_due(&self) -> bool {
        self.phase == Phase::Running && self.remaining_seconds.is_none()
    }

    /// Move past a displayed value: `n` becomes `n - 1`, and `0` leaves
    /// nothing more to display.
    pub fn count_down(&mut self) {
        self.remaining_seconds = self.remaining_seconds.and_then(|n| n.checked_sub(1));
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::running(0)
    }
}
