//! Display formatting for remaining time

/// Label shown once the countdown has run out
pub const EXPIRED_LABEL: &str = "expired";

/// Format whole seconds as `"<s>s"` or `"<m>m <s>s"`.
///
/// The seconds part is always present, so `120` renders as `"2m 0s"`.
pub fn format_remaining(seconds: u64) -> String {
    let minutes = seconds / 60;
    let secs = seconds % 60;

    if minutes > 0 {
        format!("{}m {}s", minutes, secs)
    } else {
        format!("{}s", secs)
    }
}
