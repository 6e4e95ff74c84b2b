//! Human-readable time labels
//!
//! Shared by the player bar (`m:ss` clocks) and playlist headers (total
//! running time).

/// Format elapsed seconds as `m:ss`
///
/// Fractions are truncated. Negative and non-finite input renders as `0:00`.
pub fn format_clock(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };

    format!("{}:{:02}", total / 60, total % 60)
}

/// Format a total running time as `1 hr 5 min` or `12 min`
pub fn format_total_duration(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;

    if hours > 0 {
        format!("{} hr {} min", hours, minutes)
    } else {
        format!("{} min", minutes)
    }
}
