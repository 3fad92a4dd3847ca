//! Time formatting utilities.
//!
//! All countdown and duration display formatting goes through this
//! module so the HUD and log output stay consistent.

/// Format a countdown/timer value for overlay display.
///
/// - Values >= 60s: `M:SS`
/// - Values >= 10s: whole seconds
/// - Values < 10s: one decimal place
/// - Values <= 0: returns the provided `zero_label`
///
/// # Examples
/// ```
/// use mayhem_types::formatting::format_countdown;
/// assert_eq!(format_countdown(75.3, "0:00"), "1:15");
/// assert_eq!(format_countdown(15.7, "0:00"), "16");
/// assert_eq!(format_countdown(3.5, "0:00"), "3.5");
/// assert_eq!(format_countdown(0.0, "done"), "done");
/// ```
pub fn format_countdown(secs: f32, zero_label: &str) -> String {
    if secs <= 0.0 {
        return zero_label.to_string();
    }
    if secs >= 60.0 {
        let mins = (secs / 60.0).floor() as u32;
        let remaining_secs = (secs % 60.0).floor() as u32;
        format!("{}:{:02}", mins, remaining_secs)
    } else if secs >= 10.0 {
        format!("{:.0}", secs)
    } else {
        format!("{:.1}", secs)
    }
}

/// Format a duration as `M:SS`.
///
/// # Examples
/// ```
/// use mayhem_types::formatting::format_duration;
/// assert_eq!(format_duration(125), "2:05");
/// assert_eq!(format_duration(59), "0:59");
/// assert_eq!(format_duration(0), "0:00");
/// ```
pub fn format_duration(secs: u64) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}
