//! Format - Formatting Utilities

use chrono::{DateTime, Local};

/// Format just the time portion
pub fn format_time(dt: &DateTime<Local>) -> String {
    dt.format("%H:%M:%S").to_string()
}

/// Format time with milliseconds
pub fn format_time_ms(dt: &DateTime<Local>) -> String {
    dt.format("%H:%M:%S%.3f").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_time_formats() {
        let dt = Local.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).single().expect("datetime");
        assert_eq!(format_time(&dt), "03:04:05");
        assert_eq!(format_time_ms(&dt), "03:04:05.000");
    }
}
