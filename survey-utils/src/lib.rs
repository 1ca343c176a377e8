//! Shared utility functions for the survey crates.

/// Month and year helpers
pub mod dates {
    use chrono::{Datelike, Local};

    /// English month names, January first.
    pub const MONTH_NAMES: [&str; 12] = [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ];

    /// Name of a 1-based month number.
    pub fn month_name(month: u32) -> Option<&'static str> {
        MONTH_NAMES.get(month.checked_sub(1)? as usize).copied()
    }

    pub fn current_month_name() -> &'static str {
        month_name(Local::now().month()).unwrap_or("January")
    }

    pub fn current_year() -> i32 {
        Local::now().year()
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_month_name() {
            assert_eq!(month_name(1), Some("January"));
            assert_eq!(month_name(12), Some("December"));
            assert_eq!(month_name(0), None);
            assert_eq!(month_name(13), None);
        }

        #[test]
        fn test_current_month_is_a_known_name() {
            assert!(MONTH_NAMES.contains(&current_month_name()));
        }
    }
}

/// Display derivations for dashboard cards and tables
pub mod display {
    /// `part / whole` as a fraction, or `None` when `whole` is zero.
    pub fn ratio(part: f64, whole: f64) -> Option<f64> {
        if whole == 0.0 {
            None
        } else {
            Some(part / whole)
        }
    }

    /// Format `part / whole` as a percentage with one decimal, "-" when undefined.
    pub fn format_percent(part: f64, whole: f64) -> String {
        match ratio(part, whole) {
            Some(r) => format!("{:.1}%", r * 100.0),
            None => "-".to_string(),
        }
    }

    /// Signed percentage change from `previous` to `current`.
    pub fn percent_change(previous: f64, current: f64) -> Option<f64> {
        ratio(current - previous, previous).map(|r| r * 100.0)
    }

    /// Format a change as "+12.5%" / "-3.0%", or "new" when there was no baseline.
    pub fn format_change(previous: f64, current: f64) -> String {
        match percent_change(previous, current) {
            Some(change) => format!("{:+.1}%", change),
            None if current > 0.0 => "new".to_string(),
            None => "-".to_string(),
        }
    }

    /// Group thousands with commas: 1234567 -> "1,234,567".
    pub fn format_count(n: u64) -> String {
        let digits = n.to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(',');
            }
            out.push(c);
        }
        out
    }

    /// Round an average for display.
    pub fn format_average(value: f64) -> String {
        if value.fract() == 0.0 {
            format!("{:.0}", value)
        } else {
            format!("{:.1}", value)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_format_percent() {
            assert_eq!(format_percent(1.0, 4.0), "25.0%");
            assert_eq!(format_percent(2.0, 3.0), "66.7%");
            assert_eq!(format_percent(5.0, 0.0), "-");
        }

        #[test]
        fn test_format_change() {
            assert_eq!(format_change(40.0, 50.0), "+25.0%");
            assert_eq!(format_change(50.0, 40.0), "-20.0%");
            assert_eq!(format_change(0.0, 3.0), "new");
            assert_eq!(format_change(0.0, 0.0), "-");
        }

        #[test]
        fn test_format_count() {
            assert_eq!(format_count(0), "0");
            assert_eq!(format_count(999), "999");
            assert_eq!(format_count(1000), "1,000");
            assert_eq!(format_count(1234567), "1,234,567");
        }

        #[test]
        fn test_format_average() {
            assert_eq!(format_average(12.0), "12");
            assert_eq!(format_average(27.46), "27.5");
        }
    }
}
