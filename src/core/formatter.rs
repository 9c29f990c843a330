//! Canonical text output, the same grammar [`parse_interval`](super::parser::parse_interval) reads.
//!
//! Months are split into years and months for display only. The time group
//! is written only when `seconds` is non-zero, with hours unbounded and
//! minutes/seconds zero-padded to two digits.
//!
//! Non-finite seconds (the result of dividing by zero) have no canonical
//! form: the time group is written as the bare float (`NaN`, `inf`, `-inf`)
//! and the parser rejects it.

use std::fmt;

use crate::domain::interval::Interval;

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("00:00:00");
        }

        let mut groups: Vec<String> = Vec::with_capacity(4);

        let years = self.normal_years();
        if years != 0 {
            groups.push(format!("{} year", years));
        }
        let months = self.normal_months();
        if months != 0 {
            groups.push(format!("{} mons", months));
        }
        if self.days != 0 {
            groups.push(format!("{} days", self.days));
        }
        if self.seconds != 0.0 {
            groups.push(time_group(self.seconds));
        }

        f.write_str(&groups.join(" "))
    }
}

// Hours and minutes are computed in i64 like the parser reads them, so large
// magnitudes do not saturate the narrower `normal_*` widths.
fn time_group(seconds: f64) -> String {
    if !seconds.is_finite() {
        return seconds.to_string();
    }

    let sign = if seconds < 0.0 { "-" } else { "" };
    let abs = seconds.abs();

    let hours = (abs / 3600.0) as i64;
    let minutes = (abs as i64 % 3600) / 60;
    let secs = abs % 60.0;

    // `{}` on f64 prints the shortest text that reads back to the same value.
    let pad = if secs < 10.0 { "0" } else { "" };
    format!("{sign}{hours:02}:{minutes:02}:{pad}{secs}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let cases = [
            (Interval::new(-14, 3, -14706.0), "-1 year -2 mons 3 days -04:05:06"),
            (
                Interval::new(-10, -3, 14706.789),
                "-10 mons -3 days 04:05:06.789000000000669",
            ),
            (Interval::new(1, 0, 0.0), "1 mons"),
            (Interval::new(24, 0, -125838.0), "2 year -34:57:18"),
            (Interval::ZERO, "00:00:00"),
            (Interval::new(1000, 0, 0.0), "83 year 4 mons"),
            (Interval::new(0, 1000, 0.0), "1000 days"),
            (Interval::new(-1, 0, 0.0), "-1 mons"),
            (
                Interval::new(i32::MAX, i32::MAX, 0.0),
                "178956970 year 7 mons 2147483647 days",
            ),
            (
                Interval::new(i32::MIN, i32::MIN, 0.0),
                "-178956970 year -8 mons -2147483648 days",
            ),
            (Interval::new(0, 0, 59.5), "00:00:59.5"),
            (Interval::new(0, 0, 1e-9), "00:00:00.000000001"),
            (Interval::new(0, 2, 36000.0), "2 days 10:00:00"),
            (Interval::new(0, 0, 1e13), "2777777777:46:40"),
            (Interval::new(0, 0, -8e12), "-2222222222:13:20"),
        ];

        for (interval, expected) in cases {
            assert_eq!(interval.to_string(), expected, "{:?}", interval);
        }
    }

    #[test]
    fn test_display_negative_zero_seconds() {
        assert_eq!(Interval::new(0, 0, -0.0).to_string(), "00:00:00");
        assert_eq!(Interval::new(0, 1, -0.0).to_string(), "1 days");
    }

    #[test]
    fn test_display_non_finite_seconds() {
        assert_eq!(Interval::new(0, 0, f64::NAN).to_string(), "NaN");
        assert_eq!(Interval::new(1, 0, f64::INFINITY).to_string(), "1 mons inf");
        assert_eq!(Interval::new(0, 0, f64::NEG_INFINITY).to_string(), "-inf");
        assert!(Interval::parse(&Interval::new(0, 0, f64::NAN).to_string()).is_err());
    }
}
