use serde::{Deserialize, Serialize};

/// A calendar-aware span of time stored as three independent signed fields.
///
/// Months, days and seconds are never converted into each other: 30 days is
/// not 1 month and 86400 seconds is not 1 day, because the real length of a
/// month or a day depends on where on the calendar the interval is applied.
/// This matches the PostgreSQL `interval` type.
///
/// Every operation takes `self` by value and returns a new `Interval`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    pub months: i32,
    pub days: i32,
    pub seconds: f64,
}

/// Human readable breakdown of an [`Interval`], used for display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedInterval {
    pub years: i32,
    pub months: i32,
    pub days: i32,
    pub hours: i32,
    pub minutes: i8,
    pub seconds: i8,
    pub nanoseconds: i32,
}

impl Interval {
    pub const ZERO: Interval = Interval {
        months: 0,
        days: 0,
        seconds: 0.0,
    };

    pub const fn new(months: i32, days: i32, seconds: f64) -> Self {
        Self {
            months,
            days,
            seconds,
        }
    }

    pub const fn nanosecond() -> Self {
        Self::new(0, 0, 1e-9)
    }

    pub const fn microsecond() -> Self {
        Self::new(0, 0, 1e-6)
    }

    pub const fn millisecond() -> Self {
        Self::new(0, 0, 1e-3)
    }

    pub const fn second() -> Self {
        Self::new(0, 0, 1.0)
    }

    pub const fn minute() -> Self {
        Self::new(0, 0, 60.0)
    }

    pub const fn hour() -> Self {
        Self::new(0, 0, 3600.0)
    }

    pub const fn day() -> Self {
        Self::new(0, 1, 0.0)
    }

    pub const fn month() -> Self {
        Self::new(1, 0, 0.0)
    }

    /// One year, stored as 12 months.
    pub const fn year() -> Self {
        Self::new(12, 0, 0.0)
    }

    pub fn is_zero(&self) -> bool {
        self.months == 0 && self.days == 0 && self.seconds == 0.0
    }

    // The normal_* accessors truncate toward zero, so a negative field yields
    // negative components (-128 months is -10 years -8 months).

    /// Whole years in the months field (`months / 12`).
    pub fn normal_years(&self) -> i32 {
        self.months / 12
    }

    /// Months left after removing whole years (`months % 12`).
    pub fn normal_months(&self) -> i32 {
        self.months % 12
    }

    pub fn normal_days(&self) -> i32 {
        self.days
    }

    /// Whole hours in the seconds field.
    pub fn normal_hours(&self) -> i32 {
        (self.seconds / 3600.0) as i32
    }

    /// Whole minutes left after removing [`normal_hours`](Self::normal_hours).
    pub fn normal_minutes(&self) -> i8 {
        ((self.seconds - f64::from(self.normal_hours()) * 3600.0) / 60.0) as i8
    }

    /// Whole seconds left after removing hours and minutes.
    pub fn normal_seconds(&self) -> i8 {
        ((self.seconds as i64) % 60) as i8
    }

    /// Fractional part of the seconds field, rounded to nanoseconds.
    pub fn normal_nanoseconds(&self) -> i32 {
        ((self.seconds % 1.0) * 1e9).round() as i32
    }

    pub fn normalized(&self) -> NormalizedInterval {
        NormalizedInterval {
            years: self.normal_years(),
            months: self.normal_months(),
            days: self.normal_days(),
            hours: self.normal_hours(),
            minutes: self.normal_minutes(),
            seconds: self.normal_seconds(),
            nanoseconds: self.normal_nanoseconds(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_constructors() {
        assert_eq!(Interval::nanosecond().seconds, 1e-9);
        assert_eq!(Interval::microsecond().seconds, 1e-6);
        assert_eq!(Interval::millisecond().seconds, 1e-3);
        assert_eq!(Interval::second().seconds, 1.0);
        assert_eq!(Interval::minute().seconds, 60.0);
        assert_eq!(Interval::hour().seconds, 3600.0);
        assert_eq!(Interval::day(), Interval::new(0, 1, 0.0));
        assert_eq!(Interval::month(), Interval::new(1, 0, 0.0));
        assert_eq!(Interval::year(), Interval::new(12, 0, 0.0));
        assert_eq!(Interval::default(), Interval::ZERO);
        assert!(Interval::ZERO.is_zero());
    }

    #[test]
    fn test_normalized_components() {
        let cases = [
            (
                Interval::new(1001, 101, 1001.3),
                NormalizedInterval {
                    years: 83,
                    months: 5,
                    days: 101,
                    hours: 0,
                    minutes: 16,
                    seconds: 41,
                    nanoseconds: 300_000_000,
                },
            ),
            (
                Interval::ZERO,
                NormalizedInterval {
                    years: 0,
                    months: 0,
                    days: 0,
                    hours: 0,
                    minutes: 0,
                    seconds: 0,
                    nanoseconds: 0,
                },
            ),
            (
                Interval::new(-128, 97, 24001.789),
                NormalizedInterval {
                    years: -10,
                    months: -8,
                    days: 97,
                    hours: 6,
                    minutes: 40,
                    seconds: 1,
                    nanoseconds: 789_000_000,
                },
            ),
        ];

        for (interval, expected) in cases {
            assert_eq!(interval.normalized(), expected, "interval {:?}", interval);
        }
    }

    #[test]
    fn test_normalized_negative_seconds_truncate() {
        let interval = Interval::new(0, 0, -3725.5);
        assert_eq!(interval.normal_hours(), -1);
        assert_eq!(interval.normal_minutes(), -2);
        assert_eq!(interval.normal_seconds(), -5);
        assert_eq!(interval.normal_nanoseconds(), -500_000_000);
    }
}
