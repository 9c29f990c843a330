//! Glue between [`Interval`] and chrono's fixed durations and timestamps.

use chrono::{DateTime, Datelike, NaiveDate, TimeDelta, TimeZone, Timelike, Utc};

use crate::domain::interval::Interval;
use crate::utils::error::{IntervalError, Result};

const NANOS_PER_SECOND: i64 = 1_000_000_000;

impl Interval {
    /// Flattens the interval into a fixed-length duration.
    ///
    /// Months and days are converted with the caller supplied
    /// `days_in_month` and `seconds_in_day`. This is an approximation: real
    /// months and days vary in length depending on where they start.
    /// Arithmetic wraps on `i64` nanosecond overflow.
    pub fn to_duration(&self, days_in_month: u8, seconds_in_day: u32) -> TimeDelta {
        let days = i64::from(self.months)
            .wrapping_mul(i64::from(days_in_month))
            .wrapping_add(i64::from(self.days));
        let calendar_nanos = days
            .wrapping_mul(i64::from(seconds_in_day))
            .wrapping_mul(NANOS_PER_SECOND);
        let second_nanos = (self.seconds * 1e9).round() as i64;

        TimeDelta::nanoseconds(calendar_nanos.wrapping_add(second_nanos))
    }

    /// Stores the whole duration in the seconds field.
    pub fn from_duration(duration: TimeDelta) -> Interval {
        let seconds = match duration.num_nanoseconds() {
            Some(nanos) => nanos as f64 / 1e9,
            None => duration.num_seconds() as f64 + f64::from(duration.subsec_nanos()) / 1e9,
        };
        Interval::new(0, 0, seconds)
    }

    /// Moves `t` by this interval.
    ///
    /// Months and days are applied on the UTC calendar, overflowing days roll
    /// into the following month (January 31 plus one month is March 2 or 3).
    /// Seconds are then added as a flat offset. The result is expressed in
    /// the time zone of `t`.
    pub fn add_to<Tz: TimeZone>(&self, t: &DateTime<Tz>) -> Result<DateTime<Tz>> {
        let utc = t.naive_utc();

        let total_months =
            i64::from(utc.year()) * 12 + i64::from(utc.month0()) + i64::from(self.months);
        let year = i32::try_from(total_months.div_euclid(12))
            .map_err(|_| out_of_range(self, "year overflow"))?;
        let month = total_months.rem_euclid(12) as u32 + 1;

        let first_of_month = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or_else(|| out_of_range(self, "month outside the supported calendar"))?;
        let day_offset = TimeDelta::try_days(i64::from(utc.day0()) + i64::from(self.days))
            .ok_or_else(|| out_of_range(self, "day offset"))?;
        let date = first_of_month
            .checked_add_signed(day_offset)
            .ok_or_else(|| out_of_range(self, "day outside the supported calendar"))?;

        if !self.seconds.is_finite() {
            return Err(out_of_range(self, "seconds offset"));
        }
        let offset = TimeDelta::try_seconds(self.seconds.trunc() as i64)
            .and_then(|whole| {
                whole.checked_add(&TimeDelta::nanoseconds(i64::from(self.normal_nanoseconds())))
            })
            .ok_or_else(|| out_of_range(self, "seconds offset"))?;
        let shifted = date
            .and_time(utc.time())
            .checked_add_signed(offset)
            .ok_or_else(|| out_of_range(self, "time outside the supported calendar"))?;

        Ok(t.timezone().from_utc_datetime(&shifted))
    }

    /// Moves `t` backwards by this interval (`add_to` of the interval scaled by -1).
    pub fn sub_from<Tz: TimeZone>(&self, t: &DateTime<Tz>) -> Result<DateTime<Tz>> {
        (*self * -1.0).add_to(t)
    }
}

impl From<TimeDelta> for Interval {
    fn from(duration: TimeDelta) -> Self {
        Interval::from_duration(duration)
    }
}

fn out_of_range(interval: &Interval, reason: &str) -> IntervalError {
    tracing::warn!(%interval, reason, "timestamp arithmetic left the representable range");
    IntervalError::TimestampOutOfRange {
        message: format!("applying '{}': {}", interval, reason),
    }
}

/// Elapsed time `to - from` as a seconds-only interval.
pub fn diff<Tz1: TimeZone, Tz2: TimeZone>(from: &DateTime<Tz1>, to: &DateTime<Tz2>) -> Interval {
    Interval::from_duration(to.naive_utc().signed_duration_since(from.naive_utc()))
}

/// Calendar difference `to - from`, taken field by field.
///
/// Years and months, days, and the time of day are subtracted independently
/// without borrowing, using each timestamp's own time zone. Fields of the
/// result may therefore disagree in sign (2000-03-01 to 1900-11-12 gives
/// `-1192 mons` but `+11 days`).
pub fn diff_extended<Tz1: TimeZone, Tz2: TimeZone>(
    from: &DateTime<Tz1>,
    to: &DateTime<Tz2>,
) -> Interval {
    let months = (i64::from(to.year()) - i64::from(from.year())) * 12
        + (i64::from(to.month()) - i64::from(from.month()));
    let days = i64::from(to.day()) - i64::from(from.day());

    let clock = (i64::from(to.hour()) - i64::from(from.hour())) * 3600
        + (i64::from(to.minute()) - i64::from(from.minute())) * 60
        + (i64::from(to.second()) - i64::from(from.second()));
    let nanos = i64::from(to.nanosecond()) - i64::from(from.nanosecond());

    Interval::new(months as i32, days as i32, clock as f64 + nanos as f64 / 1e9)
}

pub fn since<Tz: TimeZone>(t: &DateTime<Tz>) -> Interval {
    diff(t, &Utc::now())
}

pub fn since_extended<Tz: TimeZone>(t: &DateTime<Tz>) -> Interval {
    diff_extended(t, &Utc::now().with_timezone(&t.timezone()))
}
