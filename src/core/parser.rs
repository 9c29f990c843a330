//! Reads the canonical text form of an [`Interval`].
//!
//! ```text
//! [<int> year] [<int> mons] [<int> days] [-]<int>:<int>:<int>[.<digits>]
//! ```
//!
//! The input is a sequence of groups joined by exactly one space. Year and
//! mons groups accumulate into `months`, the days group sets `days`, and the
//! time group accumulates into `seconds`. Each group carries its own sign;
//! a leading `-` on the time group negates the whole `hh:mm:ss` value.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::domain::interval::Interval;
use crate::utils::error::{IntervalError, Result};

static UNIT_GROUP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([+-]?[0-9]+) (year|mons|days)").expect("unit group pattern is valid")
});

static TIME_GROUP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(-)?([0-9]+):([0-9]+):([0-9]+(?:\.[0-9]+)?)")
        .expect("time group pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Unit {
    Year,
    Mons,
    Days,
}

impl Unit {
    fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "year" => Some(Unit::Year),
            "mons" => Some(Unit::Mons),
            "days" => Some(Unit::Days),
            _ => None,
        }
    }

    fn field(self) -> &'static str {
        match self {
            Unit::Year => "year",
            Unit::Mons => "mons",
            Unit::Days => "days",
        }
    }
}

struct Parser<'a> {
    input: &'a str,
    pos: usize,
    /// Unit groups must appear in `year mons days` order, each at most once.
    last_unit: Option<Unit>,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            last_unit: None,
        }
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn at_end(&self) -> bool {
        self.pos == self.input.len()
    }

    fn syntax_error(&self, expected: &'static str) -> IntervalError {
        IntervalError::SyntaxError {
            input: self.input.to_string(),
            position: self.pos,
            expected,
        }
    }

    fn parse(mut self) -> Result<Interval> {
        let mut interval = Interval::ZERO;

        while !self.at_end() {
            self.separator()?;

            if let Some(caps) = UNIT_GROUP.captures(self.rest()) {
                self.unit_group(&caps, &mut interval)?;
                self.pos += caps[0].len();
                continue;
            }

            if let Some(caps) = TIME_GROUP.captures(self.rest()) {
                interval.seconds = time_group(&caps)?;
                self.pos += caps[0].len();
                if !self.at_end() {
                    return Err(self.syntax_error("end of input after the time group"));
                }
                break;
            }

            return Err(self.syntax_error("'<n> year', '<n> mons', '<n> days' or '[-]hh:mm:ss'"));
        }

        Ok(interval)
    }

    /// Groups after the first are preceded by exactly one space.
    fn separator(&mut self) -> Result<()> {
        if self.pos == 0 {
            return Ok(());
        }
        if !self.rest().starts_with(' ') {
            return Err(self.syntax_error("a single space between groups"));
        }
        self.pos += 1;
        Ok(())
    }

    fn unit_group(&mut self, caps: &Captures<'_>, interval: &mut Interval) -> Result<()> {
        let unit = Unit::from_keyword(&caps[2]).ok_or_else(|| self.syntax_error("a unit keyword"))?;
        if self.last_unit.is_some_and(|last| unit <= last) {
            return Err(self.syntax_error("groups in 'year mons days' order, each at most once"));
        }

        let value: i32 = parse_field(unit.field(), &caps[1])?;
        match unit {
            Unit::Year => {
                interval.months = value
                    .checked_mul(12)
                    .ok_or_else(|| overflow(unit.field(), &caps[1]))?;
            }
            Unit::Mons => {
                interval.months = interval
                    .months
                    .checked_add(value)
                    .ok_or_else(|| overflow(unit.field(), &caps[1]))?;
            }
            Unit::Days => interval.days = value,
        }

        self.last_unit = Some(unit);
        Ok(())
    }
}

fn time_group(caps: &Captures<'_>) -> Result<f64> {
    let negative = caps.get(1).is_some();
    let hours: i64 = parse_field("hours", &caps[2])?;
    let minutes: i64 = parse_field("minutes", &caps[3])?;
    let seconds: f64 = parse_field("seconds", &caps[4])?;
    if !seconds.is_finite() {
        return Err(overflow("seconds", &caps[4]));
    }

    let mut total = hours as f64 * 3600.0;
    total += minutes as f64 * 60.0;
    total += seconds;
    Ok(if negative { -total } else { total })
}

fn parse_field<T: FromStr>(field: &'static str, text: &str) -> Result<T> {
    text.parse().map_err(|_| overflow(field, text))
}

fn overflow(field: &'static str, text: &str) -> IntervalError {
    IntervalError::FieldOverflowError {
        field,
        value: text.to_string(),
    }
}

/// Parses the canonical text form. On failure no partial value is returned.
pub fn parse_interval(input: &str) -> Result<Interval> {
    match Parser::new(input).parse() {
        Ok(interval) => {
            tracing::trace!(input, ?interval, "parsed interval");
            Ok(interval)
        }
        Err(e) => {
            tracing::debug!(input, error = %e, "rejected interval text");
            Err(e)
        }
    }
}

impl Interval {
    pub fn parse(input: &str) -> Result<Interval> {
        parse_interval(input)
    }
}

impl FromStr for Interval {
    type Err = IntervalError;

    fn from_str(s: &str) -> Result<Self> {
        parse_interval(s)
    }
}
