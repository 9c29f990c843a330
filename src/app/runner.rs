use crate::config::Command;
use crate::core::convert::{diff, diff_extended, since, since_extended};
use crate::core::timestamp::parse_timestamp;
use crate::domain::interval::Interval;
use crate::domain::ordering::IntervalOrdering;
use crate::domain::ports::{ConfigProvider, OutputFormat};
use crate::utils::error::Result;
use chrono::{DateTime, FixedOffset};
use serde_json::{json, Value};

/// Executes one CLI command against the library and renders its output.
pub struct CommandRunner<C: ConfigProvider> {
    config: C,
}

impl<C: ConfigProvider> CommandRunner<C> {
    pub fn new(config: C) -> Self {
        Self { config }
    }

    pub fn run(&self, command: &Command) -> Result<String> {
        tracing::info!(command = command.name(), "running command");

        let output = match command {
            Command::Parse { interval } => self.render_interval(Interval::parse(interval)?),
            Command::Normalize { interval } => self.render_normalized(Interval::parse(interval)?),
            Command::Format {
                months,
                days,
                seconds,
            } => self.render_interval(Interval::new(*months, *days, *seconds)),
            Command::Add { left, right } => {
                self.render_interval(Interval::parse(left)? + Interval::parse(right)?)
            }
            Command::Sub { left, right } => {
                self.render_interval(Interval::parse(left)? - Interval::parse(right)?)
            }
            Command::Mul { interval, factor } => {
                self.render_interval(Interval::parse(interval)? * *factor)
            }
            Command::Div { interval, divisor } => {
                self.render_interval(Interval::parse(interval)? / *divisor)
            }
            Command::Compare { left, right } => {
                let ordering = Interval::parse(left)?.compare(&Interval::parse(right)?);
                self.render_ordering(ordering)
            }
            Command::Duration { interval } => self.render_duration(Interval::parse(interval)?),
            Command::Diff { from, to, extended } => {
                let (from, to) = (parse_timestamp(from)?, parse_timestamp(to)?);
                let interval = if *extended {
                    diff_extended(&from, &to)
                } else {
                    diff(&from, &to)
                };
                self.render_interval(interval)
            }
            Command::Since { from, extended } => {
                let from = parse_timestamp(from)?;
                let interval = if *extended {
                    since_extended(&from)
                } else {
                    since(&from)
                };
                self.render_interval(interval)
            }
            Command::Shift {
                timestamp,
                interval,
                subtract,
            } => {
                let t = parse_timestamp(timestamp)?;
                let interval = Interval::parse(interval)?;
                let shifted = if *subtract {
                    interval.sub_from(&t)?
                } else {
                    interval.add_to(&t)?
                };
                self.render_timestamp(&shifted)
            }
        };

        tracing::debug!(output = %output, "command finished");
        Ok(output)
    }

    fn is_json(&self) -> bool {
        self.config.output_format() == OutputFormat::Json
    }

    fn render_interval(&self, interval: Interval) -> String {
        if self.is_json() {
            json!({
                "interval": interval.to_string(),
                "months": interval.months,
                "days": interval.days,
                "seconds": interval.seconds,
            })
            .to_string()
        } else {
            interval.to_string()
        }
    }

    fn render_normalized(&self, interval: Interval) -> String {
        let n = interval.normalized();
        if self.is_json() {
            json!(n).to_string()
        } else {
            format!(
                "years={} months={} days={} hours={} minutes={} seconds={} nanoseconds={}",
                n.years, n.months, n.days, n.hours, n.minutes, n.seconds, n.nanoseconds
            )
        }
    }

    fn render_ordering(&self, ordering: IntervalOrdering) -> String {
        let name = match ordering {
            IntervalOrdering::Less => "less",
            IntervalOrdering::Equal => "equal",
            IntervalOrdering::Greater => "greater",
            IntervalOrdering::Incomparable => "incomparable",
        };
        if self.is_json() {
            json!({
                "ordering": ordering,
                "comparable": ordering != IntervalOrdering::Incomparable,
            })
            .to_string()
        } else {
            name.to_string()
        }
    }

    fn render_duration(&self, interval: Interval) -> String {
        let duration =
            interval.to_duration(self.config.days_in_month(), self.config.seconds_in_day());
        if self.is_json() {
            json!({
                "iso8601": duration.to_string(),
                "nanoseconds": duration.num_nanoseconds().map_or(Value::Null, Value::from),
                "days_in_month": self.config.days_in_month(),
                "seconds_in_day": self.config.seconds_in_day(),
            })
            .to_string()
        } else {
            duration.to_string()
        }
    }

    fn render_timestamp(&self, t: &DateTime<FixedOffset>) -> String {
        let formatted = t.format(self.config.timestamp_layout()).to_string();
        if self.is_json() {
            json!({ "timestamp": formatted }).to_string()
        } else {
            formatted
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ResolvedConfig;

    fn text_runner() -> CommandRunner<ResolvedConfig> {
        CommandRunner::new(ResolvedConfig::default())
    }

    fn json_runner() -> CommandRunner<ResolvedConfig> {
        CommandRunner::new(ResolvedConfig::default().with_overrides(None, None, true))
    }

    #[test]
    fn test_parse_normalizes_text() {
        let out = text_runner()
            .run(&Command::Parse {
                interval: "2 year -34:56:78".to_string(),
            })
            .unwrap();
        assert_eq!(out, "2 year -34:57:18");
    }

    #[test]
    fn test_parse_json() {
        let out = json_runner()
            .run(&Command::Parse {
                interval: "-1 year -2 mons +3 days -04:05:06".to_string(),
            })
            .unwrap();
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["months"], -14);
        assert_eq!(value["days"], 3);
        assert_eq!(value["seconds"], -14706.0);
        assert_eq!(value["interval"], "-1 year -2 mons 3 days -04:05:06");
    }

    #[test]
    fn test_arithmetic_commands() {
        let runner = text_runner();
        let add = Command::Add {
            left: "1 mons".to_string(),
            right: "2 days 01:00:00".to_string(),
        };
        assert_eq!(runner.run(&add).unwrap(), "1 mons 2 days 01:00:00");

        let mul = Command::Mul {
            interval: "2 days 00:00:10".to_string(),
            factor: 1.5,
        };
        assert_eq!(runner.run(&mul).unwrap(), "3 days 00:00:15");
    }

    #[test]
    fn test_compare_command() {
        let runner = text_runner();
        let compare = Command::Compare {
            left: "1 mons".to_string(),
            right: "30 days".to_string(),
        };
        assert_eq!(runner.run(&compare).unwrap(), "incomparable");

        let out = json_runner().run(&compare).unwrap();
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["ordering"], "incomparable");
        assert_eq!(value["comparable"], false);
    }

    #[test]
    fn test_duration_uses_config() {
        let runner = CommandRunner::new(ResolvedConfig::default().with_overrides(
            Some(30),
            Some(86_400),
            true,
        ));
        let out = runner
            .run(&Command::Duration {
                interval: "10 days 00:00:01".to_string(),
            })
            .unwrap();
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["nanoseconds"], 864_001_000_000_000i64);
    }

    #[test]
    fn test_shift_and_diff() {
        let runner = text_runner();
        let shifted = runner
            .run(&Command::Shift {
                timestamp: "2021-01-31 00:00:00".to_string(),
                interval: "1 mons".to_string(),
                subtract: false,
            })
            .unwrap();
        assert_eq!(shifted, "2021-03-03T00:00:00+00:00");

        let extended = runner
            .run(&Command::Diff {
                from: "2000-03-01T00:00:00Z".to_string(),
                to: "1900-11-12T00:00:00Z".to_string(),
                extended: true,
            })
            .unwrap();
        assert_eq!(extended, "-99 year -4 mons 11 days");
    }

    #[test]
    fn test_parse_errors_propagate() {
        let err = text_runner()
            .run(&Command::Parse {
                interval: "1,5 year".to_string(),
            })
            .unwrap_err();
        assert!(err.is_parse_error());
    }
}
