use super::ResolvedConfig;
use crate::utils::error::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "pg-interval")]
#[command(about = "Parse, format and compute PostgreSQL-style intervals")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Days per month assumed by `duration`
    #[arg(long, global = true)]
    pub days_in_month: Option<u8>,

    /// Seconds per day assumed by `duration`
    #[arg(long, global = true)]
    pub seconds_in_day: Option<u32>,

    #[command(subcommand)]
    pub command: Command,
}

impl CliConfig {
    pub fn resolve(&self) -> Result<ResolvedConfig> {
        Ok(ResolvedConfig::load(self.config.as_deref())?.with_overrides(
            self.days_in_month,
            self.seconds_in_day,
            self.json,
        ))
    }
}

// Interval arguments often start with '-' ("-1 year"), so they accept hyphen values.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Parse an interval and print its canonical form
    Parse {
        #[arg(allow_hyphen_values = true)]
        interval: String,
    },
    /// Build an interval from raw fields
    Format {
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        months: i32,
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        days: i32,
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        seconds: f64,
    },
    /// Component-wise sum of two intervals
    Add {
        #[arg(allow_hyphen_values = true)]
        left: String,
        #[arg(allow_hyphen_values = true)]
        right: String,
    },
    /// Component-wise difference of two intervals
    Sub {
        #[arg(allow_hyphen_values = true)]
        left: String,
        #[arg(allow_hyphen_values = true)]
        right: String,
    },
    /// Scale every field by a factor
    Mul {
        #[arg(allow_hyphen_values = true)]
        interval: String,
        #[arg(allow_hyphen_values = true)]
        factor: f64,
    },
    /// Divide every field by a divisor
    Div {
        #[arg(allow_hyphen_values = true)]
        interval: String,
        #[arg(allow_hyphen_values = true)]
        divisor: f64,
    },
    /// Compare two intervals (less, equal, greater or incomparable)
    Compare {
        #[arg(allow_hyphen_values = true)]
        left: String,
        #[arg(allow_hyphen_values = true)]
        right: String,
    },
    /// Break an interval into years, months, days, hours, minutes, seconds
    Normalize {
        #[arg(allow_hyphen_values = true)]
        interval: String,
    },
    /// Flatten an interval into a fixed duration
    Duration {
        #[arg(allow_hyphen_values = true)]
        interval: String,
    },
    /// Difference between two timestamps
    Diff {
        from: String,
        to: String,
        /// Subtract calendar fields instead of elapsed seconds
        #[arg(long)]
        extended: bool,
    },
    /// Time elapsed since a timestamp
    Since {
        from: String,
        /// Subtract calendar fields instead of elapsed seconds
        #[arg(long)]
        extended: bool,
    },
    /// Move a timestamp by an interval
    Shift {
        timestamp: String,
        #[arg(allow_hyphen_values = true)]
        interval: String,
        /// Move backwards instead of forwards
        #[arg(long)]
        subtract: bool,
    },
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Parse { .. } => "parse",
            Command::Format { .. } => "format",
            Command::Add { .. } => "add",
            Command::Sub { .. } => "sub",
            Command::Mul { .. } => "mul",
            Command::Div { .. } => "div",
            Command::Compare { .. } => "compare",
            Command::Normalize { .. } => "normalize",
            Command::Duration { .. } => "duration",
            Command::Diff { .. } => "diff",
            Command::Since { .. } => "since",
            Command::Shift { .. } => "shift",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_accepts_negative_intervals() {
        let cli = CliConfig::try_parse_from([
            "pg-interval",
            "--json",
            "add",
            "-1 year -2 mons",
            "-04:05:06",
        ])
        .unwrap();
        assert!(cli.json);
        match cli.command {
            Command::Add { left, right } => {
                assert_eq!(left, "-1 year -2 mons");
                assert_eq!(right, "-04:05:06");
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
