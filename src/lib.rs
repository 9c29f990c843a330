//! PostgreSQL-style intervals: a months/days/seconds value type with its
//! canonical text form, component-wise arithmetic, a partial order, and
//! conversions to chrono durations and timestamps.

#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::app::CommandRunner;
#[cfg(feature = "cli")]
pub use crate::config::{CliConfig, Command};

pub use crate::config::{toml_config::TomlConfig, ResolvedConfig};
pub use crate::core::convert::{diff, diff_extended, since, since_extended};
pub use crate::core::timestamp::{unix_epoch, SIMPLE_LAYOUT};
pub use crate::domain::interval::{Interval, NormalizedInterval};
pub use crate::domain::ordering::IntervalOrdering;
pub use crate::utils::error::{IntervalError, Result};
