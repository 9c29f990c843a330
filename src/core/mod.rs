pub mod convert;
pub mod formatter;
pub mod parser;
pub mod serde_canonical;
pub mod timestamp;

pub use crate::domain::interval::{Interval, NormalizedInterval};
pub use crate::domain::ordering::IntervalOrdering;
pub use convert::{diff, diff_extended, since, since_extended};
pub use parser::parse_interval;
