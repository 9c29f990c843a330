//! Serde adapter storing an [`Interval`] as its canonical text.
//!
//! ```ignore
//! #[derive(Serialize, Deserialize)]
//! struct Job {
//!     #[serde(with = "pg_interval::core::serde_canonical")]
//!     retry_after: Interval,
//! }
//! ```
//!
//! Fractional seconds go through decimal text, so values beyond `f64`'s
//! shortest representation are not preserved bit for bit.

use serde::{de, Deserialize, Deserializer, Serializer};

use crate::domain::interval::Interval;

pub fn serialize<S: Serializer>(interval: &Interval, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(interval)
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Interval, D::Error> {
    let text = String::deserialize(deserializer)?;
    Interval::parse(&text).map_err(de::Error::custom)
}
