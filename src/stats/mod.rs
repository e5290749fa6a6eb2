//! Read-only view of a finished round-trip-time measurement.
//!
//! The measurement engine owns the statistics; this module only describes the
//! shape the exporter consumes. Everything deserializes from the JSON document a
//! finished run is saved as, with missing statistic blocks treated as empty.
mod loader;
mod types;

#[cfg(test)]
mod tests;

pub use loader::load_result;
pub use types::{DurationStats, Nanos, ResultStats, RunConfig, RunResult};
