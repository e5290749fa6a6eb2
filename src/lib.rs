//! Telegraf exporter for finished IRTT round-trip-time results.
//!
//! A finished result (already aggregated by the measurement engine) is
//! projected into metric groups and written either as JSON documents or as
//! InfluxDB line protocol. The `irtt-telegraf` binary wraps this with option
//! files and CLI flags; [`sinks::write_result`] and [`sinks::write_error`] are
//! the library entry points.
pub mod args;
pub mod config;
pub mod error;
pub mod sinks;
pub mod stats;
