//! Projection of finished results into Telegraf-consumable metrics.
//!
//! A result is split into metric groups (status, each duration statistic,
//! packet loss, bitrate, timer error), tagged, and encoded either as one JSON
//! document or as one line-protocol line per group.
pub mod config;
pub mod fields;
pub mod format;
pub mod writers;


pub use config::{Encoding, ExportOptions, JsonShape};
pub use fields::{Field, FieldValue, MetricGroup};
pub use format::Timestamp;
pub use writers::{write_error, write_error_at, write_result, write_result_at};
