use std::collections::BTreeMap;

use crate::stats::{DurationStats, ResultStats};

use super::config::ExportOptions;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue {
    Int(i64),
    UInt(u64),
    Float(f64),
}

impl FieldValue {
    /// False for NaN and infinite floats, which neither encoding can carry.
    #[must_use]
    pub const fn is_finite(self) -> bool {
        match self {
            Self::Int(_) | Self::UInt(_) => true,
            Self::Float(value) => value.is_finite(),
        }
    }
}

impl From<FieldValue> for serde_json::Value {
    fn from(value: FieldValue) -> Self {
        match value {
            FieldValue::Int(value) => Self::from(value),
            FieldValue::UInt(value) => Self::from(value),
            FieldValue::Float(value) => Self::from(value),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    pub value: FieldValue,
}

impl Field {
    #[must_use]
    pub fn new(name: impl Into<String>, value: FieldValue) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Fields that travel together; one line-protocol line each.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricGroup {
    pub name: &'static str,
    pub fields: Vec<Field>,
}

impl MetricGroup {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Sub-fields for one duration statistic, or nothing when it has no samples.
///
/// Yields `{prefix}_n`, `_min_ns`, `_max_ns`, `_mean_ns`, `_median_ns` (only
/// when a median is known) and `_stddev_ns`, in that order.
#[must_use]
pub fn project_duration_stats(prefix: &str, stats: Option<&DurationStats>) -> Vec<Field> {
    let Some(stats) = stats.filter(|stats| !stats.is_empty()) else {
        return Vec::new();
    };

    let mut fields = Vec::with_capacity(6);
    fields.push(Field::new(
        format!("{}_n", prefix),
        FieldValue::UInt(stats.n),
    ));
    fields.push(Field::new(
        format!("{}_min_ns", prefix),
        FieldValue::Int(stats.min.as_nanos()),
    ));
    fields.push(Field::new(
        format!("{}_max_ns", prefix),
        FieldValue::Int(stats.max.as_nanos()),
    ));
    fields.push(Field::new(
        format!("{}_mean_ns", prefix),
        FieldValue::Int(stats.mean.as_nanos()),
    ));
    if let Some(median) = stats.median {
        fields.push(Field::new(
            format!("{}_median_ns", prefix),
            FieldValue::Int(median.as_nanos()),
        ));
    }
    fields.push(Field::new(
        format!("{}_stddev_ns", prefix),
        FieldValue::Int(stats.stddev.as_nanos()),
    ));
    fields
}

#[must_use]
pub fn status_group(success: bool) -> MetricGroup {
    MetricGroup {
        name: "status",
        fields: vec![Field::new("success", FieldValue::Int(i64::from(success)))],
    }
}

fn duration_group(name: &'static str, stats: &DurationStats) -> MetricGroup {
    MetricGroup {
        name,
        fields: project_duration_stats(name, Some(stats)),
    }
}

fn packet_loss_group(stats: &ResultStats) -> MetricGroup {
    MetricGroup {
        name: "packet_loss",
        fields: vec![
            Field::new("packets_sent", FieldValue::UInt(stats.packets_sent)),
            Field::new("packets_received", FieldValue::UInt(stats.packets_received)),
            Field::new(
                "packet_loss_percent",
                FieldValue::Float(stats.packet_loss_percent),
            ),
            Field::new(
                "upstream_loss_percent",
                FieldValue::Float(stats.upstream_loss_percent),
            ),
            Field::new(
                "downstream_loss_percent",
                FieldValue::Float(stats.downstream_loss_percent),
            ),
            Field::new("duplicates", FieldValue::UInt(stats.duplicates)),
            Field::new(
                "duplicate_percent",
                FieldValue::Float(stats.duplicate_percent),
            ),
            Field::new("late_packets", FieldValue::UInt(stats.late_packets)),
            Field::new(
                "late_packets_percent",
                FieldValue::Float(stats.late_packets_percent),
            ),
        ],
    }
}

// Float-to-int `as` saturates and maps NaN to zero.
fn truncate_rate(bits_per_second: f64) -> u64 {
    bits_per_second as u64
}

fn bitrate_group(stats: &ResultStats) -> MetricGroup {
    MetricGroup {
        name: "bitrate",
        fields: vec![
            Field::new(
                "send_rate_bps",
                FieldValue::UInt(truncate_rate(stats.send_rate)),
            ),
            Field::new(
                "receive_rate_bps",
                FieldValue::UInt(truncate_rate(stats.receive_rate)),
            ),
            Field::new("bytes_sent", FieldValue::UInt(stats.bytes_sent)),
            Field::new("bytes_received", FieldValue::UInt(stats.bytes_received)),
        ],
    }
}

fn timer_error_group(stats: &ResultStats) -> MetricGroup {
    let mut fields = project_duration_stats("timer_error", Some(&stats.timer_error_stats));
    fields.push(Field::new(
        "timer_err_percent",
        FieldValue::Float(stats.timer_err_percent),
    ));
    fields.push(Field::new("timer_misses", FieldValue::UInt(stats.timer_misses)));
    fields.push(Field::new(
        "timer_miss_percent",
        FieldValue::Float(stats.timer_miss_percent),
    ));
    MetricGroup {
        name: "timer_error",
        fields,
    }
}

/// Every group enabled by `options`, led by a `success=1` status group.
///
/// Duration groups without samples are dropped; scalar groups are kept
/// whenever their switch is on. NaN and infinite floats are dropped field by
/// field, so a group left with nothing emits no line.
#[must_use]
pub fn assemble_groups(stats: &ResultStats, options: &ExportOptions) -> Vec<MetricGroup> {
    let mut groups = vec![status_group(true)];

    if options.include_rtt {
        groups.push(duration_group("rtt", &stats.rtt_stats));
    }
    if options.include_send_delay {
        groups.push(duration_group("send_delay", &stats.send_delay_stats));
    }
    if options.include_receive_delay {
        groups.push(duration_group("receive_delay", &stats.receive_delay_stats));
    }
    if options.include_ipdv {
        groups.push(duration_group("ipdv_rtt", &stats.round_trip_ipdv_stats));
        groups.push(duration_group("ipdv_send", &stats.send_ipdv_stats));
        groups.push(duration_group("ipdv_receive", &stats.receive_ipdv_stats));
    }
    if options.include_server_processing {
        groups.push(duration_group(
            "server_processing",
            &stats.server_processing_time_stats,
        ));
    }
    if options.include_packet_loss {
        groups.push(packet_loss_group(stats));
    }
    if options.include_bitrate {
        groups.push(bitrate_group(stats));
    }
    if options.include_timer_error {
        groups.push(timer_error_group(stats));
    }

    for group in &mut groups {
        group.fields.retain(|field| field.value.is_finite());
    }
    groups.retain(|group| !group.is_empty());
    groups
}

/// Static tags plus `target`, when a non-empty target is known.
#[must_use]
pub fn assemble_tags(options: &ExportOptions, target: Option<&str>) -> BTreeMap<String, String> {
    let mut tags = options.tags.clone();
    if let Some(target) = target.filter(|target| !target.is_empty()) {
        tags.insert("target".to_owned(), target.to_owned());
    }
    tags
}
