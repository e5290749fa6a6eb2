use std::collections::BTreeMap;
use std::io::Write;

use serde_json::{Map, Value};

use crate::error::{AppError, AppResult, SinkError};
use crate::stats::RunResult;

use super::config::{Encoding, ExportOptions, JsonShape};
use super::fields::{MetricGroup, assemble_groups, assemble_tags, status_group};
use super::format::{Timestamp, render_line, render_tag_section};

/// Line-protocol measurement name.
pub const MEASUREMENT: &str = "irtt";

/// Write a finished result to `sink`, stamped with the current time.
///
/// # Errors
///
/// Returns an error if the result carries no statistics, or if the sink
/// rejects a write.
pub fn write_result<W>(
    sink: &mut W,
    result: &RunResult,
    options: &ExportOptions,
    encoding: Encoding,
) -> AppResult<()>
where
    W: Write + ?Sized,
{
    write_result_at(sink, result, options, encoding, Timestamp::now())
}

/// Write a finished result to `sink` with an explicit timestamp.
///
/// Nothing is written when the result has no statistics. In line-protocol
/// mode a failed write may leave earlier lines of the same call in the sink.
///
/// # Errors
///
/// Returns an error if the result carries no statistics, or if the sink
/// rejects a write.
pub fn write_result_at<W>(
    sink: &mut W,
    result: &RunResult,
    options: &ExportOptions,
    encoding: Encoding,
    timestamp: Timestamp,
) -> AppResult<()>
where
    W: Write + ?Sized,
{
    let Some(stats) = result.stats.as_ref() else {
        tracing::warn!("Refusing to export a result without stats");
        return Err(AppError::sink(SinkError::MissingStats));
    };

    let tags = assemble_tags(options, result.remote_address());
    let groups = assemble_groups(stats, options);
    tracing::debug!(
        groups = groups.len(),
        tags = tags.len(),
        ?encoding,
        "Exporting result"
    );
    write_groups(sink, &groups, &tags, encoding, timestamp)
}

/// Write a `success=0` record for a run that produced no result.
///
/// `err` is logged but not encoded.
///
/// # Errors
///
/// Returns an error if the sink rejects the write.
pub fn write_error<W, E>(
    sink: &mut W,
    err: &E,
    target: &str,
    options: &ExportOptions,
    encoding: Encoding,
) -> AppResult<()>
where
    W: Write + ?Sized,
    E: std::error::Error + ?Sized,
{
    write_error_at(sink, err, target, options, encoding, Timestamp::now())
}

/// Write a `success=0` record with an explicit timestamp.
///
/// # Errors
///
/// Returns an error if the sink rejects the write.
pub fn write_error_at<W, E>(
    sink: &mut W,
    err: &E,
    target: &str,
    options: &ExportOptions,
    encoding: Encoding,
    timestamp: Timestamp,
) -> AppResult<()>
where
    W: Write + ?Sized,
    E: std::error::Error + ?Sized,
{
    let tags = assemble_tags(options, Some(target));
    tracing::debug!(error = %err, remote = target, ?encoding, "Exporting failure");
    write_groups(sink, &[status_group(false)], &tags, encoding, timestamp)
}

fn write_groups<W>(
    sink: &mut W,
    groups: &[MetricGroup],
    tags: &BTreeMap<String, String>,
    encoding: Encoding,
    timestamp: Timestamp,
) -> AppResult<()>
where
    W: Write + ?Sized,
{
    match encoding {
        Encoding::LineProtocol => write_line_protocol(sink, groups, tags, timestamp),
        Encoding::Json(shape) => {
            let document = encode_json(groups, tags, timestamp, shape);
            let mut bytes = serde_json::to_vec(&document)
                .map_err(|err| AppError::sink(SinkError::SerializeJson { source: err }))?;
            bytes.push(b'\n');
            write_bytes(sink, &bytes)
        }
    }
}

fn write_line_protocol<W>(
    sink: &mut W,
    groups: &[MetricGroup],
    tags: &BTreeMap<String, String>,
    timestamp: Timestamp,
) -> AppResult<()>
where
    W: Write + ?Sized,
{
    let tag_section = render_tag_section(tags);
    let mut lines = 0_usize;
    for group in groups.iter().filter(|group| !group.is_empty()) {
        let line = render_line(MEASUREMENT, &tag_section, &group.fields, timestamp)?;
        write_bytes(sink, line.as_bytes())?;
        lines = lines.saturating_add(1);
    }
    tracing::debug!(lines, "Wrote line protocol");
    Ok(())
}

fn write_bytes<W>(sink: &mut W, bytes: &[u8]) -> AppResult<()>
where
    W: Write + ?Sized,
{
    sink.write_all(bytes)
        .map_err(|err| AppError::sink(SinkError::Write { source: err }))
}

/// One JSON document for all groups of a call; timestamp in whole seconds.
#[must_use]
pub fn encode_json(
    groups: &[MetricGroup],
    tags: &BTreeMap<String, String>,
    timestamp: Timestamp,
    shape: JsonShape,
) -> Value {
    let mut fields = Map::new();
    for field in groups.iter().flat_map(|group| group.fields.iter()) {
        fields.insert(field.name.clone(), Value::from(field.value));
    }
    let tag_values: Map<String, Value> = tags
        .iter()
        .map(|(key, value)| (key.clone(), Value::String(value.clone())))
        .collect();

    match shape {
        JsonShape::Nested => serde_json::json!({
            "fields": fields,
            "tags": tag_values,
            "timestamp": timestamp.unix_secs(),
        }),
        JsonShape::Flat => {
            let mut flat = tag_values;
            flat.extend(fields);
            flat.insert("timestamp".to_owned(), Value::from(timestamp.unix_secs()));
            Value::Object(flat)
        }
    }
}
