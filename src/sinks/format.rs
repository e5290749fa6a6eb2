use std::collections::BTreeMap;
use std::fmt::Write as _;

use chrono::{DateTime, Utc};

use crate::error::{AppError, AppResult, SinkError};

use super::fields::{Field, FieldValue};

/// Wall-clock instant of an export call, in nanoseconds since the Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(i64);

impl Timestamp {
    #[must_use]
    pub fn now() -> Self {
        Self(Utc::now().timestamp_nanos_opt().unwrap_or(i64::MAX))
    }

    #[must_use]
    pub const fn from_unix_nanos(nanos: i64) -> Self {
        Self(nanos)
    }

    #[must_use]
    pub const fn from_unix_secs(secs: i64) -> Self {
        Self(secs.saturating_mul(1_000_000_000))
    }

    #[must_use]
    pub const fn unix_nanos(self) -> i64 {
        self.0
    }

    /// Whole seconds, rounded toward negative infinity.
    #[must_use]
    pub fn unix_secs(self) -> i64 {
        DateTime::<Utc>::from_timestamp_nanos(self.0).timestamp()
    }
}

/// Backslash-escapes `,`, `=` and space for a line-protocol tag.
#[must_use]
pub fn escape_tag_value(value: &str) -> String {
    value
        .replace(',', "\\,")
        .replace('=', "\\=")
        .replace(' ', "\\ ")
}

#[must_use]
pub fn unescape_tag_value(value: &str) -> String {
    let mut output = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\\'
            && let Some(&next) = chars.peek()
            && matches!(next, ',' | '=' | ' ')
        {
            output.push(next);
            chars.next();
            continue;
        }
        output.push(ch);
    }
    output
}

/// `,k=v,k=v` in key order, or an empty string without tags.
#[must_use]
pub fn render_tag_section(tags: &BTreeMap<String, String>) -> String {
    let mut section = String::new();
    for (key, value) in tags {
        section.push(',');
        section.push_str(&escape_tag_value(key));
        section.push('=');
        section.push_str(&escape_tag_value(value));
    }
    section
}

#[must_use]
pub fn render_field_value(value: FieldValue) -> String {
    match value {
        FieldValue::Int(value) => format!("{}i", value),
        // Line-protocol integers are int64.
        FieldValue::UInt(value) => format!("{}i", i64::try_from(value).unwrap_or(i64::MAX)),
        FieldValue::Float(value) => format!("{:.4}", value),
    }
}

/// `measurement[,tags] field=value[,field=value] timestamp\n`.
///
/// # Errors
///
/// Returns an error if the line buffer cannot be written.
pub fn render_line(
    measurement: &str,
    tag_section: &str,
    fields: &[Field],
    timestamp: Timestamp,
) -> AppResult<String> {
    let mut line = String::new();
    write_part(&mut line, format_args!("{}{} ", measurement, tag_section))?;
    for (index, field) in fields.iter().enumerate() {
        if index > 0 {
            line.push(',');
        }
        write_part(
            &mut line,
            format_args!("{}={}", field.name, render_field_value(field.value)),
        )?;
    }
    write_part(&mut line, format_args!(" {}\n", timestamp.unix_nanos()))?;
    Ok(line)
}

fn write_part(output: &mut String, args: std::fmt::Arguments<'_>) -> AppResult<()> {
    output
        .write_fmt(args)
        .map_err(|err| AppError::sink(SinkError::FormatLine { source: err }))
}
