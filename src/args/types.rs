use clap::ValueEnum;
use serde::Deserialize;

use crate::sinks::{Encoding, JsonShape};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// InfluxDB line protocol, one line per metric group
    #[value(alias = "influx")]
    #[serde(alias = "influx")]
    Line,
    /// One JSON document with separate fields and tags
    #[default]
    Json,
    /// One JSON document with tags and fields merged (legacy layout)
    JsonFlat,
}

impl From<OutputFormat> for Encoding {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Line => Self::LineProtocol,
            OutputFormat::Json => Self::Json(JsonShape::Nested),
            OutputFormat::JsonFlat => Self::Json(JsonShape::Flat),
        }
    }
}
