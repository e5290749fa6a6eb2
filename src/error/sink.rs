use thiserror::Error;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("no stats in result")]
    MissingStats,
    #[error("Failed to format line: {source}")]
    FormatLine {
        #[source]
        source: std::fmt::Error,
    },
    #[error("Failed to serialize JSON metric: {source}")]
    SerializeJson {
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to write to sink: {source}")]
    Write {
        #[source]
        source: std::io::Error,
    },
}

impl SinkError {
    /// Underlying I/O error of a failed sink write.
    #[must_use]
    pub const fn write_source(&self) -> Option<&std::io::Error> {
        match self {
            Self::Write { source } => Some(source),
            Self::MissingStats
            | Self::FormatLine { .. }
            | Self::SerializeJson { .. } => None,
        }
    }
}
