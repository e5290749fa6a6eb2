use serde::Deserialize;

/// Signed duration in nanoseconds.
///
/// Delay variation can be negative, so this cannot be a `std::time::Duration`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct Nanos(i64);

impl Nanos {
    #[must_use]
    pub const fn from_nanos(nanos: i64) -> Self {
        Self(nanos)
    }

    #[must_use]
    pub const fn from_micros(micros: i64) -> Self {
        Self(micros.saturating_mul(1_000))
    }

    #[must_use]
    pub const fn from_millis(millis: i64) -> Self {
        Self(millis.saturating_mul(1_000_000))
    }

    #[must_use]
    pub const fn as_nanos(self) -> i64 {
        self.0
    }
}

impl From<std::time::Duration> for Nanos {
    fn from(value: std::time::Duration) -> Self {
        Self(i64::try_from(value.as_nanos()).unwrap_or(i64::MAX))
    }
}

/// Precomputed summary over a set of duration samples.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DurationStats {
    pub n: u64,
    pub min: Nanos,
    pub max: Nanos,
    pub mean: Nanos,
    /// Absent when the engine could not determine a median.
    pub median: Option<Nanos>,
    pub stddev: Nanos,
}

impl DurationStats {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.n == 0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ResultStats {
    pub rtt_stats: DurationStats,
    pub send_delay_stats: DurationStats,
    pub receive_delay_stats: DurationStats,
    pub round_trip_ipdv_stats: DurationStats,
    pub send_ipdv_stats: DurationStats,
    pub receive_ipdv_stats: DurationStats,
    pub server_processing_time_stats: DurationStats,

    pub packets_sent: u64,
    pub packets_received: u64,
    pub packet_loss_percent: f64,
    pub upstream_loss_percent: f64,
    pub downstream_loss_percent: f64,
    pub duplicates: u64,
    pub duplicate_percent: f64,
    pub late_packets: u64,
    pub late_packets_percent: f64,

    /// Bits per second.
    pub send_rate: f64,
    /// Bits per second.
    pub receive_rate: f64,
    pub bytes_sent: u64,
    pub bytes_received: u64,

    pub timer_error_stats: DurationStats,
    pub timer_err_percent: f64,
    pub timer_misses: u64,
    pub timer_miss_percent: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub remote_address: String,
}

/// A finished run as handed over by the measurement engine.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RunResult {
    pub config: Option<RunConfig>,
    pub stats: Option<ResultStats>,
}

impl RunResult {
    /// Remote address of the run, if one was recorded and is non-empty.
    #[must_use]
    pub fn remote_address(&self) -> Option<&str> {
        self.config
            .as_ref()
            .map(|config| config.remote_address.as_str())
            .filter(|address| !address.is_empty())
    }
}
