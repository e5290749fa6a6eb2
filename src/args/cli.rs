use clap::Parser;

use crate::sinks::{Encoding, ExportOptions};

use super::parsers::parse_tag;
use super::types::OutputFormat;

#[derive(Debug, Parser, Clone)]
#[clap(
    name = "irtt-telegraf",
    version,
    about = "Export finished IRTT results as Telegraf JSON or InfluxDB line-protocol metrics."
)]
pub struct ExporterArgs {
    /// Path to a TOML/JSON options file (defaults to ./irtt-telegraf.toml or ./irtt-telegraf.json)
    #[arg(long = "config", short = 'c')]
    pub config: Option<String>,

    /// Finished result as JSON; '-' reads stdin
    #[arg(long = "result", short = 'r', default_value = "-")]
    pub result: String,

    /// Output file (defaults to stdout)
    #[arg(long = "output", short = 'o')]
    pub output: Option<String>,

    /// Output encoding
    #[arg(long = "format", short = 'f', value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Static tag added to every metric (repeatable, key=value)
    #[arg(long = "tag", short = 't', value_parser = parse_tag)]
    pub tags: Vec<(String, String)>,

    /// Skip round-trip time statistics
    #[arg(long = "no-rtt")]
    pub no_rtt: bool,

    /// Skip send delay statistics
    #[arg(long = "no-send-delay")]
    pub no_send_delay: bool,

    /// Skip receive delay statistics
    #[arg(long = "no-receive-delay")]
    pub no_receive_delay: bool,

    /// Skip all three delay variation (jitter) statistics
    #[arg(long = "no-ipdv")]
    pub no_ipdv: bool,

    /// Skip packet loss, duplicate and late packet counters
    #[arg(long = "no-packet-loss")]
    pub no_packet_loss: bool,

    /// Skip bitrate and byte counters
    #[arg(long = "no-bitrate")]
    pub no_bitrate: bool,

    /// Skip server processing time statistics
    #[arg(long = "no-server-processing")]
    pub no_server_processing: bool,

    /// Include timer error statistics and timer miss counters
    #[arg(long = "include-timer-error")]
    pub include_timer_error: bool,

    /// Write a failure record for this target instead of reading a result
    #[arg(long = "failed-target")]
    pub failed_target: Option<String>,

    /// Reason logged with a failure record
    #[arg(long = "failure-reason", default_value = "measurement failed")]
    pub failure_reason: String,

    /// Enable debug logging on stderr
    #[arg(long = "verbose", short = 'v')]
    pub verbose: bool,
}

impl ExporterArgs {
    #[must_use]
    pub fn export_options(&self) -> ExportOptions {
        ExportOptions {
            tags: self.tags.iter().cloned().collect(),
            include_rtt: !self.no_rtt,
            include_send_delay: !self.no_send_delay,
            include_receive_delay: !self.no_receive_delay,
            include_ipdv: !self.no_ipdv,
            include_packet_loss: !self.no_packet_loss,
            include_bitrate: !self.no_bitrate,
            include_server_processing: !self.no_server_processing,
            include_timer_error: self.include_timer_error,
        }
    }

    #[must_use]
    pub fn encoding(&self) -> Encoding {
        self.format.into()
    }
}
