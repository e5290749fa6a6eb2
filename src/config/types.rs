use std::collections::BTreeMap;

use serde::Deserialize;

use crate::args::OutputFormat;

/// Options file contents; every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub format: Option<OutputFormat>,
    pub tags: Option<BTreeMap<String, String>>,
    pub include_rtt: Option<bool>,
    pub include_send_delay: Option<bool>,
    pub include_receive_delay: Option<bool>,
    pub include_ipdv: Option<bool>,
    pub include_packet_loss: Option<bool>,
    pub include_bitrate: Option<bool>,
    pub include_server_processing: Option<bool>,
    pub include_timer_error: Option<bool>,
}
