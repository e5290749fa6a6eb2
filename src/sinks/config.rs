use std::collections::BTreeMap;

/// Which metric groups to emit and which static tags to attach.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    pub tags: BTreeMap<String, String>,
    pub include_rtt: bool,
    pub include_send_delay: bool,
    pub include_receive_delay: bool,
    /// Gates all three delay-variation groups together.
    pub include_ipdv: bool,
    pub include_packet_loss: bool,
    pub include_bitrate: bool,
    pub include_server_processing: bool,
    pub include_timer_error: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            tags: BTreeMap::new(),
            include_rtt: true,
            include_send_delay: true,
            include_receive_delay: true,
            include_ipdv: true,
            include_packet_loss: true,
            include_bitrate: true,
            include_server_processing: true,
            include_timer_error: false,
        }
    }
}

impl ExportOptions {
    #[must_use]
    pub fn with_tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.insert(key.into(), value.into());
        self
    }
}

/// Layout of the JSON document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JsonShape {
    /// `{"fields": {..}, "tags": {..}, "timestamp": secs}`.
    #[default]
    Nested,
    /// Tags, fields and `timestamp` merged into one object.
    Flat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    LineProtocol,
    Json(JsonShape),
}

impl Default for Encoding {
    fn default() -> Self {
        Self::Json(JsonShape::default())
    }
}
