//! Label types for Prometheus metrics

use prometheus_client::encoding::EncodeLabelSet;

#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, EncodeLabelSet)]
pub struct InfoLabels {
    pub model: String,
    pub hardware_version: String,
    pub software_version: String,
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, EncodeLabelSet)]
pub struct BootStatusLabels {
    pub r#type: String,
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, EncodeLabelSet)]
pub struct DownstreamLabels {
    pub channel: String,
    pub status: String,
    pub modulation: String,
    pub channel_id: String,
    pub frequency: String,
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, EncodeLabelSet)]
pub struct UpstreamLabels {
    pub channel: String,
    pub status: String,
    pub r#type: String,
    pub channel_id: String,
    pub symbol_rate: String,
    pub frequency: String,
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct ScrapeErrorLabels {
    pub kind: String,
}
