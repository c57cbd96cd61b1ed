/// One parsed line of tshark field output: a single captured packet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PacketObservation {
    pub source: String,
    pub destination: String,
    pub frame_len: u64,
    pub protocol: Option<String>,
}

/// Aggregation key: a directional address pair, further split by protocol
/// when protocol grouping is enabled.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FlowKey {
    pub source: String,
    pub destination: String,
    pub protocol: Option<String>,
}

/// One aggregated communication: key fields plus accumulated counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowRecord {
    pub source: String,
    pub destination: String,
    pub protocol: Option<String>,
    pub frames: u64,
    pub bytes: u64,
}

/// Metric the final listing is ranked by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Frames,
    Bytes,
}
