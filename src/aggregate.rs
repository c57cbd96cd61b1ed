use std::collections::HashMap;

use crate::models::{FlowKey, FlowRecord, PacketObservation, SortKey};

/// Keyed flow accumulator.
///
/// Records live in an insertion-ordered list; the hash index maps each key
/// to its slot, so lookups are O(1) and equal-rank flows keep first-seen
/// order through the final stable sort.
#[derive(Debug, Default)]
pub struct FlowTable {
    index: HashMap<FlowKey, usize>,
    records: Vec<FlowRecord>,
}

impl FlowTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Fold one packet observation into the table.
    ///
    /// First observation of a key creates its record; every later one
    /// increments the frame count and accumulates the frame length. Records
    /// are never removed.
    pub fn observe(&mut self, obs: PacketObservation) {
        let PacketObservation {
            source,
            destination,
            frame_len,
            protocol,
        } = obs;
        let key = FlowKey {
            source,
            destination,
            protocol,
        };
        if let Some(&slot) = self.index.get(&key) {
            let record = &mut self.records[slot];
            record.frames += 1;
            record.bytes += frame_len;
        } else {
            self.records.push(FlowRecord {
                source: key.source.clone(),
                destination: key.destination.clone(),
                protocol: key.protocol.clone(),
                frames: 1,
                bytes: frame_len,
            });
            self.index.insert(key, self.records.len() - 1);
        }
    }

    /// Consume the table, returning records ranked by `sort_key` descending.
    ///
    /// The sort is stable over insertion order: equal-rank flows appear in
    /// first-seen order.
    pub fn into_sorted(self, sort_key: SortKey) -> Vec<FlowRecord> {
        let mut records = self.records;
        match sort_key {
            SortKey::Frames => records.sort_by(|a, b| b.frames.cmp(&a.frames)),
            SortKey::Bytes => records.sort_by(|a, b| b.bytes.cmp(&a.bytes)),
        }
        records
    }
}
