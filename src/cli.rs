use std::path::PathBuf;

use clap::Parser;

use crate::models::SortKey;

/// Per-flow communication statistics for a .pcap file, extracted by tshark.
#[derive(Parser, Debug)]
#[command(name = "pcomms", version, about)]
pub struct Args {
    /// .pcap file to parse
    #[arg(short, long)]
    pub file: PathBuf,

    /// Sort by bytes, instead of frames
    #[arg(short, long)]
    pub bytes: bool,

    /// Group communications by protocol
    #[arg(short, long)]
    pub protocol: bool,
}

impl Args {
    pub fn sort_key(&self) -> SortKey {
        if self.bytes {
            SortKey::Bytes
        } else {
            SortKey::Frames
        }
    }
}
