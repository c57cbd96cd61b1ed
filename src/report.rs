use std::io::{self, Write};

use crate::models::FlowRecord;

/// Write the summary table: header row, then one tab-separated row per flow
/// in the given order. The Protocol column only appears in protocol-grouping
/// mode. An empty listing still gets its header.
pub fn write_table<W: Write>(
    out: &mut W,
    records: &[FlowRecord],
    with_protocol: bool,
) -> io::Result<()> {
    if with_protocol {
        writeln!(out, "Src\tDst\tFrames\tBytes\tProtocol")?;
    } else {
        writeln!(out, "Src\tDst\tFrames\tBytes")?;
    }
    for record in records {
        write!(
            out,
            "{}\t{}\t{}\t{}",
            record.source, record.destination, record.frames, record.bytes
        )?;
        if let Some(protocol) = &record.protocol {
            write!(out, "\t{protocol}")?;
        }
        writeln!(out)?;
    }
    Ok(())
}
