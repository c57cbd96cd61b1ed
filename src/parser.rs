use crate::error::PcommsError;
use crate::models::PacketObservation;

/// Parse one tshark field line: `ip.src,ip.dst,frame.len[,protocol]`.
///
/// The address fields (and the protocol field) may be empty strings; tshark
/// emits them empty for packets without the requested field. The frame
/// length must be a non-negative integer, and the field count must match the
/// capture configuration exactly; anything else aborts the run.
pub fn parse_record(
    line: &str,
    line_no: usize,
    with_protocol: bool,
) -> Result<PacketObservation, PcommsError> {
    let expected = if with_protocol { 4 } else { 3 };
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != expected {
        return Err(PcommsError::FieldCount {
            line: line_no,
            expected,
            got: fields.len(),
        });
    }
    let frame_len = fields[2].parse::<u64>().map_err(|_| PcommsError::FrameLen {
        line: line_no,
        value: fields[2].to_string(),
    })?;
    Ok(PacketObservation {
        source: fields[0].to_string(),
        destination: fields[1].to_string(),
        frame_len,
        protocol: with_protocol.then(|| fields[3].to_string()),
    })
}
