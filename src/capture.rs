use std::io::{self, BufRead, BufReader, Lines};
use std::path::Path;
use std::process::{Child, ChildStdout, Command, Stdio};

use tracing::{debug, warn};

use crate::error::PcommsError;

const TSHARK_BIN: &str = "tshark";
const BASE_FIELDS: [&str; 3] = ["ip.src", "ip.dst", "frame.len"];
const PROTOCOL_FIELD: &str = "_ws.col.Protocol";

/// The tshark subprocess, read line by line.
///
/// Each line is one packet: the requested fields joined by commas, a single
/// occurrence per field so the layout stays fixed-width.
pub struct TsharkSource {
    child: Child,
    lines: Lines<BufReader<ChildStdout>>,
}

/// Argument vector for dissecting `file` into per-packet field lines.
pub fn tshark_args(file: &Path, with_protocol: bool) -> Vec<String> {
    let mut args: Vec<String> = vec![
        "-r".into(),
        file.display().to_string(),
        "-T".into(),
        "fields".into(),
    ];
    for field in BASE_FIELDS {
        args.push("-e".into());
        args.push(field.into());
    }
    if with_protocol {
        args.push("-e".into());
        args.push(PROTOCOL_FIELD.into());
    }
    args.push("-E".into());
    args.push("separator=,".into());
    args.push("-E".into());
    args.push("occurrence=f".into());
    args
}

impl TsharkSource {
    /// Spawn tshark against `file` with stdout piped. Stderr is inherited so
    /// tshark's own diagnostics still reach the terminal.
    pub fn spawn(file: &Path, with_protocol: bool) -> Result<Self, PcommsError> {
        Self::spawn_with(TSHARK_BIN, file, with_protocol)
    }

    fn spawn_with(bin: &str, file: &Path, with_protocol: bool) -> Result<Self, PcommsError> {
        let args = tshark_args(file, with_protocol);
        debug!(?args, "spawning {bin}");
        let mut child = Command::new(bin)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .spawn()
            .map_err(PcommsError::Spawn)?;
        let stdout = child.stdout.take().expect("stdout was piped");
        Ok(TsharkSource {
            child,
            lines: BufReader::new(stdout).lines(),
        })
    }

    /// Reap the child once the stream is drained. A non-zero exit status is
    /// logged but does not invalidate the lines already consumed.
    pub fn finish(mut self) -> io::Result<()> {
        let status = self.child.wait()?;
        if !status.success() {
            warn!(%status, "tshark exited with non-zero status");
        }
        Ok(())
    }
}

impl Iterator for TsharkSource {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.lines.next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn builds_base_argument_vector() {
        let args = tshark_args(&PathBuf::from("cap.pcap"), false);
        assert_eq!(
            args,
            [
                "-r", "cap.pcap", "-T", "fields", "-e", "ip.src", "-e", "ip.dst", "-e",
                "frame.len", "-E", "separator=,", "-E", "occurrence=f",
            ]
        );
    }

    #[test]
    fn protocol_mode_adds_the_protocol_field() {
        let args = tshark_args(&PathBuf::from("cap.pcap"), true);
        assert!(args
            .windows(2)
            .any(|w| w[0] == "-e" && w[1] == "_ws.col.Protocol"));
        // extraction options still close the vector
        assert_eq!(args[args.len() - 4..], ["-E", "separator=,", "-E", "occurrence=f"]);
    }

    #[test]
    fn spawn_failure_is_reported() {
        let err = TsharkSource::spawn_with(
            "pcomms-no-such-dissector",
            &PathBuf::from("cap.pcap"),
            false,
        )
        .err()
        .expect("spawn must fail");
        assert!(matches!(err, PcommsError::Spawn(_)));
    }
}
