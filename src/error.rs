use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Terminal failure classes. Any of these stops the whole run; there is no
/// retry or partial-result recovery.
#[derive(Debug, Error)]
pub enum PcommsError {
    #[error("invalid input file: {}", .0.display())]
    InvalidInputFile(PathBuf),

    #[error("failed to launch tshark: {0}")]
    Spawn(io::Error),

    #[error("failed to read tshark output: {0}")]
    Io(#[from] io::Error),

    #[error("line {line}: expected {expected} comma-separated fields, got {got}")]
    FieldCount {
        line: usize,
        expected: usize,
        got: usize,
    },

    #[error("line {line}: frame length {value:?} is not a non-negative integer")]
    FrameLen { line: usize, value: String },
}
