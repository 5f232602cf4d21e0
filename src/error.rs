use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while configuring or running a filter.
#[derive(Error, Debug)]
pub enum FilterError {
    #[error(
        "invalid {name} bounds: expected a single value or a pair of values, got {count} values
suggestion: pass `--{name} <upper>` or `--{name} <lower> <upper>`"
    )]
    InvalidBounds { name: &'static str, count: usize },

    #[error("output file '{}' already exists", path.display())]
    DestinationExists { path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Errors raised by the sequence value objects in [`crate::seq`].
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SequenceError {
    #[error("invalid alphabet for {kind}: symbol '{symbol}' at position {pos}")]
    InvalidAlphabet {
        kind: &'static str,
        symbol: char,
        pos: usize,
    },

    #[error("{operation} is not supported for {kind}")]
    UnsupportedOperation {
        kind: &'static str,
        operation: &'static str,
    },

    #[error("range {start}..{end} is out of bounds for a sequence of length {len}")]
    OutOfRange { start: usize, end: usize, len: usize },
}
