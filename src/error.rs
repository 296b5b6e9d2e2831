use std::io;

use thiserror::Error;

/// Result type returned by every conversion operation.
pub type ConversionResult<T> = Result<T, ConversionError>;

#[derive(Error, Debug)]
/// Conversion error
pub enum ConversionError {
    #[error("Invalid collection: {0}")]
    InvalidCollection(#[from] Violation),

    #[error("Missing argument: {0}")]
    NullArgument(&'static str),

    #[error("Unable to write to sink: {0}")]
    SinkWrite(#[from] io::Error),
}

impl ConversionError {
    /// True when the input was rejected before anything was written.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ConversionError::InvalidCollection(_) | ConversionError::NullArgument(_)
        )
    }

    /// True when the sink failed; part of the output may already be written.
    pub fn is_sink_failure(&self) -> bool {
        matches!(self, ConversionError::SinkWrite(_))
    }
}

/// A structural rule broken by a tabular view or a batch of raw records.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    #[error("headers are absent or empty")]
    EmptyHeaders,

    #[error("header at position {0} is absent")]
    AbsentHeader(usize),

    #[error("row source is absent")]
    AbsentRows,

    #[error("provided collection can't be empty")]
    EmptyBatch,

    #[error("record at position {0} is empty or absent")]
    EmptyRecord(usize),

    #[error("record at position {0} holds the same key more than once")]
    DuplicateKey(usize),

    #[error("record at position {0} does not have the same set of keys as the first record")]
    KeySetMismatch(usize),
}
