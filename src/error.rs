//! Strip-decode error types.

use thiserror::Error;

/// Errors raised by the LZW strip decoding components.
///
/// Every variant is fatal for the current strip: the bitstream cannot be
/// rewound to a known-good point, so nothing is retried internally.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LzwError {
    /// The bit reader was starved mid-code.
    #[error("input exhausted at bit position {position}")]
    ExhaustedInput {
        /// Bit position at which the reader ran dry.
        position: u64,
    },

    /// A code referenced a dictionary entry that cannot exist yet.
    #[error("unknown LZW code {code}")]
    UnknownCode {
        /// The offending code.
        code: u16,
    },

    /// A code value is inconsistent with the table-growth invariant
    /// (strictly greater than the next free slot).
    #[error("corrupt stream: code {code} is ahead of next table entry {next_code}")]
    CorruptStream {
        /// The code read from the stream.
        code: u16,
        /// The next free table slot at the time of the read.
        next_code: u16,
    },

    /// Growth was attempted past the 12-bit ceiling without an intervening
    /// clear code. A correctly encoded stream always re-clears first.
    #[error("code table full (max code {max_code})")]
    TableFull {
        /// Highest assignable code (4095).
        max_code: u16,
    },

    /// Decoded output would exceed the caller's buffer.
    #[error("decoded data would overflow the {capacity}-byte output buffer")]
    OutputOverflow {
        /// Length of the caller-owned output buffer.
        capacity: usize,
    },

    /// Predictor mode was requested with a zero row stride or sample count.
    #[error("predictor requires nonzero bytes_per_row and samples_per_pixel")]
    InvalidPredictor,
}

/// Error returned by a strip decode, carrying the number of valid bytes
/// already written so the caller can decide on partial-data handling.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("strip decode failed after {written} bytes: {kind}")]
pub struct StripError {
    /// What went wrong.
    pub kind: LzwError,
    /// Count of valid bytes written to the output buffer before the failure.
    pub written: usize,
}

/// Result type for the internal decoding components.
pub type Result<T> = std::result::Result<T, LzwError>;
