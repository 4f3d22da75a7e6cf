//! Strip decode configuration.
//!
//! All parameters come from the caller (sourced from container metadata);
//! nothing is inferred from the compressed payload itself.

use crate::error::{LzwError, Result};

/// Caller-supplied parameters for one strip decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StripConfig {
    /// Row stride in bytes; the predictor's row position resets at this
    /// boundary. Ignored when the predictor is disabled.
    pub bytes_per_row: usize,
    /// Interleaved channel count; the predictor's delta distance.
    /// Ignored when the predictor is disabled.
    pub samples_per_pixel: usize,
    /// Whether horizontal differencing was applied before compression.
    pub predictor: bool,
}

impl StripConfig {
    /// Plain LZW, no predictor. Row layout is irrelevant in this mode.
    pub const fn plain() -> Self {
        Self {
            bytes_per_row: 0,
            samples_per_pixel: 0,
            predictor: false,
        }
    }

    /// LZW with horizontal differencing over interleaved rows
    /// (e.g. `samples_per_pixel = 3` for RGBRGB... rows).
    pub const fn horizontal(bytes_per_row: usize, samples_per_pixel: usize) -> Self {
        Self {
            bytes_per_row,
            samples_per_pixel,
            predictor: true,
        }
    }

    /// Reject predictor configurations with a zero stride or channel count.
    pub(crate) fn validate(&self) -> Result<()> {
        if self.predictor && (self.bytes_per_row == 0 || self.samples_per_pixel == 0) {
            return Err(LzwError::InvalidPredictor);
        }
        Ok(())
    }
}
