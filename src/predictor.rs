//! Horizontal-differencing predictor (TIFF predictor 2) reconstruction.
//!
//! With the predictor, each sample in a row is stored as the difference from
//! the prior sample of the same channel; reconstruction adds the byte
//! `samples_per_pixel` positions back, wrapping mod 256. The first pixel of
//! every row is absolute.

/// Rolling reconstruction filter for one strip.
///
/// Carries only the last `samples_per_pixel` reconstructed bytes of the
/// current row plus the position within the row. The row position wraps at
/// `bytes_per_row` regardless of how many bytes a single dictionary string
/// emits, so a string straddling a row boundary resets mid-emission.
#[derive(Debug)]
pub struct HorizontalPredictor {
    /// Row stride in bytes.
    bytes_per_row: usize,
    /// Delta distance: interleaved channel count.
    samples_per_pixel: usize,
    /// Byte position within the current row.
    row_pos: usize,
    /// Ring of the last `samples_per_pixel` reconstructed bytes,
    /// indexed by `row_pos % samples_per_pixel`.
    window: Vec<u8>,
}

impl HorizontalPredictor {
    /// Create a filter positioned at the start of a row.
    ///
    /// Both parameters must be nonzero; the decoder validates its
    /// configuration before constructing one.
    pub fn new(bytes_per_row: usize, samples_per_pixel: usize) -> Self {
        debug_assert!(bytes_per_row > 0 && samples_per_pixel > 0);
        Self {
            bytes_per_row,
            samples_per_pixel,
            row_pos: 0,
            window: vec![0; samples_per_pixel],
        }
    }

    /// Reconstruct one byte and advance the row position.
    ///
    /// The first `samples_per_pixel` bytes of a row pass through unchanged;
    /// later bytes are wrapping sums with the sample one pixel back. The
    /// window slot is overwritten before it is ever read again, so stale
    /// values from a previous row are never consulted.
    pub fn apply(&mut self, decoded: u8) -> u8 {
        let slot = self.row_pos % self.samples_per_pixel;
        let out = if self.row_pos < self.samples_per_pixel {
            decoded
        } else {
            decoded.wrapping_add(self.window[slot])
        };
        self.window[slot] = out;

        self.row_pos += 1;
        if self.row_pos == self.bytes_per_row {
            self.row_pos = 0;
        }
        out
    }
}
