//! # striplzw: TIFF LZW strip decoding
//!
//! This crate reconstructs the original byte stream of one image strip that
//! was compressed with LZW coding, optionally preceded by horizontal
//! differencing (TIFF predictor 2).
//!
//! ## Features
//!
//! - **Pure Rust**: no C dependencies, 100% safe Rust
//! - **TIFF LZW**: MSB-first bit order, 9-12 bit codes, early code change
//! - **Predictor 2**: per-row horizontal differencing over interleaved
//!   channels, reconstructed on the fly
//! - **Caller-owned output**: decodes into a pre-sized buffer, never
//!   writes past it, and reports the bytes written alongside any error
//!
//! Locating a strip's offset and length inside the container file is the
//! caller's responsibility; this crate consumes exactly the compressed
//! payload and fills exactly the declared output.
//!
//! ## Example
//!
//! ```rust
//! use striplzw::{StripConfig, decode_strip};
//!
//! // 9-bit codes: 'A' 'B' 'A' 'B' 'A' Clear EOF
//! let compressed = [0x20, 0x90, 0x88, 0x24, 0x22, 0x0C, 0x02, 0x02];
//!
//! let mut strip = [0u8; 5];
//! let written = decode_strip(&compressed, &mut strip, StripConfig::plain()).unwrap();
//!
//! assert_eq!(written, 5);
//! assert_eq!(&strip, b"ABABA");
//! ```
//!
//! For a strip of RGB rows saved with the predictor, pass the row layout:
//!
//! ```rust,no_run
//! use striplzw::{StripConfig, StripDecoder};
//!
//! # let payload: &[u8] = &[];
//! let config = StripConfig::horizontal(2400, 3); // 800 RGB pixels per row
//! let mut decoder = StripDecoder::new(config).unwrap();
//! let mut strip = vec![0u8; 109 * 2400]; // rows_per_strip * bytes_per_row
//! let written = decoder.decode(payload, &mut strip).unwrap();
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod bitstream_msb;
mod config;
mod decoder;
mod dictionary;
mod error;
mod predictor;

pub use config::StripConfig;
pub use decoder::StripDecoder;
pub use error::{LzwError, StripError};

/// Decode one LZW-compressed strip into a caller-owned, pre-sized buffer.
///
/// Returns the count of bytes written, which equals `output.len()` for a
/// well-formed strip whose declared size matches the payload. Errors carry
/// the count of valid bytes already written.
///
/// # Example
///
/// ```rust
/// use striplzw::{StripConfig, decode_strip};
///
/// // 9-bit codes: Clear EOF (an empty strip)
/// let compressed = [0x80, 0x40, 0x40];
/// let mut out = [0u8; 8];
/// assert_eq!(decode_strip(&compressed, &mut out, StripConfig::plain()).unwrap(), 0);
/// ```
pub fn decode_strip(
    input: &[u8],
    output: &mut [u8],
    config: StripConfig,
) -> Result<usize, StripError> {
    let mut decoder = StripDecoder::new(config)?;
    decoder.decode(input, output)
}

/// Decode one strip into a freshly allocated buffer of `expected_size` bytes.
///
/// Convenience wrapper over [`decode_strip`]; the returned vector is
/// truncated to the bytes actually written (shorter than `expected_size`
/// only when the stream signals EOF early).
pub fn decode_strip_to_vec(
    input: &[u8],
    expected_size: usize,
    config: StripConfig,
) -> Result<Vec<u8>, StripError> {
    let mut output = vec![0u8; expected_size];
    let written = decode_strip(input, &mut output, config)?;
    output.truncate(written);
    Ok(output)
}
