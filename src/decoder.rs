//! LZW strip decoder.
//!
//! Implements the TIFF6 decode loop with early code change: read a code at
//! the table's current width, resolve it (growing the table once per
//! non-special code), and push the resolved string through the predictor
//! into the caller-owned output buffer.

use crate::bitstream_msb::MsbBitReader;
use crate::config::StripConfig;
use crate::dictionary::{CLEAR_CODE, CodeTable, EOF_CODE};
use crate::error::{LzwError, StripError};
use crate::predictor::HorizontalPredictor;

/// Decoder for one LZW-compressed strip.
///
/// Table and scratch allocations are reused across calls, but all decode
/// state is reset at the start of every [`decode`](Self::decode), so repeated
/// and concurrent-per-instance decodes are independent and deterministic.
#[derive(Debug)]
pub struct StripDecoder {
    config: StripConfig,
    table: CodeTable,
    /// Reusable buffer the current code's string is materialized into.
    scratch: Vec<u8>,
}

impl StripDecoder {
    /// Create a decoder for strips with the given layout.
    pub fn new(config: StripConfig) -> Result<Self, StripError> {
        config
            .validate()
            .map_err(|kind| StripError { kind, written: 0 })?;
        Ok(Self {
            config,
            table: CodeTable::new(),
            scratch: Vec::new(),
        })
    }

    /// Decode `input` into the pre-sized `output` buffer.
    ///
    /// Returns the count of bytes written. Decoding stops cleanly on an EOF
    /// code, on a full output buffer, or when the reader holds no further
    /// bits (some encoders omit the trailing EOF code). Every error carries
    /// the count of valid bytes already written, so the caller can keep,
    /// blank, or discard the partial strip.
    pub fn decode(&mut self, input: &[u8], output: &mut [u8]) -> Result<usize, StripError> {
        self.table.reset();
        let mut reader = MsbBitReader::new(input);
        let mut predictor = if self.config.predictor {
            Some(HorizontalPredictor::new(
                self.config.bytes_per_row,
                self.config.samples_per_pixel,
            ))
        } else {
            None
        };

        // Previous code, None right after a clear (and at stream start).
        let mut prev: Option<u16> = None;
        let mut written = 0usize;

        while written < output.len() {
            if reader.remaining_bits() == 0 {
                // Stream ended at a code boundary without an explicit EOF
                // code; treat it like one.
                break;
            }
            let code = reader
                .read_bits(self.table.width())
                .map_err(|kind| StripError { kind, written })?;

            if code == CLEAR_CODE {
                self.table.reset();
                prev = None;
                continue;
            }
            if code == EOF_CODE {
                break;
            }

            match prev {
                None => {
                    // A fresh table defines nothing beyond the literals, so
                    // the first code after a clear must be one.
                    if code >= CLEAR_CODE {
                        let kind = if code == self.table.next_code() {
                            LzwError::UnknownCode { code }
                        } else {
                            LzwError::CorruptStream {
                                code,
                                next_code: self.table.next_code(),
                            }
                        };
                        return Err(StripError { kind, written });
                    }
                    self.scratch.clear();
                    self.scratch.push(code as u8);
                }
                Some(prev_code) => {
                    if self.table.is_defined(code) {
                        self.table
                            .copy_string(code, &mut self.scratch)
                            .map_err(|kind| StripError { kind, written })?;
                        let first = self.scratch[0];
                        self.table
                            .insert(prev_code, first)
                            .map_err(|kind| StripError { kind, written })?;
                    } else if code == self.table.next_code() {
                        // Pending code: the entry being referenced is the one
                        // the encoder just created, prev ++ firstByte(prev).
                        // Insert it, then materialize it as the output.
                        let first = self
                            .table
                            .first_byte(prev_code)
                            .map_err(|kind| StripError { kind, written })?;
                        let new_code = self
                            .table
                            .insert(prev_code, first)
                            .map_err(|kind| StripError { kind, written })?;
                        debug_assert_eq!(new_code, code);
                        self.table
                            .copy_string(code, &mut self.scratch)
                            .map_err(|kind| StripError { kind, written })?;
                    } else {
                        return Err(StripError {
                            kind: LzwError::CorruptStream {
                                code,
                                next_code: self.table.next_code(),
                            },
                            written,
                        });
                    }
                }
            }

            for &raw in &self.scratch {
                if written == output.len() {
                    return Err(StripError {
                        kind: LzwError::OutputOverflow {
                            capacity: output.len(),
                        },
                        written,
                    });
                }
                output[written] = match predictor.as_mut() {
                    Some(p) => p.apply(raw),
                    None => raw,
                };
                written += 1;
            }

            prev = Some(code);
        }

        Ok(written)
    }
}
