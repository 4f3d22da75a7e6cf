//! MSB-first bit stream reading for TIFF LZW.
//!
//! TIFF LZW packs codes MSB-first (most significant bit first), unlike
//! DEFLATE/LZH which are LSB-first. Codes are 9 to 12 bits wide, so a 32-bit
//! accumulator always has room for one refill plus leftovers.

use crate::error::{LzwError, Result};

/// MSB-first bit reader over a borrowed input slice.
///
/// The accumulator is topped up with exactly as many bytes as the current
/// request needs. Over-reading would corrupt alignment for the next code,
/// so refill stops as soon as enough bits are buffered.
#[derive(Debug)]
pub struct MsbBitReader<'a> {
    /// Input data.
    data: &'a [u8],
    /// Current byte position.
    byte_pos: usize,
    /// Bit accumulator, valid bits in the low end.
    buffer: u32,
    /// Number of valid bits in the accumulator.
    bits_in_buffer: u8,
    /// Total bits consumed, for error reporting.
    total_bits_read: u64,
}

impl<'a> MsbBitReader<'a> {
    /// Create a reader positioned at the start of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            byte_pos: 0,
            buffer: 0,
            bits_in_buffer: 0,
            total_bits_read: 0,
        }
    }

    /// Buffer at least `count` bits, pulling whole bytes on demand.
    #[inline]
    fn fill_buffer(&mut self, count: u8) -> Result<()> {
        while self.bits_in_buffer < count && self.byte_pos < self.data.len() {
            let byte = self.data[self.byte_pos];
            self.byte_pos += 1;
            self.buffer = (self.buffer << 8) | u32::from(byte);
            self.bits_in_buffer += 8;
        }

        if self.bits_in_buffer < count {
            return Err(LzwError::ExhaustedInput {
                position: self.total_bits_read,
            });
        }

        Ok(())
    }

    /// Read the next `count`-bit unsigned integer (1..=16 bits, MSB-first).
    pub fn read_bits(&mut self, count: u8) -> Result<u16> {
        debug_assert!((1..=16).contains(&count), "code width out of range");

        self.fill_buffer(count)?;

        let shift = self.bits_in_buffer - count;
        let mask = (1u32 << count) - 1;
        let value = (self.buffer >> shift) & mask;

        self.bits_in_buffer -= count;
        self.total_bits_read += u64::from(count);

        Ok(value as u16)
    }

    /// Bits still available: buffered leftovers plus unread input bytes.
    ///
    /// Zero means the stream ended cleanly at a code boundary (any trailing
    /// padding was narrower than a code and has been consumed or never
    /// existed); a nonzero value smaller than the code width means a code
    /// was truncated.
    pub fn remaining_bits(&self) -> u64 {
        u64::from(self.bits_in_buffer) + 8 * (self.data.len() - self.byte_pos) as u64
    }

}
