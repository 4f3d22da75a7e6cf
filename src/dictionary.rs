//! LZW code table management.
//!
//! Entries are stored structurally as `(prefix code, appended byte)` pairs
//! with cached first-byte and length, so memory stays O(table size) and no
//! fixed per-entry buffer can truncate or overflow on pathological chains.
//! Strings are materialized front-to-back on demand into a caller-provided
//! scratch buffer.

use crate::error::{LzwError, Result};

/// Sentinel resetting the dictionary and code width.
pub const CLEAR_CODE: u16 = 256;
/// Sentinel marking end of stream.
pub const EOF_CODE: u16 = 257;
/// First dynamically assigned code after a clear.
pub const FIRST_CODE: u16 = 258;
/// Highest assignable code (12-bit ceiling).
pub const MAX_CODE: u16 = 4095;
/// Code width immediately after a clear.
pub const MIN_WIDTH: u8 = 9;
/// Code width ceiling.
pub const MAX_WIDTH: u8 = 12;

/// Root marker for the 256 literal one-byte entries.
const NO_PREFIX: u16 = u16::MAX;

/// One dictionary entry: the string `string(prefix) ++ [byte]`.
#[derive(Debug, Clone, Copy)]
struct Entry {
    /// Code of the string this entry extends, `NO_PREFIX` for literals.
    prefix: u16,
    /// Appended byte.
    byte: u8,
    /// First byte of the full string, cached for O(1) access.
    first: u8,
    /// Full string length, cached so emission can be sized up front.
    len: u16,
}

/// Adaptive dictionary mapping codes to byte strings.
///
/// Two logical states: *Cleared* (exactly the 256 literals plus the Clear/EOF
/// sentinels defined, `next_code` = 258, width 9) and *Growing* (entries
/// accumulating up to code 4095). `reset` returns to Cleared; the first
/// `insert` after a clear moves to Growing.
#[derive(Debug)]
pub struct CodeTable {
    /// Entries indexed by code. Slots 256/257 are unusable placeholders.
    entries: Vec<Entry>,
    /// Next code to assign.
    next_code: u16,
    /// Current code width in bits.
    width: u8,
}

impl CodeTable {
    /// Create a table in the Cleared state.
    pub fn new() -> Self {
        let mut entries = Vec::with_capacity(usize::from(MAX_CODE) + 1);
        for i in 0..=255u16 {
            entries.push(Entry {
                prefix: NO_PREFIX,
                byte: i as u8,
                first: i as u8,
                len: 1,
            });
        }
        // Placeholders for the Clear and EOF sentinels.
        for _ in 0..2 {
            entries.push(Entry {
                prefix: NO_PREFIX,
                byte: 0,
                first: 0,
                len: 0,
            });
        }
        Self {
            entries,
            next_code: FIRST_CODE,
            width: MIN_WIDTH,
        }
    }

    /// Reinitialize to the Cleared state, keeping the allocation.
    pub fn reset(&mut self) {
        self.entries.truncate(usize::from(FIRST_CODE));
        self.next_code = FIRST_CODE;
        self.width = MIN_WIDTH;
    }

    /// Current code width for bitstream reads.
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Next code that will be assigned.
    pub fn next_code(&self) -> u16 {
        self.next_code
    }

    /// Whether `code` currently names a string.
    pub fn is_defined(&self, code: u16) -> bool {
        code < CLEAR_CODE || (code >= FIRST_CODE && code < self.next_code)
    }

    /// First byte of the string named by `code`.
    pub fn first_byte(&self, code: u16) -> Result<u8> {
        if !self.is_defined(code) {
            return Err(LzwError::UnknownCode { code });
        }
        Ok(self.entries[usize::from(code)].first)
    }

    /// Length of the string named by `code`.
    pub fn len_of(&self, code: u16) -> Result<u16> {
        if !self.is_defined(code) {
            return Err(LzwError::UnknownCode { code });
        }
        Ok(self.entries[usize::from(code)].len)
    }

    /// Materialize the string named by `code` into `scratch` (cleared first).
    ///
    /// The prefix chain yields bytes back-to-front; the buffer is reversed
    /// once at the end so the result reads in stream order.
    pub fn copy_string(&self, code: u16, scratch: &mut Vec<u8>) -> Result<()> {
        if !self.is_defined(code) {
            return Err(LzwError::UnknownCode { code });
        }

        scratch.clear();
        let mut c = code;
        loop {
            let entry = self.entries[usize::from(c)];
            scratch.push(entry.byte);
            if entry.prefix == NO_PREFIX {
                break;
            }
            c = entry.prefix;
        }
        scratch.reverse();
        Ok(())
    }

    /// Append the entry `string(prefix) ++ [byte]` at `next_code`.
    ///
    /// Applies the TIFF early-change convention on the decode side: the code
    /// width is bumped as soon as `next_code` reaches `2^width - 1`, one code
    /// earlier than the naive power-of-two boundary, matching the encoder's
    /// behavior one insertion ahead.
    pub fn insert(&mut self, prefix: u16, byte: u8) -> Result<u16> {
        if self.next_code > MAX_CODE {
            return Err(LzwError::TableFull { max_code: MAX_CODE });
        }
        if !self.is_defined(prefix) {
            return Err(LzwError::UnknownCode { code: prefix });
        }

        let parent = self.entries[usize::from(prefix)];
        self.entries.push(Entry {
            prefix,
            byte,
            first: parent.first,
            len: parent.len + 1,
        });
        let code = self.next_code;
        self.next_code += 1;

        if self.width < MAX_WIDTH && self.next_code >= (1 << self.width) - 1 {
            self.width += 1;
        }

        Ok(code)
    }
}

impl Default for CodeTable {
    fn default() -> Self {
        Self::new()
    }
}
