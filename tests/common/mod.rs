//! Test-only reference TIFF LZW encoder.
//!
//! The library deliberately ships no compressor, so round-trip tests build
//! their inputs here: an MSB-first bit writer plus a dictionary-based encoder
//! producing 9-12 bit codes with the TIFF early-change convention, an initial
//! clear code, a re-clear before the table ceiling, and a trailing EOF code.

use std::collections::HashMap;

const CLEAR_CODE: u16 = 256;
const EOF_CODE: u16 = 257;
const FIRST_CODE: u16 = 258;
/// Re-clear threshold; early change needs headroom below 4095.
const CLEAR_AT: u16 = 4094;

/// MSB-first bit writer.
pub struct MsbBitWriter {
    output: Vec<u8>,
    buffer: u32,
    bits_in_buffer: u8,
}

impl MsbBitWriter {
    pub fn new() -> Self {
        Self {
            output: Vec::new(),
            buffer: 0,
            bits_in_buffer: 0,
        }
    }

    pub fn write_bits(&mut self, value: u16, count: u8) {
        assert!((1..=16).contains(&count));
        self.buffer = (self.buffer << count) | (u32::from(value) & ((1u32 << count) - 1));
        self.bits_in_buffer += count;

        while self.bits_in_buffer >= 8 {
            let byte = (self.buffer >> (self.bits_in_buffer - 8)) as u8;
            self.output.push(byte);
            self.bits_in_buffer -= 8;
        }
    }

    /// Flush, padding the final byte with zero bits.
    pub fn into_vec(mut self) -> Vec<u8> {
        if self.bits_in_buffer > 0 {
            let byte = (self.buffer << (8 - self.bits_in_buffer)) as u8;
            self.output.push(byte);
        }
        self.output
    }
}

impl Default for MsbBitWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Encoder state. Code width tracks a mirror of the *decoder's* table, which
/// runs one insertion behind the encoder's: the decoder inserts nothing for
/// the first data code after a clear, and its early-change bump fires at
/// `2^width - 1`. Every code (data, clear, EOF) is written at the width the
/// decoder will use to read it, which matters exactly at the 511/1023/2047
/// boundaries.
struct Encoder {
    writer: MsbBitWriter,
    map: HashMap<Vec<u8>, u16>,
    /// Encoder-side next assignment.
    next_code: u16,
    /// Decoder-mirror entry count.
    dec_free: u16,
    /// Width the decoder will read the next code with.
    width: u8,
    /// No decoder insertion for the first data code after a clear.
    first_after_clear: bool,
}

impl Encoder {
    fn new() -> Self {
        let mut enc = Self {
            writer: MsbBitWriter::new(),
            map: HashMap::new(),
            next_code: FIRST_CODE,
            dec_free: FIRST_CODE,
            width: 9,
            first_after_clear: true,
        };
        enc.reset_table();
        enc
    }

    fn reset_table(&mut self) {
        self.map.clear();
        for i in 0..256u16 {
            self.map.insert(vec![i as u8], i);
        }
        self.next_code = FIRST_CODE;
        self.dec_free = FIRST_CODE;
        self.width = 9;
        self.first_after_clear = true;
    }

    fn write_clear(&mut self) {
        self.writer.write_bits(CLEAR_CODE, self.width);
        self.reset_table();
    }

    fn write_data_code(&mut self, code: u16) {
        self.writer.write_bits(code, self.width);
        if self.first_after_clear {
            self.first_after_clear = false;
        } else {
            self.dec_free += 1;
            if self.width < 12 && self.dec_free >= (1 << self.width) - 1 {
                self.width += 1;
            }
        }
    }
}

/// Compress `data` as a TIFF LZW strip payload.
pub fn encode_tiff(data: &[u8]) -> Vec<u8> {
    let mut enc = Encoder::new();

    enc.writer.write_bits(CLEAR_CODE, enc.width);

    if data.is_empty() {
        enc.writer.write_bits(EOF_CODE, enc.width);
        return enc.writer.into_vec();
    }

    let mut current = vec![data[0]];
    for &byte in &data[1..] {
        let mut candidate = current.clone();
        candidate.push(byte);

        if enc.map.contains_key(&candidate) {
            current = candidate;
        } else {
            let code = enc.map[&current];
            enc.write_data_code(code);

            enc.map.insert(candidate, enc.next_code);
            enc.next_code += 1;
            if enc.next_code >= CLEAR_AT {
                enc.write_clear();
            }

            current.clear();
            current.push(byte);
        }
    }

    let code = enc.map[&current];
    enc.write_data_code(code);
    enc.writer.write_bits(EOF_CODE, enc.width);
    enc.writer.into_vec()
}

/// Forward horizontal differencing: what a TIFF writer applies before LZW
/// when predictor 2 is in effect.
pub fn difference_rows(data: &[u8], bytes_per_row: usize, samples_per_pixel: usize) -> Vec<u8> {
    assert_eq!(data.len() % bytes_per_row, 0);
    let mut out = Vec::with_capacity(data.len());
    for row in data.chunks_exact(bytes_per_row) {
        for (i, &byte) in row.iter().enumerate() {
            if i < samples_per_pixel {
                out.push(byte);
            } else {
                out.push(byte.wrapping_sub(row[i - samples_per_pixel]));
            }
        }
    }
    out
}

/// Reproducible pseudo-random bytes (linear congruential generator).
pub fn random_bytes(size: usize, mut seed: u64) -> Vec<u8> {
    let mut data = Vec::with_capacity(size);
    for _ in 0..size {
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
        data.push((seed >> 32) as u8);
    }
    data
}
