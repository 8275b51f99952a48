use std::io::{self, Cursor};

use bitstream_io::{BigEndian, BitRead, BitReader, BitWrite, BitWriter};

use crate::error::HuffError;

/// Accumulates code bits MSB-first and byte-aligns the tail with zero
/// padding. The padding count is persisted in the artifact so the decoder
/// knows how many trailing bits of the final byte to ignore.
pub struct BitPacker {
    writer: BitWriter<Vec<u8>, BigEndian>,
    bit_count: u64,
}

impl BitPacker {
    pub fn new() -> Self {
        BitPacker {
            writer: BitWriter::endian(Vec::new(), BigEndian),
            bit_count: 0,
        }
    }

    pub fn push(&mut self, bit: bool) -> io::Result<()> {
        self.writer.write_bit(bit)?;
        self.bit_count += 1;
        Ok(())
    }

    pub fn push_code(&mut self, code: &[bool]) -> io::Result<()> {
        for &bit in code {
            self.push(bit)?;
        }
        Ok(())
    }

    /// Zero-fill to a byte boundary and return `(padding, packed bytes)`.
    pub fn finish(mut self) -> io::Result<(u8, Vec<u8>)> {
        let padding = ((8 - self.bit_count % 8) % 8) as u8;
        self.writer.byte_align()?;
        Ok((padding, self.writer.into_writer()))
    }
}

impl Default for BitPacker {
    fn default() -> Self {
        Self::new()
    }
}

/// Yields the meaningful bits of a packed payload, MSB to LSB within each
/// byte, stopping before the final byte's padding bits.
pub struct BitUnpacker<'a> {
    reader: BitReader<Cursor<&'a [u8]>, BigEndian>,
    remaining: u64,
}

impl<'a> BitUnpacker<'a> {
    pub fn new(payload: &'a [u8], padding: u8) -> Result<Self, HuffError> {
        if padding > 7 {
            return Err(HuffError::MalformedHeader(format!(
                "padding count {} exceeds 7",
                padding
            )));
        }
        if payload.is_empty() && padding > 0 {
            return Err(HuffError::MalformedHeader(
                "padding claimed on an empty payload".to_string(),
            ));
        }
        Ok(BitUnpacker {
            reader: BitReader::endian(Cursor::new(payload), BigEndian),
            remaining: payload.len() as u64 * 8 - padding as u64,
        })
    }

    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    /// Next meaningful bit, or `None` once only padding is left.
    pub fn next_bit(&mut self) -> Result<Option<bool>, HuffError> {
        if self.remaining == 0 {
            return Ok(None);
        }
        let bit = self.reader.read_bit().map_err(HuffError::Io)?;
        self.remaining -= 1;
        Ok(Some(bit))
    }
}
