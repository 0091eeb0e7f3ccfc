/// Byte mode encoder (Mode 0100) for 8-bit data
use crate::encoder::bitstream::BitBuffer;

/// Writes each byte as 8 bits
pub struct ByteEncoder;

impl ByteEncoder {
    /// Encode bytes into `out`, returning the character count
    pub fn encode(data: &[u8], out: &mut BitBuffer) -> usize {
        for &b in data {
            out.append_bits(u32::from(b), 8);
        }
        data.len()
    }

    /// Payload bits for `num_chars` bytes
    pub fn bit_length(num_chars: usize) -> usize {
        num_chars * 8
    }
}
