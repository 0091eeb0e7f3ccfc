/// Kanji mode encoder (Mode 1000)
/// Each double-byte Shift JIS character is compacted to 13 bits
use crate::encoder::bitstream::BitBuffer;
use crate::error::InvalidArgument;

/// Packs Shift JIS double-byte characters
pub struct KanjiEncoder;

impl KanjiEncoder {
    /// Map one Shift JIS pair to its 13-bit value
    fn compact(pair: [u8; 2]) -> Option<u32> {
        let code = u16::from_be_bytes(pair);
        let offset = match code {
            0x8140..=0x9FFC => code - 0x8140,
            0xE040..=0xEBBF => code - 0xC140,
            _ => return None,
        };
        let (msb, lsb) = (u32::from(offset >> 8), u32::from(offset & 0xFF));
        // Trail bytes 0x7F and above 0xFC are not part of the double-byte set
        if lsb > 0xBC || lsb == 0x3F {
            return None;
        }
        Some(msb * 0xC0 + lsb)
    }

    /// True if `sjis` is a whole sequence of kanji-mode pairs
    pub fn is_encodable(sjis: &[u8]) -> bool {
        sjis.len() % 2 == 0
            && sjis
                .chunks_exact(2)
                .all(|p| Self::compact([p[0], p[1]]).is_some())
    }

    /// Encode Shift JIS bytes into `out`, returning the character count
    pub fn encode(sjis: &[u8], out: &mut BitBuffer) -> Result<usize, InvalidArgument> {
        if sjis.len() % 2 != 0 {
            return Err(InvalidArgument::InvalidKanji);
        }
        let values = sjis
            .chunks_exact(2)
            .map(|p| Self::compact([p[0], p[1]]))
            .collect::<Option<Vec<u32>>>()
            .ok_or(InvalidArgument::InvalidKanji)?;

        for &value in &values {
            out.append_bits(value, 13);
        }
        Ok(values.len())
    }

    /// Payload bits for `num_chars` characters
    pub fn bit_length(num_chars: usize) -> usize {
        num_chars * 13
    }
}
