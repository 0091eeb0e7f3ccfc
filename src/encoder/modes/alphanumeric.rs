/// Alphanumeric mode encoder (Mode 0010)
/// Alphanumeric character set: 0-9, A-Z, space, $%*+-./:
use crate::encoder::bitstream::BitBuffer;
use crate::error::InvalidArgument;

const ALPHANUMERIC_TABLE: [char; 45] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I',
    'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', ' ', '$',
    '%', '*', '+', '-', '.', '/', ':',
];

/// Encode alphanumeric data
/// Pairs = 11 bits, single = 6 bits
pub struct AlphanumericEncoder;

impl AlphanumericEncoder {
    fn index_of(c: char) -> Option<u32> {
        ALPHANUMERIC_TABLE
            .iter()
            .position(|&t| t == c)
            .map(|i| i as u32)
    }

    /// True if every character of `text` is in the alphanumeric set
    pub fn is_encodable(text: &str) -> bool {
        text.chars().all(Self::is_char_encodable)
    }

    /// True if `c` is in the alphanumeric set
    pub fn is_char_encodable(c: char) -> bool {
        Self::index_of(c).is_some()
    }

    /// Encode text into `out`, returning the character count
    pub fn encode(text: &str, out: &mut BitBuffer) -> Result<usize, InvalidArgument> {
        let values = text
            .chars()
            .map(Self::index_of)
            .collect::<Option<Vec<u32>>>()
            .ok_or(InvalidArgument::NonAlphanumeric)?;

        for pair in values.chunks(2) {
            match *pair {
                [first, second] => out.append_bits(first * 45 + second, 11),
                [single] => out.append_bits(single, 6),
                _ => unreachable!(),
            }
        }

        Ok(values.len())
    }

    /// Payload bits for `num_chars` characters
    pub fn bit_length(num_chars: usize) -> usize {
        (num_chars * 11).div_ceil(2)
    }
}
