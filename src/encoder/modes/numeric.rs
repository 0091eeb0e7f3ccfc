/// Numeric mode encoder (Mode 0001)
/// Groups of 3 digits = 10 bits, 2 digits = 7 bits, 1 digit = 4 bits
use crate::encoder::bitstream::BitBuffer;
use crate::error::InvalidArgument;

/// Packs digit groups of three
pub struct NumericEncoder;

impl NumericEncoder {
    /// True if `text` holds only ASCII digits
    pub fn is_encodable(text: &str) -> bool {
        text.bytes().all(|b| b.is_ascii_digit())
    }

    /// Encode digits into `out`, returning the character count
    pub fn encode(text: &str, out: &mut BitBuffer) -> Result<usize, InvalidArgument> {
        if !Self::is_encodable(text) {
            return Err(InvalidArgument::NonNumeric);
        }

        for group in text.as_bytes().chunks(3) {
            let value = group
                .iter()
                .fold(0u32, |acc, &b| acc * 10 + u32::from(b - b'0'));
            out.append_bits(value, group.len() as u8 * 3 + 1);
        }

        Ok(text.len())
    }

    /// Payload bits for `num_chars` digits
    pub fn bit_length(num_chars: usize) -> usize {
        (num_chars * 10).div_ceil(3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_encode() {
        let mut bb = BitBuffer::new();
        let count = NumericEncoder::encode("01234567", &mut bb).unwrap();
        assert_eq!(count, 8);
        // 012 -> 0000001100, 345 -> 0101011001, 67 -> 1000011
        let expected = "000000110001010110011000011";
        let actual: String = bb.bits().iter().map(|&b| if b { '1' } else { '0' }).collect();
        assert_eq!(actual, expected);
        assert_eq!(bb.len(), NumericEncoder::bit_length(8));
    }

    #[test]
    fn test_numeric_single_digit() {
        let mut bb = BitBuffer::new();
        NumericEncoder::encode("9", &mut bb).unwrap();
        assert_eq!(bb.bits(), &[true, false, false, true]);
    }

    #[test]
    fn test_numeric_rejects_letters() {
        let mut bb = BitBuffer::new();
        assert_eq!(
            NumericEncoder::encode("12a", &mut bb),
            Err(InvalidArgument::NonNumeric)
        );
        assert!(!NumericEncoder::is_encodable("1234abc"));
        assert!(NumericEncoder::is_encodable("1234567890"));
    }
}
