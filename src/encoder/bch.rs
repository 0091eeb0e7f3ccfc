/// BCH codes protecting the QR format and version information
use crate::models::{ECLevel, MaskPattern, Version};

/// BCH(15,5) generator: x^10 + x^8 + x^5 + x^4 + x^2 + x + 1
const FORMAT_GENERATOR: u32 = 0x537;
/// XOR applied so that format information is never all zero
const FORMAT_MASK: u32 = 0x5412;
/// BCH(18,6) generator: x^12 + x^11 + x^10 + x^9 + x^8 + x^5 + x^2 + 1
const VERSION_GENERATOR: u32 = 0x1F25;

/// BCH encoder for format and version information
pub struct BchEncoder;

impl BchEncoder {
    /// 15-bit format information: 2 level bits, 3 mask bits, 10 ECC bits, masked
    pub fn format_bits(ec_level: ECLevel, mask: MaskPattern) -> u16 {
        let data = (u32::from(ec_level.format_bits()) << 3) | u32::from(mask.value());
        let codeword = (data << 10) | Self::remainder(data, FORMAT_GENERATOR, 10);
        ((codeword ^ FORMAT_MASK) & 0x7FFF) as u16
    }

    /// 18-bit version information (6 version bits, 12 ECC bits), versions 7+
    pub fn version_bits(version: Version) -> Option<u32> {
        let v = u32::from(version.number());
        if v < 7 {
            return None;
        }
        Some((v << 12) | Self::remainder(v, VERSION_GENERATOR, 12))
    }

    /// Remainder of `data * x^degree` modulo `generator`
    fn remainder(data: u32, generator: u32, degree: u32) -> u32 {
        let mut rem = data;
        for _ in 0..degree {
            rem = (rem << 1) ^ ((rem >> (degree - 1)) * generator);
        }
        debug_assert!(rem >> degree == 0);
        rem
    }
}
