/// Format information placement
use crate::encoder::bch::BchEncoder;
use crate::models::{BitMatrix, ECLevel, MaskPattern};

/// Format info is 15 bits (5 data + 10 ECC)
/// Written twice: around the top-left finder, and split between the
/// top-right and bottom-left finders
pub struct FormatInfo {
    /// Level encoded in the two high bits
    pub ec_level: ECLevel,
    /// Mask encoded in the next three bits
    pub mask_pattern: MaskPattern,
}

impl FormatInfo {
    /// Format info for a level and mask
    pub fn new(ec_level: ECLevel, mask_pattern: MaskPattern) -> Self {
        Self {
            ec_level,
            mask_pattern,
        }
    }

    /// The 15 masked format bits
    pub fn bits(&self) -> u16 {
        BchEncoder::format_bits(self.ec_level, self.mask_pattern)
    }

    /// Write both copies of the format bits plus the always-dark module
    pub fn place(&self, matrix: &mut BitMatrix) {
        let size = matrix.width();
        assert!(size >= 21, "matrix too small for format info: {size}");
        let bits = self.bits();
        let bit = |i: usize| (bits >> i) & 1 == 1;

        // First copy: column 8 going up to the corner, then row 8 going left
        for i in 0..6 {
            matrix.set(8, i, bit(i));
        }
        matrix.set(8, 7, bit(6));
        matrix.set(8, 8, bit(7));
        matrix.set(7, 8, bit(8));
        for i in 9..15 {
            matrix.set(14 - i, 8, bit(i));
        }

        // Second copy: row 8 under the top-right finder, column 8 beside the bottom-left one
        for i in 0..8 {
            matrix.set(size - 1 - i, 8, bit(i));
        }
        for i in 8..15 {
            matrix.set(8, size - 15 + i, bit(i));
        }

        matrix.set(8, size - 8, true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Reads the first copy back, most significant bit first
    fn read_top_left(matrix: &BitMatrix) -> u16 {
        let mut bits: u16 = 0;
        for col in 0..9 {
            if col != 6 {
                bits = (bits << 1) | matrix.get(col, 8) as u16;
            }
        }
        for row in (0..8).rev() {
            if row != 6 {
                bits = (bits << 1) | matrix.get(8, row) as u16;
            }
        }
        bits
    }

    /// Reads the second copy back, most significant bit first
    fn read_split(matrix: &BitMatrix) -> u16 {
        let size = matrix.width();
        let mut bits: u16 = 0;
        for row in (size - 7..size).rev() {
            bits = (bits << 1) | matrix.get(8, row) as u16;
        }
        for col in size - 8..size {
            bits = (bits << 1) | matrix.get(col, 8) as u16;
        }
        bits
    }

    #[test]
    fn test_format_placement_both_copies() {
        for size in [21, 25, 177] {
            let mut matrix = BitMatrix::square(size);
            let info = FormatInfo::new(ECLevel::Q, MaskPattern::Pattern0);
            info.place(&mut matrix);
            assert_eq!(read_top_left(&matrix), 0b011010101011111);
            assert_eq!(read_split(&matrix), 0b011010101011111);
            assert!(matrix.get(8, size - 8));
        }
    }

    #[test]
    fn test_format_placement_overwrites() {
        let mut matrix = BitMatrix::square(21);
        matrix.fill_rect(0, 0, 21, 21, true);
        let info = FormatInfo::new(ECLevel::M, MaskPattern::Pattern5);
        info.place(&mut matrix);
        assert_eq!(read_top_left(&matrix), info.bits());
        assert_eq!(read_split(&matrix), info.bits());
    }
}
