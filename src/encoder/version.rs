/// Version information placement for QR codes v7+
use crate::encoder::bch::BchEncoder;
use crate::models::{BitMatrix, Version};

/// Version info is 18 bits (6 data + 12 ECC) for versions 7-40
pub struct VersionInfo;

impl VersionInfo {
    /// Write both 6x3 version blocks; no-op below version 7
    pub fn place(matrix: &mut BitMatrix, version: Version) {
        let Some(bits) = BchEncoder::version_bits(version) else {
            return;
        };
        let size = version.size();
        debug_assert_eq!(matrix.width(), size);

        for i in 0..18 {
            let bit = (bits >> i) & 1 == 1;
            let a = size - 11 + i % 3;
            let b = i / 3;
            // Above the bottom-left finder, and left of the top-right finder
            matrix.set(b, a, bit);
            matrix.set(a, b, bit);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_top_right(matrix: &BitMatrix) -> u32 {
        let size = matrix.width();
        let mut bits: u32 = 0;
        for i in (0..18).rev() {
            bits = (bits << 1) | matrix.get(size - 11 + i % 3, i / 3) as u32;
        }
        bits
    }

    fn read_bottom_left(matrix: &BitMatrix) -> u32 {
        let size = matrix.width();
        let mut bits: u32 = 0;
        for i in (0..18).rev() {
            bits = (bits << 1) | matrix.get(i / 3, size - 11 + i % 3) as u32;
        }
        bits
    }

    #[test]
    fn test_version_placement() {
        let version = Version::new(7).unwrap();
        let mut matrix = BitMatrix::square(version.size());
        VersionInfo::place(&mut matrix, version);
        assert_eq!(read_top_right(&matrix), 0x07C94);
        assert_eq!(read_bottom_left(&matrix), 0x07C94);
    }

    #[test]
    fn test_no_version_info_below_7() {
        let version = Version::new(6).unwrap();
        let mut matrix = BitMatrix::square(version.size());
        VersionInfo::place(&mut matrix, version);
        assert_eq!(matrix.count_ones(), 0);
    }
}
