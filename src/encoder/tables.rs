use crate::models::{ECLevel, Version};

/// Block count and ECC codewords per block for one (version, level) pair
pub struct EcBlockInfo {
    /// Number of error correction blocks
    pub num_blocks: usize,
    /// ECC codewords in every block
    pub ecc_per_block: usize,
}

/// How the codewords of one (version, level) pair are split into blocks.
///
/// Short blocks come first; long blocks carry one extra data codeword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockLayout {
    /// Number of blocks
    pub num_blocks: usize,
    /// ECC codewords in every block
    pub ecc_per_block: usize,
    /// Blocks holding `short_block_data_len` data codewords
    pub num_short_blocks: usize,
    /// Data codewords in a short block
    pub short_block_data_len: usize,
}

impl BlockLayout {
    /// Data codewords in block `block`
    pub fn data_len(&self, block: usize) -> usize {
        self.short_block_data_len + usize::from(block >= self.num_short_blocks)
    }
}

// Tables from the QR Code specification (Model 2) via Nayuki QR Code generator.
// Index: [ec_level][version]
const ECC_CODEWORDS_PER_BLOCK: [[i8; 41]; 4] = [
    [
        -1, 7, 10, 15, 20, 26, 18, 20, 24, 30, 18, 20, 24, 26, 30, 22, 24, 28, 30, 28, 28, 28, 28,
        30, 30, 26, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ], // Low
    [
        -1, 10, 16, 26, 18, 24, 16, 18, 22, 22, 26, 30, 22, 22, 24, 24, 28, 28, 26, 26, 26, 26, 28,
        28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28,
    ], // Medium
    [
        -1, 13, 22, 18, 26, 18, 24, 18, 22, 20, 24, 28, 26, 24, 20, 30, 24, 28, 28, 26, 30, 28, 30,
        30, 30, 30, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ], // Quartile
    [
        -1, 17, 28, 22, 16, 22, 28, 26, 26, 24, 28, 24, 28, 22, 24, 24, 30, 28, 28, 26, 28, 30, 24,
        30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ], // High
];

const NUM_ERROR_CORRECTION_BLOCKS: [[i8; 41]; 4] = [
    [
        -1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 4, 4, 4, 4, 4, 6, 6, 6, 6, 7, 8, 8, 9, 9, 10, 12, 12, 12,
        13, 14, 15, 16, 17, 18, 19, 19, 20, 21, 22, 24, 25,
    ], // Low
    [
        -1, 1, 1, 1, 2, 2, 4, 4, 4, 5, 5, 5, 8, 9, 9, 10, 10, 11, 13, 14, 16, 17, 17, 18, 20, 21,
        23, 25, 26, 28, 29, 31, 33, 35, 37, 38, 40, 43, 45, 47, 49,
    ], // Medium
    [
        -1, 1, 1, 2, 2, 4, 4, 6, 6, 8, 8, 8, 10, 12, 16, 12, 17, 16, 18, 21, 20, 23, 23, 25, 27,
        29, 34, 34, 35, 38, 40, 43, 45, 48, 51, 53, 56, 59, 62, 65, 68,
    ], // Quartile
    [
        -1, 1, 1, 2, 4, 4, 4, 5, 6, 8, 8, 11, 11, 16, 16, 18, 16, 19, 21, 25, 25, 25, 34, 30, 32,
        35, 37, 40, 42, 45, 48, 51, 54, 57, 60, 63, 66, 70, 74, 77, 81,
    ], // High
];

// Total codewords (data + ECC) per version, remainder bits excluded. Index: [version]
const TOTAL_CODEWORDS: [u16; 41] = [
    0, 26, 44, 70, 100, 134, 172, 196, 242, 292, 346, 404, 466, 532, 581, 655, 733, 815, 901, 991,
    1085, 1156, 1258, 1364, 1474, 1588, 1706, 1828, 1921, 2051, 2185, 2323, 2465, 2611, 2761,
    2876, 3034, 3196, 3362, 3532, 3706,
];

/// Block structure at this version and level
pub fn ec_block_info(version: Version, ec_level: ECLevel) -> EcBlockInfo {
    let idx = ec_level.ordinal();
    let v = version.number() as usize;
    EcBlockInfo {
        num_blocks: NUM_ERROR_CORRECTION_BLOCKS[idx][v] as usize,
        ecc_per_block: ECC_CODEWORDS_PER_BLOCK[idx][v] as usize,
    }
}

/// Data plus ECC codewords of a version
pub fn total_codewords(version: Version) -> usize {
    TOTAL_CODEWORDS[version.number() as usize] as usize
}

/// Data codewords available at this version and level
pub fn num_data_codewords(version: Version, ec_level: ECLevel) -> usize {
    let info = ec_block_info(version, ec_level);
    total_codewords(version) - info.num_blocks * info.ecc_per_block
}

/// Split of the data codewords into short and long blocks
pub fn block_layout(version: Version, ec_level: ECLevel) -> BlockLayout {
    let info = ec_block_info(version, ec_level);
    let total = total_codewords(version);
    BlockLayout {
        num_blocks: info.num_blocks,
        ecc_per_block: info.ecc_per_block,
        num_short_blocks: info.num_blocks - total % info.num_blocks,
        short_block_data_len: total / info.num_blocks - info.ecc_per_block,
    }
}

/// Modules left for data and ECC once all function patterns are drawn,
/// remainder bits included
pub fn num_raw_data_modules(version: Version) -> usize {
    let v = version.number() as usize;
    let mut result = (16 * v + 128) * v + 64;
    if v >= 2 {
        let num_align = v / 7 + 2;
        result -= (25 * num_align - 10) * num_align - 55;
        if v >= 7 {
            result -= 36;
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_versions() -> impl Iterator<Item = Version> {
        Version::MIN.up_to(Version::MAX)
    }

    #[test]
    fn test_total_codewords_match_module_count() {
        for version in all_versions() {
            assert_eq!(
                total_codewords(version),
                num_raw_data_modules(version) / 8,
                "version {}",
                version.number()
            );
        }
    }

    #[test]
    fn test_known_capacities() {
        let v1 = Version::new(1).unwrap();
        assert_eq!(num_data_codewords(v1, ECLevel::L), 19);
        assert_eq!(num_data_codewords(v1, ECLevel::M), 16);
        assert_eq!(num_data_codewords(v1, ECLevel::Q), 13);
        assert_eq!(num_data_codewords(v1, ECLevel::H), 9);

        let v40 = Version::MAX;
        assert_eq!(num_data_codewords(v40, ECLevel::L), 2956);
        assert_eq!(num_data_codewords(v40, ECLevel::H), 1276);
    }

    #[test]
    fn test_block_layout_5q() {
        // 5-Q: two blocks of 15 data codewords, two of 16, 18 ECC each
        let layout = block_layout(Version::new(5).unwrap(), ECLevel::Q);
        assert_eq!(layout.num_blocks, 4);
        assert_eq!(layout.ecc_per_block, 18);
        assert_eq!(layout.num_short_blocks, 2);
        assert_eq!(layout.data_len(0), 15);
        assert_eq!(layout.data_len(1), 15);
        assert_eq!(layout.data_len(2), 16);
        assert_eq!(layout.data_len(3), 16);
    }

    #[test]
    fn test_block_layout_sums() {
        for version in all_versions() {
            for ec_level in ECLevel::ALL {
                let layout = block_layout(version, ec_level);
                let data: usize = (0..layout.num_blocks).map(|b| layout.data_len(b)).sum();
                assert_eq!(data, num_data_codewords(version, ec_level));
                assert_eq!(
                    data + layout.num_blocks * layout.ecc_per_block,
                    total_codewords(version)
                );
                assert!(layout.num_short_blocks >= 1);
            }
        }
    }
}
