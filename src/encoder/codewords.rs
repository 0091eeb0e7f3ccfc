/// Codeword assembly: segment headers, terminator, padding, ECC and interleaving
use crate::encoder::bitstream::BitBuffer;
use crate::encoder::reed_solomon::cached_generator;
use crate::encoder::segment::Segment;
use crate::encoder::tables::{block_layout, num_data_codewords, total_codewords};
use crate::error::InvalidArgument;
use crate::models::{ECLevel, Version};

const PAD_BYTES: [u8; 2] = [0xEC, 0x11];

/// Pack segments into exactly `num_data_codewords(version, ec_level)` bytes.
///
/// # Panics
/// Panics if the segments do not fit; capacity is checked during version selection.
pub fn assemble_data(segments: &[Segment], version: Version, ec_level: ECLevel) -> Vec<u8> {
    let capacity = num_data_codewords(version, ec_level) * 8;
    let mut bb = BitBuffer::with_capacity(capacity);

    for seg in segments {
        bb.append_bits(seg.mode().mode_bits(), 4);
        let cc_bits = seg.mode().num_char_count_bits(version);
        let count = u32::try_from(seg.num_chars()).unwrap_or(u32::MAX);
        bb.append_bits(count, cc_bits);
        bb.append(seg.data());
    }
    assert!(bb.len() <= capacity, "segments exceed data capacity");

    // Terminator, then zero bits up to a byte boundary
    let terminator = (capacity - bb.len()).min(4);
    bb.append_bits(0, terminator as u8);
    let fill = (8 - bb.len() % 8) % 8;
    bb.append_bits(0, fill as u8);

    let mut data = bb.to_bytes();
    let pad_len = capacity / 8 - data.len();
    data.extend(PAD_BYTES.iter().cycle().take(pad_len));
    debug_assert_eq!(data.len() * 8, capacity);
    data
}

/// Split data codewords into blocks, append Reed-Solomon ECC to each and interleave.
///
/// # Panics
/// Panics if `data` is not exactly the data capacity of `version` at `ec_level`.
pub fn add_ecc_and_interleave(
    data: &[u8],
    version: Version,
    ec_level: ECLevel,
) -> Result<Vec<u8>, InvalidArgument> {
    assert_eq!(
        data.len(),
        num_data_codewords(version, ec_level),
        "data codeword count mismatch"
    );
    let layout = block_layout(version, ec_level);
    let generator = cached_generator(layout.ecc_per_block)?;

    let mut data_blocks: Vec<&[u8]> = Vec::with_capacity(layout.num_blocks);
    let mut ecc_blocks: Vec<Vec<u8>> = Vec::with_capacity(layout.num_blocks);
    let mut offset = 0;
    for block in 0..layout.num_blocks {
        let len = layout.data_len(block);
        let dat = &data[offset..offset + len];
        ecc_blocks.push(generator.remainder(dat)?);
        data_blocks.push(dat);
        offset += len;
    }

    log::trace!(
        "version {} {:?}: {} blocks ({} short of {} data), {} ecc each",
        version.number(),
        ec_level,
        layout.num_blocks,
        layout.num_short_blocks,
        layout.short_block_data_len,
        layout.ecc_per_block
    );

    let mut result = Vec::with_capacity(total_codewords(version));
    for i in 0..=layout.short_block_data_len {
        for (j, dat) in data_blocks.iter().enumerate() {
            // Short blocks have no codeword at the last data index
            if i != layout.short_block_data_len || j >= layout.num_short_blocks {
                result.push(dat[i]);
            }
        }
    }
    for i in 0..layout.ecc_per_block {
        for ecc in &ecc_blocks {
            result.push(ecc[i]);
        }
    }
    assert_eq!(result.len(), total_codewords(version));
    Ok(result)
}

/// Full codeword sequence for the segments, ready for placement
pub fn build_codewords(
    segments: &[Segment],
    version: Version,
    ec_level: ECLevel,
) -> Result<Vec<u8>, InvalidArgument> {
    let data = assemble_data(segments, version, ec_level);
    add_ecc_and_interleave(&data, version, ec_level)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(n: u8) -> Version {
        Version::new(n).unwrap()
    }

    #[test]
    fn test_hello_world_data_q() {
        let segs = Segment::make_segments("HELLO WORLD");
        let data = assemble_data(&segs, v(1), ECLevel::Q);
        assert_eq!(
            data,
            vec![32, 91, 11, 120, 209, 114, 220, 77, 67, 64, 236, 17, 236]
        );
    }

    #[test]
    fn test_hello_world_data_m() {
        let segs = Segment::make_segments("HELLO WORLD");
        let data = assemble_data(&segs, v(1), ECLevel::M);
        assert_eq!(
            data,
            vec![32, 91, 11, 120, 209, 114, 220, 77, 67, 64, 236, 17, 236, 17, 236, 17]
        );
    }

    #[test]
    fn test_hello_world_codewords_q() {
        let segs = Segment::make_segments("HELLO WORLD");
        let codewords = build_codewords(&segs, v(1), ECLevel::Q).unwrap();
        assert_eq!(codewords.len(), 26);
        assert_eq!(
            &codewords[..13],
            &[32, 91, 11, 120, 209, 114, 220, 77, 67, 64, 236, 17, 236]
        );
        assert_eq!(
            &codewords[13..],
            &[168, 72, 22, 82, 217, 54, 156, 0, 46, 15, 180, 122, 16]
        );
    }

    #[test]
    fn test_empty_is_all_padding() {
        let data = assemble_data(&[], v(1), ECLevel::H);
        assert_eq!(data, vec![0, 236, 17, 236, 17, 236, 17, 236, 17]);
    }

    #[test]
    fn test_terminator_truncated_at_capacity() {
        // 4 + 9 + 55 = 68 bits; v1-H holds 72, leaving room for the full terminator
        let segs = vec![Segment::make_alphanumeric("ABCDEFGHIJ").unwrap()];
        let data = assemble_data(&segs, v(1), ECLevel::H);
        assert_eq!(data.len(), 9);
        assert_eq!(data[8] & 0x0F, 0);

        // 4 + 10 + 57 = 71 bits leaves room for a single terminator bit
        let segs = vec![Segment::make_numeric("12345678901234567").unwrap()];
        assert_eq!(Segment::total_bits(&segs, v(1)), Some(71));
        assert_eq!(
            assemble_data(&segs, v(1), ECLevel::H),
            vec![16, 68, 123, 114, 49, 80, 49, 89, 134]
        );
    }

    #[test]
    fn test_interleave_5q() {
        // 5-Q: two blocks of 15 data codewords, two of 16, 18 ECC each
        let data: Vec<u8> = (0..62).collect();
        let out = add_ecc_and_interleave(&data, v(5), ECLevel::Q).unwrap();
        assert_eq!(out.len(), 134);
        assert_eq!(&out[..8], &[0, 15, 30, 46, 1, 16, 31, 47]);
        // Final data round only visits the two long blocks
        assert_eq!(&out[56..62], &[14, 29, 44, 60, 45, 61]);

        let generator = cached_generator(18).unwrap();
        let ecc0 = generator.remainder(&data[..15]).unwrap();
        let ecc3 = generator.remainder(&data[46..]).unwrap();
        assert_eq!(out[62], ecc0[0]);
        assert_eq!(out[65], ecc3[0]);
        assert_eq!(out[133], ecc3[17]);
    }

    #[test]
    #[should_panic(expected = "data codeword count mismatch")]
    fn test_interleave_wrong_length() {
        let _ = add_ecc_and_interleave(&[0u8; 10], v(1), ECLevel::Q);
    }
}
