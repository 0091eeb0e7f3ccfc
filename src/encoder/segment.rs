/// Typed data segments and the automatic single-mode policy
use crate::encoder::bitstream::BitBuffer;
use crate::encoder::capacity::capacity_bits;
use crate::encoder::modes::{
    alphanumeric::AlphanumericEncoder, byte::ByteEncoder, eci::EciEncoder, kanji::KanjiEncoder,
    numeric::NumericEncoder,
};
use crate::encoder::optimize::optimal_modes;
use crate::error::{DataTooLong, EncodeError, InvalidArgument};
use crate::models::{ECLevel, Version};

/// Data mode of a segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentMode {
    /// Digits 0-9
    Numeric,
    /// 0-9, A-Z, space and `$%*+-./:`
    Alphanumeric,
    /// Arbitrary 8-bit data
    Byte,
    /// Double-byte Shift JIS
    Kanji,
    /// Extended Channel Interpretation designator
    Eci,
}

impl SegmentMode {
    /// Four-bit mode indicator
    pub fn mode_bits(&self) -> u32 {
        match self {
            SegmentMode::Numeric => 0x1,
            SegmentMode::Alphanumeric => 0x2,
            SegmentMode::Byte => 0x4,
            SegmentMode::Kanji => 0x8,
            SegmentMode::Eci => 0x7,
        }
    }

    /// Width of the character count field at the given version
    pub fn num_char_count_bits(&self, version: Version) -> u8 {
        let widths: [u8; 3] = match self {
            SegmentMode::Numeric => [10, 12, 14],
            SegmentMode::Alphanumeric => [9, 11, 13],
            SegmentMode::Byte => [8, 16, 16],
            SegmentMode::Kanji => [8, 10, 12],
            SegmentMode::Eci => [0, 0, 0],
        };
        // Versions 1-9, 10-26, 27-40
        widths[(usize::from(version.number()) + 7) / 17]
    }
}

/// An immutable run of data in one mode
///
/// The payload excludes the mode indicator and the character count; those are
/// written at assembly time since the count width depends on the version.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Segment {
    mode: SegmentMode,
    num_chars: usize,
    data: BitBuffer,
}

impl Segment {
    /// Build a segment from raw parts
    pub fn new(mode: SegmentMode, num_chars: usize, data: BitBuffer) -> Self {
        Self {
            mode,
            num_chars,
            data,
        }
    }

    /// Data mode of this segment
    pub fn mode(&self) -> SegmentMode {
        self.mode
    }

    /// Character count written in the header (bytes for byte mode, 0 for ECI)
    pub fn num_chars(&self) -> usize {
        self.num_chars
    }

    /// Payload bits, without mode indicator or character count
    pub fn data(&self) -> &BitBuffer {
        &self.data
    }

    /// Byte-mode segment holding `data` verbatim
    pub fn make_bytes(data: &[u8]) -> Self {
        let mut bb = BitBuffer::with_capacity(ByteEncoder::bit_length(data.len()));
        let num_chars = ByteEncoder::encode(data, &mut bb);
        Self::new(SegmentMode::Byte, num_chars, bb)
    }

    /// Numeric-mode segment; fails on any non-digit
    pub fn make_numeric(text: &str) -> Result<Self, InvalidArgument> {
        let mut bb = BitBuffer::with_capacity(NumericEncoder::bit_length(text.len()));
        let num_chars = NumericEncoder::encode(text, &mut bb)?;
        Ok(Self::new(SegmentMode::Numeric, num_chars, bb))
    }

    /// Alphanumeric-mode segment; fails on characters outside the set
    pub fn make_alphanumeric(text: &str) -> Result<Self, InvalidArgument> {
        let mut bb = BitBuffer::with_capacity(AlphanumericEncoder::bit_length(text.len()));
        let num_chars = AlphanumericEncoder::encode(text, &mut bb)?;
        Ok(Self::new(SegmentMode::Alphanumeric, num_chars, bb))
    }

    /// Kanji-mode segment from double-byte Shift JIS bytes
    pub fn make_kanji(sjis: &[u8]) -> Result<Self, InvalidArgument> {
        let mut bb = BitBuffer::with_capacity(KanjiEncoder::bit_length(sjis.len() / 2));
        let num_chars = KanjiEncoder::encode(sjis, &mut bb)?;
        Ok(Self::new(SegmentMode::Kanji, num_chars, bb))
    }

    /// ECI designator segment for the given assignment value
    pub fn make_eci(assign_val: u32) -> Result<Self, InvalidArgument> {
        let mut bb = BitBuffer::with_capacity(24);
        EciEncoder::encode(assign_val, &mut bb)?;
        Ok(Self::new(SegmentMode::Eci, 0, bb))
    }

    /// Encode text as a single segment in the most compact of numeric,
    /// alphanumeric and byte (UTF-8) modes. Empty text yields no segments.
    pub fn make_segments(text: &str) -> Vec<Segment> {
        if text.is_empty() {
            return Vec::new();
        }
        let segment = Self::make_numeric(text)
            .or_else(|_| Self::make_alphanumeric(text))
            .unwrap_or_else(|_| Self::make_bytes(text.as_bytes()));
        vec![segment]
    }

    /// Split text into numeric, alphanumeric and byte runs that together take
    /// the fewest bits, at the smallest version in `min..=max` that holds them.
    ///
    /// Kanji mode is never chosen here; build Shift JIS segments with
    /// [`make_kanji`](Self::make_kanji) instead.
    pub fn make_segments_optimally(
        text: &str,
        ec_level: ECLevel,
        min: Version,
        max: Version,
    ) -> Result<Vec<Segment>, EncodeError> {
        if min > max {
            return Err(InvalidArgument::VersionRange {
                min: min.number(),
                max: max.number(),
            }
            .into());
        }

        let chars: Vec<char> = text.chars().collect();
        let mut segments = Vec::new();
        let mut overflow = DataTooLong::SegmentTooLong;
        for version in min.up_to(max) {
            // Count field widths only change at versions 10 and 27
            if version == min || matches!(version.number(), 10 | 27) {
                segments = Self::split_runs(&chars, &optimal_modes(&chars, version))?;
            }
            let capacity = capacity_bits(version, ec_level);
            match Self::total_bits(&segments, version) {
                Some(bits) if bits <= capacity => {
                    log::debug!(
                        "optimal segmentation: {} segments, {} bits at version {}",
                        segments.len(),
                        bits,
                        version.number()
                    );
                    return Ok(segments);
                }
                Some(required_bits) => {
                    overflow = DataTooLong::DataOverCapacity {
                        required_bits,
                        capacity_bits: capacity,
                    }
                }
                None => overflow = DataTooLong::SegmentTooLong,
            }
        }
        Err(overflow.into())
    }

    /// One segment per run of equal modes
    fn split_runs(chars: &[char], modes: &[SegmentMode]) -> Result<Vec<Segment>, InvalidArgument> {
        let mut segments = Vec::new();
        let mut start = 0;
        for end in 1..=chars.len() {
            if end < chars.len() && modes[end] == modes[start] {
                continue;
            }
            let run: String = chars[start..end].iter().collect();
            segments.push(match modes[start] {
                SegmentMode::Numeric => Self::make_numeric(&run)?,
                SegmentMode::Alphanumeric => Self::make_alphanumeric(&run)?,
                _ => Self::make_bytes(run.as_bytes()),
            });
            start = end;
        }
        Ok(segments)
    }

    /// True if `text` holds only digits
    pub fn is_numeric(text: &str) -> bool {
        NumericEncoder::is_encodable(text)
    }

    /// True if `text` fits the alphanumeric character set
    pub fn is_alphanumeric(text: &str) -> bool {
        AlphanumericEncoder::is_encodable(text)
    }

    /// Bits needed by `segments` at `version`, headers included.
    ///
    /// Returns `None` if a character count overflows its length field.
    pub fn total_bits(segments: &[Segment], version: Version) -> Option<usize> {
        segments.iter().try_fold(0usize, |acc, seg| {
            let cc_bits = seg.mode.num_char_count_bits(version);
            if cc_bits < usize::BITS as u8 && seg.num_chars >= 1usize << cc_bits {
                return None;
            }
            acc.checked_add(4 + usize::from(cc_bits) + seg.data.len())
        })
    }
}
