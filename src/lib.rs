//! RustQR encoder - QR Code symbol generation
//!
//! A pure Rust QR code encoder producing standards-compliant Model 2 symbols
//! (versions 1-40, all four error correction levels) as a module grid ready
//! for any renderer.
//!
//! ```
//! use rust_qr_encoder::{encode_text, ECLevel};
//!
//! let qr = encode_text("HELLO WORLD", ECLevel::Q)?;
//! assert_eq!(qr.version().number(), 1);
//! assert_eq!(qr.size(), 21);
//! assert!(qr.is_dark(0, 0));
//! # Ok::<(), rust_qr_encoder::EncodeError>(())
//! ```
//!
//! The grid does not include the quiet zone; renderers add it themselves.

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// QR code encoding modules (segments, error correction, placement, masking)
pub mod encoder;
/// Error types returned by the encoder
pub mod error;
/// Core data structures (QRCode, BitMatrix, Version, etc.)
pub mod models;

pub use encoder::segment::{Segment, SegmentMode};
pub use error::{DataTooLong, EncodeError, InvalidArgument};
pub use models::{BitMatrix, ECLevel, MaskPattern, QRCode, Version};

use encoder::builder::MatrixBuilder;
use encoder::capacity::select_version;
use encoder::codewords::build_codewords;

/// Payload handed to [`encode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input<'a> {
    /// Text, encoded in the most compact single mode (numeric, alphanumeric or UTF-8 bytes)
    Text(&'a str),
    /// Raw bytes, always byte mode
    Bytes(&'a [u8]),
}

impl<'a> From<&'a str> for Input<'a> {
    fn from(text: &'a str) -> Self {
        Input::Text(text)
    }
}

impl<'a> From<&'a String> for Input<'a> {
    fn from(text: &'a String) -> Self {
        Input::Text(text)
    }
}

impl<'a> From<&'a [u8]> for Input<'a> {
    fn from(data: &'a [u8]) -> Self {
        Input::Bytes(data)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Input<'a> {
    fn from(data: &'a [u8; N]) -> Self {
        Input::Bytes(data)
    }
}

/// Encode text or bytes at the given error correction level
///
/// Uses the smallest fitting version (1-40) and the lowest-penalty mask.
pub fn encode<'a>(input: impl Into<Input<'a>>, ec_level: ECLevel) -> Result<QRCode, EncodeError> {
    Encoder::new(ec_level).encode(input)
}

/// Encode text in the most compact single mode
pub fn encode_text(text: &str, ec_level: ECLevel) -> Result<QRCode, EncodeError> {
    Encoder::new(ec_level).encode_text(text)
}

/// Encode binary data in byte mode
pub fn encode_binary(data: &[u8], ec_level: ECLevel) -> Result<QRCode, EncodeError> {
    Encoder::new(ec_level).encode_binary(data)
}

/// Encode pre-built segments, concatenated in order
pub fn encode_segments(segments: &[Segment], ec_level: ECLevel) -> Result<QRCode, EncodeError> {
    Encoder::new(ec_level).encode_segments(segments)
}

/// Encoder with configuration options
///
/// ```
/// use rust_qr_encoder::{ECLevel, Encoder, MaskPattern, Version};
///
/// let qr = Encoder::new(ECLevel::M)
///     .with_versions(Version::new(5)?, Version::MAX)
///     .with_mask(MaskPattern::Pattern2)
///     .encode_text("01234567")?;
/// assert_eq!(qr.version().number(), 5);
/// assert_eq!(qr.mask_pattern(), MaskPattern::Pattern2);
/// # Ok::<(), rust_qr_encoder::EncodeError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Encoder {
    ec_level: ECLevel,
    min_version: Version,
    max_version: Version,
    /// Fixed mask, or `None` for automatic selection
    mask: Option<MaskPattern>,
    boost_ecl: bool,
}

impl Encoder {
    /// Create an encoder allowing every version, with automatic mask selection
    ///
    /// The error correction level is kept exactly as given; enable
    /// [`with_boost_ecl`](Self::with_boost_ecl) to raise it when the chosen
    /// version has spare room.
    pub fn new(ec_level: ECLevel) -> Self {
        Self {
            ec_level,
            min_version: Version::MIN,
            max_version: Version::MAX,
            mask: None,
            boost_ecl: false,
        }
    }

    /// Restrict the version search to `min..=max`
    ///
    /// An inverted range is reported by the encode methods.
    pub fn with_versions(mut self, min: Version, max: Version) -> Self {
        self.min_version = min;
        self.max_version = max;
        self
    }

    /// Always use this mask instead of picking the lowest-penalty one
    pub fn with_mask(mut self, mask: MaskPattern) -> Self {
        self.mask = Some(mask);
        self
    }

    /// Raise the error correction level when the chosen version has room for it
    pub fn with_boost_ecl(mut self, boost_ecl: bool) -> Self {
        self.boost_ecl = boost_ecl;
        self
    }

    /// Encode text or bytes
    pub fn encode<'a>(&self, input: impl Into<Input<'a>>) -> Result<QRCode, EncodeError> {
        match input.into() {
            Input::Text(text) => self.encode_text(text),
            Input::Bytes(data) => self.encode_binary(data),
        }
    }

    /// Encode text in the most compact single mode
    pub fn encode_text(&self, text: &str) -> Result<QRCode, EncodeError> {
        self.encode_segments(&Segment::make_segments(text))
    }

    /// Encode text split into the cheapest mix of numeric, alphanumeric and
    /// byte segments
    pub fn encode_text_optimally(&self, text: &str) -> Result<QRCode, EncodeError> {
        let segments = Segment::make_segments_optimally(
            text,
            self.ec_level,
            self.min_version,
            self.max_version,
        )?;
        self.encode_segments(&segments)
    }

    /// Encode binary data in byte mode
    pub fn encode_binary(&self, data: &[u8]) -> Result<QRCode, EncodeError> {
        self.encode_segments(&[Segment::make_bytes(data)])
    }

    /// Encode pre-built segments, concatenated in order
    pub fn encode_segments(&self, segments: &[Segment]) -> Result<QRCode, EncodeError> {
        if self.min_version > self.max_version {
            return Err(InvalidArgument::VersionRange {
                min: self.min_version.number(),
                max: self.max_version.number(),
            }
            .into());
        }

        let fit = select_version(
            segments,
            self.ec_level,
            self.min_version,
            self.max_version,
            self.boost_ecl,
        )?;
        let codewords = build_codewords(segments, fit.version, fit.ec_level)?;
        Ok(MatrixBuilder::new(fit.version, fit.ec_level, &codewords).build(self.mask))
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new(ECLevel::M)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_empty() {
        let qr = encode("", ECLevel::H).unwrap();
        assert_eq!(qr.version(), Version::MIN);
        assert_eq!(qr.size(), 21);

        let qr = Encoder::new(ECLevel::L)
            .with_versions(Version::new(3).unwrap(), Version::MAX)
            .encode_binary(&[])
            .unwrap();
        assert_eq!(qr.version().number(), 3);
    }

    #[test]
    fn test_input_dispatch() {
        // Numeric text and the same digits as bytes take different modes
        let text = encode("0123456789", ECLevel::M).unwrap();
        let bytes = encode(b"0123456789", ECLevel::M).unwrap();
        assert_eq!(text.version().number(), 1);
        assert_eq!(bytes.version().number(), 1);
        assert_ne!(text.modules(), bytes.modules());

        let owned = String::from("0123456789");
        assert_eq!(encode(&owned, ECLevel::M).unwrap(), text);
        assert_eq!(encode_binary(b"0123456789", ECLevel::M).unwrap(), bytes);
    }

    #[test]
    fn test_inverted_version_range() {
        let err = Encoder::new(ECLevel::M)
            .with_versions(Version::new(10).unwrap(), Version::new(2).unwrap())
            .encode_text("HELLO")
            .unwrap_err();
        assert_eq!(
            err,
            EncodeError::InvalidArgument(InvalidArgument::VersionRange { min: 10, max: 2 })
        );
    }

    #[test]
    fn test_boost_ecl() {
        let plain = Encoder::new(ECLevel::L).encode_text("01234567").unwrap();
        assert_eq!(plain.error_correction(), ECLevel::L);

        let boosted = Encoder::new(ECLevel::L)
            .with_boost_ecl(true)
            .encode_text("01234567")
            .unwrap();
        assert_eq!(boosted.version().number(), 1);
        assert_eq!(boosted.error_correction(), ECLevel::H);
    }

    #[test]
    fn test_ec_level_kept_by_default() {
        for ec_level in ECLevel::ALL {
            let qr = Encoder::new(ec_level).encode_text("01234567").unwrap();
            assert_eq!(qr.version().number(), 1);
            assert_eq!(qr.error_correction(), ec_level);
        }
    }

    #[test]
    fn test_encode_text_optimally() {
        let text = format!("{}hello world", "1234567890".repeat(5));
        let single = Encoder::new(ECLevel::M).encode_text(&text).unwrap();
        let mixed = Encoder::new(ECLevel::M).encode_text_optimally(&text).unwrap();
        assert_eq!(single.version().number(), 4);
        assert_eq!(mixed.version().number(), 3);

        let err = Encoder::new(ECLevel::M)
            .with_versions(Version::MIN, Version::new(2).unwrap())
            .encode_text_optimally(&text)
            .unwrap_err();
        assert!(err.is_data_too_long());
    }

    #[test]
    fn test_encode_segments_mixed() {
        let segs = vec![
            Segment::make_eci(26).unwrap(),
            Segment::make_alphanumeric("PAY ").unwrap(),
            Segment::make_numeric("0123456789").unwrap(),
        ];
        let qr = encode_segments(&segs, ECLevel::M).unwrap();
        assert_eq!(qr.version().number(), 1);
        assert_eq!(encode_segments(&segs, ECLevel::M).unwrap(), qr);
    }

    #[test]
    fn test_default_encoder() {
        let qr = Encoder::default().encode("Hello, world!").unwrap();
        assert_eq!(qr.error_correction(), ECLevel::M);
        assert_eq!(qr.version().number(), 1);
        assert_eq!(qr.mask_pattern(), MaskPattern::Pattern2);
    }
}
