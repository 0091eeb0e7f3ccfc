//! Error types for QR code encoding

use thiserror::Error;

/// The supplied data does not fit in any allowed QR code version.
///
/// Ways to handle this error include:
/// - Decrease the error correction level (if it was greater than [`ECLevel::L`](crate::ECLevel::L))
/// - Increase the maximum version (if it was less than [`Version::MAX`](crate::Version::MAX))
/// - Split the text into segments that use more compact modes
/// - Make the text or binary data shorter
/// - Reject the data and notify the caller
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DataTooLong {
    /// A segment's character count does not fit its length field.
    #[error("segment too long")]
    SegmentTooLong,
    /// The encoded bit stream exceeds the largest allowed capacity.
    #[error("data length = {required_bits} bits, max capacity = {capacity_bits} bits")]
    DataOverCapacity {
        /// Bits needed by all segments, including headers.
        required_bits: usize,
        /// Data capacity of the largest allowed version at the requested level.
        capacity_bits: usize,
    },
}

/// A malformed argument handed to an encoder component.
///
/// These indicate a bug in the calling code rather than bad user data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidArgument {
    /// Generator degree outside [1, 255].
    #[error("Reed-Solomon degree {0} out of range [1, 255]")]
    DegreeOutOfRange(usize),
    /// No data codewords given to the remainder computation.
    #[error("Reed-Solomon input data is empty")]
    EmptyData,
    /// Version number outside [1, 40].
    #[error("version number {0} out of range [1, 40]")]
    VersionOutOfRange(u8),
    /// Lower version bound above the upper bound.
    #[error("min version {min} is greater than max version {max}")]
    VersionRange {
        /// Requested lower bound.
        min: u8,
        /// Requested upper bound.
        max: u8,
    },
    /// Mask number outside [0, 7].
    #[error("mask pattern {0} out of range [0, 7]")]
    MaskOutOfRange(u8),
    /// Text handed to the numeric constructor contains a non-digit.
    #[error("string contains non-numeric characters")]
    NonNumeric,
    /// Text handed to the alphanumeric constructor has a character outside the set.
    #[error("string contains characters outside the alphanumeric set")]
    NonAlphanumeric,
    /// ECI assignment value of 1 000 000 or more.
    #[error("ECI assignment value {0} out of range")]
    EciOutOfRange(u32),
    /// Bytes that are not double-byte Shift JIS kanji.
    #[error("invalid Shift JIS sequence for kanji mode")]
    InvalidKanji,
}

/// Error returned by the public encode functions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// Payload too large for the allowed versions.
    #[error(transparent)]
    DataTooLong(#[from] DataTooLong),
    /// Contract violation in the arguments.
    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgument),
}

impl EncodeError {
    /// True when the payload exceeded the allowed capacity.
    pub fn is_data_too_long(&self) -> bool {
        matches!(self, EncodeError::DataTooLong(_))
    }
}
