//! QR code encoding modules
//!
//! This module contains all the logic for turning payload data into a symbol:
//! - Segment encoding (numeric, alphanumeric, byte, kanji, ECI)
//! - Version selection and codeword assembly
//! - Error correction (Reed-Solomon, BCH)
//! - Function patterns, data placement, masking and penalty scoring

/// BCH codes for format and version info
pub mod bch;
/// Bit buffer used for segment payloads and data codewords
pub mod bitstream;
/// Matrix builder that orchestrates placement and mask selection
pub mod builder;
/// Version selection against the capacity tables
pub mod capacity;
/// Data codeword assembly, ECC and interleaving
pub mod codewords;
/// Environment-driven encoder settings
pub mod config;
/// Format information placement (mask pattern, EC level)
pub mod format;
/// Function module mask builder (finder/timing/format/alignment/version)
pub mod function_mask;
/// QR code masking
pub mod mask;
/// Data mode encoders (numeric, alphanumeric, byte, kanji, ECI)
pub mod modes;
/// Mixed-mode segmentation by dynamic programming
pub mod optimize;
/// Mask penalty rules
pub mod penalty;
/// Zigzag codeword placement
pub mod placement;
/// Reed-Solomon error correction and GF(256) arithmetic
pub mod reed_solomon;
/// Typed data segments
pub mod segment;
/// QR specification tables (ECC codewords/blocks)
pub mod tables;
/// Version information placement (versions 7-40)
pub mod version;
