//! QR code data mode encoders
//!
//! This module contains encoders for the different QR data modes:
//! - Numeric: Efficient encoding for digits (0-9)
//! - Alphanumeric: Uppercase letters, digits, and nine symbols
//! - Byte: 8-bit data (UTF-8, binary, etc.)
//! - Kanji: Double-byte Shift JIS characters
//! - ECI: Extended Channel Interpretation designators

/// Alphanumeric mode
pub mod alphanumeric;
/// Byte mode
pub mod byte;
/// ECI designators
pub mod eci;
/// Kanji mode
pub mod kanji;
/// Numeric mode
pub mod numeric;
