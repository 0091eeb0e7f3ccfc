/// Packed module grid
pub mod matrix;
/// Symbol, version, level and mask types
pub mod qr_code;

pub use matrix::BitMatrix;
pub use qr_code::{ECLevel, MaskPattern, QRCode, Version};
