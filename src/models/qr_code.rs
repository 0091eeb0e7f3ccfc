use super::BitMatrix;
use crate::error::InvalidArgument;

/// QR Code version (1-40, Model 2)
///
/// The version fixes the side length of the symbol (`4 * version + 17` modules)
/// and, together with the [`ECLevel`], its capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version(u8);

impl Version {
    /// Smallest version in the Model 2 standard
    pub const MIN: Version = Version(1);
    /// Largest version in the Model 2 standard
    pub const MAX: Version = Version(40);

    /// Create a version from its number
    pub fn new(number: u8) -> Result<Self, InvalidArgument> {
        if (Self::MIN.0..=Self::MAX.0).contains(&number) {
            Ok(Self(number))
        } else {
            Err(InvalidArgument::VersionOutOfRange(number))
        }
    }

    /// Get the version number (1-40)
    pub fn number(&self) -> u8 {
        self.0
    }

    /// Get the size in modules (width = height)
    pub fn size(&self) -> usize {
        4 * (self.0 as usize) + 17
    }

    /// The next larger version, if any
    pub(crate) fn next(self) -> Option<Self> {
        (self < Self::MAX).then(|| Self(self.0 + 1))
    }

    /// Iterate all versions from `self` to `last` inclusive
    pub fn up_to(self, last: Version) -> impl Iterator<Item = Version> {
        (self.0..=last.0).map(Version)
    }
}

impl TryFrom<u8> for Version {
    type Error = InvalidArgument;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Self::new(number)
    }
}

/// Error correction level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ECLevel {
    /// Low (~7% recovery capacity)
    L = 0,
    /// Medium (~15% recovery capacity)
    M = 1,
    /// Quartile (~25% recovery capacity)
    Q = 2,
    /// High (~30% recovery capacity)
    H = 3,
}

impl ECLevel {
    /// All levels, from least to most redundant
    pub const ALL: [ECLevel; 4] = [ECLevel::L, ECLevel::M, ECLevel::Q, ECLevel::H];

    /// Row index into the per-level capacity tables
    pub fn ordinal(&self) -> usize {
        *self as usize
    }

    /// Two-bit indicator written into the format information (L=01, M=00, Q=11, H=10)
    pub fn format_bits(&self) -> u8 {
        match self {
            ECLevel::L => 0b01,
            ECLevel::M => 0b00,
            ECLevel::Q => 0b11,
            ECLevel::H => 0b10,
        }
    }
}

/// Mask pattern (0-7)
///
/// `i` is the row and `j` the column of a module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MaskPattern {
    /// (i + j) % 2 == 0
    Pattern0 = 0,
    /// i % 2 == 0
    Pattern1 = 1,
    /// j % 3 == 0
    Pattern2 = 2,
    /// (i + j) % 3 == 0
    Pattern3 = 3,
    /// (i/2 + j/3) % 2 == 0
    Pattern4 = 4,
    /// (i*j)%2 + (i*j)%3 == 0
    Pattern5 = 5,
    /// ((i*j)%2 + (i*j)%3) % 2 == 0
    Pattern6 = 6,
    /// ((i+j)%2 + (i*j)%3) % 2 == 0
    Pattern7 = 7,
}

impl MaskPattern {
    /// All eight patterns in ascending id order
    pub const ALL: [MaskPattern; 8] = [
        MaskPattern::Pattern0,
        MaskPattern::Pattern1,
        MaskPattern::Pattern2,
        MaskPattern::Pattern3,
        MaskPattern::Pattern4,
        MaskPattern::Pattern5,
        MaskPattern::Pattern6,
        MaskPattern::Pattern7,
    ];

    /// Get mask pattern from its three-bit id
    pub fn from_bits(bits: u8) -> Option<Self> {
        Self::ALL.get(bits as usize).copied()
    }

    /// The pattern id (0-7)
    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// Check if module at (i, j) should be masked
    pub fn is_masked(&self, i: usize, j: usize) -> bool {
        match self {
            MaskPattern::Pattern0 => (i + j) % 2 == 0,
            MaskPattern::Pattern1 => i % 2 == 0,
            MaskPattern::Pattern2 => j % 3 == 0,
            MaskPattern::Pattern3 => (i + j) % 3 == 0,
            MaskPattern::Pattern4 => (i / 2 + j / 3) % 2 == 0,
            MaskPattern::Pattern5 => ((i * j) % 2 + (i * j) % 3) == 0,
            MaskPattern::Pattern6 => (((i * j) % 2) + ((i * j) % 3)) % 2 == 0,
            MaskPattern::Pattern7 => (((i + j) % 2) + ((i * j) % 3)) % 2 == 0,
        }
    }
}

impl TryFrom<u8> for MaskPattern {
    type Error = InvalidArgument;

    fn try_from(bits: u8) -> Result<Self, Self::Error> {
        Self::from_bits(bits).ok_or(InvalidArgument::MaskOutOfRange(bits))
    }
}

/// An encoded QR code symbol
///
/// Immutable once built. Renderers are expected to add a quiet zone of
/// (conventionally) four light modules around the grid themselves.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QRCode {
    version: Version,
    error_correction: ECLevel,
    mask_pattern: MaskPattern,
    modules: BitMatrix,
}

impl QRCode {
    pub(crate) fn new(
        version: Version,
        error_correction: ECLevel,
        mask_pattern: MaskPattern,
        modules: BitMatrix,
    ) -> Self {
        assert_eq!(modules.width(), version.size());
        assert_eq!(modules.height(), version.size());
        Self {
            version,
            error_correction,
            mask_pattern,
            modules,
        }
    }

    /// QR code version
    pub fn version(&self) -> Version {
        self.version
    }

    /// Error correction level
    pub fn error_correction(&self) -> ECLevel {
        self.error_correction
    }

    /// Mask pattern used
    pub fn mask_pattern(&self) -> MaskPattern {
        self.mask_pattern
    }

    /// Side length in modules, `4 * version + 17`
    pub fn size(&self) -> usize {
        self.version.size()
    }

    /// Whether the module at (row, col) is dark
    ///
    /// # Panics
    /// Panics if `row` or `col` is not less than [`size`](Self::size).
    pub fn is_dark(&self, row: usize, col: usize) -> bool {
        let size = self.size();
        assert!(
            row < size && col < size,
            "module ({row}, {col}) outside {size}x{size} symbol"
        );
        self.modules.get(col, row)
    }

    /// Module at column `x`, row `y`; anything outside the grid reads as light
    pub fn get_module(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && self.modules.get(x as usize, y as usize)
    }

    /// Module matrix (true = dark, false = light)
    pub fn modules(&self) -> &BitMatrix {
        &self.modules
    }

    /// Copy of the module grid, row-major
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        let size = self.size();
        (0..size)
            .map(|y| (0..size).map(|x| self.modules.get(x, y)).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_size() {
        assert_eq!(Version::new(1).unwrap().size(), 21);
        assert_eq!(Version::new(2).unwrap().size(), 25);
        assert_eq!(Version::new(40).unwrap().size(), 177);
    }

    #[test]
    fn test_version_range() {
        assert_eq!(Version::new(0), Err(InvalidArgument::VersionOutOfRange(0)));
        assert_eq!(Version::try_from(41), Err(InvalidArgument::VersionOutOfRange(41)));
        assert_eq!(Version::MAX.next(), None);
        assert_eq!(Version::MIN.next(), Some(Version(2)));
        assert_eq!(Version::MIN.up_to(Version::MAX).count(), 40);
    }

    #[test]
    fn test_ec_level() {
        assert_eq!(ECLevel::L.format_bits(), 0b01);
        assert_eq!(ECLevel::M.format_bits(), 0b00);
        assert_eq!(ECLevel::Q.format_bits(), 0b11);
        assert_eq!(ECLevel::H.format_bits(), 0b10);
        assert_eq!(ECLevel::H.ordinal(), 3);
    }

    #[test]
    fn test_mask_pattern() {
        let mask = MaskPattern::Pattern0;
        assert!(mask.is_masked(0, 0));
        assert!(!mask.is_masked(0, 1));
        assert!(mask.is_masked(1, 1));

        assert_eq!(MaskPattern::from_bits(5), Some(MaskPattern::Pattern5));
        assert_eq!(MaskPattern::from_bits(8), None);
        assert_eq!(MaskPattern::try_from(8), Err(InvalidArgument::MaskOutOfRange(8)));
        assert!(MaskPattern::ALL.iter().enumerate().all(|(i, m)| m.value() as usize == i));
    }

    #[test]
    fn test_qr_code_accessors() {
        let version = Version::new(1).unwrap();
        let mut modules = BitMatrix::square(21);
        modules.set(3, 1, true);
        let qr = QRCode::new(version, ECLevel::M, MaskPattern::Pattern2, modules);
        assert_eq!(qr.size(), 21);
        assert!(qr.is_dark(1, 3));
        assert!(!qr.is_dark(3, 1));
        assert!(qr.get_module(3, 1));
        assert!(!qr.get_module(-1, 0));
        assert!(!qr.get_module(21, 0));
        assert!(qr.to_rows()[1][3]);
    }
}
