use super::ModuleGrid;
use crate::error::{QrError, Result};

/// QR code version, restricted to the byte-mode range 1-4
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version(u8);

impl Version {
    /// Smallest supported version
    pub const MIN: Version = Version(1);
    /// Largest supported version
    pub const MAX: Version = Version(4);

    /// Validate a version number
    pub fn new(number: u8) -> Result<Self> {
        if (Self::MIN.0..=Self::MAX.0).contains(&number) {
            Ok(Version(number))
        } else {
            Err(QrError::UnsupportedVersion(number))
        }
    }

    /// Get the version number
    pub fn number(&self) -> u8 {
        self.0
    }

    /// Get the size in modules (width = height)
    pub fn size(&self) -> usize {
        4 * self.0 as usize + 17
    }

    /// Every supported version in ascending order
    pub fn all() -> impl Iterator<Item = Version> {
        (Self::MIN.0..=Self::MAX.0).map(Version)
    }
}

impl TryFrom<u8> for Version {
    type Error = QrError;

    fn try_from(number: u8) -> Result<Self> {
        Version::new(number)
    }
}

/// Error correction level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
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
    /// Get error correction level from format bits (01=L, 00=M, 11=Q, 10=H)
    pub fn from_format_bits(bits: u8) -> Option<Self> {
        match bits & 0x03 {
            0b01 => Some(ECLevel::L),
            0b00 => Some(ECLevel::M),
            0b11 => Some(ECLevel::Q),
            0b10 => Some(ECLevel::H),
            _ => None,
        }
    }

    /// The two bits this level contributes to the format information
    pub fn format_bits(&self) -> u8 {
        match self {
            ECLevel::L => 0b01,
            ECLevel::M => 0b00,
            ECLevel::Q => 0b11,
            ECLevel::H => 0b10,
        }
    }
}

/// Mask pattern (0-7). Conditions are written in (col, row).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaskPattern {
    /// (col + row) % 2 == 0
    Pattern0 = 0,
    /// row % 2 == 0
    Pattern1 = 1,
    /// col % 3 == 0
    Pattern2 = 2,
    /// (col + row) % 3 == 0
    Pattern3 = 3,
    /// (row/2 + col/3) % 2 == 0
    Pattern4 = 4,
    /// (col*row)%2 + (col*row)%3 == 0
    Pattern5 = 5,
    /// ((col*row)%2 + (col*row)%3) % 2 == 0
    Pattern6 = 6,
    /// ((col+row)%2 + (col*row)%3) % 2 == 0
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

    /// Get mask pattern from its id; anything above 7 is not a mask
    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.get(id as usize).copied()
    }

    /// Numeric id (0-7)
    pub fn id(&self) -> u8 {
        *self as u8
    }

    /// Check if the module at (col, row) is inverted by this mask
    pub fn is_masked(&self, col: usize, row: usize) -> bool {
        match self {
            MaskPattern::Pattern0 => (col + row) % 2 == 0,
            MaskPattern::Pattern1 => row % 2 == 0,
            MaskPattern::Pattern2 => col % 3 == 0,
            MaskPattern::Pattern3 => (col + row) % 3 == 0,
            MaskPattern::Pattern4 => (row / 2 + col / 3) % 2 == 0,
            MaskPattern::Pattern5 => ((col * row) % 2 + (col * row) % 3) == 0,
            MaskPattern::Pattern6 => (((col * row) % 2) + ((col * row) % 3)) % 2 == 0,
            MaskPattern::Pattern7 => (((col + row) % 2) + ((col * row) % 3)) % 2 == 0,
        }
    }
}

/// A finished QR symbol
#[derive(Debug, Clone)]
pub struct QrSymbol {
    /// QR code version
    pub version: Version,
    /// Error correction level
    pub error_correction: ECLevel,
    /// Mask applied to the data modules (None = unmasked)
    pub mask_pattern: Option<MaskPattern>,
    /// Module grid, fully populated
    pub modules: ModuleGrid,
    /// Penalty score of the grid (lower is better)
    pub penalty: u32,
}
