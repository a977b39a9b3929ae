//! QR Forge - byte-mode QR code generation
//!
//! A pure Rust encoder for single-symbol byte-mode QR codes, versions 1-4 at
//! error correction level L. The pipeline has two halves:
//! - [`encoder`]: text to a padded, Reed-Solomon protected bit sequence
//! - [`matrix`]: function patterns, zigzag data placement, masking and
//!   penalty-driven mask selection
//!
//! # Example
//! ```
//! use qr_forge::QrEncoder;
//!
//! let symbol = QrEncoder::new().version(1).encode("0xYolo").unwrap();
//! assert_eq!(symbol.modules.size(), 21);
//! ```

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Environment-driven defaults
pub mod config;
/// Data encoding pipeline (byte codec, header, padding, ECC, bits)
pub mod encoder;
/// Error type shared by both pipelines
#[allow(missing_docs)]
pub mod error;
/// Format information words (BCH(15,5))
#[allow(missing_docs)]
pub mod format;
/// Matrix construction pipeline (patterns, placement, masking, penalty)
pub mod matrix;
/// Core data structures (ModuleGrid, Version, MaskPattern, etc.)
#[allow(missing_docs)]
pub mod models;
/// Bitmap output
pub mod render;
/// Per-version capacity constants
pub mod tables;

pub use encoder::byte_mode_encode;
pub use error::{QrError, Result};
pub use matrix::{render_matrix, render_matrix_auto};
pub use models::{BitMatrix, ECLevel, MaskPattern, Module, ModuleGrid, QrSymbol, Version};

use matrix::penalty::evaluate;

/// Text-to-symbol encoder
#[derive(Debug, Clone, Default)]
pub struct QrEncoder {
    /// Fixed version, or the smallest one that holds the payload
    version: Option<u8>,
    /// Fixed mask, or automatic selection
    mask: Option<MaskPattern>,
}

impl QrEncoder {
    /// Create an encoder with automatic version and mask selection
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a fixed version (1-4); longer input is truncated to its capacity
    pub fn version(mut self, version: u8) -> Self {
        self.version = Some(version);
        self
    }

    /// Use a fixed mask instead of the lowest-penalty one
    pub fn mask(mut self, mask: MaskPattern) -> Self {
        self.mask = Some(mask);
        self
    }

    /// Encode `text` into a finished symbol
    pub fn encode(&self, text: &str) -> Result<QrSymbol> {
        let version = match self.version {
            Some(v) => Version::new(v)?,
            None => tables::smallest_version_for(text.chars().count())?,
        };

        let bits = byte_mode_encode(text, version.number())?;
        let (modules, mask) = match self.mask {
            Some(mask) => (render_matrix(version.number(), &bits, Some(mask))?, mask),
            None => render_matrix_auto(version.number(), &bits)?,
        };
        let penalty = evaluate(&modules);

        Ok(QrSymbol {
            version,
            error_correction: format::EC_LEVEL,
            mask_pattern: Some(mask),
            modules,
            penalty,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_auto_version() {
        let symbol = QrEncoder::new().encode(&"a".repeat(20)).unwrap();
        assert_eq!(symbol.version.number(), 2);
        assert_eq!(symbol.modules.size(), 25);
        assert_eq!(symbol.error_correction, ECLevel::L);
    }

    #[test]
    fn test_encode_fixed_mask() {
        let symbol = QrEncoder::new()
            .version(3)
            .mask(MaskPattern::Pattern4)
            .encode("fixed")
            .unwrap();
        assert_eq!(symbol.mask_pattern, Some(MaskPattern::Pattern4));
        assert_eq!(symbol.penalty, evaluate(&symbol.modules));
    }

    #[test]
    fn test_encode_too_long_without_version() {
        let err = QrEncoder::new().encode(&"z".repeat(79)).unwrap_err();
        assert!(matches!(err, QrError::PayloadTooLong { len: 79, max: 78 }));
    }

    #[test]
    fn test_encode_empty() {
        assert!(matches!(
            QrEncoder::new().encode(""),
            Err(QrError::EmptyInput)
        ));
    }
}
