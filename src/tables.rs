//! Per-version capacity constants for byte mode at error correction level L

use crate::error::{QrError, Result};
use crate::models::Version;

/// Published constants for one version
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capacity {
    /// Side length in modules
    pub size: usize,
    /// Largest payload in bytes
    pub max_input_len: usize,
    /// Data codewords (header + payload + padding)
    pub data_codewords: usize,
    /// Error correction codewords
    pub ecc_codewords: usize,
    /// Modules left for data after all function patterns
    pub data_modules: usize,
}

impl Capacity {
    /// Data + ECC codewords
    pub fn total_codewords(&self) -> usize {
        self.data_codewords + self.ecc_codewords
    }
}

// Index: version - 1. Level L, single block for every version in range.
const DATA_CODEWORDS: [usize; 4] = [19, 34, 55, 80];
const ECC_CODEWORDS: [usize; 4] = [7, 10, 15, 20];
const DATA_MODULES: [usize; 4] = [208, 359, 567, 807];

// Mode nibble + 8-bit count + terminator nibble
const HEADER_CODEWORDS: usize = 2;

/// Look up the constants for a version number
pub fn capacity(version: u8) -> Result<Capacity> {
    let version = Version::new(version)?;
    Ok(capacity_of(version))
}

/// Look up the constants for an already validated version
pub fn capacity_of(version: Version) -> Capacity {
    let idx = version.number() as usize - 1;
    Capacity {
        size: version.size(),
        max_input_len: DATA_CODEWORDS[idx] - HEADER_CODEWORDS,
        data_codewords: DATA_CODEWORDS[idx],
        ecc_codewords: ECC_CODEWORDS[idx],
        data_modules: DATA_MODULES[idx],
    }
}

/// Smallest version whose capacity holds `len` payload bytes
pub fn smallest_version_for(len: usize) -> Result<Version> {
    Version::all()
        .find(|v| capacity_of(*v).max_input_len >= len)
        .ok_or(QrError::PayloadTooLong {
            len,
            max: capacity_of(Version::MAX).max_input_len,
        })
}
