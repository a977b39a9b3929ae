//! Format information (EC level + mask id) as a 15-bit BCH(15,5) sequence

use crate::models::{ECLevel, MaskPattern};

/// BCH(15,5) generator polynomial: x^10 + x^8 + x^5 + x^4 + x^2 + x + 1
const GENERATOR: u16 = 0x537;
/// XOR mask applied so the format word is never all zero
const FORMAT_MASK: u16 = 0x5412;

/// Number of format information bits
pub const FORMAT_BITS: usize = 15;

/// The level every symbol in this crate is encoded at
pub const EC_LEVEL: ECLevel = ECLevel::L;

/// 15-bit format word for a level and mask
pub fn format_word(ec_level: ECLevel, mask: MaskPattern) -> u16 {
    let data = ((ec_level.format_bits() as u16) << 3) | mask.id() as u16;
    let mut rem = data;
    for _ in 0..10 {
        rem = (rem << 1) ^ ((rem >> 9) * GENERATOR);
    }
    ((data << 10) | (rem & 0x3FF)) ^ FORMAT_MASK
}

/// Format word expanded most-significant bit first
pub fn format_sequence(ec_level: ECLevel, mask: MaskPattern) -> [bool; FORMAT_BITS] {
    let word = format_word(ec_level, mask);
    let mut bits = [false; FORMAT_BITS];
    for (k, bit) in bits.iter_mut().enumerate() {
        *bit = (word >> (FORMAT_BITS - 1 - k)) & 1 == 1;
    }
    bits
}

/// Sequence at the crate's level for a raw mask id; None above 7
pub fn format_sequence_for_id(id: u8) -> Option<[bool; FORMAT_BITS]> {
    MaskPattern::from_id(id).map(|mask| format_sequence(EC_LEVEL, mask))
}

/// Decoded format information
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatInfo {
    pub ec_level: ECLevel,
    pub mask_pattern: MaskPattern,
}

impl FormatInfo {
    /// Decode an MSB-first sequence; None unless it is an exact codeword
    pub fn decode(bits: &[bool; FORMAT_BITS]) -> Option<Self> {
        let word = bits
            .iter()
            .fold(0u16, |acc, &b| (acc << 1) | b as u16);
        let unmasked = word ^ FORMAT_MASK;
        if !Self::check_format(unmasked) {
            return None;
        }

        let data_bits = (unmasked >> 10) & 0x1F;
        let ec_level = ECLevel::from_format_bits(((data_bits >> 3) & 0x03) as u8)?;
        let mask_pattern = MaskPattern::from_id((data_bits & 0x07) as u8)?;

        Some(Self {
            ec_level,
            mask_pattern,
        })
    }

    fn check_format(codeword: u16) -> bool {
        let mut remainder = codeword as u32;
        for shift in (0..5).rev() {
            if remainder & (1 << (shift + 10)) != 0 {
                remainder ^= (GENERATOR as u32) << shift;
            }
        }
        remainder == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_format_words() {
        // Level L, masks 0 and 7 from the ISO 18004 format table
        assert_eq!(format_word(ECLevel::L, MaskPattern::Pattern0), 0b111011111000100);
        assert_eq!(format_word(ECLevel::L, MaskPattern::Pattern7), 0b110100101110110);
        assert_eq!(format_word(ECLevel::M, MaskPattern::Pattern0), 0b101010000010010);
    }

    #[test]
    fn test_sequence_msb_first() {
        let bits = format_sequence(ECLevel::L, MaskPattern::Pattern0);
        assert_eq!(
            bits,
            [
                true, true, true, false, true, true, true, true, true, false, false, false, true,
                false, false
            ]
        );
    }

    #[test]
    fn test_decode_roundtrip() {
        for mask in MaskPattern::ALL {
            let bits = format_sequence(EC_LEVEL, mask);
            let info = FormatInfo::decode(&bits).unwrap();
            assert_eq!(info.mask_pattern, mask);
            assert_eq!(info.ec_level, EC_LEVEL);
        }
    }

    #[test]
    fn test_decode_rejects_corrupt() {
        let mut bits = format_sequence(EC_LEVEL, MaskPattern::Pattern3);
        bits[4] = !bits[4];
        assert!(FormatInfo::decode(&bits).is_none());
    }

    #[test]
    fn test_invalid_id() {
        assert!(format_sequence_for_id(7).is_some());
        assert!(format_sequence_for_id(8).is_none());
    }
}
