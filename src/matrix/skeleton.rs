//! Grid skeleton: every function module placed before data

use crate::format::{self, FORMAT_BITS};
use crate::matrix::patterns;
use crate::models::{MaskPattern, Module, ModuleGrid, Version};

/// Build the reserved-module skeleton for `version` and `mask`
///
/// Without a mask there is no format word to write; the format area is
/// still reserved, filled light.
pub fn build_skeleton(version: Version, mask: Option<MaskPattern>) -> ModuleGrid {
    let mut grid = ModuleGrid::new(version.size());

    patterns::add_finder_patterns(&mut grid);
    patterns::add_alignment_patterns(&mut grid, version.number());
    patterns::stamp_timing(&mut grid);
    patterns::add_dark_module(&mut grid);

    let sequence = mask
        .map(|m| format::format_sequence(format::EC_LEVEL, m))
        .unwrap_or([false; FORMAT_BITS]);
    add_format_information(&mut grid, &sequence);

    grid
}

/// Grid coordinates of both copies of format bit `k` (MSB-first index)
pub fn format_positions(size: usize, k: usize) -> [(usize, usize); 2] {
    let around_top_left = match k {
        0..=5 => (k, 8),
        6 => (7, 8),
        7 => (8, 8),
        8 => (8, 7),
        _ => (8, 14 - k),
    };
    let split = if k < 7 {
        (8, size - 1 - k)
    } else {
        (size - 15 + k, 8)
    };
    [around_top_left, split]
}

/// Scatter the 15 format bits around the finder patterns
pub fn add_format_information(grid: &mut ModuleGrid, sequence: &[bool; FORMAT_BITS]) {
    let size = grid.size();
    for (k, &bit) in sequence.iter().enumerate() {
        for (x, y) in format_positions(size, k) {
            grid.set(x, y, Module::from_bit(bit));
        }
    }
}

/// Read the copy of the format bits around the top-left finder pattern
pub fn read_format_information(grid: &ModuleGrid) -> [bool; FORMAT_BITS] {
    let mut bits = [false; FORMAT_BITS];
    for (k, bit) in bits.iter_mut().enumerate() {
        let [(x, y), _] = format_positions(grid.size(), k);
        *bit = grid.is_dark(x, y);
    }
    bits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::FormatInfo;
    use crate::tables;

    #[test]
    fn test_skeleton_v1() {
        let v1 = Version::new(1).unwrap();
        let grid = build_skeleton(v1, Some(MaskPattern::Pattern0));
        assert_eq!(grid.size(), 21);
        assert!(grid.is_dark(8, 13));
        // Outer ring of the top-left finder
        for i in 0..7 {
            assert!(grid.is_dark(i, 0));
            assert!(grid.is_dark(i, 6));
            assert!(grid.is_dark(0, i));
            assert!(grid.is_dark(6, i));
        }
    }

    #[test]
    fn test_unset_matches_data_capacity() {
        for version in Version::all() {
            let grid = build_skeleton(version, Some(MaskPattern::Pattern3));
            let cap = tables::capacity_of(version);
            assert_eq!(grid.unset_count(), cap.data_modules, "version {:?}", version);
        }
    }

    #[test]
    fn test_format_positions_distinct() {
        let size = 21;
        let mut seen = std::collections::HashSet::new();
        for k in 0..FORMAT_BITS {
            for pos in format_positions(size, k) {
                assert!(seen.insert(pos), "duplicate format position {:?}", pos);
            }
        }
        assert_eq!(seen.len(), 30);
        // Never on the timing row/column
        assert!(!seen.contains(&(6, 8)));
        assert!(!seen.contains(&(8, 6)));
    }

    #[test]
    fn test_format_roundtrip() {
        let v2 = Version::new(2).unwrap();
        for mask in MaskPattern::ALL {
            let grid = build_skeleton(v2, Some(mask));
            let info = FormatInfo::decode(&read_format_information(&grid)).unwrap();
            assert_eq!(info.mask_pattern, mask);
        }
    }

    #[test]
    fn test_format_copies_agree() {
        let v3 = Version::new(3).unwrap();
        let grid = build_skeleton(v3, Some(MaskPattern::Pattern5));
        for k in 0..FORMAT_BITS {
            let [(x0, y0), (x1, y1)] = format_positions(grid.size(), k);
            assert_eq!(grid.get(x0, y0), grid.get(x1, y1));
        }
    }

    #[test]
    fn test_unmasked_format_area_light() {
        let v1 = Version::new(1).unwrap();
        let grid = build_skeleton(v1, None);
        assert_eq!(grid.get(0, 8), Module::White);
        assert_eq!(grid.get(8, 20), Module::White);
        // Dark module survives the light format area
        assert!(grid.is_dark(8, 13));
    }
}
