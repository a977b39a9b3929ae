//! Matrix construction pipeline
//!
//! Builds the module grid from an encoded bit sequence:
//! - Function patterns and format information (skeleton)
//! - Zigzag data placement with masking
//! - Penalty scoring and automatic mask selection

/// Best-mask search over all eight candidates
pub mod mask_select;
/// Finder, alignment, timing and dark module stamping
pub mod patterns;
/// Four penalty heuristics
pub mod penalty;
/// Zigzag traversal, masking and read-back
pub mod placement;
/// Function-module skeleton and format information placement
pub mod skeleton;

use crate::error::{QrError, Result};
use crate::models::{MaskPattern, ModuleGrid, Version};
use crate::tables;

fn check_fits(version: Version, bits: &[bool]) -> Result<()> {
    let capacity = tables::capacity_of(version).data_modules;
    if bits.len() > capacity {
        return Err(QrError::DataOverflow {
            bits: bits.len(),
            capacity,
        });
    }
    Ok(())
}

/// Build the full grid for `bits` with an explicit mask (None = unmasked)
pub fn render_matrix(version: u8, bits: &[bool], mask: Option<MaskPattern>) -> Result<ModuleGrid> {
    let version = Version::new(version)?;
    check_fits(version, bits)?;

    let mut grid = skeleton::build_skeleton(version, mask);
    placement::place_data(&mut grid, bits, mask);
    Ok(grid)
}

/// Build the full grid for `bits`, choosing the mask with the lowest penalty
pub fn render_matrix_auto(version: u8, bits: &[bool]) -> Result<(ModuleGrid, MaskPattern)> {
    let version = Version::new(version)?;
    check_fits(version, bits)?;

    let mask = mask_select::find_best_mask(version, bits);
    let grid = render_matrix(version.number(), bits, Some(mask))?;
    Ok((grid, mask))
}
