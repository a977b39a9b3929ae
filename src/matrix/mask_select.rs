//! Automatic mask selection by minimum penalty

use rayon::prelude::*;

use crate::config;
use crate::matrix::penalty::evaluate;
use crate::matrix::placement::place_data;
use crate::matrix::skeleton::build_skeleton;
use crate::models::{MaskPattern, ModuleGrid, Version};

/// Skeleton plus data for one mask
fn candidate(version: Version, bits: &[bool], mask: MaskPattern) -> ModuleGrid {
    let mut grid = build_skeleton(version, Some(mask));
    place_data(&mut grid, bits, Some(mask));
    grid
}

/// Penalty of every mask, in ascending id order
pub fn mask_scores(version: Version, bits: &[bool]) -> [(MaskPattern, u32); 8] {
    let score = |mask: MaskPattern| (mask, evaluate(&candidate(version, bits, mask)));

    let scored: Vec<(MaskPattern, u32)> = if config::parallel_mask_search() {
        MaskPattern::ALL[..].par_iter().map(|&m| score(m)).collect()
    } else {
        MaskPattern::ALL.iter().map(|&m| score(m)).collect()
    };

    let mut out = [(MaskPattern::Pattern0, 0); 8];
    for (slot, entry) in out.iter_mut().zip(scored) {
        *slot = entry;
    }
    out
}

/// Mask with the lowest penalty; ties go to the lowest id
pub fn find_best_mask(version: Version, bits: &[bool]) -> MaskPattern {
    let scores = mask_scores(version, bits);
    for (mask, score) in &scores {
        log::trace!("mask {} penalty {}", mask.id(), score);
    }

    // min_by_key keeps the first minimum, so ties resolve to the lowest id
    let (best, score) = scores
        .iter()
        .copied()
        .min_by_key(|&(_, score)| score)
        .unwrap_or((MaskPattern::Pattern0, 0));
    log::debug!("selected mask {} (penalty {})", best.id(), score);
    best
}
