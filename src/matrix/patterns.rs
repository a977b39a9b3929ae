//! Structural pattern stamping (finder, separator, alignment, timing, dark module)

use crate::models::{Module, ModuleGrid};

/// Side length of a finder pattern
pub const FINDER_SIZE: usize = 7;
/// Side length of an alignment pattern
pub const ALIGNMENT_SIZE: usize = 5;
/// Row and column holding the timing patterns
pub const TIMING_INDEX: usize = 6;

/// Fixed square patterns stamped into the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// 7x7: dark ring, light ring, dark 3x3 core
    Finder,
    /// 5x5: dark ring, light ring, dark center
    Alignment,
}

impl Pattern {
    /// Side length of the pattern
    pub fn size(self) -> usize {
        match self {
            Pattern::Finder => FINDER_SIZE,
            Pattern::Alignment => ALIGNMENT_SIZE,
        }
    }

    /// Stamp the pattern with its top-left corner at (x, y)
    pub fn stamp(self, grid: &mut ModuleGrid, x: usize, y: usize) {
        match self {
            Pattern::Finder => stamp_finder(grid, x, y),
            Pattern::Alignment => stamp_alignment(grid, x, y),
        }
    }
}

/// Ring index of (dx, dy) inside a square of side `size` (0 = outermost)
fn ring(dx: usize, dy: usize, size: usize) -> usize {
    let last = size - 1;
    dx.min(dy).min(last - dx).min(last - dy)
}

/// Nested squares: even rings dark, odd rings light
fn stamp_nested(grid: &mut ModuleGrid, x: usize, y: usize, size: usize) {
    for dy in 0..size {
        for dx in 0..size {
            let dark = ring(dx, dy, size) % 2 == 0;
            grid.set(x + dx, y + dy, Module::from_bit(dark));
        }
    }
}

/// Stamp a 7x7 finder pattern at (x, y)
fn stamp_finder(grid: &mut ModuleGrid, x: usize, y: usize) {
    // Rings 0, 2 and 3 are dark, so the 3x3 core comes out solid
    for dy in 0..FINDER_SIZE {
        for dx in 0..FINDER_SIZE {
            let dark = ring(dx, dy, FINDER_SIZE) != 1;
            grid.set(x + dx, y + dy, Module::from_bit(dark));
        }
    }
}

/// Stamp a 5x5 alignment pattern at (x, y)
fn stamp_alignment(grid: &mut ModuleGrid, x: usize, y: usize) {
    stamp_nested(grid, x, y, ALIGNMENT_SIZE);
}

/// Light row of 8 modules starting at (x, y)
fn horizontal_separator(grid: &mut ModuleGrid, x: usize, y: usize) {
    for i in 0..FINDER_SIZE + 1 {
        grid.set(x + i, y, Module::White);
    }
}

/// Light column of 8 modules starting at (x, y)
fn vertical_separator(grid: &mut ModuleGrid, x: usize, y: usize) {
    for i in 0..FINDER_SIZE + 1 {
        grid.set(x, y + i, Module::White);
    }
}

/// Three finder patterns, each with a light separator on its open sides
pub fn add_finder_patterns(grid: &mut ModuleGrid) {
    let size = grid.size();
    let offset = size - Pattern::Finder.size();
    let separator = offset - 1;

    // Top left
    Pattern::Finder.stamp(grid, 0, 0);
    horizontal_separator(grid, 0, FINDER_SIZE);
    vertical_separator(grid, FINDER_SIZE, 0);

    // Bottom left
    Pattern::Finder.stamp(grid, 0, offset);
    horizontal_separator(grid, 0, separator);
    vertical_separator(grid, FINDER_SIZE, separator);

    // Top right
    Pattern::Finder.stamp(grid, offset, 0);
    horizontal_separator(grid, separator, FINDER_SIZE);
    vertical_separator(grid, separator, 0);
}

/// Top-left corner of the single alignment pattern (None for version 1)
pub fn alignment_origin(version: u8, size: usize) -> Option<usize> {
    // Versions 2-6 carry one pattern centred at (size - 7, size - 7)
    (version > 1).then(|| size - 7 - Pattern::Alignment.size() / 2)
}

/// Alignment pattern near the bottom-right corner, if the version has one
pub fn add_alignment_patterns(grid: &mut ModuleGrid, version: u8) {
    if let Some(origin) = alignment_origin(version, grid.size()) {
        Pattern::Alignment.stamp(grid, origin, origin);
    }
}

/// Timing rows on row 6 and column 6, skipping the 8-module finder margins
pub fn stamp_timing(grid: &mut ModuleGrid) {
    let stop = grid.size() - (FINDER_SIZE + 1);
    for i in (FINDER_SIZE + 1)..stop {
        let module = Module::from_bit(i % 2 == 0);
        grid.set(i, TIMING_INDEX, module);
        grid.set(TIMING_INDEX, i, module);
    }
}

/// Coordinates of the always-dark module beside the bottom-left finder
pub fn dark_module_position(size: usize) -> (usize, usize) {
    (FINDER_SIZE + 1, size - (FINDER_SIZE + 1))
}

/// Set the dark module
pub fn add_dark_module(grid: &mut ModuleGrid) {
    let (x, y) = dark_module_position(grid.size());
    grid.set(x, y, Module::Black);
}
