//! Data placement along the zigzag path, with masking

use crate::matrix::patterns::TIMING_INDEX;
use crate::models::{MaskPattern, Module, ModuleGrid};

/// Vertical scan direction of a 2-module column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Bottom to top
    Up,
    /// Top to bottom
    Down,
}

/// Which side of the vertical timing pattern a 2-module column lies on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Columns 7 and above
    RightOfTiming,
    /// The three 2-module columns at x = 0..=5
    LeftOfTiming,
}

/// Number of 2-module columns left of the timing column
const LEFT_COLUMNS: usize = 3;

/// Scan direction for the 2-module column `index` (0 = nearest the timing column)
///
/// Skipping the timing column shifts the alternation by one, so parity is
/// inverted on the left side.
pub fn column_direction(index: usize, side: Side) -> Direction {
    let even = index % 2 == 0;
    match (side, even) {
        (Side::RightOfTiming, true) | (Side::LeftOfTiming, false) => Direction::Up,
        (Side::RightOfTiming, false) | (Side::LeftOfTiming, true) => Direction::Down,
    }
}

/// Grid x of the right module of 2-module column `index` on `side`
pub fn column_x(index: usize, side: Side) -> usize {
    match side {
        Side::RightOfTiming => TIMING_INDEX + 2 + 2 * index,
        Side::LeftOfTiming => 2 * index + 1,
    }
}

/// 2-module columns right of the timing column for a grid of side `size`
pub fn right_column_count(size: usize) -> usize {
    (size - 1) / 2 - LEFT_COLUMNS
}

/// Every position of the zigzag walk in visiting order, reserved ones included
pub fn data_path(size: usize) -> impl Iterator<Item = (usize, usize)> {
    let right = (0..right_column_count(size))
        .rev()
        .map(|i| (i, Side::RightOfTiming));
    let left = (0..LEFT_COLUMNS).rev().map(|i| (i, Side::LeftOfTiming));

    right.chain(left).flat_map(move |(index, side)| {
        let x = column_x(index, side);
        let rows: Box<dyn Iterator<Item = usize>> = match column_direction(index, side) {
            Direction::Up => Box::new((0..size).rev()),
            Direction::Down => Box::new(0..size),
        };
        // Right module before left module on each row
        rows.flat_map(move |y| [(x, y), (x - 1, y)])
    })
}

/// Final color of a data bit at (col, row); None writes the bit verbatim
pub fn mask_color(col: usize, row: usize, bit: bool, mask: Option<MaskPattern>) -> Module {
    let invert = mask.is_some_and(|m| m.is_masked(col, row));
    Module::from_bit(bit != invert)
}

/// Write `bits` into the unset modules of `grid`, returning how many were consumed
///
/// Once the bits run out, remaining unset modules receive a masked `false`.
pub fn place_data(grid: &mut ModuleGrid, bits: &[bool], mask: Option<MaskPattern>) -> usize {
    let mut consumed = 0;
    for (x, y) in data_path(grid.size()) {
        if !grid.get(x, y).is_writable() {
            continue;
        }
        let bit = bits.get(consumed).copied().unwrap_or(false);
        if consumed < bits.len() {
            consumed += 1;
        }
        grid.set(x, y, mask_color(x, y, bit, mask));
    }
    consumed
}

/// Read data bits back out of `grid`, visiting modules unset in `skeleton`
pub fn read_data(grid: &ModuleGrid, skeleton: &ModuleGrid, mask: Option<MaskPattern>) -> Vec<bool> {
    data_path(grid.size())
        .filter(|&(x, y)| skeleton.get(x, y).is_writable())
        .map(|(x, y)| {
            let invert = mask.is_some_and(|m| m.is_masked(x, y));
            grid.is_dark(x, y) != invert
        })
        .collect()
}
