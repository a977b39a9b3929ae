//! Penalty heuristics used to rank masks. Lower scores are better.
//!
//! Each heuristic is a pure function over a finished grid; unset modules
//! read as light.

use crate::models::ModuleGrid;

/// 1:1:3:1:1 finder-like run preceded by four light modules
const FINDER_LIKE_LEADING: [bool; 11] = [
    false, false, false, false, true, false, true, true, true, false, true,
];
/// 1:1:3:1:1 finder-like run followed by four light modules
const FINDER_LIKE_TRAILING: [bool; 11] = [
    true, false, true, true, true, false, true, false, false, false, false,
];

const FINDER_LIKE_COST: u32 = 40;
const RUN_MIN: usize = 5;
const RUN_COST: u32 = 3;
const BLOCK_COST: u32 = 3;

/// Sum of all four heuristics
pub fn evaluate(grid: &ModuleGrid) -> u32 {
    finder_like_penalty(grid) + run_length_penalty(grid) + block_penalty(grid) + balance_penalty(grid)
}

/// Whether the 11 modules from (x, y) along (dx, dy) spell `pattern`
fn matches_at(grid: &ModuleGrid, x: usize, y: usize, horizontal: bool, pattern: &[bool; 11]) -> bool {
    pattern.iter().enumerate().all(|(k, &dark)| {
        let (px, py) = if horizontal { (x + k, y) } else { (x, y + k) };
        grid.is_dark(px, py) == dark
    })
}

/// 40 per finder-like sequence found along a row or a column
pub fn finder_like_penalty(grid: &ModuleGrid) -> u32 {
    let size = grid.size();
    if size < FINDER_LIKE_LEADING.len() {
        return 0;
    }
    let last_origin = size - FINDER_LIKE_LEADING.len();
    let mut penalty = 0;

    for y in 0..size {
        for x in 0..size {
            for pattern in [&FINDER_LIKE_LEADING, &FINDER_LIKE_TRAILING] {
                if x <= last_origin && matches_at(grid, x, y, true, pattern) {
                    penalty += FINDER_LIKE_COST;
                }
                if y <= last_origin && matches_at(grid, x, y, false, pattern) {
                    penalty += FINDER_LIKE_COST;
                }
            }
        }
    }

    penalty
}

/// Cost of one same-color run: 3 at length 5, plus 1 per extra module
fn run_cost(len: usize) -> u32 {
    if len >= RUN_MIN {
        RUN_COST + (len - RUN_MIN) as u32
    } else {
        0
    }
}

/// Run-length cost of one line of modules
fn line_runs(line: impl Iterator<Item = bool>) -> u32 {
    let mut penalty = 0;
    let mut current: Option<bool> = None;
    let mut len = 0;

    for dark in line {
        if current == Some(dark) {
            len += 1;
        } else {
            penalty += run_cost(len);
            current = Some(dark);
            len = 1;
        }
    }

    penalty + run_cost(len)
}

/// Same-color runs of 5 or more along every row and every column
pub fn run_length_penalty(grid: &ModuleGrid) -> u32 {
    let size = grid.size();
    (0..size)
        .map(|i| {
            line_runs((0..size).map(|x| grid.is_dark(x, i)))
                + line_runs((0..size).map(|y| grid.is_dark(i, y)))
        })
        .sum()
}

/// 3 per 2x2 block of a single color; overlapping blocks count separately
pub fn block_penalty(grid: &ModuleGrid) -> u32 {
    let size = grid.size();
    let mut penalty = 0;
    for y in 0..size.saturating_sub(1) {
        for x in 0..size.saturating_sub(1) {
            let dark = grid.is_dark(x, y);
            if grid.is_dark(x + 1, y) == dark
                && grid.is_dark(x, y + 1) == dark
                && grid.is_dark(x + 1, y + 1) == dark
            {
                penalty += BLOCK_COST;
            }
        }
    }
    penalty
}

/// Distance of the dark ratio from 50%, in 5% steps, times 2
pub fn balance_penalty(grid: &ModuleGrid) -> u32 {
    let total = grid.size() * grid.size();
    if total == 0 {
        return 0;
    }
    let percent = (grid.dark_count() * 100 / total) as i64;
    let lower = percent - percent % 5;
    let upper = lower + 5;
    let distance = (lower - 50).abs().min((upper - 50).abs());
    (distance * 2) as u32
}
