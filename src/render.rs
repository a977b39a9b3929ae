//! Bitmap rendering of a finished module grid

use std::path::Path;

use image::{GrayImage, ImageFormat, Luma};

use crate::error::Result;
use crate::models::ModuleGrid;

const DARK: Luma<u8> = Luma([0]);
const LIGHT: Luma<u8> = Luma([255]);

/// Render `grid` with `scale` pixels per module and a light border of `quiet_zone` modules
///
/// Unset modules render light.
pub fn to_image(grid: &ModuleGrid, scale: usize, quiet_zone: usize) -> GrayImage {
    let scale = scale.max(1);
    let side = ((grid.size() + 2 * quiet_zone) * scale) as u32;
    let mut img = GrayImage::from_pixel(side, side, LIGHT);
    let bits = grid.to_bit_matrix();

    for y in 0..bits.size() {
        for x in 0..bits.size() {
            if !bits.get(x, y) {
                continue;
            }
            let px = (x + quiet_zone) * scale;
            let py = (y + quiet_zone) * scale;
            for dy in 0..scale {
                for dx in 0..scale {
                    img.put_pixel((px + dx) as u32, (py + dy) as u32, DARK);
                }
            }
        }
    }

    img
}

/// Render `grid` and write it to `path` as a PNG, whatever the extension
pub fn save_png<P: AsRef<Path>>(
    grid: &ModuleGrid,
    path: P,
    scale: usize,
    quiet_zone: usize,
) -> Result<()> {
    to_image(grid, scale, quiet_zone).save_with_format(path, ImageFormat::Png)?;
    Ok(())
}
