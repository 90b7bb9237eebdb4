//! Nearest-color lookup and grid remapping

use crate::color::palette::{Color, Palette};
use crate::spatial::grid::PixelGrid;

/// Palette entry with the smallest squared RGBA distance to `color`
///
/// Scans in palette order and keeps the first minimum. Returns `None` only
/// for an empty palette.
pub fn nearest_color(palette: &Palette, color: Color) -> Option<Color> {
    let mut best: Option<(Color, u32)> = None;

    for &candidate in palette.colors() {
        let distance = color.distance_squared(candidate);
        if best.is_none_or(|(_, best_distance)| distance < best_distance) {
            best = Some((candidate, distance));
            if distance == 0 {
                break;
            }
        }
    }

    best.map(|(candidate, _)| candidate)
}

/// Replace every cell of `grid` with its nearest palette entry
///
/// With an empty palette the grid is copied unchanged.
pub fn remap(grid: &PixelGrid, palette: &Palette) -> PixelGrid {
    grid.map_colors(|color| nearest_color(palette, color).unwrap_or(color))
}
