//! Palette reduction: histogram, median cut, tint and remap

use crate::algorithm::histogram::build_histogram;
use crate::algorithm::median_cut::{median_cut, palette_from_buckets};
use crate::algorithm::nearest::remap;
use crate::color::palette::Palette;
use crate::color::tint::PaletteStyle;
use crate::spatial::grid::PixelGrid;

/// Stateless median-cut color quantizer
#[derive(Debug, Clone, Copy, Default)]
pub struct Quantizer;

impl Quantizer {
    /// Build the tinted palette for `grid`
    ///
    /// Returns `None` when the grid already has at most `num_colors` distinct
    /// colors (or no cells at all); those grids pass through quantization
    /// untouched and no tint is applied.
    pub fn palette(grid: &PixelGrid, num_colors: usize, style: PaletteStyle) -> Option<Palette> {
        let histogram = build_histogram(grid);
        if histogram.len() <= num_colors {
            log::debug!(
                "{} distinct colors within budget of {num_colors}, skipping quantization",
                histogram.len()
            );
            return None;
        }

        let buckets = median_cut(histogram, num_colors);
        let palette = style.apply(&palette_from_buckets(&buckets));
        log::debug!("built {} color {style} palette", palette.len());
        Some(palette)
    }

    /// Reduce `grid` to at most `num_colors` colors
    ///
    /// The output has the same dimensions as the input. A grid that already
    /// fits the budget is returned unchanged.
    pub fn quantize(grid: &PixelGrid, num_colors: usize, style: PaletteStyle) -> PixelGrid {
        match Self::palette(grid, num_colors, style) {
            Some(palette) => remap(grid, &palette),
            None => grid.clone(),
        }
    }
}
