//! Block-averaging downsampler
//!
//! Each target cell covers the half-open source rectangle
//! `[floor(tx * bw), floor((tx + 1) * bw)) x [floor(ty * bh), floor((ty + 1) * bh))`
//! where `bw` and `bh` are the real-valued source/target ratios. Blocks may
//! therefore differ in pixel count by one row or column.

use crate::color::palette::Color;
use crate::io::error::{Result, invalid_argument};
use crate::spatial::grid::PixelGrid;

/// Stateless block-average resizer
#[derive(Debug, Clone, Copy, Default)]
pub struct Downsampler;

impl Downsampler {
    /// Average `source` down to a `target_width` x `target_height` grid
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if either target dimension is zero
    pub fn downsample(
        source: &PixelGrid,
        target_width: u32,
        target_height: u32,
    ) -> Result<PixelGrid> {
        if target_width == 0 {
            return Err(invalid_argument(
                "target_width",
                &target_width,
                &"must be at least 1",
            ));
        }
        if target_height == 0 {
            return Err(invalid_argument(
                "target_height",
                &target_height,
                &"must be at least 1",
            ));
        }

        let block_width = f64::from(source.width()) / f64::from(target_width);
        let block_height = f64::from(source.height()) / f64::from(target_height);

        log::trace!(
            "downsampling {}x{} to {target_width}x{target_height} \
             (block {block_width:.3}x{block_height:.3})",
            source.width(),
            source.height()
        );

        Ok(PixelGrid::from_fn(target_width, target_height, |tx, ty| {
            let x_range = block_span(tx, block_width, source.width());
            let y_range = block_span(ty, block_height, source.height());
            average_block(source, x_range, y_range)
        }))
    }
}

// Half-open source span covered by target index `index`
fn block_span(index: u32, ratio: f64, limit: u32) -> (u32, u32) {
    let start = (f64::from(index) * ratio).floor() as u32;
    let end = (f64::from(index + 1) * ratio).floor() as u32;
    (start.min(limit), end.min(limit))
}

fn average_block(source: &PixelGrid, x_range: (u32, u32), y_range: (u32, u32)) -> Color {
    let mut sums = [0u64; 4];
    let mut count = 0u64;

    for y in y_range.0..y_range.1 {
        for x in x_range.0..x_range.1 {
            if let Some(color) = source.get(x, y) {
                for (sum, value) in sums.iter_mut().zip(color.channels()) {
                    *sum += u64::from(value);
                }
                count += 1;
            }
        }
    }

    if count == 0 {
        return Color::TRANSPARENT;
    }

    let [r, g, b, a] = sums.map(|sum| (sum as f64 / count as f64).round() as u8);
    Color::new(r, g, b, a)
}
