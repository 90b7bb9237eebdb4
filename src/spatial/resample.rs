//! Interpolated resize used to fit a source inside maximum dimensions

use image::RgbaImage;
use image::imageops::{self, FilterType};

use crate::io::error::{PixelArtError, Result};
use crate::spatial::grid::PixelGrid;

/// Resize `source` to exactly `width` x `height` with an interpolating filter
///
/// Returns a copy when the dimensions already match.
///
/// # Errors
///
/// Returns `InvalidArgument` if the source samples cannot be wrapped as an image
pub fn resample(
    source: &PixelGrid,
    width: u32,
    height: u32,
    filter: FilterType,
) -> Result<PixelGrid> {
    if source.dimensions() == (width, height) {
        return Ok(source.clone());
    }

    let image = RgbaImage::from_raw(source.width(), source.height(), source.to_raw()).ok_or_else(
        || PixelArtError::InvalidArgument {
            parameter: "source grid",
            value: format!("{}x{}", source.width(), source.height()),
            reason: "sample buffer does not match dimensions".to_string(),
        },
    )?;

    let resized = imageops::resize(&image, width, height, filter);
    PixelGrid::from_raw(width, height, resized.into_raw())
}
