//! Decoding sources into pixel grids and exporting results as PNG

use image::{DynamicImage, RgbaImage};
use std::path::Path;

use crate::io::error::{PixelArtError, Result, invalid_argument};
use crate::spatial::grid::PixelGrid;

/// Convert any decoded image into an RGBA grid
///
/// # Errors
///
/// Returns `InvalidArgument` if the decoded buffer does not match its dimensions
pub fn grid_from_image(image: &DynamicImage) -> Result<PixelGrid> {
    let rgba = image.to_rgba8();
    PixelGrid::from_raw(rgba.width(), rgba.height(), rgba.into_raw())
}

/// Wrap a grid as an RGBA image buffer
///
/// # Errors
///
/// Returns `InvalidArgument` if the grid has zero area
pub fn grid_to_image(grid: &PixelGrid) -> Result<RgbaImage> {
    if grid.is_empty() {
        return Err(invalid_argument(
            "grid",
            &format!("{}x{}", grid.width(), grid.height()),
            &"cannot encode an image with zero area",
        ));
    }

    RgbaImage::from_raw(grid.width(), grid.height(), grid.to_raw()).ok_or_else(|| {
        invalid_argument(
            "grid",
            &format!("{}x{}", grid.width(), grid.height()),
            &"sample buffer does not match dimensions",
        )
    })
}

/// Load and decode an image file
///
/// # Errors
///
/// Returns an error if:
/// - The file at the given path cannot be opened or read
/// - The file is not a supported image format
pub fn load_grid<P: AsRef<Path>>(path: P) -> Result<PixelGrid> {
    let path_buf = path.as_ref().to_path_buf();
    let image = image::open(&path_buf).map_err(|e| PixelArtError::ImageLoad {
        path: path_buf,
        source: e,
    })?;
    grid_from_image(&image)
}

/// Decode an in-memory encoded image (PNG, JPEG, ...)
///
/// # Errors
///
/// Returns `ImageDecode` if the format cannot be guessed or decoding fails
pub fn decode_grid(bytes: &[u8]) -> Result<PixelGrid> {
    let image =
        image::load_from_memory(bytes).map_err(|e| PixelArtError::ImageDecode { source: e })?;
    grid_from_image(&image)
}

/// Save a grid as a PNG file, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if:
/// - The grid has zero area
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_grid_as_png<P: AsRef<Path>>(grid: &PixelGrid, output_path: P) -> Result<()> {
    let output_path = output_path.as_ref();
    let image = grid_to_image(grid)?;

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| PixelArtError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    image
        .save_with_format(output_path, image::ImageFormat::Png)
        .map_err(|e| PixelArtError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}
