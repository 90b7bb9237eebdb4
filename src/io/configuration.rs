//! Conversion constants and runtime configuration defaults

use crate::color::tint::PaletteStyle;
use image::imageops::FilterType;

// Default values for configurable parameters
/// Edge length in output pixels of each art block
pub const DEFAULT_PIXEL_SIZE: u32 = 8;
/// Number of palette colors requested from the quantizer
pub const DEFAULT_COLORS: u32 = 16;
/// Tint applied to the quantized palette
pub const DEFAULT_PALETTE_STYLE: PaletteStyle = PaletteStyle::Graffiti;

// Validation bounds
/// Smallest accepted block size
pub const MIN_PIXEL_SIZE: u32 = 1;
/// Smallest accepted palette size
pub const MIN_COLORS: u32 = 2;
/// Largest accepted palette size
pub const MAX_COLORS: u32 = 256;

// Graffiti tint
/// Saturation multiplier for the graffiti look
pub const GRAFFITI_SATURATION_BOOST: f64 = 1.3;
/// Lightness multiplier for colors darker than the midpoint
pub const GRAFFITI_DARKEN_FACTOR: f64 = 0.85;
/// Lightness multiplier for colors at or above the midpoint
pub const GRAFFITI_LIGHTEN_FACTOR: f64 = 1.1;

// Bright tint
/// Saturation multiplier for the bright look
pub const BRIGHT_SATURATION_BOOST: f64 = 1.5;
/// Lightness multiplier for the bright look
pub const BRIGHT_LIGHTNESS_BOOST: f64 = 1.2;
/// Lower lightness bound after the bright boost
pub const BRIGHT_MIN_LIGHTNESS: f64 = 0.3;
/// Upper lightness bound after the bright boost
pub const BRIGHT_MAX_LIGHTNESS: f64 = 1.0;

/// Interpolating filter used when fitting a source into max dimensions
pub const RESIZE_FILTER: FilterType = FilterType::Triangle;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_pixel";
/// Extension of every written output file
pub const OUTPUT_EXTENSION: &str = "png";
/// Input file extensions picked up when scanning a directory
pub const SUPPORTED_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "bmp", "gif", "webp"];
