//! Color representation, HSL math and palette tints

/// RGB and HSL conversions
pub mod hsl;
/// RGBA colors and ordered palettes
pub mod palette;
/// Stylistic palette tints
pub mod tint;

pub use hsl::{Hsl, hsl_to_rgb, rgb_to_hsl};
pub use palette::{Color, Palette};
pub use tint::{PaletteStyle, tint_bright, tint_graffiti};
