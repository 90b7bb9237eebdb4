//! Stylized pixel-art conversion for raster images
//!
//! A source grid is block-averaged down to an art grid, reduced to a small
//! palette with median-cut quantization, optionally re-tinted in HSL space,
//! and expanded back into flat `pixel_size` blocks. Every stage is a pure
//! function from one grid to a new one.

#![forbid(unsafe_code)]

/// Quantization algorithms and the conversion pipeline
pub mod algorithm;
/// Color representation, HSL math and palette tints
pub mod color;
/// Loading, exporting, configuration and command-line plumbing
pub mod io;
/// Pixel grid storage and resizing stages
pub mod spatial;

pub use algorithm::{PipelineConfig, PixelArtPipeline, Quantizer, Stage};
pub use color::{Color, Palette, PaletteStyle};
pub use io::error::{PixelArtError, Result};
pub use spatial::{Downsampler, PixelGrid};
