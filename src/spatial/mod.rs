//! Pixel grid storage and resizing stages
//!
//! Every stage here takes a grid by reference and returns a freshly built
//! grid, so callers can run conversions on independent grids concurrently.

/// Block-average downsampling
pub mod downsample;
/// RGBA pixel grid storage
pub mod grid;
/// Interpolated resize for max-dimension fitting
pub mod resample;

pub use downsample::Downsampler;
pub use grid::PixelGrid;
