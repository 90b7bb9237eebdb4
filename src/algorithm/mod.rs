//! Quantization algorithms and the conversion pipeline

/// Exact-color histograms
pub mod histogram;
/// Median-cut bucket splitting and averaging
pub mod median_cut;
/// Nearest-color lookup and remapping
pub mod nearest;
/// Stage orchestration and configuration
pub mod pipeline;
/// Median-cut quantizer
pub mod quantizer;

pub use pipeline::{PipelineConfig, PixelArtPipeline, Stage};
pub use quantizer::Quantizer;
