//! End-to-end conversion: fit, downsample, quantize and expand
//!
//! Configuration is validated before any pixel work happens. After that every
//! degenerate input (zero-area grids, blocks without source pixels) resolves
//! to a defined fallback instead of an error.

use crate::algorithm::quantizer::Quantizer;
use crate::color::palette::Color;
use crate::color::tint::PaletteStyle;
use crate::io::configuration::{
    DEFAULT_COLORS, DEFAULT_PALETTE_STYLE, DEFAULT_PIXEL_SIZE, MAX_COLORS, MIN_COLORS,
    MIN_PIXEL_SIZE, RESIZE_FILTER,
};
use crate::io::error::{Result, invalid_argument};
use crate::spatial::downsample::Downsampler;
use crate::spatial::grid::PixelGrid;
use crate::spatial::resample::resample;

/// Parameters for one conversion call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Edge length in output pixels of each art block
    pub pixel_size: u32,
    /// Maximum number of palette colors
    pub colors: u32,
    /// Tint applied to the quantized palette
    pub palette: PaletteStyle,
    /// Source width limit applied before downsampling
    pub max_width: Option<u32>,
    /// Source height limit applied after the width limit
    pub max_height: Option<u32>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            pixel_size: DEFAULT_PIXEL_SIZE,
            colors: DEFAULT_COLORS,
            palette: DEFAULT_PALETTE_STYLE,
            max_width: None,
            max_height: None,
        }
    }
}

impl PipelineConfig {
    /// Check every field against its accepted range
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` naming the first field out of range
    pub fn validate(&self) -> Result<()> {
        if self.pixel_size < MIN_PIXEL_SIZE {
            return Err(invalid_argument(
                "pixel_size",
                &self.pixel_size,
                &format!("must be at least {MIN_PIXEL_SIZE}"),
            ));
        }
        if !(MIN_COLORS..=MAX_COLORS).contains(&self.colors) {
            return Err(invalid_argument(
                "colors",
                &self.colors,
                &format!("must be between {MIN_COLORS} and {MAX_COLORS}"),
            ));
        }
        if self.max_width == Some(0) {
            return Err(invalid_argument("max_width", &0, &"must be positive"));
        }
        if self.max_height == Some(0) {
            return Err(invalid_argument("max_height", &0, &"must be positive"));
        }
        Ok(())
    }

    /// Dimensions after applying the width limit, then the height limit
    ///
    /// Both limits preserve aspect ratio and are applied one after the other,
    /// so fitting the height can shrink the width below `max_width`. No
    /// dimension of a non-empty source drops below one pixel.
    pub fn working_dimensions(&self, width: u32, height: u32) -> (u32, u32) {
        let (mut width, mut height) = (width, height);

        if let Some(max_width) = self.max_width {
            if width > max_width {
                height = scale_dimension(height, max_width, width);
                width = max_width;
            }
        }

        if let Some(max_height) = self.max_height {
            if height > max_height {
                width = scale_dimension(width, max_height, height);
                height = max_height;
            }
        }

        (width, height)
    }

    /// Size of the averaged grid for a working size
    pub fn downsampled_dimensions(&self, width: u32, height: u32) -> (u32, u32) {
        let pixel_size = self.pixel_size.max(MIN_PIXEL_SIZE);
        (width.div_ceil(pixel_size), height.div_ceil(pixel_size))
    }
}

// floor(value * numerator / denominator), kept at least 1
fn scale_dimension(value: u32, numerator: u32, denominator: u32) -> u32 {
    let scaled = u64::from(value) * u64::from(numerator) / u64::from(denominator.max(1));
    (scaled as u32).max(1)
}

/// Named step of a conversion, reported in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Fitting the source into the max dimensions
    Resize,
    /// Block-averaging to the art grid
    Downsample,
    /// Palette reduction and remapping
    Quantize,
    /// Replicating each art cell into a flat block
    Expand,
}

impl Stage {
    /// Every stage in execution order
    pub const ALL: [Self; 4] = [Self::Resize, Self::Downsample, Self::Quantize, Self::Expand];

    /// Short lowercase label
    pub const fn label(self) -> &'static str {
        match self {
            Self::Resize => "resize",
            Self::Downsample => "downsample",
            Self::Quantize => "quantize",
            Self::Expand => "expand",
        }
    }
}

/// Stateless pixel-art converter
#[derive(Debug, Clone, Copy, Default)]
pub struct PixelArtPipeline;

impl PixelArtPipeline {
    /// Convert `source` into pixel art
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `config` fails validation; no pixel work
    /// is done in that case
    pub fn convert(source: &PixelGrid, config: &PipelineConfig) -> Result<PixelGrid> {
        Self::convert_with_progress(source, config, |_| {})
    }

    /// Convert `source`, calling `on_stage` as each stage begins
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `config` fails validation
    pub fn convert_with_progress(
        source: &PixelGrid,
        config: &PipelineConfig,
        mut on_stage: impl FnMut(Stage),
    ) -> Result<PixelGrid> {
        config.validate()?;

        if source.is_empty() {
            log::debug!("source grid has zero area, nothing to convert");
            return Ok(PixelGrid::empty());
        }

        on_stage(Stage::Resize);
        let (working_width, working_height) =
            config.working_dimensions(source.width(), source.height());
        let working = if (working_width, working_height) == source.dimensions() {
            source.clone()
        } else {
            log::debug!(
                "fitting {}x{} source to {working_width}x{working_height}",
                source.width(),
                source.height()
            );
            resample(source, working_width, working_height, RESIZE_FILTER)?
        };

        on_stage(Stage::Downsample);
        let (small_width, small_height) =
            config.downsampled_dimensions(working_width, working_height);
        let small = Downsampler::downsample(&working, small_width, small_height)?;

        on_stage(Stage::Quantize);
        let quantized = Quantizer::quantize(&small, config.colors as usize, config.palette);

        on_stage(Stage::Expand);
        Ok(expand(&quantized, config.pixel_size))
    }
}

/// Replicate each cell into a flat `pixel_size` x `pixel_size` block
pub fn expand(grid: &PixelGrid, pixel_size: u32) -> PixelGrid {
    let pixel_size = pixel_size.max(1);
    PixelGrid::from_fn(
        grid.width() * pixel_size,
        grid.height() * pixel_size,
        |x, y| {
            grid.get(x / pixel_size, y / pixel_size)
                .unwrap_or(Color::TRANSPARENT)
        },
    )
}
