//! Rectangular RGBA pixel grids passed between pipeline stages
//!
//! Storage is an `(height, width, 4)` array in standard layout, which is the
//! same row-major, top-left-origin byte order image decoders hand out. A grid
//! is never mutated once a stage has produced it; each stage builds a new one.

use ndarray::Array3;

use crate::color::palette::Color;
use crate::io::error::{Result, invalid_argument};

/// Number of channels per cell
pub const CHANNELS: usize = 4;

/// Immutable RGBA pixel grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    data: Array3<u8>,
}

impl PixelGrid {
    /// Create a grid filled with a single color
    pub fn filled(width: u32, height: u32, color: Color) -> Self {
        let mut data = Array3::zeros((height as usize, width as usize, CHANNELS));
        for mut cell in data.lanes_mut(ndarray::Axis(2)) {
            for (slot, value) in cell.iter_mut().zip(color.channels()) {
                *slot = value;
            }
        }
        Self { data }
    }

    /// Create a grid with no cells
    pub fn empty() -> Self {
        Self {
            data: Array3::zeros((0, 0, CHANNELS)),
        }
    }

    /// Wrap row-major RGBA bytes
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `samples.len() != width * height * 4`
    pub fn from_raw(width: u32, height: u32, samples: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * CHANNELS;
        if samples.len() != expected {
            return Err(invalid_argument(
                "source grid",
                &format!("{width}x{height} with {} samples", samples.len()),
                &format!("expected {expected} samples (width * height * 4)"),
            ));
        }

        let data = Array3::from_shape_vec((height as usize, width as usize, CHANNELS), samples)
            .map_err(|e| invalid_argument("source grid", &format!("{width}x{height}"), &e))?;
        Ok(Self { data })
    }

    /// Build a grid by evaluating `f(x, y)` for every cell
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> Color) -> Self {
        let mut samples = Vec::with_capacity(width as usize * height as usize * CHANNELS);
        for y in 0..height {
            for x in 0..width {
                samples.extend_from_slice(&f(x, y).channels());
            }
        }
        let data = Array3::from_shape_vec((height as usize, width as usize, CHANNELS), samples)
            .unwrap_or_else(|_| Array3::zeros((height as usize, width as usize, CHANNELS)));
        Self { data }
    }

    /// Grid width in cells
    pub fn width(&self) -> u32 {
        self.data.dim().1 as u32
    }

    /// Grid height in cells
    pub fn height(&self) -> u32 {
        self.data.dim().0 as u32
    }

    /// Width and height in cells
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    /// Whether the grid has zero area
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of cells
    pub fn cell_count(&self) -> usize {
        let (height, width, _) = self.data.dim();
        width * height
    }

    /// Color at `(x, y)`, or `None` outside the grid
    pub fn get(&self, x: u32, y: u32) -> Option<Color> {
        let (y, x) = (y as usize, x as usize);
        Some(Color::new(
            *self.data.get((y, x, 0))?,
            *self.data.get((y, x, 1))?,
            *self.data.get((y, x, 2))?,
            *self.data.get((y, x, 3))?,
        ))
    }

    /// Iterate over every cell in row-major order
    pub fn colors(&self) -> impl Iterator<Item = Color> + '_ {
        self.data.lanes(ndarray::Axis(2)).into_iter().map(|cell| {
            let mut channels = [0u8; CHANNELS];
            for (slot, &value) in channels.iter_mut().zip(cell.iter()) {
                *slot = value;
            }
            Color::from_channels(channels)
        })
    }

    /// Row-major RGBA bytes
    pub fn to_raw(&self) -> Vec<u8> {
        self.data.iter().copied().collect()
    }

    /// Build a grid of the same size with every cell replaced by `f(color)`
    pub fn map_colors(&self, mut f: impl FnMut(Color) -> Color) -> Self {
        let mut samples = Vec::with_capacity(self.data.len());
        for color in self.colors() {
            samples.extend_from_slice(&f(color).channels());
        }
        let (height, width, _) = self.data.dim();
        let data = Array3::from_shape_vec((height, width, CHANNELS), samples)
            .unwrap_or_else(|_| Array3::zeros((height, width, CHANNELS)));
        Self { data }
    }
}

impl Default for PixelGrid {
    fn default() -> Self {
        Self::empty()
    }
}
