//! Exact-color occurrence counting

use std::collections::HashMap;

use crate::color::palette::Color;
use crate::spatial::grid::PixelGrid;

/// Distinct color together with how many cells carry it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightedColor {
    /// The color
    pub color: Color,
    /// Number of occurrences, at least 1
    pub count: u32,
}

impl WeightedColor {
    /// Channel value used for range and split decisions
    pub const fn channel(&self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.color.r,
            Channel::Green => self.color.g,
            Channel::Blue => self.color.b,
        }
    }
}

/// Color channel eligible for median-cut splits; alpha never is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    /// Red
    Red,
    /// Green
    Green,
    /// Blue
    Blue,
}

/// Count every distinct RGBA tuple in `grid`
///
/// Entries appear in the order their color is first met in a row-major scan.
pub fn build_histogram(grid: &PixelGrid) -> Vec<WeightedColor> {
    let mut index: HashMap<Color, usize> = HashMap::new();
    let mut histogram: Vec<WeightedColor> = Vec::new();

    for color in grid.colors() {
        if let Some(entry) = index.get(&color).and_then(|&i| histogram.get_mut(i)) {
            entry.count += 1;
        } else {
            index.insert(color, histogram.len());
            histogram.push(WeightedColor { color, count: 1 });
        }
    }

    histogram
}
