//! RGBA colors and the ordered palettes produced by quantization

use std::fmt;

/// Single RGBA sample with 8-bit channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Alpha channel
    pub a: u8,
}

impl Color {
    /// Fully transparent black, used for blocks with no contributing pixels
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Opaque black, used for buckets with no members
    pub const OPAQUE_BLACK: Self = Self::new(0, 0, 0, 255);

    /// Create a color from its four channels
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Build a color from an `[r, g, b, a]` array
    pub const fn from_channels(channels: [u8; 4]) -> Self {
        let [r, g, b, a] = channels;
        Self { r, g, b, a }
    }

    /// Channels as an `[r, g, b, a]` array
    pub const fn channels(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Sum of squared per-channel differences over all four channels
    pub fn distance_squared(self, other: Self) -> u32 {
        self.channels()
            .iter()
            .zip(other.channels().iter())
            .map(|(&lhs, &rhs)| {
                let diff = u32::from(lhs.abs_diff(rhs));
                diff * diff
            })
            .sum()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{:02x}{:02x}{:02x}{:02x}",
            self.r, self.g, self.b, self.a
        )
    }
}

/// Ordered color sequence used for nearest-color remapping
///
/// Entries are not required to be unique: degenerate buckets can average
/// to the same color, and a tint can collapse neighbouring shades.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Wrap an ordered list of colors
    pub const fn new(colors: Vec<Color>) -> Self {
        Self { colors }
    }

    /// Palette entries in order
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Number of entries
    pub const fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the palette has no entries
    pub const fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Produce a new palette by transforming every entry
    pub fn map(&self, f: impl FnMut(&Color) -> Color) -> Self {
        Self {
            colors: self.colors.iter().map(f).collect(),
        }
    }

    /// Consume the palette and return its entries
    pub fn into_colors(self) -> Vec<Color> {
        self.colors
    }
}

impl From<Vec<Color>> for Palette {
    fn from(colors: Vec<Color>) -> Self {
        Self::new(colors)
    }
}
