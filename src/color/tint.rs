//! Stylistic palette tints applied in HSL space
//!
//! A tint only touches the red, green and blue channels. Alpha is carried
//! through unchanged, and every tint returns a new palette.

use crate::color::hsl::{Hsl, hsl_to_rgb, rgb_to_hsl};
use crate::color::palette::{Color, Palette};
use crate::io::configuration::{
    BRIGHT_LIGHTNESS_BOOST, BRIGHT_MAX_LIGHTNESS, BRIGHT_MIN_LIGHTNESS, BRIGHT_SATURATION_BOOST,
    GRAFFITI_DARKEN_FACTOR, GRAFFITI_LIGHTEN_FACTOR, GRAFFITI_SATURATION_BOOST,
};
use crate::io::error::{PixelArtError, invalid_argument};
use std::fmt;
use std::str::FromStr;

/// Look applied to the quantized palette before remapping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum PaletteStyle {
    /// Leave the bucket averages untouched
    Auto,
    /// Saturated colors with lightness pushed toward the extremes
    #[default]
    Graffiti,
    /// Saturated colors lifted into the upper lightness range
    Bright,
}

impl PaletteStyle {
    /// Every style, in declaration order
    pub const ALL: [Self; 3] = [Self::Auto, Self::Graffiti, Self::Bright];

    /// Lowercase name accepted by [`FromStr`]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Graffiti => "graffiti",
            Self::Bright => "bright",
        }
    }

    /// Tint a single HSL value according to this style
    pub fn tint_hsl(self, hsl: Hsl) -> Hsl {
        match self {
            Self::Auto => hsl,
            Self::Graffiti => {
                let l = if hsl.l < 0.5 {
                    hsl.l * GRAFFITI_DARKEN_FACTOR
                } else {
                    (hsl.l * GRAFFITI_LIGHTEN_FACTOR).min(1.0)
                };
                Hsl {
                    h: hsl.h,
                    s: (hsl.s * GRAFFITI_SATURATION_BOOST).min(1.0),
                    l,
                }
            }
            Self::Bright => Hsl {
                h: hsl.h,
                s: (hsl.s * BRIGHT_SATURATION_BOOST).min(1.0),
                l: (hsl.l * BRIGHT_LIGHTNESS_BOOST)
                    .clamp(BRIGHT_MIN_LIGHTNESS, BRIGHT_MAX_LIGHTNESS),
            },
        }
    }

    /// Tint a whole palette; `Auto` returns an identical copy
    pub fn apply(self, palette: &Palette) -> Palette {
        match self {
            Self::Auto => palette.clone(),
            Self::Graffiti => tint_graffiti(palette),
            Self::Bright => tint_bright(palette),
        }
    }
}

/// Boost saturation and push lightness away from the midpoint
pub fn tint_graffiti(palette: &Palette) -> Palette {
    palette.map(|color| tint_color(*color, PaletteStyle::Graffiti))
}

/// Boost saturation and lift lightness into `[0.3, 1.0]`
pub fn tint_bright(palette: &Palette) -> Palette {
    palette.map(|color| tint_color(*color, PaletteStyle::Bright))
}

fn tint_color(color: Color, style: PaletteStyle) -> Color {
    let tinted = style.tint_hsl(rgb_to_hsl(color.r, color.g, color.b));
    let (r, g, b) = hsl_to_rgb(tinted.h, tinted.s, tinted.l);
    Color::new(r, g, b, color.a)
}

impl fmt::Display for PaletteStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PaletteStyle {
    type Err = PixelArtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|style| style.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                invalid_argument("palette", &s, &"expected one of auto, graffiti, bright")
            })
    }
}
