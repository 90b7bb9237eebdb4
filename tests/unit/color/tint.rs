//! Tests for palette tint styles and style name parsing

#[cfg(test)]
mod tests {
    use pixelart::color::hsl::{Hsl, rgb_to_hsl};
    use pixelart::color::palette::{Color, Palette};
    use pixelart::color::tint::{PaletteStyle, tint_bright, tint_graffiti};

    fn sample_palette() -> Palette {
        Palette::new(vec![
            Color::new(200, 40, 40, 255),
            Color::new(30, 60, 90, 128),
            Color::new(120, 200, 140, 0),
            Color::new(128, 128, 128, 255),
        ])
    }

    // Tests auto leaves every channel bit-identical
    // Verified by routing auto through the HSL conversion
    #[test]
    fn test_auto_is_identity() {
        let palette = sample_palette();
        assert_eq!(PaletteStyle::Auto.apply(&palette), palette);
    }

    // Tests tints never touch alpha
    // Verified by resetting alpha to 255 in the tint
    #[test]
    fn test_tints_preserve_alpha() {
        let palette = sample_palette();
        for tinted in [tint_graffiti(&palette), tint_bright(&palette)] {
            let alphas: Vec<u8> = tinted.colors().iter().map(|c| c.a).collect();
            assert_eq!(alphas, vec![255, 128, 0, 255]);
        }
    }

    // Tests graffiti darkens dark colors and lightens light ones
    // Verified by swapping the darken and lighten factors
    #[test]
    fn test_graffiti_lightness_split() {
        let dark = PaletteStyle::Graffiti.tint_hsl(Hsl {
            h: 0.2,
            s: 0.4,
            l: 0.4,
        });
        assert!((dark.l - 0.34).abs() < 1e-12);
        assert!((dark.s - 0.52).abs() < 1e-12);
        assert!((dark.h - 0.2).abs() < 1e-12);

        let light = PaletteStyle::Graffiti.tint_hsl(Hsl {
            h: 0.2,
            s: 0.9,
            l: 0.95,
        });
        assert!((light.l - 1.0).abs() < 1e-12, "lightness clamps at 1.0");
        assert!((light.s - 1.0).abs() < 1e-12, "saturation clamps at 1.0");

        let midpoint = PaletteStyle::Graffiti.tint_hsl(Hsl {
            h: 0.0,
            s: 0.5,
            l: 0.5,
        });
        assert!((midpoint.l - 0.55).abs() < 1e-12, "0.5 counts as light");
    }

    // Tests bright lightness is clamped into [0.3, 1.0]
    // Verified by removing the lower clamp
    #[test]
    fn test_bright_lightness_clamp() {
        let dim = PaletteStyle::Bright.tint_hsl(Hsl {
            h: 0.5,
            s: 0.2,
            l: 0.1,
        });
        assert!((dim.l - 0.3).abs() < 1e-12);
        assert!((dim.s - 0.3).abs() < 1e-12);

        let mid = PaletteStyle::Bright.tint_hsl(Hsl {
            h: 0.5,
            s: 0.8,
            l: 0.5,
        });
        assert!((mid.l - 0.6).abs() < 1e-12);
        assert!((mid.s - 1.0).abs() < 1e-12);
    }

    // Tests saturation never decreases under either tint
    // Verified by dividing instead of multiplying saturation
    #[test]
    fn test_saturation_monotonic() {
        for color in sample_palette().colors() {
            let before = rgb_to_hsl(color.r, color.g, color.b);
            for style in [PaletteStyle::Graffiti, PaletteStyle::Bright] {
                let after = style.tint_hsl(before);
                assert!(after.s >= before.s && after.s <= 1.0, "{style}: {after:?}");
            }
        }
    }

    // Tests a saturated red stays red after graffiti tint
    // Verified by zeroing hue in the tint
    #[test]
    fn test_graffiti_on_rgb() {
        let tinted = tint_graffiti(&Palette::new(vec![Color::new(200, 40, 40, 255)]));
        let color = tinted.colors()[0];
        assert!(color.r > color.g && color.r > color.b);
        assert_eq!(color.g, color.b);
    }

    // Tests style names parse case-insensitively and reject unknown names
    // Verified by removing the case folding
    #[test]
    fn test_style_from_str() {
        assert_eq!("auto".parse::<PaletteStyle>().ok(), Some(PaletteStyle::Auto));
        assert_eq!(
            "Graffiti".parse::<PaletteStyle>().ok(),
            Some(PaletteStyle::Graffiti)
        );
        assert_eq!(
            " BRIGHT ".parse::<PaletteStyle>().ok(),
            Some(PaletteStyle::Bright)
        );

        let err = "neon".parse::<PaletteStyle>().unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(err.to_string().contains("palette"));
    }

    // Tests default style and display names
    // Verified by changing the default variant
    #[test]
    fn test_style_default_and_display() {
        assert_eq!(PaletteStyle::default(), PaletteStyle::Graffiti);
        let names: Vec<String> = PaletteStyle::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(names, vec!["auto", "graffiti", "bright"]);
    }
}
