//! Tests for conversion defaults and tuning constants

#[cfg(test)]
mod tests {
    use pixelart::color::tint::PaletteStyle;
    use pixelart::io::configuration::{
        BRIGHT_LIGHTNESS_BOOST, BRIGHT_MAX_LIGHTNESS, BRIGHT_MIN_LIGHTNESS,
        BRIGHT_SATURATION_BOOST, DEFAULT_COLORS, DEFAULT_PALETTE_STYLE, DEFAULT_PIXEL_SIZE,
        GRAFFITI_DARKEN_FACTOR, GRAFFITI_LIGHTEN_FACTOR, GRAFFITI_SATURATION_BOOST, MAX_COLORS,
        MAX_INDIVIDUAL_PROGRESS_BARS, MIN_COLORS, MIN_PIXEL_SIZE, OUTPUT_EXTENSION,
        OUTPUT_SUFFIX, SUPPORTED_EXTENSIONS,
    };

    // Tests default conversion parameters
    // Verified by changing default values
    #[test]
    fn test_defaults() {
        assert_eq!(DEFAULT_PIXEL_SIZE, 8);
        assert_eq!(DEFAULT_COLORS, 16);
        assert_eq!(DEFAULT_PALETTE_STYLE, PaletteStyle::Graffiti);
    }

    // Tests validation bounds and that defaults sit inside them
    // Verified by raising the minimum color count above the default
    #[test]
    fn test_bounds_contain_defaults() {
        assert_eq!(MIN_PIXEL_SIZE, 1);
        assert_eq!((MIN_COLORS, MAX_COLORS), (2, 256));
        assert!((MIN_COLORS..=MAX_COLORS).contains(&DEFAULT_COLORS));
        assert!(DEFAULT_PIXEL_SIZE >= MIN_PIXEL_SIZE);
    }

    // Tests tint factors
    // Verified by changing a boost factor
    #[test]
    fn test_tint_factors() {
        let factors = [
            (GRAFFITI_SATURATION_BOOST, 1.3),
            (GRAFFITI_DARKEN_FACTOR, 0.85),
            (GRAFFITI_LIGHTEN_FACTOR, 1.1),
            (BRIGHT_SATURATION_BOOST, 1.5),
            (BRIGHT_LIGHTNESS_BOOST, 1.2),
            (BRIGHT_MIN_LIGHTNESS, 0.3),
            (BRIGHT_MAX_LIGHTNESS, 1.0),
        ];
        for (actual, expected) in factors {
            assert!((actual - expected).abs() < f64::EPSILON);
        }
    }

    // Tests filesystem safety of suffix
    // Verified by adding special character
    #[test]
    fn test_output_suffix_no_special_chars() {
        assert!(OUTPUT_SUFFIX.starts_with('_'));
        for ch in OUTPUT_SUFFIX.chars() {
            assert!(
                ch.is_alphanumeric() || ch == '_' || ch == '-',
                "Output suffix contains invalid character: {ch}"
            );
        }
        assert_eq!(OUTPUT_EXTENSION, "png");
    }

    // Tests supported extensions are lowercase and include png
    // Verified by dropping png from the list
    #[test]
    fn test_supported_extensions() {
        assert!(SUPPORTED_EXTENSIONS.contains(&"png"));
        for ext in SUPPORTED_EXTENSIONS {
            assert_eq!(ext, ext.to_lowercase());
        }
    }

    // Tests progress bar limit
    // Verified by increasing bar limit
    #[test]
    fn test_max_progress_bars_value() {
        assert_eq!(MAX_INDIVIDUAL_PROGRESS_BARS, 5);
    }
}
