//! Tests for exact-color histogram construction

#[cfg(test)]
mod tests {
    use pixelart::algorithm::histogram::{Channel, WeightedColor, build_histogram};
    use pixelart::color::palette::Color;
    use pixelart::spatial::grid::PixelGrid;

    // Tests colors are counted exactly and listed in first-seen order
    // Verified by sorting the histogram by color
    #[test]
    fn test_histogram_counts_in_scan_order() {
        let blue = Color::new(0, 0, 255, 255);
        let red = Color::new(255, 0, 0, 255);
        let clear_red = Color::new(255, 0, 0, 0);
        let grid = PixelGrid::from_fn(3, 2, |x, y| match (x, y) {
            (0, 0) | (2, 1) => blue,
            (1, 1) => clear_red,
            _ => red,
        });

        let histogram = build_histogram(&grid);
        assert_eq!(
            histogram,
            vec![
                WeightedColor {
                    color: blue,
                    count: 2
                },
                WeightedColor {
                    color: red,
                    count: 3
                },
                WeightedColor {
                    color: clear_red,
                    count: 1
                },
            ]
        );
    }

    // Tests an empty grid has an empty histogram
    // Verified by seeding the histogram with a default color
    #[test]
    fn test_histogram_empty_grid() {
        assert!(build_histogram(&PixelGrid::empty()).is_empty());
    }

    // Tests channel accessor picks the matching component
    // Verified by returning alpha for blue
    #[test]
    fn test_channel_accessor() {
        let entry = WeightedColor {
            color: Color::new(1, 2, 3, 4),
            count: 1,
        };
        assert_eq!(entry.channel(Channel::Red), 1);
        assert_eq!(entry.channel(Channel::Green), 2);
        assert_eq!(entry.channel(Channel::Blue), 3);
    }
}
