//! Tests for median-cut splitting, channel selection and bucket averaging

#[cfg(test)]
mod tests {
    use pixelart::algorithm::histogram::{Channel, WeightedColor};
    use pixelart::algorithm::median_cut::{
        bucket_average, median_cut, palette_from_buckets, widest_channel,
    };
    use pixelart::color::palette::Color;

    fn weighted(r: u8, g: u8, b: u8, count: u32) -> WeightedColor {
        WeightedColor {
            color: Color::new(r, g, b, 255),
            count,
        }
    }

    // Tests the widest channel wins and ties prefer red, then green
    // Verified by reversing the tie-break order
    #[test]
    fn test_widest_channel_tie_break() {
        let spread_blue = [weighted(0, 0, 0, 1), weighted(10, 20, 30, 1)];
        assert_eq!(widest_channel(&spread_blue), (Channel::Blue, 30));

        let all_equal = [weighted(0, 0, 0, 1), weighted(50, 50, 50, 1)];
        assert_eq!(widest_channel(&all_equal), (Channel::Red, 50));

        let green_blue_tie = [weighted(0, 0, 0, 1), weighted(10, 40, 40, 1)];
        assert_eq!(widest_channel(&green_blue_tie), (Channel::Green, 40));
    }

    // Tests splitting sorts by the widest channel and halves at the midpoint
    // Verified by splitting at len / 2 + 1
    #[test]
    fn test_split_at_median() {
        let colors = vec![
            weighted(200, 0, 0, 1),
            weighted(10, 0, 0, 1),
            weighted(150, 0, 0, 1),
            weighted(50, 0, 0, 1),
            weighted(90, 0, 0, 1),
        ];

        let buckets = median_cut(colors, 2);
        assert_eq!(buckets.len(), 2);

        let reds: Vec<Vec<u8>> = buckets
            .iter()
            .map(|bucket| bucket.iter().map(|entry| entry.color.r).collect())
            .collect();
        assert_eq!(reds, vec![vec![10, 50], vec![90, 150, 200]]);
    }

    // Tests splitting stops early when remaining buckets are flat on RGB
    // Verified by removing the zero-range stop
    #[test]
    fn test_stops_on_flat_buckets() {
        // Same RGB with different alpha: alpha never drives a split
        let colors = vec![
            WeightedColor {
                color: Color::new(5, 5, 5, 0),
                count: 1,
            },
            WeightedColor {
                color: Color::new(5, 5, 5, 255),
                count: 1,
            },
            WeightedColor {
                color: Color::new(5, 5, 5, 100),
                count: 1,
            },
        ];

        let buckets = median_cut(colors, 3);
        assert_eq!(buckets.len(), 1);
    }

    // Tests the bucket with the widest range is split first
    // Verified by always splitting the first bucket
    #[test]
    fn test_widest_bucket_chosen() {
        let colors = vec![
            weighted(0, 0, 0, 1),
            weighted(10, 0, 0, 1),
            weighted(200, 0, 0, 1),
            weighted(255, 0, 0, 1),
        ];

        let buckets = median_cut(colors, 3);
        assert_eq!(buckets.len(), 3);
        // First split: {0, 10} and {200, 255}; both span ranges of 10 and 55
        let sizes: Vec<usize> = buckets.iter().map(Vec::len).collect();
        assert_eq!(sizes, vec![2, 1, 1]);
    }

    // Tests the average is weighted by occurrence count and rounded
    // Verified by ignoring counts in the average
    #[test]
    fn test_bucket_average_weighted() {
        let bucket = [weighted(0, 0, 0, 3), weighted(100, 10, 1, 1)];
        assert_eq!(bucket_average(&bucket), Color::new(25, 3, 0, 255));

        let alpha_mix = [
            WeightedColor {
                color: Color::new(0, 0, 0, 0),
                count: 1,
            },
            WeightedColor {
                color: Color::new(0, 0, 0, 255),
                count: 1,
            },
        ];
        assert_eq!(bucket_average(&alpha_mix), Color::new(0, 0, 0, 128));
    }

    // Tests empty buckets fall back to opaque black
    // Verified by returning transparent black
    #[test]
    fn test_empty_bucket_average() {
        assert_eq!(bucket_average(&[]), Color::OPAQUE_BLACK);
        let palette = palette_from_buckets(&[Vec::new()]);
        assert_eq!(palette.colors(), &[Color::OPAQUE_BLACK]);
    }
}
