//! Median-cut palette construction
//!
//! Buckets of weighted colors are split at their median along the channel
//! with the widest spread until the requested bucket count is reached or
//! every splittable bucket is flat on red, green and blue.

use crate::algorithm::histogram::{Channel, WeightedColor};
use crate::color::palette::{Color, Palette};

// Widest splittable bucket found during one pass
#[derive(Debug, Clone, Copy)]
struct SplitCandidate {
    index: usize,
    channel: Channel,
    range: u8,
}

/// Partition `colors` into at most `target_buckets` buckets
///
/// The first bucket holds every color; splitting stops early once no bucket
/// with more than one member has a non-zero red, green or blue range.
pub fn median_cut(colors: Vec<WeightedColor>, target_buckets: usize) -> Vec<Vec<WeightedColor>> {
    let mut buckets = vec![colors];

    while buckets.len() < target_buckets {
        let Some(candidate) = widest_bucket(&buckets) else {
            break;
        };
        if candidate.range == 0 {
            break;
        }

        let Some(bucket) = buckets.get_mut(candidate.index) else {
            break;
        };
        bucket.sort_by_key(|entry| entry.channel(candidate.channel));
        let mid = bucket.len() / 2;
        let upper = bucket.split_off(mid);
        buckets.insert(candidate.index + 1, upper);
    }

    log::trace!("median cut produced {} buckets", buckets.len());
    buckets
}

/// Reduce every bucket to its occurrence-weighted average color
pub fn palette_from_buckets(buckets: &[Vec<WeightedColor>]) -> Palette {
    buckets
        .iter()
        .map(|bucket| bucket_average(bucket))
        .collect::<Vec<_>>()
        .into()
}

/// Occurrence-weighted mean of every channel, alpha included
///
/// An empty bucket averages to opaque black.
pub fn bucket_average(bucket: &[WeightedColor]) -> Color {
    let total: u64 = bucket.iter().map(|entry| u64::from(entry.count)).sum();
    if total == 0 {
        return Color::OPAQUE_BLACK;
    }

    let mut sums = [0u64; 4];
    for entry in bucket {
        let weight = u64::from(entry.count);
        for (sum, value) in sums.iter_mut().zip(entry.color.channels()) {
            *sum += u64::from(value) * weight;
        }
    }

    Color::from_channels(sums.map(|sum| (sum as f64 / total as f64).round() as u8))
}

/// Red, green and blue spread of a bucket with the channel that attains the max
///
/// Ties prefer red over green over blue.
pub fn widest_channel(bucket: &[WeightedColor]) -> (Channel, u8) {
    let range = |channel: Channel| {
        let values = bucket.iter().map(|entry| entry.channel(channel));
        let max = values.clone().max().unwrap_or(0);
        let min = values.min().unwrap_or(0);
        max - min
    };

    let red = range(Channel::Red);
    let green = range(Channel::Green);
    let blue = range(Channel::Blue);

    if red >= green && red >= blue {
        (Channel::Red, red)
    } else if green >= blue {
        (Channel::Green, green)
    } else {
        (Channel::Blue, blue)
    }
}

// First bucket with the strictly largest range wins
fn widest_bucket(buckets: &[Vec<WeightedColor>]) -> Option<SplitCandidate> {
    let mut best: Option<SplitCandidate> = None;

    for (index, bucket) in buckets.iter().enumerate() {
        if bucket.len() <= 1 {
            continue;
        }
        let (channel, range) = widest_channel(bucket);
        if best.is_none_or(|current| range > current.range) {
            best = Some(SplitCandidate {
                index,
                channel,
                range,
            });
        }
    }

    best
}
