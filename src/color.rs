use eframe::egui::Color32;

// ---------------------------------------------------------------------------
// Bucket color table: percent → bar color
// ---------------------------------------------------------------------------

/// Neutral color for percents outside the table's span.
pub const FALLBACK_COLOR: Color32 = Color32::from_rgb(0xb0, 0xb0, 0xb0);

/// Upper edge of the last bucket, inclusive.
const BUCKET_MAX: f64 = 75.0;

/// Sorted (lower bound, color) pairs. Each bucket runs from its bound
/// up to (exclusive) the next bound; the last runs to `BUCKET_MAX`
/// inclusive. The gradient brightens with magnitude.
const BUCKETS: [(f64, Color32); 13] = [
    (5.0, Color32::from_rgb(0x24, 0x78, 0x81)),
    (12.0, Color32::from_rgb(0x2b, 0x96, 0x99)),
    (18.0, Color32::from_rgb(0x18, 0xaf, 0xab)),
    (20.0, Color32::from_rgb(0x2e, 0xa2, 0x9f)),
    (25.0, Color32::from_rgb(0x36, 0xbb, 0xb7)),
    (30.0, Color32::from_rgb(0x33, 0xc5, 0xc1)),
    (35.0, Color32::from_rgb(0x3c, 0xce, 0xca)),
    (40.0, Color32::from_rgb(0x2a, 0xbe, 0xc3)),
    (47.0, Color32::from_rgb(0x2b, 0xca, 0xcf)),
    (53.0, Color32::from_rgb(0x32, 0xd0, 0xd5)),
    (60.0, Color32::from_rgb(0x2f, 0xdd, 0xe2)),
    (66.0, Color32::from_rgb(0x30, 0xe7, 0xec)),
    (72.0, Color32::from_rgb(0x38, 0xf5, 0xfb)),
];

/// Look up the bar color for a percent value. Pure: equal inputs in the
/// same bucket always yield the same color.
pub fn bucket_color(percent: f64) -> Color32 {
    if !percent.is_finite() || percent < BUCKETS[0].0 || percent > BUCKET_MAX {
        return FALLBACK_COLOR;
    }
    let idx = BUCKETS.partition_point(|&(bound, _)| bound <= percent);
    BUCKETS[idx - 1].1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buckets_are_sorted_and_contiguous() {
        for pair in BUCKETS.windows(2) {
            assert!(pair[0].0 < pair[1].0);
        }
        assert!(BUCKETS[BUCKETS.len() - 1].0 < BUCKET_MAX);
    }

    #[test]
    fn lower_bounds_are_inclusive() {
        for &(bound, color) in &BUCKETS {
            assert_eq!(bucket_color(bound), color);
        }
    }

    #[test]
    fn upper_bounds_are_exclusive_except_last() {
        // Just under the second bound still falls in the first bucket.
        assert_eq!(bucket_color(11.999), BUCKETS[0].1);
        assert_eq!(bucket_color(12.0), BUCKETS[1].1);
        // The final bucket is closed at the top.
        assert_eq!(bucket_color(75.0), BUCKETS[12].1);
    }

    #[test]
    fn out_of_range_values_use_the_fallback() {
        assert_eq!(bucket_color(4.9), FALLBACK_COLOR);
        assert_eq!(bucket_color(75.1), FALLBACK_COLOR);
        assert_eq!(bucket_color(0.0), FALLBACK_COLOR);
        assert_eq!(bucket_color(f64::NAN), FALLBACK_COLOR);
    }

    #[test]
    fn example_values_map_to_expected_buckets() {
        // 25.4 sits in [25, 30), 18.0 in [18, 20).
        assert_eq!(bucket_color(25.4), Color32::from_rgb(0x36, 0xbb, 0xb7));
        assert_eq!(bucket_color(18.0), Color32::from_rgb(0x18, 0xaf, 0xab));
    }

    #[test]
    fn equal_inputs_yield_equal_colors() {
        assert_eq!(bucket_color(42.0), bucket_color(42.0));
        // Anywhere inside one bucket maps to that bucket's color.
        assert_eq!(bucket_color(40.0), bucket_color(46.9));
    }
}
