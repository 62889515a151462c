use waterline_common::collections::FastHashSet;

use crate::config::BinConfig;

/// Label emitted when an observation exceeds the high bound of the range.
pub const OVERFLOW_BIN: &str = "cumulative.hi";

fn bin_label(threshold: i64) -> String {
    format!("cumulative.{}", threshold)
}

/// Computes the set of cumulative bin labels that `value` falls into.
///
/// When the value exceeds the high bound of the range, the result is the
/// single overflow label [`OVERFLOW_BIN`], which is mutually exclusive with
/// all threshold labels. Otherwise, the result holds `cumulative.<t>` for
/// every threshold `t` that the value is at or below. Thresholds only
/// increase, so the result is always a contiguous upper suffix of the
/// threshold sequence: the smaller the value, the larger the set.
///
/// Pure and deterministic, with no failure path: a validated [`BinConfig`]
/// bounds the walk at [`MAX_BINS`][crate::MAX_BINS] + 1 thresholds.
pub fn compute_bins(config: &BinConfig, value: i64) -> FastHashSet<String> {
    let mut bins = FastHashSet::default();

    if value > config.high() {
        bins.insert(OVERFLOW_BIN.to_string());
        return bins;
    }

    for threshold in config.thresholds() {
        if value <= threshold {
            bins.insert(bin_label(threshold));
        }
    }

    bins
}

#[cfg(test)]
mod tests {
    use proptest::{prelude::*, proptest};

    use super::*;

    fn labels<const N: usize>(raw: [&str; N]) -> FastHashSet<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn value_within_range() {
        let config = BinConfig::new(100, 300, 100).expect("config should be valid");
        assert_eq!(compute_bins(&config, 231), labels(["cumulative.300"]));
    }

    #[test]
    fn value_above_high() {
        let config = BinConfig::new(100, 300, 100).expect("config should be valid");
        assert_eq!(compute_bins(&config, 301), labels(["cumulative.hi"]));
    }

    #[test]
    fn value_below_low() {
        let config = BinConfig::new(100, 300, 100).expect("config should be valid");
        assert_eq!(
            compute_bins(&config, 50),
            labels(["cumulative.100", "cumulative.200", "cumulative.300"])
        );
    }

    #[test]
    fn value_on_threshold() {
        let config = BinConfig::new(100, 300, 100).expect("config should be valid");
        assert_eq!(
            compute_bins(&config, 200),
            labels(["cumulative.200", "cumulative.300"])
        );
    }

    #[test]
    fn value_exactly_high() {
        // The high bound itself is still inside the range, not overflow.
        let config = BinConfig::new(100, 300, 100).expect("config should be valid");
        assert_eq!(compute_bins(&config, 300), labels(["cumulative.300"]));
    }

    #[test]
    fn negative_thresholds_label_verbatim() {
        let config = BinConfig::new(-200, 0, 100).expect("config should be valid");
        assert_eq!(
            compute_bins(&config, -150),
            labels(["cumulative.-100", "cumulative.0"])
        );
    }

    fn arb_config() -> impl Strategy<Value = BinConfig> {
        // Build from (low, step, bin count) so every generated triple is
        // valid by construction.
        (-100_000i64..100_000, 1i64..10_000, 1i64..=16).prop_map(|(low, step, bins)| {
            BinConfig::new(low, low + step * bins, step).expect("generated config should be valid")
        })
    }

    proptest! {
        #[test]
        fn property_overflow_is_exclusive(config in arb_config(), offset in 1i64..1_000_000) {
            let bins = compute_bins(&config, config.high() + offset);
            prop_assert_eq!(bins, labels(["cumulative.hi"]));
        }

        #[test]
        fn property_at_or_below_low_hits_every_bin(config in arb_config(), offset in 0i64..1_000_000) {
            let bins = compute_bins(&config, config.low() - offset);
            let expected = config.thresholds().count();
            prop_assert_eq!(bins.len(), expected);
            prop_assert!(config.thresholds().all(|t| bins.contains(&bin_label(t))));
        }

        #[test]
        fn property_larger_values_hit_fewer_bins(config in arb_config(), v1 in -1_000_000i64..1_000_000, v2 in -1_000_000i64..1_000_000) {
            let (v1, v2) = (v1.min(v2), v1.max(v2));
            prop_assume!(v2 <= config.high());

            let bins1 = compute_bins(&config, v1);
            let bins2 = compute_bins(&config, v2);
            prop_assert!(bins2.is_subset(&bins1));
        }

        #[test]
        fn property_result_is_contiguous_suffix(config in arb_config(), value in -1_000_000i64..1_000_000) {
            prop_assume!(value <= config.high());

            let bins = compute_bins(&config, value);
            // Once a threshold qualifies, every larger threshold must too.
            let mut seen_first = false;
            for t in config.thresholds() {
                if bins.contains(&bin_label(t)) {
                    seen_first = true;
                } else {
                    prop_assert!(!seen_first, "gap in threshold suffix at {}", t);
                }
            }
        }
    }
}
