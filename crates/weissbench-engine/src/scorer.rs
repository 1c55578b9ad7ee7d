//! Weissman score computation
//!
//! The score compares a target run against the reference run:
//!
//! ```text
//! alpha * (reference_ratio / target_ratio) * (ln(target_time) / ln(reference_time))
//! ```
//!
//! Any non-positive input yields 0. A reference time of exactly one second
//! makes the denominator zero and the result infinite or NaN; callers present
//! such values as they are.

use weissbench_types::{Alpha, BenchmarkResult};

/// Reference-relative scorer with a fixed scaling constant
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WeissmanScorer {
    alpha: Alpha,
}

impl WeissmanScorer {
    /// Create a scorer with the given scaling constant
    pub fn new(alpha: Alpha) -> Self {
        Self { alpha }
    }

    /// The scaling constant
    pub fn alpha(&self) -> Alpha {
        self.alpha
    }

    /// Score `target` against `reference` using their ratios and times
    pub fn score(&self, reference: &BenchmarkResult, target: &BenchmarkResult) -> f64 {
        weissman_score(
            self.alpha.get(),
            reference.compression_ratio(),
            reference.compression_time(),
            target.compression_ratio(),
            target.compression_time(),
        )
    }
}

/// Compute the Weissman score from raw values
pub fn weissman_score(
    alpha: f64,
    reference_ratio: f64,
    reference_time: f64,
    target_ratio: f64,
    target_time: f64,
) -> f64 {
    if reference_ratio <= 0.0 || reference_time <= 0.0 || target_ratio <= 0.0 || target_time <= 0.0
    {
        return 0.0;
    }

    alpha * (reference_ratio / target_ratio) * (target_time.ln() / reference_time.ln())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;
    use weissbench_types::CompressionAlgorithm;

    fn time_away_from_one() -> impl Strategy<Value = f64> {
        prop_oneof![0.001f64..0.99, 1.01f64..1000.0]
    }

    proptest! {
        #[test]
        fn test_identical_runs_score_alpha(
            alpha in 0.01f64..100.0,
            ratio in 0.01f64..1000.0,
            time in time_away_from_one(),
        ) {
            let score = weissman_score(alpha, ratio, time, ratio, time);
            prop_assert!((score - alpha).abs() < 1e-9 * alpha.max(1.0));
        }

        #[test]
        fn test_non_positive_input_scores_zero(
            values in prop::array::uniform4(0.001f64..1000.0),
            bad in -1000.0f64..=0.0,
            position in 0usize..4,
        ) {
            let mut values = values;
            values[position] = bad;
            let score = weissman_score(1.0, values[0], values[1], values[2], values[3]);
            prop_assert_eq!(score, 0.0);
        }
    }

    #[rstest]
    #[case(2.0, 0.5, 2.0, 0.5, 1.0)]
    #[case(2.0, 0.5, 4.0, 0.25, 1.0)]
    #[case(3.0, 2.0, 1.5, 4.0, 4.0)]
    fn test_known_scores(
        #[case] reference_ratio: f64,
        #[case] reference_time: f64,
        #[case] target_ratio: f64,
        #[case] target_time: f64,
        #[case] expected: f64,
    ) {
        let score = weissman_score(1.0, reference_ratio, reference_time, target_ratio, target_time);
        assert!((score - expected).abs() < 1e-12, "score {}", score);
    }

    #[test]
    fn test_alpha_scales_linearly() {
        let scorer = WeissmanScorer::new(Alpha::new(2.5).unwrap());
        assert!((weissman_score(2.5, 2.0, 0.5, 2.0, 0.5) - 2.5).abs() < 1e-12);
        assert_eq!(scorer.alpha().get(), 2.5);
    }

    #[test]
    fn test_score_from_results() {
        let reference =
            BenchmarkResult::from_parts(CompressionAlgorithm::Gzip, 10_000, 5_000, 2.0, 0.5, 0.0);
        let target =
            BenchmarkResult::from_parts(CompressionAlgorithm::Bzip2, 10_000, 5_000, 2.0, 0.5, 0.0);

        assert!((WeissmanScorer::default().score(&reference, &target) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_reference_time_of_one_second_is_not_finite() {
        let score = weissman_score(1.0, 2.0, 1.0, 2.0, 0.5);
        assert!(!score.is_finite());
    }
}
