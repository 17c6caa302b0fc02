//! Left/right symmetry scoring.

/// Averages closer to zero than this are treated as zero.
const AVERAGE_EPSILON: f64 = 1e-10;

/// Scores how similar a left/right pair is, as a percentage in `[0, 100]`.
///
/// - Identical values, including `(0, 0)`, are perfectly symmetric (100).
///   This holds for tiny equal pairs such as `(1e-11, 1e-11)` too, whose
///   mean would otherwise fall under the near-zero cutoff and score 0.
/// - Values that cancel out (`x`, `-x`) are fully asymmetric (0).
/// - Otherwise `100 - |left - right| / |mean| * 100`, floored at 0.
///
/// The score is rounded to one decimal place.
///
/// # Example
///
/// ```
/// use gait_analysis::symmetry_score;
///
/// assert!((symmetry_score(150.0, 150.0) - 100.0).abs() < 1e-12);
/// assert!((symmetry_score(90.0, 110.0) - 80.0).abs() < 1e-12);
/// assert!(symmetry_score(5.0, -5.0).abs() < 1e-12);
/// ```
#[must_use]
#[allow(clippy::float_cmp)]
pub fn symmetry_score(left: f64, right: f64) -> f64 {
    if left == right {
        return 100.0;
    }
    let average = (left + right) / 2.0;
    if average.abs() < AVERAGE_EPSILON {
        return 0.0;
    }
    let score = ((left - right).abs() / average.abs()).mul_add(-100.0, 100.0);
    (score.max(0.0) * 10.0).round() / 10.0
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn both_zero_is_symmetric() {
        assert_eq!(symmetry_score(0.0, 0.0), 100.0);
    }

    #[test]
    fn tiny_equal_values_are_symmetric() {
        assert_eq!(symmetry_score(1e-11, 1e-11), 100.0);
        assert_eq!(symmetry_score(-1e-11, -1e-11), 100.0);
        // Unequal values with a near-zero mean still score 0
        assert_eq!(symmetry_score(1e-11, -0.5e-11), 0.0);
    }

    #[test]
    fn cancelling_values_are_asymmetric() {
        assert_eq!(symmetry_score(12.0, -12.0), 0.0);
    }

    #[test]
    fn large_difference_floors_at_zero() {
        assert_eq!(symmetry_score(10.0, 100.0), 0.0);
    }

    #[test]
    fn rounds_to_one_decimal() {
        // 100 - (3 / 151.5) * 100 = 98.0198...
        assert_eq!(symmetry_score(150.0, 153.0), 98.0);
        // 100 - (1 / 90.5) * 100 = 98.895...
        assert_eq!(symmetry_score(90.0, 91.0), 98.9);
    }

    #[test]
    fn negative_pairs_stay_in_range() {
        let score = symmetry_score(-10.0, -20.0);
        assert!((0.0..=100.0).contains(&score));
        assert_eq!(score, symmetry_score(10.0, 20.0));
    }

    proptest! {
        #[test]
        fn proptest_identical_is_100(x in -1000.0..1000.0f64) {
            prop_assert_eq!(symmetry_score(x, x), 100.0);
        }

        #[test]
        fn proptest_negated_is_0(x in prop_oneof![-1000.0..-1e-6f64, 1e-6..1000.0f64]) {
            prop_assert_eq!(symmetry_score(x, -x), 0.0);
        }

        #[test]
        fn proptest_bounded_and_commutative(a in -500.0..500.0f64, b in -500.0..500.0f64) {
            let s = symmetry_score(a, b);
            prop_assert!((0.0..=100.0).contains(&s));
            prop_assert_eq!(s, symmetry_score(b, a));
        }
    }
}
