//! Small numeric helpers shared by the aggregation functions.

/// Round to two decimal places, the precision used by every reported metric.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Arithmetic mean. `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Population standard deviation. `None` for an empty slice; a single
/// value has zero deviation.
pub fn population_std_dev(values: &[f64]) -> Option<f64> {
    let m = mean(values)?;
    let variance = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64;
    Some(variance.sqrt())
}

/// Median of the values. `None` for an empty slice; for an even count the
/// two middle values are averaged.
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── round2 ────────────────────────────────────────────────────────────────

    #[test]
    fn test_round2_truncates_to_two_places() {
        assert_eq!(round2(3.14159), 3.14);
        assert_eq!(round2(26.456), 26.46);
        assert_eq!(round2(10.0), 10.0);
    }

    #[test]
    fn test_round2_small_values_stay_in_range() {
        assert_eq!(round2(0.004), 0.0);
        assert_eq!(round2(0.005), 0.01);
    }

    // ── mean ──────────────────────────────────────────────────────────────────

    #[test]
    fn test_mean_empty_is_none() {
        assert_eq!(mean(&[]), None);
    }

    #[test]
    fn test_mean_basic() {
        assert_eq!(mean(&[2.0, 4.0, 6.0]), Some(4.0));
    }

    // ── population_std_dev ────────────────────────────────────────────────────

    #[test]
    fn test_std_dev_empty_is_none() {
        assert_eq!(population_std_dev(&[]), None);
    }

    #[test]
    fn test_std_dev_single_value_is_zero() {
        assert_eq!(population_std_dev(&[5.0]), Some(0.0));
    }

    #[test]
    fn test_std_dev_equal_values_is_zero() {
        assert_eq!(population_std_dev(&[4.5, 4.5, 4.5]), Some(0.0));
    }

    #[test]
    fn test_std_dev_known_population() {
        // Population of {2, 4, 4, 4, 5, 5, 7, 9} has σ = 2 exactly.
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let sd = population_std_dev(&values).unwrap();
        assert!((sd - 2.0).abs() < 1e-12);
    }

    // ── median ────────────────────────────────────────────────────────────────

    #[test]
    fn test_median_empty_is_none() {
        assert_eq!(median(&[]), None);
    }

    #[test]
    fn test_median_odd_count() {
        assert_eq!(median(&[9.0, 1.0, 5.0]), Some(5.0));
    }

    #[test]
    fn test_median_even_count_averages_middle() {
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), Some(2.5));
    }

    #[test]
    fn test_median_does_not_mutate_input() {
        let values = [3.0, 1.0, 2.0];
        let _ = median(&values);
        assert_eq!(values, [3.0, 1.0, 2.0]);
    }
}
