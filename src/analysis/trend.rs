use crate::domain::TrendResult;
use crate::errors::AnalysisError;

/// Estimate a recency-weighted average over a most-recent-first series.
///
/// The i-th value (i = 0 is the latest game) is weighted `decay^i`, so a
/// decay of 1.0 degenerates to the plain arithmetic mean. Dispersion is the
/// population standard deviation of the unweighted values; it measures
/// game-to-game volatility independent of the recency weighting.
pub fn estimate_trend(values: &[f64], decay: f64) -> Result<TrendResult, AnalysisError> {
    if values.is_empty() {
        return Err(AnalysisError::EmptyInput);
    }

    let weighted_average = weighted_mean(values, decay);
    let dispersion = population_std_dev(values);

    Ok(TrendResult {
        weighted_average,
        dispersion,
        raw_values: values.to_vec(),
    })
}

fn weighted_mean(values: &[f64], decay: f64) -> f64 {
    let mut weighted_sum = 0.0;
    let mut weight_sum = 0.0;
    let mut weight = 1.0;

    for value in values {
        weighted_sum += value * weight;
        weight_sum += weight;
        weight *= decay;
    }

    weighted_sum / weight_sum
}

fn population_std_dev(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    variance.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_series_is_rejected() {
        assert_eq!(estimate_trend(&[], 0.9), Err(AnalysisError::EmptyInput));
    }

    #[test]
    fn single_game_returns_its_value() {
        let result = estimate_trend(&[10.0], 0.9).unwrap();
        assert_eq!(result.weighted_average, 10.0);
        assert_eq!(result.dispersion, 0.0);
        assert_eq!(result.raw_values, vec![10.0]);
    }

    #[test]
    fn decay_of_one_is_the_plain_mean() {
        let values = [28.0, 14.0, 35.0, 19.0];
        let result = estimate_trend(&values, 1.0).unwrap();
        let mean = values.iter().sum::<f64>() / values.len() as f64;
        assert!((result.weighted_average - mean).abs() < 1e-12);
    }

    #[test]
    fn recent_games_carry_more_weight() {
        // weights [1, 0.5, 0.25], sum 1.75
        let result = estimate_trend(&[30.0, 20.0, 10.0], 0.5).unwrap();
        let expected = (30.0 + 20.0 * 0.5 + 10.0 * 0.25) / 1.75;
        assert!((result.weighted_average - expected).abs() < 1e-12);
        assert_eq!(result.rounded_average(), 24.29);
    }

    #[test]
    fn dispersion_is_zero_iff_constant() {
        let constant = estimate_trend(&[7.0, 7.0, 7.0], 0.9).unwrap();
        assert_eq!(constant.dispersion, 0.0);

        let varied = estimate_trend(&[7.0, 7.0, 8.0], 0.9).unwrap();
        assert!(varied.dispersion > 0.0);
    }

    #[test]
    fn dispersion_uses_the_population_denominator() {
        // mean 20, squared deviations 100 + 0 + 100, divided by 3
        let result = estimate_trend(&[30.0, 20.0, 10.0], 0.9).unwrap();
        assert!((result.dispersion - (200.0_f64 / 3.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn output_is_deterministic() {
        let values = [23.0, 31.0, 18.0, 27.0];
        let first = estimate_trend(&values, 0.9).unwrap();
        let second = estimate_trend(&values, 0.9).unwrap();
        assert_eq!(first, second);
    }
}
