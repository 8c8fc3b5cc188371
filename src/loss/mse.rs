pub struct MseLoss;

impl MseLoss {
    /// Scalar MSE: mean((predicted - expected)²). Used for progress
    /// reporting only — the delta rule updates from the raw error, so no
    /// loss derivative is involved in training.
    pub fn loss(predicted: &[f64], expected: &[f64]) -> f64 {
        let n = predicted.len() as f64;
        predicted.iter().zip(expected.iter())
            .map(|(a, b)| (a - b).powi(2))
            .sum::<f64>() / n
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loss_is_zero_for_perfect_prediction() {
        assert_eq!(MseLoss::loss(&[0.5, 0.25], &[0.5, 0.25]), 0.0);
    }

    #[test]
    fn loss_averages_squared_errors() {
        // ((1-0)² + (0-1)²) / 2 = 1
        assert_eq!(MseLoss::loss(&[1.0, 0.0], &[0.0, 1.0]), 1.0);
    }
}
