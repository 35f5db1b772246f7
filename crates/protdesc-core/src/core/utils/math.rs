/// Rounds the exact binary value to `digits` decimal places, ties to even.
pub fn round_to(value: f64, digits: i32) -> f64 {
    let digits = digits.max(0) as usize;
    format!("{value:.digits$}").parse().unwrap_or(value)
}

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Variance with divisor N.
pub fn population_variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64
}

pub fn population_std(values: &[f64]) -> f64 {
    population_variance(values).sqrt()
}
