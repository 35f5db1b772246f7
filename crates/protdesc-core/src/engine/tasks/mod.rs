pub mod autocorrelation;
pub mod composition;
pub mod ctd;
pub mod pseudo_aac;
pub mod quasi_sequence_order;
pub mod subsequence;

use crate::core::models::descriptors::DescriptorVector;
use crate::core::models::sequence::ProteinSequence;
use crate::core::utils::math::round_to;
use crate::engine::error::DescriptorError;
use std::ops::RangeInclusive;
use tracing::warn;

/// Weights the pseudo amino acid literature recommends; others are accepted with a warning.
const CONVENTIONAL_WEIGHT_RANGE: RangeInclusive<f64> = 0.05..=0.7;

pub(crate) fn ensure_length(
    sequence: &ProteinSequence,
    parameter: &'static str,
    value: usize,
    required: usize,
) -> Result<(), DescriptorError> {
    if sequence.len() < required {
        return Err(DescriptorError::InsufficientSequenceLength {
            parameter,
            value,
            required,
            actual: sequence.len(),
        });
    }
    Ok(())
}

pub(crate) fn is_conventional_weight(weight: f64) -> bool {
    CONVENTIONAL_WEIGHT_RANGE.contains(&weight)
}

/// Rejects negative or non-finite weights and warns about unconventional ones.
pub(crate) fn check_weight(family: &str, weight: f64) -> Result<(), DescriptorError> {
    if !weight.is_finite() || weight < 0.0 {
        return Err(DescriptorError::InvalidParameter(format!(
            "{family} weight must be a non-negative number, got {weight}"
        )));
    }
    if !is_conventional_weight(weight) {
        warn!(
            family,
            weight, "Weight lies outside the conventional range [0.05, 0.7]."
        );
    }
    Ok(())
}

/// Output scale and precision of a composition/correlation blend.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BlendFormat {
    pub correlation_scale: f64,
    pub digits: i32,
}

/// Combines 20 composition terms with per-lag correlation terms into one vector:
/// `composition[c] / (1 + w·Σθ)` followed by `scale · w·θ[k] / (1 + w·Σθ)`, numbered from 1.
pub(crate) fn blend_with_composition(
    prefix: &str,
    composition: &[f64; 20],
    correlations: &[f64],
    weight: f64,
    format: BlendFormat,
) -> DescriptorVector {
    let denominator = 1.0 + weight * correlations.iter().sum::<f64>();
    let mut result = DescriptorVector::with_capacity(composition.len() + correlations.len());
    let terms = composition.iter().map(|c| c / denominator).chain(
        correlations
            .iter()
            .map(|theta| weight * theta / denominator * format.correlation_scale),
    );
    for (i, value) in terms.enumerate() {
        result.insert(format!("{prefix}{}", i + 1), round_to(value, format.digits));
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_length_reports_requirement() {
        let seq = ProteinSequence::new("ACDE").unwrap();
        assert!(ensure_length(&seq, "lamda", 3, 4).is_ok());
        assert_eq!(
            ensure_length(&seq, "lamda", 4, 5),
            Err(DescriptorError::InsufficientSequenceLength {
                parameter: "lamda",
                value: 4,
                required: 5,
                actual: 4
            })
        );
    }

    #[test]
    fn check_weight_accepts_unconventional_but_rejects_negative_weights() {
        assert!(check_weight("PAAC", 0.05).is_ok());
        assert!(check_weight("PAAC", 0.9).is_ok());
        assert!(matches!(
            check_weight("PAAC", -0.1),
            Err(DescriptorError::InvalidParameter(_))
        ));
        assert!(check_weight("QSO", f64::NAN).is_err());
    }

    #[test]
    fn conventional_weight_range_is_inclusive() {
        assert!(is_conventional_weight(0.05));
        assert!(is_conventional_weight(0.7));
        assert!(!is_conventional_weight(0.04));
        assert!(!is_conventional_weight(0.9));
    }

    #[test]
    fn blend_without_correlations_returns_composition() {
        let mut composition = [0.0; 20];
        composition[0] = 50.0;
        composition[1] = 50.0;
        let format = BlendFormat {
            correlation_scale: 100.0,
            digits: 3,
        };
        let v = blend_with_composition("PAAC", &composition, &[], 0.05, format);
        assert_eq!(v.len(), 20);
        assert_eq!(v["PAAC1"], 50.0);
        assert_eq!(v["PAAC20"], 0.0);
    }

    #[test]
    fn blend_scales_composition_and_correlation_terms() {
        let mut composition = [0.0; 20];
        composition[0] = 100.0;
        let format = BlendFormat {
            correlation_scale: 100.0,
            digits: 3,
        };
        // denominator = 1 + 0.5 * 2.0 = 2.0
        let v = blend_with_composition("X", &composition, &[1.5, 0.5], 0.5, format);
        assert_eq!(v.len(), 22);
        assert_eq!(v["X1"], 50.0);
        assert_eq!(v["X21"], 37.5);
        assert_eq!(v["X22"], 12.5);
    }
}
