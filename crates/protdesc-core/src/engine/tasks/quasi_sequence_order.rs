use super::composition::residue_fractions;
use super::{BlendFormat, blend_with_composition, check_weight, ensure_length};
use crate::core::models::descriptors::DescriptorVector;
use crate::core::models::sequence::ProteinSequence;
use crate::core::tables::distance::DistanceMatrix;
use crate::core::utils::math::round_to;
use crate::engine::config::QuasiSequenceOrderParams;
use crate::engine::error::DescriptorError;
use tracing::debug;

const QUASI_SEQUENCE_ORDER_FORMAT: BlendFormat = BlendFormat {
    correlation_scale: 1.0,
    digits: 6,
};

/// Name prefixes of the coupling-number and quasi-sequence-order descriptors for one
/// distance matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceOrderPrefixes {
    pub coupling: &'static str,
    pub quasi: &'static str,
}

pub const CUSTOM_PREFIXES: SequenceOrderPrefixes = SequenceOrderPrefixes {
    coupling: "tau",
    quasi: "QSO",
};
pub const SCHNEIDER_WREDE_PREFIXES: SequenceOrderPrefixes = SequenceOrderPrefixes {
    coupling: "tausw",
    quasi: "QSOSW",
};
pub const GRANTHAM_PREFIXES: SequenceOrderPrefixes = SequenceOrderPrefixes {
    coupling: "taugrant",
    quasi: "QSOgrant",
};

fn tau(sequence: &ProteinSequence, d: usize, matrix: &DistanceMatrix) -> f64 {
    let residues = sequence.residues();
    let total: f64 = residues
        .iter()
        .zip(&residues[d..])
        .map(|(&a, &b)| matrix.distance(a, b).powi(2))
        .sum();
    round_to(total, 3)
}

/// Sequence-order coupling number `τ(d) = Σ D[S[i], S[i+d]]²` (requires `d < L`).
pub fn coupling_number(
    sequence: &ProteinSequence,
    d: usize,
    matrix: &DistanceMatrix,
) -> Result<f64, DescriptorError> {
    ensure_length(sequence, "d", d, d + 1)?;
    Ok(tau(sequence, d, matrix))
}

/// Coupling numbers for lags `1..=max_lag`, named `<prefix><d>`.
pub fn coupling_numbers(
    sequence: &ProteinSequence,
    max_lag: usize,
    matrix: &DistanceMatrix,
    prefix: &str,
) -> Result<DescriptorVector, DescriptorError> {
    ensure_length(sequence, "max_lag", max_lag, max_lag + 1)?;
    debug!(
        "Computing {} coupling numbers from the {} matrix.",
        max_lag,
        matrix.name()
    );
    Ok((1..=max_lag)
        .map(|d| (format!("{prefix}{d}"), tau(sequence, d, matrix)))
        .collect())
}

/// Schneider-Wrede coupling numbers followed by Grantham coupling numbers.
pub fn coupling_numbers_total(
    sequence: &ProteinSequence,
    max_lag: usize,
) -> Result<DescriptorVector, DescriptorError> {
    let mut result = coupling_numbers(
        sequence,
        max_lag,
        DistanceMatrix::schneider_wrede()?,
        SCHNEIDER_WREDE_PREFIXES.coupling,
    )?;
    result.extend(coupling_numbers(
        sequence,
        max_lag,
        DistanceMatrix::grantham()?,
        GRANTHAM_PREFIXES.coupling,
    )?);
    Ok(result)
}

/// Quasi-sequence-order descriptors `<prefix>1..<prefix>{20+max_lag}`: residue fractions
/// and weighted coupling numbers sharing the denominator `1 + w·Στ`, 6 decimals.
pub fn quasi_sequence_order(
    sequence: &ProteinSequence,
    params: QuasiSequenceOrderParams,
    matrix: &DistanceMatrix,
    prefix: &str,
) -> Result<DescriptorVector, DescriptorError> {
    ensure_length(sequence, "max_lag", params.max_lag, params.max_lag + 1)?;
    check_weight("QSO", params.weight)?;
    let taus: Vec<f64> = (1..=params.max_lag)
        .map(|d| tau(sequence, d, matrix))
        .collect();
    Ok(blend_with_composition(
        prefix,
        &residue_fractions(sequence),
        &taus,
        params.weight,
        QUASI_SEQUENCE_ORDER_FORMAT,
    ))
}

/// Schneider-Wrede and Grantham quasi-sequence-order descriptors together.
pub fn quasi_sequence_order_total(
    sequence: &ProteinSequence,
    params: QuasiSequenceOrderParams,
) -> Result<DescriptorVector, DescriptorError> {
    let mut result = quasi_sequence_order(
        sequence,
        params,
        DistanceMatrix::schneider_wrede()?,
        SCHNEIDER_WREDE_PREFIXES.quasi,
    )?;
    result.extend(quasi_sequence_order(
        sequence,
        params,
        DistanceMatrix::grantham()?,
        GRANTHAM_PREFIXES.quasi,
    )?);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::alphabet::ALPHABET_SIZE;

    const REFERENCE: &str =
        "ADGCGVGEGTGQGPMCNCMCMKWVYADEDAADLESDSFADEDASLESDSFPWSNQRVFCSFADEDAS";

    fn seq(s: &str) -> ProteinSequence {
        ProteinSequence::new(s).unwrap()
    }

    /// Distance 1 between different residues and 0 on the diagonal.
    fn mismatch_matrix() -> DistanceMatrix {
        let mut values = [[1.0; ALPHABET_SIZE]; ALPHABET_SIZE];
        for (i, row) in values.iter_mut().enumerate() {
            row[i] = 0.0;
        }
        DistanceMatrix::new("Mismatch", values).unwrap()
    }

    #[test]
    fn coupling_number_counts_mismatches_with_unit_matrix() {
        let s = seq("AACAAC");
        assert_eq!(coupling_number(&s, 1, &mismatch_matrix()).unwrap(), 3.0);
        assert_eq!(coupling_number(&s, 2, &mismatch_matrix()).unwrap(), 3.0);
        assert_eq!(coupling_number(&s, 3, &mismatch_matrix()).unwrap(), 0.0);
    }

    #[test]
    fn grantham_coupling_numbers_of_reference_sequence() {
        let v = coupling_numbers(
            &seq(REFERENCE),
            30,
            DistanceMatrix::grantham().unwrap(),
            GRANTHAM_PREFIXES.coupling,
        )
        .unwrap();
        assert_eq!(v.len(), 30);
        assert_eq!(v["taugrant1"], 883615.0);
        assert_eq!(v["taugrant2"], 764529.0);
        assert_eq!(v["taugrant3"], 1022764.0);
        assert_eq!(v["taugrant30"], 490936.0);
    }

    #[test]
    fn coupling_numbers_require_max_lag_below_length() {
        assert!(matches!(
            coupling_numbers(&seq("ACDE"), 4, &mismatch_matrix(), "tau"),
            Err(DescriptorError::InsufficientSequenceLength {
                parameter: "max_lag",
                required: 5,
                ..
            })
        ));
    }

    #[test]
    fn coupling_numbers_total_concatenates_both_matrices() {
        let v = coupling_numbers_total(&seq(REFERENCE), 30).unwrap();
        assert_eq!(v.len(), 60);
        assert_eq!(v.names()[0], "tausw1");
        assert_eq!(v.names()[30], "taugrant1");
    }

    #[test]
    fn quasi_sequence_order_with_unit_matrix() {
        // Στ = 6, denominator = 1.6
        let v = quasi_sequence_order(
            &seq("AACAAC"),
            QuasiSequenceOrderParams::new(2, 0.1),
            &mismatch_matrix(),
            CUSTOM_PREFIXES.quasi,
        )
        .unwrap();
        assert_eq!(v.len(), 22);
        assert_eq!(v["QSO1"], 0.416875);
        assert_eq!(v["QSO5"], 0.208125);
        assert_eq!(v["QSO2"], 0.0);
        assert_eq!(v["QSO21"], 0.1875);
        assert_eq!(v["QSO22"], 0.1875);
    }

    #[test]
    fn grantham_quasi_sequence_order_of_reference_sequence() {
        let v = quasi_sequence_order(
            &seq(REFERENCE),
            QuasiSequenceOrderParams::default(),
            DistanceMatrix::grantham().unwrap(),
            GRANTHAM_PREFIXES.quasi,
        )
        .unwrap();
        assert_eq!(v.len(), 50);
        assert_eq!(v["QSOgrant1"], 0.0);
        assert_eq!(v["QSOgrant21"], 0.042855);
        assert_eq!(v["QSOgrant50"], 0.02381);
    }

    #[test]
    fn quasi_sequence_order_total_has_100_entries_for_default_lag() {
        let v = quasi_sequence_order_total(&seq(REFERENCE), QuasiSequenceOrderParams::default())
            .unwrap();
        assert_eq!(v.len(), 100);
        assert_eq!(v.names()[0], "QSOSW1");
        assert_eq!(v.names()[49], "QSOSW50");
        assert_eq!(v.names()[50], "QSOgrant1");
    }

    #[test]
    fn quasi_sequence_order_terms_stay_finite_and_non_negative() {
        let v = quasi_sequence_order_total(&seq(REFERENCE), QuasiSequenceOrderParams::default())
            .unwrap();
        assert!(v.values().iter().all(|x| x.is_finite() && *x >= 0.0));
    }
}
