use super::composition::residue_percentages;
use super::{BlendFormat, blend_with_composition, check_weight, ensure_length};
use crate::core::models::alphabet::{ALPHABET_SIZE, AminoAcid};
use crate::core::models::descriptors::DescriptorVector;
use crate::core::models::sequence::ProteinSequence;
use crate::core::tables::property::PropertyTable;
use crate::core::utils::math::round_to;
use crate::engine::config::PseudoAacParams;
use crate::engine::error::DescriptorError;
use tracing::debug;

const PSEUDO_AAC_FORMAT: BlendFormat = BlendFormat {
    correlation_scale: 100.0,
    digits: 3,
};

/// Pairwise residue term indexed by residue ordinals.
type PairMatrix = [[f64; ALPHABET_SIZE]; ALPHABET_SIZE];

fn normalized_tables(tables: &[PropertyTable]) -> Result<Vec<PropertyTable>, DescriptorError> {
    if tables.is_empty() {
        return Err(DescriptorError::InvalidParameter(
            "at least one property table is required".to_string(),
        ));
    }
    tables
        .iter()
        .map(|table| table.normalized().map_err(DescriptorError::from))
        .collect()
}

fn pair_matrix(term: impl Fn(AminoAcid, AminoAcid) -> f64) -> PairMatrix {
    let mut matrix = [[0.0; ALPHABET_SIZE]; ALPHABET_SIZE];
    for a in AminoAcid::ALL {
        for b in AminoAcid::ALL {
            matrix[a.index()][b.index()] = term(a, b);
        }
    }
    matrix
}

fn theta(normalized: &[PropertyTable], a: AminoAcid, b: AminoAcid) -> f64 {
    let squares: f64 = normalized.iter().map(|p| (p[a] - p[b]).powi(2)).sum();
    round_to(squares / normalized.len() as f64, 3)
}

/// Mean of a pair term over all residue pairs `k` apart, rounded to 3 decimals.
fn lag_mean(sequence: &ProteinSequence, k: usize, matrix: &PairMatrix) -> f64 {
    let residues = sequence.residues();
    let pairs = residues.len() - k;
    let total: f64 = residues
        .iter()
        .zip(&residues[k..])
        .map(|(a, b)| matrix[a.index()][b.index()])
        .sum();
    round_to(total / pairs as f64, 3)
}

/// Correlation `θ(a, b)`: mean squared difference of the normalized properties, 3 decimals.
pub fn correlation_function(
    a: AminoAcid,
    b: AminoAcid,
    tables: &[PropertyTable],
) -> Result<f64, DescriptorError> {
    Ok(theta(&normalized_tables(tables)?, a, b))
}

/// Mean correlation of residues `k` positions apart (requires `k < L`).
pub fn sequence_order_correlation_factor(
    sequence: &ProteinSequence,
    k: usize,
    tables: &[PropertyTable],
) -> Result<f64, DescriptorError> {
    ensure_length(sequence, "k", k, k + 1)?;
    let normalized = normalized_tables(tables)?;
    let matrix = pair_matrix(|a, b| theta(&normalized, a, b));
    Ok(lag_mean(sequence, k, &matrix))
}

/// Type I pseudo amino acid composition over the three standard properties.
pub fn pseudo_aac(
    sequence: &ProteinSequence,
    params: PseudoAacParams,
) -> Result<DescriptorVector, DescriptorError> {
    pseudo_aac_with_properties(sequence, params, &PropertyTable::pseudo_aac_defaults())
}

/// Type I pseudo amino acid composition over arbitrary property tables.
///
/// Yields `PAAC1..PAAC{20+lamda}`. `lamda = 0` reduces to the amino acid composition.
pub fn pseudo_aac_with_properties(
    sequence: &ProteinSequence,
    params: PseudoAacParams,
    tables: &[PropertyTable],
) -> Result<DescriptorVector, DescriptorError> {
    ensure_length(sequence, "lamda", params.lamda, params.lamda + 1)?;
    check_weight("PAAC", params.weight)?;
    let normalized = normalized_tables(tables)?;
    debug!(
        "Computing PAAC with lamda {} over {} properties.",
        params.lamda,
        normalized.len()
    );

    let matrix = pair_matrix(|a, b| theta(&normalized, a, b));
    let factors: Vec<f64> = (1..=params.lamda)
        .map(|k| lag_mean(sequence, k, &matrix))
        .collect();

    Ok(blend_with_composition(
        "PAAC",
        &residue_percentages(sequence),
        &factors,
        params.weight,
        PSEUDO_AAC_FORMAT,
    ))
}

/// Per-property amphiphilic correlation factors at lag `k`, in table order.
pub fn amphiphilic_correlation_factors(
    sequence: &ProteinSequence,
    k: usize,
    tables: &[PropertyTable],
) -> Result<Vec<f64>, DescriptorError> {
    ensure_length(sequence, "k", k, k + 1)?;
    let products = product_matrices(&normalized_tables(tables)?);
    Ok(products
        .iter()
        .map(|matrix| lag_mean(sequence, k, matrix))
        .collect())
}

fn product_matrices(normalized: &[PropertyTable]) -> Vec<PairMatrix> {
    normalized
        .iter()
        .map(|p| pair_matrix(|a, b| round_to(p[a] * p[b], 3)))
        .collect()
}

/// Type II (amphiphilic) pseudo amino acid composition over hydrophobicity and
/// hydrophilicity.
pub fn amphiphilic_pseudo_aac(
    sequence: &ProteinSequence,
    params: PseudoAacParams,
) -> Result<DescriptorVector, DescriptorError> {
    amphiphilic_pseudo_aac_with_properties(
        sequence,
        params,
        &PropertyTable::amphiphilic_defaults(),
    )
}

/// Type II pseudo amino acid composition over arbitrary property tables.
///
/// Yields `APAAC1..APAAC{20+n·lamda}` for `n` tables; the correlation terms list every
/// table's factor for lag 1, then lag 2, and so on.
pub fn amphiphilic_pseudo_aac_with_properties(
    sequence: &ProteinSequence,
    params: PseudoAacParams,
    tables: &[PropertyTable],
) -> Result<DescriptorVector, DescriptorError> {
    ensure_length(sequence, "lamda", params.lamda, params.lamda + 1)?;
    check_weight("APAAC", params.weight)?;
    let products = product_matrices(&normalized_tables(tables)?);
    debug!(
        "Computing APAAC with lamda {} over {} properties.",
        params.lamda,
        products.len()
    );

    let factors: Vec<f64> = (1..=params.lamda)
        .flat_map(|k| products.iter().map(move |matrix| (k, matrix)))
        .map(|(k, matrix)| lag_mean(sequence, k, matrix))
        .collect();

    Ok(blend_with_composition(
        "APAAC",
        &residue_percentages(sequence),
        &factors,
        params.weight,
        PSEUDO_AAC_FORMAT,
    ))
}
