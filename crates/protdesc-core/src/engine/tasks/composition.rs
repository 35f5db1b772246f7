use super::ensure_length;
use crate::core::models::alphabet::{ALPHABET_SIZE, AminoAcid};
use crate::core::models::descriptors::DescriptorVector;
use crate::core::models::sequence::ProteinSequence;
use crate::core::utils::math::round_to;
use crate::engine::error::DescriptorError;

/// Residue percentages `round(100·count/L, 3)` in alphabet order.
pub fn residue_percentages(sequence: &ProteinSequence) -> [f64; ALPHABET_SIZE] {
    let length = sequence.len() as f64;
    sequence
        .residue_counts()
        .map(|count| round_to(100.0 * count as f64 / length, 3))
}

/// Residue fractions `round(count/L, 3)` in alphabet order.
pub fn residue_fractions(sequence: &ProteinSequence) -> [f64; ALPHABET_SIZE] {
    let length = sequence.len() as f64;
    sequence
        .residue_counts()
        .map(|count| round_to(count as f64 / length, 3))
}

pub fn aa_composition(sequence: &ProteinSequence) -> DescriptorVector {
    AminoAcid::ALL
        .into_iter()
        .zip(residue_percentages(sequence))
        .map(|(aa, value)| (aa.letter().to_string(), value))
        .collect()
}

fn pair_counts(sequence: &ProteinSequence) -> Vec<u32> {
    let mut counts = vec![0u32; ALPHABET_SIZE * ALPHABET_SIZE];
    for window in sequence.residues().windows(2) {
        counts[window[0].index() * ALPHABET_SIZE + window[1].index()] += 1;
    }
    counts
}

/// Overlapping dipeptide frequencies `round(100·count/(L−1), 2)` for all 400 ordered pairs.
pub fn dipeptide_composition(
    sequence: &ProteinSequence,
) -> Result<DescriptorVector, DescriptorError> {
    ensure_length(sequence, "dipeptide window", 2, 2)?;
    let pairs = (sequence.len() - 1) as f64;
    let counts = pair_counts(sequence);

    let mut result = DescriptorVector::with_capacity(counts.len());
    for a in AminoAcid::ALL {
        for b in AminoAcid::ALL {
            let count = counts[a.index() * ALPHABET_SIZE + b.index()];
            result.insert(
                format!("{a}{b}"),
                round_to(100.0 * f64::from(count) / pairs, 2),
            );
        }
    }
    Ok(result)
}

/// Raw overlapping counts of all 8000 ordered 3-mers. Sequences shorter than three
/// residues yield all zeros.
pub fn tripeptide_spectrum(sequence: &ProteinSequence) -> DescriptorVector<u32> {
    let mut counts = vec![0u32; ALPHABET_SIZE.pow(3)];
    for window in sequence.residues().windows(3) {
        let index = (window[0].index() * ALPHABET_SIZE + window[1].index()) * ALPHABET_SIZE
            + window[2].index();
        counts[index] += 1;
    }

    let mut result = DescriptorVector::with_capacity(counts.len());
    let mut values = counts.into_iter();
    for a in AminoAcid::ALL {
        for b in AminoAcid::ALL {
            for c in AminoAcid::ALL {
                result.insert(format!("{a}{b}{c}"), values.next().unwrap_or_default());
            }
        }
    }
    result
}

/// Amino acid, dipeptide and tripeptide descriptors together (8420 entries).
pub fn aa_dipeptide_composition(
    sequence: &ProteinSequence,
) -> Result<DescriptorVector, DescriptorError> {
    let mut result = aa_composition(sequence);
    result.extend(dipeptide_composition(sequence)?);
    result.extend(tripeptide_spectrum(sequence).map(f64::from));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    const REFERENCE: &str =
        "ADGCGVGEGTGQGPMCNCMCMKWVYADEDAADLESDSFADEDASLESDSFPWSNQRVFCSFADEDAS";

    fn seq(s: &str) -> ProteinSequence {
        ProteinSequence::new(s).unwrap()
    }

    #[test]
    fn aa_composition_uses_percentages_rounded_to_three_places() {
        let reference = seq(REFERENCE);
        assert_eq!(reference.len(), 67);
        let aac = aa_composition(&reference);
        assert_eq!(aac.len(), 20);
        assert_eq!(aac["A"], 11.94);
        assert_eq!(aac["D"], 14.925);
        assert_eq!(aac["I"], 0.0);
    }

    #[test]
    fn aa_composition_is_in_alphabet_order_and_sums_to_about_100() {
        let aac = aa_composition(&seq(REFERENCE));
        let names: String = aac.names().concat();
        assert_eq!(names, "ARNDCEQGHILKMFPSTWYV");
        let total: f64 = aac.values().iter().sum();
        assert!((total - 100.0).abs() <= 0.01);
    }

    #[test]
    fn aa_composition_of_single_residue_is_one_hundred_percent() {
        let aac = aa_composition(&seq("W"));
        assert_eq!(aac["W"], 100.0);
        assert_eq!(aac["A"], 0.0);
    }

    #[test]
    fn aa_composition_rounds_exact_ties_to_even() {
        let sequence = format!("A{}", "G".repeat(63));
        let aac = aa_composition(&seq(&sequence));
        // 1/64 of 100 is exactly 1.5625.
        assert_eq!(aac["A"], 1.562);
        assert_eq!(aac["G"], 98.438);
    }

    #[test]
    fn dipeptide_composition_rounds_exact_ties_to_even() {
        let sequence = format!("AC{}", "G".repeat(31));
        let dpc = dipeptide_composition(&seq(&sequence)).unwrap();
        // One of 32 pairs is exactly 3.125 percent.
        assert_eq!(dpc["AC"], 3.12);
        assert_eq!(dpc["CG"], 3.12);
        assert_eq!(dpc["GG"], 93.75);
    }

    #[test]
    fn dipeptide_composition_counts_overlapping_pairs() {
        let dpc = dipeptide_composition(&seq(REFERENCE)).unwrap();
        assert_eq!(dpc.len(), 400);
        // "AD" occurs five times among the 66 adjacent pairs.
        assert_eq!(dpc["AD"], 7.58);
        assert_eq!(dpc["AA"], 1.52);
        assert_eq!(dpc["WW"], 0.0);
    }

    #[test]
    fn dipeptide_composition_of_homopolymer_counts_every_position() {
        let dpc = dipeptide_composition(&seq("AAAA")).unwrap();
        assert_eq!(dpc["AA"], 100.0);
    }

    #[test]
    fn dipeptide_composition_requires_two_residues() {
        assert!(matches!(
            dipeptide_composition(&seq("A")),
            Err(DescriptorError::InsufficientSequenceLength {
                required: 2,
                actual: 1,
                ..
            })
        ));
    }

    #[test]
    fn tripeptide_spectrum_counts_overlapping_triples() {
        let tpc = tripeptide_spectrum(&seq(REFERENCE));
        assert_eq!(tpc.len(), 8000);
        assert_eq!(tpc["ADE"], 3);
        assert_eq!(tpc.names()[0], "AAA");
        assert_eq!(tpc.names()[7999], "VVV");
        let total: u32 = tpc.values().iter().sum();
        assert_eq!(total, 65);
    }

    #[test]
    fn tripeptide_spectrum_of_homopolymer_counts_overlaps() {
        let tpc = tripeptide_spectrum(&seq("AAAA"));
        assert_eq!(tpc["AAA"], 2);
    }

    #[test]
    fn tripeptide_spectrum_of_short_sequence_is_all_zero() {
        let tpc = tripeptide_spectrum(&seq("AC"));
        assert!(tpc.values().iter().all(|&c| c == 0));
    }

    #[test]
    fn aa_dipeptide_composition_unions_all_three_families() {
        let all = aa_dipeptide_composition(&seq(REFERENCE)).unwrap();
        assert_eq!(all.len(), 8420);
        assert_eq!(all["A"], 11.94);
        assert_eq!(all["AD"], 7.58);
        assert_eq!(all["ADE"], 3.0);
    }

    #[test]
    fn residue_fractions_are_unscaled() {
        let fractions = residue_fractions(&seq("AACG"));
        assert_eq!(fractions[AminoAcid::Alanine.index()], 0.5);
        assert_eq!(fractions[AminoAcid::Cysteine.index()], 0.25);
    }
}
