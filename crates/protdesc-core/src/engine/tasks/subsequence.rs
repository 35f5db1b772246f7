use crate::core::models::alphabet::AminoAcid;
use crate::core::models::sequence::ProteinSequence;

/// All windows of `2·window + 1` residues centred on an occurrence of `center`, in sequence
/// order. Occurrences closer than `window` residues to either end are skipped.
pub fn subsequences(sequence: &ProteinSequence, center: AminoAcid, window: usize) -> Vec<String> {
    let residues = sequence.residues();
    residues
        .iter()
        .enumerate()
        .filter(|&(i, &aa)| aa == center && i >= window && i + window < residues.len())
        .map(|(i, _)| {
            residues[i - window..=i + window]
                .iter()
                .map(|aa| aa.letter())
                .collect::<String>()
        })
        .collect()
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
    fn windows_around_serine_skip_occurrences_near_the_ends() {
        let windows = subsequences(&seq(REFERENCE), AminoAcid::Serine, 3);
        assert_eq!(
            windows,
            vec!["DLESDSF", "ESDSFAD", "EDASLES", "SLESDSF", "ESDSFPW", "FPWSNQR", "VFCSFAD"]
        );
    }

    #[test]
    fn every_window_has_odd_length_and_requested_center() {
        let windows = subsequences(&seq(REFERENCE), AminoAcid::AsparticAcid, 10);
        assert_eq!(windows.len(), 7);
        assert_eq!(windows[0], "NCMCMKWVYADEDAADLESDS");
        assert_eq!(windows[6], "FADEDASLESDSFPWSNQRVF");
        for window in &windows {
            assert_eq!(window.len(), 21);
            assert_eq!(window.chars().nth(10), Some('D'));
        }
    }

    #[test]
    fn zero_window_returns_each_occurrence() {
        let windows = subsequences(&seq("ACAGA"), AminoAcid::Alanine, 0);
        assert_eq!(windows, vec!["A", "A", "A"]);
    }

    #[test]
    fn absent_center_or_oversized_window_yields_nothing() {
        assert!(subsequences(&seq(REFERENCE), AminoAcid::Isoleucine, 1).is_empty());
        assert!(subsequences(&seq("ACDEF"), AminoAcid::AsparticAcid, 3).is_empty());
    }
}
