use super::alphabet::{ALPHABET_SIZE, AminoAcid};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum SequenceError {
    #[error("Protein sequence is empty")]
    Empty,
    #[error("Invalid residue '{residue}' at position {position}")]
    InvalidResidue { residue: char, position: usize },
}

/// A non-empty protein sequence over the 20 standard amino acids.
///
/// Validation is strict: lower-case letters, whitespace and ambiguity codes are rejected.
/// Callers that want lenient input handling should clean the text first.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProteinSequence {
    residues: Vec<AminoAcid>,
}

impl ProteinSequence {
    pub fn new(sequence: &str) -> Result<Self, SequenceError> {
        if sequence.is_empty() {
            return Err(SequenceError::Empty);
        }
        let residues = sequence
            .chars()
            .enumerate()
            .map(|(position, residue)| {
                AminoAcid::from_letter(residue)
                    .ok_or(SequenceError::InvalidResidue { residue, position })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { residues })
    }

    pub fn from_residues(residues: Vec<AminoAcid>) -> Result<Self, SequenceError> {
        if residues.is_empty() {
            return Err(SequenceError::Empty);
        }
        Ok(Self { residues })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.residues.len()
    }

    // Always false; kept for API symmetry with slices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }

    #[inline]
    pub fn residues(&self) -> &[AminoAcid] {
        &self.residues
    }

    pub fn residue_counts(&self) -> [usize; ALPHABET_SIZE] {
        let mut counts = [0usize; ALPHABET_SIZE];
        for residue in &self.residues {
            counts[residue.index()] += 1;
        }
        counts
    }

    pub fn count(&self, residue: AminoAcid) -> usize {
        self.residues.iter().filter(|&&r| r == residue).count()
    }
}

impl FromStr for ProteinSequence {
    type Err = SequenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for ProteinSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for residue in &self.residues {
            write!(f, "{}", residue.letter())?;
        }
        Ok(())
    }
}
