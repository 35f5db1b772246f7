use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The twenty standard residue letters in canonical descriptor order.
pub const AMINO_ACID_LETTERS: &str = "ARNDCEQGHILKMFPSTWYV";

pub const ALPHABET_SIZE: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum AminoAcid {
    Alanine,       // A
    Arginine,      // R
    Asparagine,    // N
    AsparticAcid,  // D
    Cysteine,      // C
    GlutamicAcid,  // E
    Glutamine,     // Q
    Glycine,       // G
    Histidine,     // H
    Isoleucine,    // I
    Leucine,       // L
    Lysine,        // K
    Methionine,    // M
    Phenylalanine, // F
    Proline,       // P
    Serine,        // S
    Threonine,     // T
    Tryptophan,    // W
    Tyrosine,      // Y
    Valine,        // V
}

#[derive(Debug, Error, PartialEq, Eq, Clone)]
#[error("'{0}' is not one of the 20 standard amino acid letters")]
pub struct UnknownResidueError(pub char);

impl AminoAcid {
    pub const ALL: [AminoAcid; ALPHABET_SIZE] = [
        AminoAcid::Alanine,
        AminoAcid::Arginine,
        AminoAcid::Asparagine,
        AminoAcid::AsparticAcid,
        AminoAcid::Cysteine,
        AminoAcid::GlutamicAcid,
        AminoAcid::Glutamine,
        AminoAcid::Glycine,
        AminoAcid::Histidine,
        AminoAcid::Isoleucine,
        AminoAcid::Leucine,
        AminoAcid::Lysine,
        AminoAcid::Methionine,
        AminoAcid::Phenylalanine,
        AminoAcid::Proline,
        AminoAcid::Serine,
        AminoAcid::Threonine,
        AminoAcid::Tryptophan,
        AminoAcid::Tyrosine,
        AminoAcid::Valine,
    ];

    /// Position of the residue in [`AMINO_ACID_LETTERS`]; every table is indexed by it.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < ALPHABET_SIZE {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    pub const fn letter(self) -> char {
        AMINO_ACID_LETTERS.as_bytes()[self as usize] as char
    }

    /// Strict lookup: lower-case letters and ambiguity codes are rejected.
    pub fn from_letter(letter: char) -> Option<Self> {
        let index = match letter {
            'A' => 0,
            'R' => 1,
            'N' => 2,
            'D' => 3,
            'C' => 4,
            'E' => 5,
            'Q' => 6,
            'G' => 7,
            'H' => 8,
            'I' => 9,
            'L' => 10,
            'K' => 11,
            'M' => 12,
            'F' => 13,
            'P' => 14,
            'S' => 15,
            'T' => 16,
            'W' => 17,
            'Y' => 18,
            'V' => 19,
            _ => return None,
        };
        Some(Self::ALL[index])
    }

    pub const fn three_letter_code(self) -> &'static str {
        match self {
            AminoAcid::Alanine => "ALA",
            AminoAcid::Arginine => "ARG",
            AminoAcid::Asparagine => "ASN",
            AminoAcid::AsparticAcid => "ASP",
            AminoAcid::Cysteine => "CYS",
            AminoAcid::GlutamicAcid => "GLU",
            AminoAcid::Glutamine => "GLN",
            AminoAcid::Glycine => "GLY",
            AminoAcid::Histidine => "HIS",
            AminoAcid::Isoleucine => "ILE",
            AminoAcid::Leucine => "LEU",
            AminoAcid::Lysine => "LYS",
            AminoAcid::Methionine => "MET",
            AminoAcid::Phenylalanine => "PHE",
            AminoAcid::Proline => "PRO",
            AminoAcid::Serine => "SER",
            AminoAcid::Threonine => "THR",
            AminoAcid::Tryptophan => "TRP",
            AminoAcid::Tyrosine => "TYR",
            AminoAcid::Valine => "VAL",
        }
    }
}

impl TryFrom<char> for AminoAcid {
    type Error = UnknownResidueError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        Self::from_letter(value).ok_or(UnknownResidueError(value))
    }
}

impl FromStr for AminoAcid {
    type Err = UnknownResidueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::try_from(c.to_ascii_uppercase()),
            _ => match trimmed.to_ascii_uppercase().as_str() {
                code if code.len() == 3 => Self::ALL
                    .into_iter()
                    .find(|aa| aa.three_letter_code() == code)
                    .ok_or(UnknownResidueError(trimmed.chars().next().unwrap_or(' '))),
                _ => Err(UnknownResidueError(trimmed.chars().next().unwrap_or(' '))),
            },
        }
    }
}

impl fmt::Display for AminoAcid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}
