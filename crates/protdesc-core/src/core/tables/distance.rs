use super::TableError;
use crate::core::models::alphabet::{ALPHABET_SIZE, AminoAcid};
use std::collections::HashMap;
use std::io::Read;
use std::sync::LazyLock;

const SCHNEIDER_WREDE_CSV: &str = include_str!("../../../data/schneider_wrede.csv");
const GRANTHAM_CSV: &str = include_str!("../../../data/grantham.csv");

static SCHNEIDER_WREDE: LazyLock<Result<DistanceMatrix, TableError>> = LazyLock::new(|| {
    DistanceMatrix::from_csv_reader("SchneiderWrede", SCHNEIDER_WREDE_CSV.as_bytes())
});
static GRANTHAM: LazyLock<Result<DistanceMatrix, TableError>> =
    LazyLock::new(|| DistanceMatrix::from_csv_reader("Grantham", GRANTHAM_CSV.as_bytes()));

/// Residue-pair distances indexed by ordered pair; row is the first residue.
///
/// Matrices need not be symmetric (Schneider-Wrede is not).
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    name: String,
    values: [[f64; ALPHABET_SIZE]; ALPHABET_SIZE],
}

impl DistanceMatrix {
    pub fn new(
        name: impl Into<String>,
        values: [[f64; ALPHABET_SIZE]; ALPHABET_SIZE],
    ) -> Result<Self, TableError> {
        let name = name.into();
        for a in AminoAcid::ALL {
            for b in AminoAcid::ALL {
                if !values[a.index()][b.index()].is_finite() {
                    return Err(TableError::InvalidDistanceMatrix {
                        name,
                        reason: format!("distance {}{} is not a finite number", a, b),
                    });
                }
            }
        }
        Ok(Self { name, values })
    }

    /// Builds a matrix from two-letter keys such as `"AR"`; all 400 ordered pairs are required.
    pub fn from_pairs(
        name: impl Into<String>,
        pairs: &HashMap<String, f64>,
    ) -> Result<Self, TableError> {
        let name = name.into();
        let mut values = [[0.0; ALPHABET_SIZE]; ALPHABET_SIZE];
        for a in AminoAcid::ALL {
            for b in AminoAcid::ALL {
                let key = format!("{a}{b}");
                let distance = pairs.get(&key).ok_or_else(|| TableError::InvalidDistanceMatrix {
                    name: name.clone(),
                    reason: format!("missing distance for pair '{key}'"),
                })?;
                values[a.index()][b.index()] = *distance;
            }
        }
        Self::new(name, values)
    }

    /// Parses a square CSV matrix: a header row of column residues and one row per residue,
    /// each starting with its residue letter. Row and column order are free.
    pub fn from_csv_reader<R: Read>(
        name: impl Into<String>,
        reader: R,
    ) -> Result<Self, TableError> {
        let name = name.into();
        let invalid = |reason: String| TableError::InvalidDistanceMatrix {
            name: name.clone(),
            reason,
        };

        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = csv_reader
            .headers()
            .map_err(|e| invalid(e.to_string()))?
            .clone();
        let columns = headers
            .iter()
            .skip(1)
            .map(|h| {
                parse_residue_label(h).ok_or_else(|| invalid(format!("unknown column '{h}'")))
            })
            .collect::<Result<Vec<_>, _>>()?;
        if columns.len() != ALPHABET_SIZE {
            return Err(invalid(format!(
                "expected {ALPHABET_SIZE} columns, found {}",
                columns.len()
            )));
        }

        let mut values = [[f64::NAN; ALPHABET_SIZE]; ALPHABET_SIZE];
        let mut seen_rows = [false; ALPHABET_SIZE];
        for record in csv_reader.records() {
            let record = record.map_err(|e| invalid(e.to_string()))?;
            let label = record.get(0).unwrap_or_default();
            let row = parse_residue_label(label)
                .ok_or_else(|| invalid(format!("unknown row '{label}'")))?;
            if std::mem::replace(&mut seen_rows[row.index()], true) {
                return Err(invalid(format!("row '{label}' appears more than once")));
            }
            if record.len() != columns.len() + 1 {
                return Err(invalid(format!(
                    "row '{label}' has {} values, expected {}",
                    record.len().saturating_sub(1),
                    columns.len()
                )));
            }
            for (column, field) in columns.iter().zip(record.iter().skip(1)) {
                values[row.index()][column.index()] = field
                    .parse::<f64>()
                    .map_err(|_| invalid(format!("invalid number '{field}' in row '{label}'")))?;
            }
        }
        if let Some(aa) = AminoAcid::ALL.into_iter().find(|aa| !seen_rows[aa.index()]) {
            return Err(invalid(format!("missing row for '{aa}'")));
        }
        Self::new(name, values)
    }

    pub fn schneider_wrede() -> Result<&'static Self, TableError> {
        SCHNEIDER_WREDE.as_ref().map_err(Clone::clone)
    }

    pub fn grantham() -> Result<&'static Self, TableError> {
        GRANTHAM.as_ref().map_err(Clone::clone)
    }

    pub fn standard(name: &str) -> Result<&'static Self, TableError> {
        match name {
            "SchneiderWrede" => Self::schneider_wrede(),
            "Grantham" => Self::grantham(),
            _ => Err(TableError::UnknownTable(name.to_string())),
        }
    }

    pub fn standard_names() -> [&'static str; 2] {
        ["SchneiderWrede", "Grantham"]
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn distance(&self, from: AminoAcid, to: AminoAcid) -> f64 {
        self.values[from.index()][to.index()]
    }

    pub fn is_symmetric(&self) -> bool {
        AminoAcid::ALL.into_iter().all(|a| {
            AminoAcid::ALL
                .into_iter()
                .all(|b| self.distance(a, b) == self.distance(b, a))
        })
    }
}

fn parse_residue_label(label: &str) -> Option<AminoAcid> {
    let mut chars = label.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => AminoAcid::from_letter(c.to_ascii_uppercase()),
        _ => None,
    }
}
