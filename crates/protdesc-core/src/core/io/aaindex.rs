//! Reader for the AAindex flat-file databases.
//!
//! `aaindex1` records (`I` section) become [`PropertyTable`]s; `aaindex2` substitution
//! matrices and `aaindex3` contact potentials (`M` section) become [`DistanceMatrix`]es.

use super::TableLoadError;
use crate::core::models::alphabet::{ALPHABET_SIZE, AminoAcid};
use crate::core::tables::TableError;
use crate::core::tables::distance::DistanceMatrix;
use crate::core::tables::property::PropertyTable;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error, PartialEq, Clone)]
#[error("line {line}: {message}")]
pub struct AaIndexError {
    pub line: usize,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AaIndexData {
    Index(HashMap<char, Option<f64>>),
    Matrix {
        rows: Vec<char>,
        columns: Vec<char>,
        cells: Vec<Vec<Option<f64>>>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AaIndexRecord {
    pub accession: String,
    pub description: String,
    pub data: AaIndexData,
}

impl AaIndexRecord {
    pub fn to_property_table(&self) -> Result<PropertyTable, TableError> {
        let invalid = |reason: String| TableError::InvalidPropertyTable {
            name: self.accession.clone(),
            reason,
        };
        let AaIndexData::Index(entries) = &self.data else {
            return Err(invalid("record holds a matrix, not an index".to_string()));
        };
        let mut values = [0.0; ALPHABET_SIZE];
        for aa in AminoAcid::ALL {
            values[aa.index()] = entries
                .get(&aa.letter())
                .copied()
                .flatten()
                .ok_or_else(|| invalid(format!("no value for '{}'", aa.letter())))?;
        }
        PropertyTable::new(self.accession.clone(), values)
    }

    /// Lower-triangular matrices are completed by looking up the transposed cell.
    pub fn to_distance_matrix(&self) -> Result<DistanceMatrix, TableError> {
        let invalid = |reason: String| TableError::InvalidDistanceMatrix {
            name: self.accession.clone(),
            reason,
        };
        let AaIndexData::Matrix {
            rows,
            columns,
            cells,
        } = &self.data
        else {
            return Err(invalid("record holds an index, not a matrix".to_string()));
        };

        let cell = |row: char, column: char| -> Option<f64> {
            let r = rows.iter().position(|&c| c == row)?;
            let c = columns.iter().position(|&c| c == column)?;
            cells.get(r)?.get(c).copied().flatten()
        };

        let mut values = [[0.0; ALPHABET_SIZE]; ALPHABET_SIZE];
        for a in AminoAcid::ALL {
            for b in AminoAcid::ALL {
                values[a.index()][b.index()] = cell(a.letter(), b.letter())
                    .or_else(|| cell(b.letter(), a.letter()))
                    .ok_or_else(|| invalid(format!("no value for pair '{a}{b}'")))?;
            }
        }
        DistanceMatrix::new(self.accession.clone(), values)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Section {
    Other,
    Description,
    Index,
    Matrix,
}

#[derive(Default)]
struct RecordBuilder {
    accession: Option<String>,
    description: String,
    index_header: Option<(Vec<char>, Vec<char>)>,
    index_values: Vec<Option<f64>>,
    matrix_axes: Option<(Vec<char>, Vec<char>)>,
    matrix_rows: Vec<Vec<Option<f64>>>,
}

impl RecordBuilder {
    fn finish(self, line: usize) -> Result<AaIndexRecord, AaIndexError> {
        let error = |message: String| AaIndexError { line, message };
        let accession = self
            .accession
            .ok_or_else(|| error("record has no 'H' accession line".to_string()))?;

        let data = match (self.index_header, self.matrix_axes) {
            (Some((firsts, seconds)), None) => {
                let expected = firsts.len() + seconds.len();
                if self.index_values.len() != expected {
                    return Err(error(format!(
                        "index '{accession}' has {} values, expected {expected}",
                        self.index_values.len()
                    )));
                }
                let letters = firsts.into_iter().chain(seconds);
                AaIndexData::Index(letters.zip(self.index_values).collect())
            }
            (None, Some((rows, columns))) => AaIndexData::Matrix {
                rows,
                columns,
                cells: self.matrix_rows,
            },
            (None, None) => {
                return Err(error(format!("record '{accession}' has no data section")));
            }
            (Some(_), Some(_)) => {
                return Err(error(format!(
                    "record '{accession}' has both index and matrix sections"
                )));
            }
        };

        Ok(AaIndexRecord {
            accession,
            description: self.description,
            data,
        })
    }
}

fn parse_value(token: &str) -> Result<Option<f64>, String> {
    match token {
        "NA" | "-" => Ok(None),
        _ => token
            .parse::<f64>()
            .map(Some)
            .map_err(|_| format!("invalid number '{token}'")),
    }
}

fn parse_index_header(rest: &str) -> Result<(Vec<char>, Vec<char>), String> {
    let mut firsts = Vec::new();
    let mut seconds = Vec::new();
    for token in rest.split_whitespace() {
        let mut chars = token.chars();
        match (chars.next(), chars.next(), chars.next(), chars.next()) {
            (Some(a), Some('/'), Some(b), None) => {
                firsts.push(a);
                seconds.push(b);
            }
            _ => return Err(format!("malformed index header token '{token}'")),
        }
    }
    Ok((firsts, seconds))
}

// Parses "rows = ARND..., cols = ARND...".
fn parse_matrix_axes(rest: &str) -> Result<(Vec<char>, Vec<char>), String> {
    let mut rows = None;
    let mut columns = None;
    for part in rest.split(',') {
        let Some((key, value)) = part.split_once('=') else {
            return Err(format!("malformed matrix header '{}'", rest.trim()));
        };
        let letters: Vec<char> = value.trim().chars().collect();
        match key.trim() {
            "rows" => rows = Some(letters),
            "cols" => columns = Some(letters),
            other => return Err(format!("unknown matrix axis '{other}'")),
        }
    }
    match (rows, columns) {
        (Some(r), Some(c)) => Ok((r, c)),
        _ => Err("matrix header must name both rows and cols".to_string()),
    }
}

pub fn parse(text: &str) -> Result<Vec<AaIndexRecord>, AaIndexError> {
    let mut records = Vec::new();
    let mut builder = RecordBuilder::default();
    let mut section = Section::Other;

    for (i, raw_line) in text.lines().enumerate() {
        let line_number = i + 1;
        let error = |message: String| AaIndexError {
            line: line_number,
            message,
        };
        let line = raw_line.trim_end();
        if line.is_empty() {
            continue;
        }
        if line.starts_with("//") {
            records.push(std::mem::take(&mut builder).finish(line_number)?);
            section = Section::Other;
            continue;
        }

        if line.starts_with(char::is_whitespace) {
            match section {
                Section::Description => {
                    builder.description.push(' ');
                    builder.description.push_str(line.trim());
                }
                Section::Index => {
                    for token in line.split_whitespace() {
                        builder.index_values.push(parse_value(token).map_err(error)?);
                    }
                }
                Section::Matrix => {
                    let row = line
                        .split_whitespace()
                        .map(parse_value)
                        .collect::<Result<Vec<_>, _>>()
                        .map_err(error)?;
                    builder.matrix_rows.push(row);
                }
                Section::Other => {}
            }
            continue;
        }

        let mut chars = line.chars();
        let key = chars.next();
        let rest = chars.as_str();
        section = match key {
            Some('H') => {
                builder.accession = Some(rest.trim().to_string());
                Section::Other
            }
            Some('D') => {
                builder.description = rest.trim().to_string();
                Section::Description
            }
            Some('I') => {
                builder.index_header = Some(parse_index_header(rest).map_err(error)?);
                Section::Index
            }
            Some('M') => {
                builder.matrix_axes = Some(parse_matrix_axes(rest).map_err(error)?);
                Section::Matrix
            }
            _ => Section::Other,
        };
    }

    if builder.accession.is_some() {
        return Err(AaIndexError {
            line: text.lines().count(),
            message: "last record is not terminated by '//'".to_string(),
        });
    }
    Ok(records)
}

pub fn load(path: &Path) -> Result<Vec<AaIndexRecord>, TableLoadError> {
    debug!("Loading AAindex records from {:?}", path);
    let content = std::fs::read_to_string(path).map_err(|e| TableLoadError::Io {
        path: path.to_string_lossy().to_string(),
        source: e,
    })?;
    let records = parse(&content).map_err(|e| TableLoadError::AaIndex {
        path: path.to_string_lossy().to_string(),
        source: e,
    })?;
    debug!("Parsed {} AAindex record(s).", records.len());
    Ok(records)
}
