use super::TableLoadError;
use crate::core::tables::TableError;
use crate::core::tables::distance::DistanceMatrix;
use crate::core::tables::property::PropertyTable;
use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::path::Path;
use tracing::debug;

fn path_string(path: &Path) -> String {
    path.to_string_lossy().to_string()
}

/// Loads property tables from a TOML file with one table per property:
///
/// ```toml
/// [Hydropathy]
/// A = 1.8
/// R = -4.5
/// # ... one entry per residue
/// ```
///
/// Tables are returned sorted by name.
pub fn load_property_tables(path: &Path) -> Result<Vec<PropertyTable>, TableLoadError> {
    debug!("Loading property tables from {:?}", path);
    let content = std::fs::read_to_string(path).map_err(|e| TableLoadError::Io {
        path: path_string(path),
        source: e,
    })?;
    let raw: BTreeMap<String, HashMap<String, f64>> =
        toml::from_str(&content).map_err(|e| TableLoadError::Toml {
            path: path_string(path),
            source: e,
        })?;

    raw.into_iter()
        .map(|(name, entries)| property_table_from_entries(name, entries))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| TableLoadError::Table {
            path: path_string(path),
            source: e,
        })
}

fn property_table_from_entries(
    name: String,
    entries: HashMap<String, f64>,
) -> Result<PropertyTable, TableError> {
    let mut by_letter = HashMap::with_capacity(entries.len());
    for (key, value) in entries {
        let mut chars = key.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => {
                by_letter.insert(letter.to_ascii_uppercase(), value);
            }
            _ => {
                return Err(TableError::InvalidPropertyTable {
                    name,
                    reason: format!("key '{key}' is not a single residue letter"),
                });
            }
        }
    }
    PropertyTable::from_map(name, &by_letter)
}

/// Loads a square CSV distance matrix. The matrix is named after the file stem unless
/// `name` is given.
pub fn load_distance_matrix(
    path: &Path,
    name: Option<&str>,
) -> Result<DistanceMatrix, TableLoadError> {
    debug!("Loading distance matrix from {:?}", path);
    let file = File::open(path).map_err(|e| TableLoadError::Io {
        path: path_string(path),
        source: e,
    })?;
    let name = name.map(str::to_string).unwrap_or_else(|| {
        path.file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| "custom".to_string())
    });
    DistanceMatrix::from_csv_reader(name, file).map_err(|e| TableLoadError::Table {
        path: path_string(path),
        source: e,
    })
}
