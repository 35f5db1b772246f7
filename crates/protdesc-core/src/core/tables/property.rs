use super::TableError;
use super::standard::{
    AMPHIPHILIC_PROPERTY_NAMES, AUTOCORRELATION_PROPERTY_NAMES, PSEUDO_AAC_PROPERTY_NAMES,
    STANDARD_PROPERTIES,
};
use crate::core::models::alphabet::{ALPHABET_SIZE, AminoAcid};
use crate::core::utils::math;
use std::collections::HashMap;
use std::ops::Index;
use std::sync::LazyLock;

static AUTOCORRELATION_DEFAULTS: LazyLock<Vec<PropertyTable>> =
    LazyLock::new(|| standard_set(&AUTOCORRELATION_PROPERTY_NAMES));
static PSEUDO_AAC_DEFAULTS: LazyLock<Vec<PropertyTable>> =
    LazyLock::new(|| standard_set(&PSEUDO_AAC_PROPERTY_NAMES));
static AMPHIPHILIC_DEFAULTS: LazyLock<Vec<PropertyTable>> =
    LazyLock::new(|| standard_set(&AMPHIPHILIC_PROPERTY_NAMES));

fn standard_set(names: &[&str]) -> Vec<PropertyTable> {
    names
        .iter()
        .map(|name| {
            PropertyTable::standard(name)
                .unwrap_or_else(|e| panic!("built-in property set is inconsistent: {e}"))
        })
        .collect()
}

/// A per-residue physicochemical scale with exactly one finite value per amino acid.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyTable {
    name: String,
    values: [f64; ALPHABET_SIZE],
}

impl PropertyTable {
    pub fn new(name: impl Into<String>, values: [f64; ALPHABET_SIZE]) -> Result<Self, TableError> {
        let name = name.into();
        if let Some(aa) = AminoAcid::ALL
            .into_iter()
            .find(|aa| !values[aa.index()].is_finite())
        {
            return Err(TableError::InvalidPropertyTable {
                name,
                reason: format!("value for '{}' is not a finite number", aa.letter()),
            });
        }
        Ok(Self { name, values })
    }

    /// Builds a table from a letter-keyed map covering exactly the 20 standard residues.
    pub fn from_map(name: impl Into<String>, map: &HashMap<char, f64>) -> Result<Self, TableError> {
        let name = name.into();
        if let Some(&letter) = map.keys().find(|&&c| AminoAcid::from_letter(c).is_none()) {
            return Err(TableError::InvalidPropertyTable {
                name,
                reason: format!("unexpected key '{letter}'"),
            });
        }
        let mut values = [0.0; ALPHABET_SIZE];
        for aa in AminoAcid::ALL {
            values[aa.index()] =
                *map.get(&aa.letter())
                    .ok_or_else(|| TableError::InvalidPropertyTable {
                        name: name.clone(),
                        reason: format!("missing value for '{}'", aa.letter()),
                    })?;
        }
        Self::new(name, values)
    }

    pub fn standard(name: &str) -> Result<Self, TableError> {
        STANDARD_PROPERTIES
            .get(name)
            .map(|values| Self {
                name: name.to_string(),
                values: *values,
            })
            .ok_or_else(|| TableError::UnknownTable(name.to_string()))
    }

    pub fn standard_names() -> Vec<&'static str> {
        let mut names: Vec<_> = STANDARD_PROPERTIES.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// The eight scales used by the autocorrelation "Total" descriptors, in output order.
    pub fn autocorrelation_defaults() -> Vec<Self> {
        AUTOCORRELATION_DEFAULTS.clone()
    }

    pub fn pseudo_aac_defaults() -> Vec<Self> {
        PSEUDO_AAC_DEFAULTS.clone()
    }

    pub fn amphiphilic_defaults() -> Vec<Self> {
        AMPHIPHILIC_DEFAULTS.clone()
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn value(&self, residue: AminoAcid) -> f64 {
        self.values[residue.index()]
    }

    #[inline]
    pub fn values(&self) -> &[f64; ALPHABET_SIZE] {
        &self.values
    }

    pub fn to_map(&self) -> HashMap<char, f64> {
        AminoAcid::ALL
            .into_iter()
            .map(|aa| (aa.letter(), self.value(aa)))
            .collect()
    }

    /// Z-score transform over the 20 residues using the population standard deviation.
    ///
    /// Applying it to an already normalized table is not meaningful; engines always
    /// normalize from the raw scale on every call.
    pub fn normalized(&self) -> Result<Self, TableError> {
        let mean = math::mean(&self.values);
        let std = math::population_std(&self.values);
        if std == 0.0 {
            return Err(TableError::ZeroVariance {
                name: self.name.clone(),
            });
        }
        Ok(Self {
            name: self.name.clone(),
            values: self.values.map(|v| (v - mean) / std),
        })
    }
}

impl Index<AminoAcid> for PropertyTable {
    type Output = f64;

    fn index(&self, residue: AminoAcid) -> &Self::Output {
        &self.values[residue.index()]
    }
}

/// Normalizes a letter-keyed property map; see [`PropertyTable::normalized`].
pub fn normalize(table: &HashMap<char, f64>) -> Result<HashMap<char, f64>, TableError> {
    Ok(PropertyTable::from_map("property", table)?
        .normalized()?
        .to_map())
}
