use super::ensure_length;
use crate::core::models::descriptors::DescriptorVector;
use crate::core::models::sequence::ProteinSequence;
use crate::core::tables::property::PropertyTable;
use crate::core::utils::math::{mean, population_variance, round_to};
use crate::engine::error::DescriptorError;
use std::fmt;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Autocorrelation {
    MoreauBroto,
    Moran,
    Geary,
}

impl Autocorrelation {
    pub const ALL: [Autocorrelation; 3] = [Self::MoreauBroto, Self::Moran, Self::Geary];

    /// Descriptor name prefix, e.g. `MoranAuto` in `MoranAuto_Steric7`.
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::MoreauBroto => "MoreauBrotoAuto",
            Self::Moran => "MoranAuto",
            Self::Geary => "GearyAuto",
        }
    }
}

impl fmt::Display for Autocorrelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::MoreauBroto => "Moreau-Broto",
            Self::Moran => "Moran",
            Self::Geary => "Geary",
        };
        f.write_str(name)
    }
}

/// Autocorrelation of the normalized `table` along `sequence` for lags `1..=max_lag`.
///
/// Requires `max_lag < L`. Moran and Geary divide by the variance of the property along
/// the sequence and fail with [`DescriptorError::DegenerateProperty`] when it is constant.
pub fn autocorrelation(
    sequence: &ProteinSequence,
    kind: Autocorrelation,
    table: &PropertyTable,
    max_lag: usize,
) -> Result<DescriptorVector, DescriptorError> {
    ensure_length(sequence, "max_lag", max_lag, max_lag + 1)?;
    let normalized = table.normalized()?;
    let series: Vec<f64> = sequence
        .residues()
        .iter()
        .map(|&aa| normalized[aa])
        .collect();

    let length = series.len();
    let series_mean = mean(&series);
    let variance = population_variance(&series);
    if kind != Autocorrelation::MoreauBroto && series.windows(2).all(|w| w[0] == w[1]) {
        return Err(DescriptorError::DegenerateProperty {
            property: table.name().to_string(),
        });
    }

    let mut result = DescriptorVector::with_capacity(max_lag);
    for lag in 1..=max_lag {
        let pairs = series.iter().zip(&series[lag..]);
        let n = (length - lag) as f64;
        let value = match kind {
            Autocorrelation::MoreauBroto => pairs.map(|(a, b)| a * b).sum::<f64>() / n,
            Autocorrelation::Moran => {
                pairs
                    .map(|(a, b)| (a - series_mean) * (b - series_mean))
                    .sum::<f64>()
                    / n
                    / variance
            }
            Autocorrelation::Geary => {
                let k = variance * length as f64 / (length - 1) as f64;
                pairs.map(|(a, b)| (a - b).powi(2)).sum::<f64>() / (2.0 * n) / k
            }
        };
        result.insert(
            format!("{}_{}{}", kind.prefix(), table.name(), lag),
            round_to(value, 3),
        );
    }
    Ok(result)
}

pub fn moreau_broto(
    sequence: &ProteinSequence,
    table: &PropertyTable,
    max_lag: usize,
) -> Result<DescriptorVector, DescriptorError> {
    autocorrelation(sequence, Autocorrelation::MoreauBroto, table, max_lag)
}

pub fn moran(
    sequence: &ProteinSequence,
    table: &PropertyTable,
    max_lag: usize,
) -> Result<DescriptorVector, DescriptorError> {
    autocorrelation(sequence, Autocorrelation::Moran, table, max_lag)
}

pub fn geary(
    sequence: &ProteinSequence,
    table: &PropertyTable,
    max_lag: usize,
) -> Result<DescriptorVector, DescriptorError> {
    autocorrelation(sequence, Autocorrelation::Geary, table, max_lag)
}

/// One statistic over the eight standard autocorrelation properties.
pub fn autocorrelation_total(
    sequence: &ProteinSequence,
    kind: Autocorrelation,
    max_lag: usize,
) -> Result<DescriptorVector, DescriptorError> {
    let tables = PropertyTable::autocorrelation_defaults();
    debug!(
        "Computing {} autocorrelation over {} properties.",
        kind,
        tables.len()
    );
    let mut result = DescriptorVector::with_capacity(tables.len() * max_lag);
    for table in &tables {
        result.extend(autocorrelation(sequence, kind, table, max_lag)?);
    }
    Ok(result)
}

/// Moreau-Broto, Moran and Geary totals in that order.
pub fn autocorrelation_all(
    sequence: &ProteinSequence,
    max_lag: usize,
) -> Result<DescriptorVector, DescriptorError> {
    let mut result = DescriptorVector::new();
    for kind in Autocorrelation::ALL {
        result.extend(autocorrelation_total(sequence, kind, max_lag)?);
    }
    Ok(result)
}
