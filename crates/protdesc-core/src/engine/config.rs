use crate::core::tables::distance::DistanceMatrix;
use crate::core::tables::property::PropertyTable;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Invalid value for '{parameter}': {reason}")]
    InvalidParameter {
        parameter: &'static str,
        reason: String,
    },
    #[error("Unknown descriptor family: '{0}'")]
    UnknownFamily(String),
}

pub const DEFAULT_AUTOCORRELATION_MAX_LAG: usize = 30;
pub const DEFAULT_COUPLING_MAX_LAG: usize = 30;
pub const DEFAULT_PROFILE_COUPLING_MAX_LAG: usize = 45;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PseudoAacParams {
    pub lamda: usize,
    pub weight: f64,
}

impl PseudoAacParams {
    pub const fn new(lamda: usize, weight: f64) -> Self {
        Self { lamda, weight }
    }

    /// Type I (parallel correlation) defaults: `lamda = 10`, `weight = 0.05`.
    pub const fn type_i() -> Self {
        Self::new(10, 0.05)
    }

    /// Type II (amphiphilic) defaults: `lamda = 10`, `weight = 0.5`.
    pub const fn type_ii() -> Self {
        Self::new(10, 0.5)
    }
}

impl Default for PseudoAacParams {
    fn default() -> Self {
        Self::type_i()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuasiSequenceOrderParams {
    pub max_lag: usize,
    pub weight: f64,
}

impl QuasiSequenceOrderParams {
    pub const fn new(max_lag: usize, weight: f64) -> Self {
        Self { max_lag, weight }
    }
}

impl Default for QuasiSequenceOrderParams {
    fn default() -> Self {
        Self::new(DEFAULT_COUPLING_MAX_LAG, 0.1)
    }
}

/// Descriptor families in the order a profile emits them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DescriptorFamily {
    AminoAcidComposition,
    DipeptideComposition,
    TripeptideSpectrum,
    MoreauBroto,
    Moran,
    Geary,
    Ctd,
    PseudoAac,
    AmphiphilicPseudoAac,
    SequenceOrderCoupling,
    QuasiSequenceOrder,
}

impl DescriptorFamily {
    pub const ALL: [DescriptorFamily; 11] = [
        DescriptorFamily::AminoAcidComposition,
        DescriptorFamily::DipeptideComposition,
        DescriptorFamily::TripeptideSpectrum,
        DescriptorFamily::MoreauBroto,
        DescriptorFamily::Moran,
        DescriptorFamily::Geary,
        DescriptorFamily::Ctd,
        DescriptorFamily::PseudoAac,
        DescriptorFamily::AmphiphilicPseudoAac,
        DescriptorFamily::SequenceOrderCoupling,
        DescriptorFamily::QuasiSequenceOrder,
    ];

    /// Every family except the 8000-entry tripeptide spectrum.
    pub fn defaults() -> Vec<DescriptorFamily> {
        Self::ALL
            .into_iter()
            .filter(|f| *f != DescriptorFamily::TripeptideSpectrum)
            .collect()
    }

    pub const fn key(self) -> &'static str {
        match self {
            DescriptorFamily::AminoAcidComposition => "aac",
            DescriptorFamily::DipeptideComposition => "dpc",
            DescriptorFamily::TripeptideSpectrum => "tpc",
            DescriptorFamily::MoreauBroto => "moreau-broto",
            DescriptorFamily::Moran => "moran",
            DescriptorFamily::Geary => "geary",
            DescriptorFamily::Ctd => "ctd",
            DescriptorFamily::PseudoAac => "paac",
            DescriptorFamily::AmphiphilicPseudoAac => "apaac",
            DescriptorFamily::SequenceOrderCoupling => "socn",
            DescriptorFamily::QuasiSequenceOrder => "qso",
        }
    }
}

impl FromStr for DescriptorFamily {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|f| f.key() == key)
            .ok_or_else(|| ConfigError::UnknownFamily(s.to_string()))
    }
}

impl fmt::Display for DescriptorFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProfileConfig {
    pub families: Vec<DescriptorFamily>,
    pub autocorrelation_max_lag: usize,
    /// Extra tables correlated alongside the eight standard properties.
    pub autocorrelation_properties: Vec<PropertyTable>,
    pub pseudo_aac: PseudoAacParams,
    pub amphiphilic_pseudo_aac: PseudoAacParams,
    pub pseudo_aac_properties: Vec<PropertyTable>,
    pub amphiphilic_properties: Vec<PropertyTable>,
    pub coupling_max_lag: usize,
    pub quasi_sequence_order: QuasiSequenceOrderParams,
    pub custom_distance_matrix: Option<DistanceMatrix>,
}

impl ProfileConfig {
    pub fn includes(&self, family: DescriptorFamily) -> bool {
        self.families.contains(&family)
    }
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            families: DescriptorFamily::defaults(),
            autocorrelation_max_lag: DEFAULT_AUTOCORRELATION_MAX_LAG,
            autocorrelation_properties: Vec::new(),
            pseudo_aac: PseudoAacParams::type_i(),
            // The combined profile shares the type I weight across both PseAAC variants.
            amphiphilic_pseudo_aac: PseudoAacParams::type_i(),
            pseudo_aac_properties: PropertyTable::pseudo_aac_defaults(),
            amphiphilic_properties: PropertyTable::amphiphilic_defaults(),
            coupling_max_lag: DEFAULT_PROFILE_COUPLING_MAX_LAG,
            quasi_sequence_order: QuasiSequenceOrderParams::default(),
            custom_distance_matrix: None,
        }
    }
}

#[derive(Default)]
pub struct ProfileConfigBuilder {
    families: Option<Vec<DescriptorFamily>>,
    autocorrelation_max_lag: Option<usize>,
    autocorrelation_properties: Option<Vec<PropertyTable>>,
    pseudo_aac_lamda: Option<usize>,
    pseudo_aac_weight: Option<f64>,
    amphiphilic_lamda: Option<usize>,
    amphiphilic_weight: Option<f64>,
    pseudo_aac_properties: Option<Vec<PropertyTable>>,
    amphiphilic_properties: Option<Vec<PropertyTable>>,
    coupling_max_lag: Option<usize>,
    quasi_sequence_order_max_lag: Option<usize>,
    quasi_sequence_order_weight: Option<f64>,
    custom_distance_matrix: Option<DistanceMatrix>,
}

impl ProfileConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn families(mut self, families: Vec<DescriptorFamily>) -> Self {
        self.families = Some(families);
        self
    }
    pub fn autocorrelation_max_lag(mut self, max_lag: usize) -> Self {
        self.autocorrelation_max_lag = Some(max_lag);
        self
    }
    pub fn autocorrelation_properties(mut self, tables: Vec<PropertyTable>) -> Self {
        self.autocorrelation_properties = Some(tables);
        self
    }
    pub fn pseudo_aac_lamda(mut self, lamda: usize) -> Self {
        self.pseudo_aac_lamda = Some(lamda);
        self
    }
    pub fn pseudo_aac_weight(mut self, weight: f64) -> Self {
        self.pseudo_aac_weight = Some(weight);
        self
    }
    pub fn amphiphilic_lamda(mut self, lamda: usize) -> Self {
        self.amphiphilic_lamda = Some(lamda);
        self
    }
    pub fn amphiphilic_weight(mut self, weight: f64) -> Self {
        self.amphiphilic_weight = Some(weight);
        self
    }
    pub fn pseudo_aac_properties(mut self, tables: Vec<PropertyTable>) -> Self {
        self.pseudo_aac_properties = Some(tables);
        self
    }
    pub fn amphiphilic_properties(mut self, tables: Vec<PropertyTable>) -> Self {
        self.amphiphilic_properties = Some(tables);
        self
    }
    pub fn coupling_max_lag(mut self, max_lag: usize) -> Self {
        self.coupling_max_lag = Some(max_lag);
        self
    }
    pub fn quasi_sequence_order_max_lag(mut self, max_lag: usize) -> Self {
        self.quasi_sequence_order_max_lag = Some(max_lag);
        self
    }
    pub fn quasi_sequence_order_weight(mut self, weight: f64) -> Self {
        self.quasi_sequence_order_weight = Some(weight);
        self
    }
    pub fn custom_distance_matrix(mut self, matrix: DistanceMatrix) -> Self {
        self.custom_distance_matrix = Some(matrix);
        self
    }

    pub fn build(self) -> Result<ProfileConfig, ConfigError> {
        let defaults = ProfileConfig::default();

        let mut families = self.families.unwrap_or(defaults.families);
        families.sort_unstable();
        families.dedup();
        if families.is_empty() {
            return Err(ConfigError::InvalidParameter {
                parameter: "families",
                reason: "at least one descriptor family must be selected".to_string(),
            });
        }

        let pseudo_aac = PseudoAacParams::new(
            self.pseudo_aac_lamda.unwrap_or(defaults.pseudo_aac.lamda),
            check_weight(
                "pseudo_aac_weight",
                self.pseudo_aac_weight.unwrap_or(defaults.pseudo_aac.weight),
            )?,
        );
        let amphiphilic_pseudo_aac = PseudoAacParams::new(
            self.amphiphilic_lamda
                .unwrap_or(defaults.amphiphilic_pseudo_aac.lamda),
            check_weight(
                "amphiphilic_weight",
                self.amphiphilic_weight
                    .unwrap_or(defaults.amphiphilic_pseudo_aac.weight),
            )?,
        );
        let quasi_sequence_order = QuasiSequenceOrderParams::new(
            check_lag(
                "quasi_sequence_order_max_lag",
                self.quasi_sequence_order_max_lag
                    .unwrap_or(defaults.quasi_sequence_order.max_lag),
            )?,
            check_weight(
                "quasi_sequence_order_weight",
                self.quasi_sequence_order_weight
                    .unwrap_or(defaults.quasi_sequence_order.weight),
            )?,
        );

        Ok(ProfileConfig {
            families,
            autocorrelation_max_lag: check_lag(
                "autocorrelation_max_lag",
                self.autocorrelation_max_lag
                    .unwrap_or(defaults.autocorrelation_max_lag),
            )?,
            autocorrelation_properties: self
                .autocorrelation_properties
                .unwrap_or(defaults.autocorrelation_properties),
            pseudo_aac,
            amphiphilic_pseudo_aac,
            pseudo_aac_properties: check_properties(
                "pseudo_aac_properties",
                self.pseudo_aac_properties
                    .unwrap_or(defaults.pseudo_aac_properties),
            )?,
            amphiphilic_properties: check_properties(
                "amphiphilic_properties",
                self.amphiphilic_properties
                    .unwrap_or(defaults.amphiphilic_properties),
            )?,
            coupling_max_lag: check_lag(
                "coupling_max_lag",
                self.coupling_max_lag.unwrap_or(defaults.coupling_max_lag),
            )?,
            quasi_sequence_order,
            custom_distance_matrix: self.custom_distance_matrix,
        })
    }
}

fn check_weight(parameter: &'static str, weight: f64) -> Result<f64, ConfigError> {
    if weight.is_finite() && weight >= 0.0 {
        Ok(weight)
    } else {
        Err(ConfigError::InvalidParameter {
            parameter,
            reason: format!("weight must be a non-negative number, got {weight}"),
        })
    }
}

fn check_lag(parameter: &'static str, lag: usize) -> Result<usize, ConfigError> {
    if lag == 0 {
        return Err(ConfigError::InvalidParameter {
            parameter,
            reason: "maximum lag must be at least 1".to_string(),
        });
    }
    Ok(lag)
}

fn check_properties(
    parameter: &'static str,
    tables: Vec<PropertyTable>,
) -> Result<Vec<PropertyTable>, ConfigError> {
    if tables.is_empty() {
        return Err(ConfigError::InvalidParameter {
            parameter,
            reason: "at least one property table is required".to_string(),
        });
    }
    Ok(tables)
}
