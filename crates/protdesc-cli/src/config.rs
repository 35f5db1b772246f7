use crate::cli::ComputeArgs;
use crate::error::{CliError, Result};
use protdesc::core::io::aaindex::{self, AaIndexData};
use protdesc::core::io::tables::{load_distance_matrix, load_property_tables};
use protdesc::core::tables::property::PropertyTable;
use protdesc::engine::config::{DescriptorFamily, ProfileConfig, ProfileConfigBuilder};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialAutocorrelationConfig {
    #[serde(rename = "max-lag")]
    max_lag: Option<usize>,
    properties: Option<Vec<String>>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialPseudoAacConfig {
    lamda: Option<usize>,
    weight: Option<f64>,
    properties: Option<Vec<String>>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialSequenceOrderConfig {
    #[serde(rename = "max-lag")]
    max_lag: Option<usize>,
    #[serde(rename = "distance-matrix")]
    distance_matrix: Option<PathBuf>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialQuasiSequenceOrderConfig {
    #[serde(rename = "max-lag")]
    max_lag: Option<usize>,
    weight: Option<f64>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialProfileConfig {
    families: Option<Vec<String>>,
    #[serde(rename = "property-file")]
    property_file: Option<PathBuf>,
    autocorrelation: Option<PartialAutocorrelationConfig>,
    #[serde(rename = "pseudo-aac")]
    pseudo_aac: Option<PartialPseudoAacConfig>,
    #[serde(rename = "amphiphilic-pseudo-aac")]
    amphiphilic_pseudo_aac: Option<PartialPseudoAacConfig>,
    #[serde(rename = "sequence-order")]
    sequence_order: Option<PartialSequenceOrderConfig>,
    #[serde(rename = "quasi-sequence-order")]
    quasi_sequence_order: Option<PartialQuasiSequenceOrderConfig>,
}

impl PartialProfileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Resolves the final profile. Dedicated flags win over `--set` values, which are written
    /// into the file layer before merging; library defaults fill whatever is left.
    pub fn merge_with_cli(mut self, args: &ComputeArgs) -> Result<ProfileConfig> {
        self.apply_set_values(&args.set_values)?;

        let autocorrelation = self.autocorrelation.take().unwrap_or_default();
        let pseudo_aac = self.pseudo_aac.take().unwrap_or_default();
        let amphiphilic = self.amphiphilic_pseudo_aac.take().unwrap_or_default();
        let sequence_order = self.sequence_order.take().unwrap_or_default();
        let quasi = self.quasi_sequence_order.take().unwrap_or_default();

        let mut builder = ProfileConfigBuilder::new();

        if let Some(names) = args.families.as_ref().or(self.families.as_ref()) {
            let families = names
                .iter()
                .map(|name| name.parse::<DescriptorFamily>())
                .collect::<std::result::Result<Vec<_>, _>>()
                .map_err(|e| CliError::Config(e.to_string()))?;
            builder = builder.families(families);
        }
        if let Some(max_lag) = args.max_lag.or(autocorrelation.max_lag) {
            builder = builder.autocorrelation_max_lag(max_lag);
        }
        if let Some(lamda) = args.lamda.or(pseudo_aac.lamda) {
            builder = builder.pseudo_aac_lamda(lamda);
        }
        if let Some(weight) = args.weight.or(pseudo_aac.weight) {
            builder = builder.pseudo_aac_weight(weight);
        }
        if let Some(lamda) = args.apaac_lamda.or(amphiphilic.lamda) {
            builder = builder.amphiphilic_lamda(lamda);
        }
        if let Some(weight) = args.apaac_weight.or(amphiphilic.weight) {
            builder = builder.amphiphilic_weight(weight);
        }
        if let Some(max_lag) = args.socn_max_lag.or(sequence_order.max_lag) {
            builder = builder.coupling_max_lag(max_lag);
        }
        if let Some(max_lag) = args.qso_max_lag.or(quasi.max_lag) {
            builder = builder.quasi_sequence_order_max_lag(max_lag);
        }
        if let Some(weight) = args.qso_weight.or(quasi.weight) {
            builder = builder.quasi_sequence_order_weight(weight);
        }

        let user_tables = match &self.property_file {
            Some(path) => load_user_tables(path)?,
            None => Vec::new(),
        };
        if let Some(names) = &autocorrelation.properties {
            builder =
                builder.autocorrelation_properties(resolve_properties(names, &user_tables)?);
        }
        if let Some(names) = &pseudo_aac.properties {
            builder = builder.pseudo_aac_properties(resolve_properties(names, &user_tables)?);
        }
        if let Some(names) = &amphiphilic.properties {
            builder = builder.amphiphilic_properties(resolve_properties(names, &user_tables)?);
        }
        if let Some(path) = &sequence_order.distance_matrix {
            builder = builder.custom_distance_matrix(load_distance_matrix(path, None)?);
        }

        builder.build().map_err(|e| CliError::Config(e.to_string()))
    }

    fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        if set_values.is_empty() {
            return Ok(());
        }
        for kv_pair in set_values {
            let parts: Vec<_> = kv_pair.splitn(2, '=').collect();
            if parts.len() != 2 {
                return Err(CliError::Config(format!(
                    "Invalid --set format: '{}'. Expected KEY=VALUE.",
                    kv_pair
                )));
            }
            let key = parts[0];
            let value_str = parts[1];

            let parse_integer = || -> Result<usize> {
                value_str.parse().map_err(|_| {
                    CliError::Config(format!("Invalid integer value for {}: {}", key, value_str))
                })
            };
            let parse_float = || -> Result<f64> {
                value_str.parse().map_err(|_| {
                    CliError::Config(format!("Invalid float value for {}: {}", key, value_str))
                })
            };

            match key {
                "autocorrelation.max-lag" => {
                    self.autocorrelation
                        .get_or_insert_with(Default::default)
                        .max_lag = Some(parse_integer()?);
                }
                "pseudo-aac.lamda" => {
                    self.pseudo_aac.get_or_insert_with(Default::default).lamda =
                        Some(parse_integer()?);
                }
                "pseudo-aac.weight" => {
                    self.pseudo_aac.get_or_insert_with(Default::default).weight =
                        Some(parse_float()?);
                }
                "amphiphilic-pseudo-aac.lamda" => {
                    self.amphiphilic_pseudo_aac
                        .get_or_insert_with(Default::default)
                        .lamda = Some(parse_integer()?);
                }
                "amphiphilic-pseudo-aac.weight" => {
                    self.amphiphilic_pseudo_aac
                        .get_or_insert_with(Default::default)
                        .weight = Some(parse_float()?);
                }
                "sequence-order.max-lag" => {
                    self.sequence_order
                        .get_or_insert_with(Default::default)
                        .max_lag = Some(parse_integer()?);
                }
                "quasi-sequence-order.max-lag" => {
                    self.quasi_sequence_order
                        .get_or_insert_with(Default::default)
                        .max_lag = Some(parse_integer()?);
                }
                "quasi-sequence-order.weight" => {
                    self.quasi_sequence_order
                        .get_or_insert_with(Default::default)
                        .weight = Some(parse_float()?);
                }
                _ => {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        key
                    )));
                }
            }
        }
        Ok(())
    }
}

/// `.toml` files hold named property tables; anything else is read as an AAindex database
/// whose index records are named by accession.
fn load_user_tables(path: &Path) -> Result<Vec<PropertyTable>> {
    if path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("toml")) {
        return Ok(load_property_tables(path)?);
    }
    let records = aaindex::load(path)?;
    let tables = records
        .iter()
        .filter(|record| matches!(record.data, AaIndexData::Index(_)))
        .filter_map(|record| match record.to_property_table() {
            Ok(table) => Some(table),
            Err(e) => {
                warn!("Skipping AAindex record {}: {}", record.accession, e);
                None
            }
        })
        .collect::<Vec<_>>();
    debug!("Loaded {} property table(s) from {:?}", tables.len(), path);
    Ok(tables)
}

/// Looks each name up in the user's property file first, then among the built-in tables.
fn resolve_properties(names: &[String], user_tables: &[PropertyTable]) -> Result<Vec<PropertyTable>> {
    names
        .iter()
        .map(|name| match user_tables.iter().find(|t| t.name() == name) {
            Some(table) => Ok(table.clone()),
            None => PropertyTable::standard(name).map_err(|e| CliError::Config(e.to_string())),
        })
        .collect()
}
