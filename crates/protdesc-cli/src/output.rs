use crate::error::{CliError, Result};
use protdesc::core::models::descriptors::DescriptorVector;
use serde::Serialize;
use std::io::Write;

/// Descriptor profile of one input record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Profile {
    pub id: String,
    pub descriptors: DescriptorVector,
}

/// Writes one header row (`id` followed by the descriptor names of the first profile) and one
/// row per profile. Every profile must carry the same descriptors.
pub fn write_csv<W: Write>(writer: W, profiles: &[Profile]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    let Some(first) = profiles.first() else {
        return Ok(());
    };
    let names = first.descriptors.names();

    csv_writer
        .write_record(std::iter::once("id").chain(names.iter().map(String::as_str)))
        .map_err(|e| CliError::Other(e.into()))?;

    for profile in profiles {
        let mut row = Vec::with_capacity(names.len() + 1);
        row.push(profile.id.clone());
        for name in names {
            let value = profile.descriptors.get(name).ok_or_else(|| {
                CliError::Argument(format!(
                    "Record '{}' has no descriptor named '{}'",
                    profile.id, name
                ))
            })?;
            row.push(value.to_string());
        }
        csv_writer
            .write_record(&row)
            .map_err(|e| CliError::Other(e.into()))?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Writes an array of `{ "id": ..., "descriptors": { name: value, ... } }` objects.
pub fn write_json<W: Write>(mut writer: W, profiles: &[Profile]) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, profiles).map_err(|e| CliError::Other(e.into()))?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
