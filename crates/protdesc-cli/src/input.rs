use crate::error::{CliError, Result};
use needletail::parse_fastx_file;
use protdesc::core::models::sequence::ProteinSequence;
use protdesc::engine::error::DescriptorError;
use std::path::Path;
use tracing::{debug, info};

/// Identifier given to a sequence passed inline with `--sequence`.
pub const INLINE_SEQUENCE_ID: &str = "sequence";

#[derive(Debug, Clone, PartialEq)]
pub struct SequenceRecord {
    pub id: String,
    pub sequence: ProteinSequence,
}

impl SequenceRecord {
    pub fn new(id: impl Into<String>, raw: &str) -> Result<Self> {
        let id = id.into();
        match ProteinSequence::new(&clean_sequence(raw)) {
            Ok(sequence) => Ok(Self { id, sequence }),
            Err(e) => Err(CliError::Record {
                id,
                source: DescriptorError::from(e),
            }),
        }
    }
}

/// Drops whitespace and upper-cases the remaining letters.
pub fn clean_sequence(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// The identifier is the header up to its first whitespace.
fn record_id(header: &[u8]) -> String {
    let header = String::from_utf8_lossy(header);
    header
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_string()
}

/// Reads every record of a FASTA (or FASTQ) file.
pub fn read_records(path: &Path) -> Result<Vec<SequenceRecord>> {
    debug!("Reading sequences from {:?}", path);
    let parse_error = |e: needletail::errors::ParseError| CliError::FileParsing {
        path: path.to_path_buf(),
        source: anyhow::Error::msg(e.to_string()),
    };
    let mut reader = parse_fastx_file(path).map_err(parse_error)?;

    let mut records = Vec::new();
    while let Some(record) = reader.next() {
        let record = record.map_err(parse_error)?;
        let id = record_id(record.id());
        let seq = record.seq();
        records.push(SequenceRecord::new(id, &String::from_utf8_lossy(&seq))?);
    }
    info!("Read {} sequence(s) from {:?}.", records.len(), path);
    Ok(records)
}
