use crate::cli::{ComputeArgs, OutputFormat};
use crate::config::PartialProfileConfig;
use crate::error::{CliError, Result};
use crate::input::{INLINE_SEQUENCE_ID, SequenceRecord, read_records};
use crate::output::{Profile, write_csv, write_json};
use crate::utils::progress::CliProgressHandler;
use protdesc::engine::config::ProfileConfig;
use protdesc::engine::progress::ProgressReporter;
use protdesc::workflows;
use std::fs::File;
use std::io::{BufWriter, Write};
use tracing::{info, warn};

pub fn run(args: ComputeArgs) -> Result<()> {
    let partial_config = match &args.config {
        Some(path) => PartialProfileConfig::from_file(path)?,
        None => PartialProfileConfig::default(),
    };
    info!("Merging configuration from file and CLI arguments...");
    let final_config = partial_config.merge_with_cli(&args)?;

    let records = match (&args.input, &args.sequence) {
        (Some(path), _) => read_records(path)?,
        (None, Some(sequence)) => vec![SequenceRecord::new(INLINE_SEQUENCE_ID, sequence)?],
        (None, None) => {
            return Err(CliError::Argument(
                "Either --input or --sequence is required.".to_string(),
            ));
        }
    };
    if records.is_empty() {
        warn!("No sequences found in the input; nothing to compute.");
        return Ok(());
    }

    let profiles = compute_profiles(&records, &final_config)?;

    match &args.output {
        Some(path) => {
            info!("Writing {} profile(s) to {:?}", profiles.len(), path);
            write_profiles(BufWriter::new(File::create(path)?), &profiles, args.format)?;
            println!(
                "✓ {} profile(s) written to: {}",
                profiles.len(),
                path.display()
            );
        }
        None => write_profiles(std::io::stdout().lock(), &profiles, args.format)?,
    }
    Ok(())
}

fn compute_profiles(records: &[SequenceRecord], config: &ProfileConfig) -> Result<Vec<Profile>> {
    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    info!(
        "Invoking the profile workflow for {} record(s)...",
        records.len()
    );
    let profiles = records
        .iter()
        .map(|record| {
            progress_handler.set_record(&record.id);
            workflows::profile::run(&record.sequence, config, &reporter)
                .map(|descriptors| Profile {
                    id: record.id.clone(),
                    descriptors,
                })
                .map_err(|source| CliError::Record {
                    id: record.id.clone(),
                    source,
                })
        })
        .collect::<Result<Vec<_>>>();
    progress_handler.finish();
    profiles
}

fn write_profiles<W: Write>(writer: W, profiles: &[Profile], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Csv => write_csv(writer, profiles),
        OutputFormat::Json => write_json(writer, profiles),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;
    use std::fs;
    use tempfile::tempdir;

    const REFERENCE: &str =
        "ADGCGVGEGTGQGPMCNCMCMKWVYADEDAADLESDSFADEDASLESDSFPWSNQRVFCSFADEDAS";

    fn compute_args(argv: &[&str]) -> ComputeArgs {
        let mut full = vec!["protdesc", "compute"];
        full.extend_from_slice(argv);
        if let Commands::Compute(args) = Cli::parse_from(full).command {
            args
        } else {
            panic!("Expected Compute command");
        }
    }

    #[test]
    fn fasta_input_produces_one_csv_row_per_record() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.fasta");
        let output = dir.path().join("out.csv");
        fs::write(&input, format!(">p1\n{REFERENCE}\n>p2 second\nACDEFGHIKL\n")).unwrap();

        run(compute_args(&[
            "-i",
            input.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
            "--families",
            "aac,ctd",
        ]))
        .unwrap();

        let text = fs::read_to_string(output).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("id,A,R,N,D"));
        assert_eq!(lines[0].split(',').count(), 1 + 20 + 147);
        assert!(lines[1].starts_with("p1,11.94,"));
        assert!(lines[2].starts_with("p2,10,0,0,10,"));
    }

    #[test]
    fn inline_sequence_writes_json() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("out.json");
        run(compute_args(&[
            "-s",
            REFERENCE,
            "-o",
            output.to_str().unwrap(),
            "--format",
            "json",
            "--families",
            "paac",
            "--lamda",
            "5",
        ]))
        .unwrap();

        let parsed: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(output).unwrap()).unwrap();
        assert_eq!(parsed[0]["id"], "sequence");
        assert_eq!(parsed[0]["descriptors"].as_object().unwrap().len(), 25);
    }

    #[test]
    fn failing_record_is_named_in_the_error() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.fasta");
        fs::write(&input, format!(">long\n{REFERENCE}\n>short\nACDEF\n")).unwrap();

        let err = run(compute_args(&[
            "-i",
            input.to_str().unwrap(),
            "-o",
            dir.path().join("out.csv").to_str().unwrap(),
            "--families",
            "moran",
        ]))
        .unwrap_err();
        assert!(matches!(err, CliError::Record { id, .. } if id == "short"));
    }
}
