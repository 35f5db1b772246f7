use crate::cli::SubseqArgs;
use crate::error::{CliError, Result};
use crate::input::{INLINE_SEQUENCE_ID, SequenceRecord};
use protdesc::core::models::alphabet::AminoAcid;
use protdesc::engine::tasks::subsequence::subsequences;
use tracing::info;

pub fn run(args: SubseqArgs) -> Result<()> {
    for window in windows(&args)? {
        println!("{}", window);
    }
    Ok(())
}

fn windows(args: &SubseqArgs) -> Result<Vec<String>> {
    let center: AminoAcid = args
        .center
        .parse()
        .map_err(|e| CliError::Argument(format!("Invalid --center residue: {}", e)))?;
    let record = SequenceRecord::new(INLINE_SEQUENCE_ID, &args.sequence)?;
    let windows = subsequences(&record.sequence, center, args.window);
    info!(
        "Found {} window(s) of {} residues centred on '{}'.",
        windows.len(),
        2 * args.window + 1,
        center
    );
    Ok(windows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;

    fn subseq_args(argv: &[&str]) -> SubseqArgs {
        let mut full = vec!["protdesc", "subseq"];
        full.extend_from_slice(argv);
        if let Commands::Subseq(args) = Cli::parse_from(full).command {
            args
        } else {
            panic!("Expected Subseq command");
        }
    }

    #[test]
    fn default_center_is_serine_with_window_three() {
        let args = subseq_args(&["-s", "AAAGSGAAA"]);
        assert_eq!(windows(&args).unwrap(), vec!["AAGSGAA"]);
    }

    #[test]
    fn three_letter_center_is_accepted() {
        let args = subseq_args(&["-s", "ackdkca", "--center", "Lys", "-w", "1"]);
        assert_eq!(windows(&args).unwrap(), vec!["CKD", "DKC"]);
    }

    #[test]
    fn invalid_center_is_an_argument_error() {
        let args = subseq_args(&["-s", "ACDEF", "--center", "X"]);
        assert!(matches!(windows(&args), Err(CliError::Argument(_))));
    }
}
