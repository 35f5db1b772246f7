use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "protdesc - Compute composition, autocorrelation, CTD, pseudo amino acid composition and quasi-sequence-order descriptors for protein sequences.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute descriptor profiles for one sequence or every record of a FASTA file.
    Compute(ComputeArgs),
    /// Extract fixed-size windows centred on a residue.
    Subseq(SubseqArgs),
    /// List the built-in property, group and distance tables, or print one of them.
    Tables(TablesArgs),
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One header row and one row per sequence.
    #[default]
    Csv,
    /// An array of `{ "id", "descriptors" }` objects.
    Json,
}

/// Arguments for the `compute` subcommand.
#[derive(Args, Debug)]
pub struct ComputeArgs {
    // --- Input / Output ---
    /// Path to a FASTA file with one or more protein sequences.
    #[arg(
        short,
        long,
        value_name = "PATH",
        required_unless_present = "sequence",
        conflicts_with = "sequence"
    )]
    pub input: Option<PathBuf>,

    /// A single protein sequence given inline.
    #[arg(short, long, value_name = "SEQUENCE")]
    pub sequence: Option<String>,

    /// Path for the output file. Defaults to standard output.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    pub format: OutputFormat,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    // --- Descriptor Overrides ---
    /// Comma-separated descriptor families (aac, dpc, tpc, moreau-broto, moran, geary, ctd,
    /// paac, apaac, socn, qso).
    #[arg(long, value_name = "LIST", value_delimiter = ',')]
    pub families: Option<Vec<String>>,

    /// Override the type I pseudo amino acid composition rank.
    #[arg(long, value_name = "INT")]
    pub lamda: Option<usize>,

    /// Override the type I pseudo amino acid composition weight.
    #[arg(long, value_name = "FLOAT")]
    pub weight: Option<f64>,

    /// Override the amphiphilic pseudo amino acid composition rank.
    #[arg(long, value_name = "INT")]
    pub apaac_lamda: Option<usize>,

    /// Override the amphiphilic pseudo amino acid composition weight.
    #[arg(long, value_name = "FLOAT")]
    pub apaac_weight: Option<f64>,

    /// Override the maximum lag of the autocorrelation descriptors.
    #[arg(long, value_name = "INT")]
    pub max_lag: Option<usize>,

    /// Override the maximum lag of the sequence-order coupling numbers.
    #[arg(long, value_name = "INT")]
    pub socn_max_lag: Option<usize>,

    /// Override the maximum lag of the quasi-sequence-order descriptors.
    #[arg(long, value_name = "INT")]
    pub qso_max_lag: Option<usize>,

    /// Override the quasi-sequence-order weight.
    #[arg(long, value_name = "FLOAT")]
    pub qso_weight: Option<f64>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S pseudo-aac.lamda=5
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Arguments for the `subseq` subcommand.
#[derive(Args, Debug)]
pub struct SubseqArgs {
    /// The protein sequence to scan.
    #[arg(short, long, required = true, value_name = "SEQUENCE")]
    pub sequence: String,

    /// Residue at the centre of every window (one- or three-letter code).
    #[arg(long, default_value = "S", value_name = "RESIDUE")]
    pub center: String,

    /// Number of residues on each side of the centre.
    #[arg(short, long, default_value_t = 3, value_name = "INT")]
    pub window: usize,
}

/// Arguments for the `tables` subcommand.
#[derive(Args, Debug)]
pub struct TablesArgs {
    /// Name of a built-in table to print. Lists all tables when omitted.
    #[arg(value_name = "NAME")]
    pub name: Option<String>,
}
