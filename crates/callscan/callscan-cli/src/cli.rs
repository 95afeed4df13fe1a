use std::path::PathBuf;

use callscan_core::config::ReportFormat;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "callscan",
    version,
    about = "Privacy-compliance scanner for debt-recovery call transcripts"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        env = "CALLSCAN_CONFIG",
        help = "Config file (defaults to ./callscan.toml when present)"
    )]
    pub config: Option<PathBuf>,
    #[arg(short, long, global = true, help = "Log debug detail to stderr")]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze every call record in a directory and write a report.
    Scan {
        dir: PathBuf,
        #[arg(short, long, help = "Report path")]
        output: Option<String>,
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
        #[arg(long, help = "Worker threads")]
        threads: Option<usize>,
        #[arg(long, default_value_t = false, help = "Process records one at a time")]
        sequential: bool,
        #[arg(long, help = "Record file extension, without the dot")]
        extension: Option<String>,
        #[arg(long, default_value_t = false, help = "Write the report to stdout")]
        stdout: bool,
    },
    /// Show every sensitive disclosure in one call record.
    Analyze { file: PathBuf },
    /// Show sensitive-information matches in a piece of text.
    Detect { text: String },
    /// Print the resolved configuration as TOML.
    Config,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Csv,
    Json,
}

impl From<OutputFormat> for ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Csv => ReportFormat::Csv,
            OutputFormat::Json => ReportFormat::Json,
        }
    }
}
