/// AssetSweep CLI — command-line frontend.
///
/// This crate contains all presentation code. Scan logic lives in
/// `assetsweep-core`.
mod presenter;
mod rules_cmd;
mod scan;

pub use presenter::TextPresenter;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "assetsweep",
    version,
    about = "Finds unreferenced assets in a game project",
    long_about = "AssetSweep scans an exported asset-database snapshot and reports every \
                  asset that nothing else in the project references, honouring a \
                  configurable list of protected directories and extensions."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan a snapshot manifest for unused assets
    #[command(
        long_about = "Loads an asset-database snapshot (JSON manifest with per-asset \
                      dependency lists) and classifies every asset as used or unused. \
                      Protected paths — editor tooling, runtime-loaded resources, \
                      third-party packages — are never flagged."
    )]
    Scan {
        /// Path to the snapshot manifest (JSON)
        #[arg(value_name = "MANIFEST")]
        manifest: PathBuf,
        /// Exclusion rules file replacing the built-in defaults (JSON)
        #[arg(long, value_name = "FILE")]
        rules: Option<PathBuf>,
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
        /// Write output to a file instead of stdout
        #[arg(long, value_name = "FILE")]
        output: Option<PathBuf>,
        /// Project root for resolving locate paths in text output
        #[arg(long, value_name = "DIR")]
        project_root: Option<PathBuf>,
        /// Suppress progress reporting
        #[arg(long)]
        quiet: bool,
        /// Exit nonzero when unused assets are found (for CI gates)
        #[arg(long)]
        fail_on_unused: bool,
    },
    /// Print the effective exclusion rules
    #[command(
        long_about = "Prints the exclusion rules a scan would use — the built-in defaults, \
                      or the contents of --rules — as JSON suitable for editing and passing \
                      back via --rules."
    )]
    Rules {
        /// Exclusion rules file replacing the built-in defaults (JSON)
        #[arg(long, value_name = "FILE")]
        rules: Option<PathBuf>,
    },
}

/// Output format for scan results.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Human-readable list with a summary line.
    Text,
    /// Full result document, machine-readable.
    Json,
    /// One row per unused asset, for spreadsheets.
    Csv,
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Format::Text => "text",
            Format::Json => "json",
            Format::Csv => "csv",
        })
    }
}

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Scan {
            manifest,
            rules,
            format,
            output,
            project_root,
            quiet,
            fail_on_unused,
        } => scan::run(scan::ScanArgs {
            manifest,
            rules,
            format,
            output,
            project_root,
            quiet,
            fail_on_unused,
        }),
        Commands::Rules { rules } => rules_cmd::run(rules.as_deref()),
    }
}
