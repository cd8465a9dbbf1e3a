//! AssetSweep — unused-asset scanner for game projects.
//!
//! Thin binary entry point. All logic lives in the `assetsweep-core`
//! and `assetsweep-cli` crates.

fn main() -> anyhow::Result<()> {
    // Initialise structured logging. Progress and results go to
    // stdout/stderr via the CLI; tracing carries diagnostics.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    assetsweep_cli::run()
}
