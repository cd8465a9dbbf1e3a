/// `scan` subcommand — load a snapshot, run the background scan, render
/// the result.
use crate::presenter::TextPresenter;
use crate::{rules_cmd, Format};
use anyhow::{bail, Context};
use assetsweep_core::inventory::{AssetInventory, ProjectManifest};
use assetsweep_core::model::{ScanResult, ScanStats};
use assetsweep_core::report::{self, ResultPresenter};
use assetsweep_core::scanner::progress::ScanProgress;
use assetsweep_core::scanner::start_scan;
use crossbeam_channel::Receiver;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

pub(crate) struct ScanArgs {
    pub manifest: PathBuf,
    pub rules: Option<PathBuf>,
    pub format: Format,
    pub output: Option<PathBuf>,
    pub project_root: Option<PathBuf>,
    pub quiet: bool,
    pub fail_on_unused: bool,
}

pub(crate) fn run(args: ScanArgs) -> anyhow::Result<()> {
    let rules = rules_cmd::load_rules(args.rules.as_deref())?;

    let index = ProjectManifest::load(&args.manifest)
        .with_context(|| format!("failed to load manifest {}", args.manifest.display()))?
        .into_index()
        .context("snapshot manifest is not a valid inventory")?;

    info!("Scanning {} assets", index.paths().len());
    let handle = start_scan(Arc::new(index), rules)?;
    let stats = drain_progress(&handle.progress_rx, args.quiet)?;

    let result = ScanResult {
        unused: handle.live_results.read().clone(),
        stats,
    };

    render(&result, &args)?;

    if args.fail_on_unused && !result.is_empty() {
        bail!("found {} unused assets", result.unused_count());
    }
    Ok(())
}

/// Block on the progress channel until a terminal message arrives,
/// mirroring running totals and per-path warnings to stderr.
fn drain_progress(progress_rx: &Receiver<ScanProgress>, quiet: bool) -> anyhow::Result<ScanStats> {
    for message in progress_rx.iter() {
        match message {
            ScanProgress::Update {
                scanned,
                unused_found,
                ..
            } => {
                if !quiet {
                    eprint!("\rscanned {scanned} assets, {unused_found} unused");
                }
            }
            ScanProgress::Warning { path, message } => {
                // The leading newline breaks out of the `\r` progress line.
                if !quiet {
                    eprintln!("\nwarning: dependency lookup failed for {path}: {message}");
                }
            }
            ScanProgress::Complete { stats } => {
                if !quiet {
                    eprintln!();
                }
                return Ok(stats);
            }
            ScanProgress::Cancelled => bail!("scan cancelled"),
            ScanProgress::Failed { message } => bail!("scan aborted: {message}"),
        }
    }
    bail!("scanner stopped without reporting completion")
}

/// Render the result in the requested format to stdout or `--output`.
fn render(result: &ScanResult, args: &ScanArgs) -> anyhow::Result<()> {
    let out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(
            std::fs::File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?,
        ),
        None => Box::new(std::io::stdout().lock()),
    };

    match args.format {
        Format::Text => {
            let mut presenter = TextPresenter::new(out, args.project_root.clone());
            presenter.present(result);
        }
        Format::Json => report::write_json(result, out)?,
        Format::Csv => report::write_csv(result, out)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_manifest(dir: &std::path::Path) -> PathBuf {
        let path = dir.join("snapshot.json");
        fs::write(
            &path,
            r#"{
                "assets": [
                    { "path": "Assets/Art/tex.png",
                      "dependencies": ["Assets/Art/tex.png"] },
                    { "path": "Assets/Prefabs/Hero.prefab",
                      "dependencies": ["Assets/Prefabs/Hero.prefab", "Assets/Art/tex.png"] }
                ]
            }"#,
        )
        .unwrap();
        path
    }

    fn args(manifest: PathBuf, format: Format, output: Option<PathBuf>) -> ScanArgs {
        ScanArgs {
            manifest,
            rules: None,
            format,
            output,
            project_root: None,
            quiet: true,
            fail_on_unused: false,
        }
    }

    #[test]
    fn scan_writes_json_report() {
        let tmp = TempDir::new().unwrap();
        let manifest = write_manifest(tmp.path());
        let out = tmp.path().join("report.json");

        run(args(manifest, Format::Json, Some(out.clone()))).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
        let unused: Vec<&str> = value["unused"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert_eq!(unused, ["Assets/Art/tex.png"]);
        assert_eq!(value["stats"]["total_assets"], 2);
    }

    #[test]
    fn scan_writes_csv_report() {
        let tmp = TempDir::new().unwrap();
        let manifest = write_manifest(tmp.path());
        let out = tmp.path().join("report.csv");

        run(args(manifest, Format::Csv, Some(out.clone()))).unwrap();

        let text = fs::read_to_string(&out).unwrap();
        assert!(text.contains("Assets/Art/tex.png"));
        assert!(text.contains("unused_count,1"));
    }

    #[test]
    fn fail_on_unused_gates_nonzero() {
        let tmp = TempDir::new().unwrap();
        let manifest = write_manifest(tmp.path());
        let out = tmp.path().join("report.txt");

        let mut a = args(manifest, Format::Text, Some(out));
        a.fail_on_unused = true;
        let err = run(a).unwrap_err();
        assert!(err.to_string().contains("found 1 unused assets"));
    }

    /// Warnings are relayed, not terminal: the drain keeps going and
    /// still returns the completion stats.
    #[test]
    fn warnings_do_not_end_the_progress_drain() {
        let (tx, rx) = crossbeam_channel::bounded(8);
        tx.send(ScanProgress::Update {
            scanned: 1,
            unused_found: 0,
            current_path: "Assets/Art/tex.png".into(),
        })
        .unwrap();
        tx.send(ScanProgress::Warning {
            path: "Assets/Anim/walk.anim".into(),
            message: "stale index entry".into(),
        })
        .unwrap();
        tx.send(ScanProgress::Complete {
            stats: ScanStats {
                total_assets: 2,
                lookup_failures: 1,
                ..Default::default()
            },
        })
        .unwrap();

        let stats = drain_progress(&rx, false).unwrap();
        assert_eq!(stats.total_assets, 2);
        assert_eq!(stats.lookup_failures, 1);
    }

    #[test]
    fn missing_manifest_is_an_error() {
        let err = run(args(
            PathBuf::from("/nonexistent/snapshot.json"),
            Format::Text,
            None,
        ))
        .unwrap_err();
        assert!(err.to_string().contains("failed to load manifest"));
    }
}
