/// Scanner module — classifies every asset in an inventory as used or
/// unused.
///
/// The scan is a pure, single-threaded, read-only function of its inputs:
/// an [`AssetInventory`], a [`DependencyIndex`], and the
/// [`ExclusionRules`]. Per asset, in order:
///
/// 1. **Exclusion filter** — protected paths are "used", checked before
///    any dependency query.
/// 2. **Non-content filter** — directories and metadata side-files are
///    "used".
/// 3. **Sprite-sheet case** — a sheet is "used" iff ANY of its sprites is
///    named in another asset's dependency list. The index does not index
///    by sprite, so this walks the full inventory per sprite.
/// 4. **General case** — an asset whose dependency list has at most one
///    entry (the conventional self-entry) is "unused". This is the
///    original tool's heuristic, replicated exactly: it conflates
///    outgoing dependency count with incoming references and holds only
///    because dependency lists include the asset itself.
///
/// A failed dependency lookup classifies the asset as "used" (fail safe)
/// and is counted, logged, and reported — never silently swallowed and
/// never fatal.
pub mod progress;

use crate::error::ScanError;
use crate::inventory::{AssetInventory, DependencyIndex};
use crate::model::{AssetKind, AssetPath, ScanResult, ScanStats};
use crate::rules::ExclusionRules;
use progress::ScanProgress;

use crossbeam_channel::{Receiver, Sender};
use parking_lot::RwLock;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Instant;
use tracing::{info, warn};

/// A shared, concurrently-readable unused-asset list.
///
/// The scan thread holds the write lock briefly when appending a hit; a
/// frontend holds a read lock to render results while the scan is running.
pub type LiveResults = Arc<RwLock<Vec<AssetPath>>>;

/// Maximum number of progress messages that may queue up in the channel.
///
/// A frontend drains the channel periodically; if it falls behind, the
/// scanner stalls on `send` rather than consuming unbounded heap.
pub const PROGRESS_CHANNEL_CAPACITY: usize = 1_024;

/// An `Update` message is emitted every this many assets.
const PROGRESS_INTERVAL: u64 = 256;

/// Handle to a running or completed background scan. Allows cancellation
/// and receiving progress updates.
pub struct ScanHandle {
    /// Receiver for progress updates from the scan thread.
    pub progress_rx: Receiver<ScanProgress>,
    /// Shared unused-asset list, populated incrementally.
    pub live_results: LiveResults,
    /// Flag to request cancellation.
    cancel_flag: Arc<AtomicBool>,
    /// Join handle for the scan thread.
    _thread: Option<thread::JoinHandle<()>>,
}

impl ScanHandle {
    /// Request the scan to stop at the next asset boundary.
    pub fn cancel(&self) {
        self.cancel_flag.store(true, Ordering::Relaxed);
    }

    /// Check whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.cancel_flag.load(Ordering::Relaxed)
    }
}

/// Run a synchronous scan to completion.
///
/// An empty inventory yields an empty result, not an error.
pub fn scan<A, D>(
    inventory: &A,
    deps: &D,
    rules: &ExclusionRules,
) -> Result<ScanResult, ScanError>
where
    A: AssetInventory + ?Sized,
    D: DependencyIndex + ?Sized,
{
    let never = AtomicBool::new(false);
    scan_cancellable(inventory, deps, rules, &never)
}

/// Run a synchronous scan, checking `cancel` between assets.
///
/// A cancelled scan returns [`ScanError::Cancelled`] rather than a partial
/// result that could be mistaken for a complete one.
pub fn scan_cancellable<A, D>(
    inventory: &A,
    deps: &D,
    rules: &ExclusionRules,
    cancel: &AtomicBool,
) -> Result<ScanResult, ScanError>
where
    A: AssetInventory + ?Sized,
    D: DependencyIndex + ?Sized,
{
    run_scan(inventory, deps, rules, cancel, None, None)
}

/// Start a scan on a background thread.
///
/// Rules are validated up front so a malformed configuration fails here,
/// before the thread spawns. Returns a `ScanHandle` for receiving
/// progress, reading live results, and requesting cancellation.
pub fn start_scan<S>(assets: Arc<S>, rules: ExclusionRules) -> Result<ScanHandle, ScanError>
where
    S: AssetInventory + DependencyIndex + Send + Sync + 'static,
{
    rules.validate()?;

    let (progress_tx, progress_rx) =
        crossbeam_channel::bounded::<ScanProgress>(PROGRESS_CHANNEL_CAPACITY);
    let cancel_flag = Arc::new(AtomicBool::new(false));
    let cancel_clone = cancel_flag.clone();

    let live_results: LiveResults = Arc::new(RwLock::new(Vec::new()));
    let results_clone = live_results.clone();

    let thread = thread::Builder::new()
        .name("assetsweep-scanner".into())
        .spawn(move || {
            info!("Starting asset scan ({} assets)", assets.paths().len());
            let outcome = run_scan(
                &*assets,
                &*assets,
                &rules,
                &cancel_clone,
                Some(&progress_tx),
                Some(&results_clone),
            );
            match outcome {
                Ok(result) => {
                    let _ = progress_tx.send(ScanProgress::Complete {
                        stats: result.stats,
                    });
                }
                Err(ScanError::Cancelled) => {
                    let _ = progress_tx.send(ScanProgress::Cancelled);
                }
                Err(e) => {
                    // Validation happened before spawn; anything else here
                    // is an inventory contradiction. Report and stop.
                    warn!("Scan aborted: {e}");
                    let _ = progress_tx.send(ScanProgress::Failed {
                        message: e.to_string(),
                    });
                }
            }
        })
        .map_err(|e| ScanError::InvalidInput(format!("failed to spawn scanner thread: {e}")))?;

    Ok(ScanHandle {
        progress_rx,
        live_results,
        cancel_flag,
        _thread: Some(thread),
    })
}

/// Shared scan driver for the sync and background entry points.
fn run_scan<A, D>(
    inventory: &A,
    deps: &D,
    rules: &ExclusionRules,
    cancel: &AtomicBool,
    progress: Option<&Sender<ScanProgress>>,
    live: Option<&LiveResults>,
) -> Result<ScanResult, ScanError>
where
    A: AssetInventory + ?Sized,
    D: DependencyIndex + ?Sized,
{
    rules.validate()?;

    let paths = inventory.paths();
    validate_inventory(paths)?;

    let start = Instant::now();
    let mut stats = ScanStats {
        total_assets: paths.len() as u64,
        ..Default::default()
    };
    let mut unused = Vec::new();
    let mut cache = DepCache::new(deps, progress);

    for (scanned, path) in paths.iter().enumerate() {
        if cancel.load(Ordering::Relaxed) {
            return Err(ScanError::Cancelled);
        }

        if is_unused(path, inventory, rules, &mut cache, &mut stats) {
            unused.push(path.clone());
            if let Some(live) = live {
                live.write().push(path.clone());
            }
        }

        if let Some(tx) = progress {
            let scanned = scanned as u64 + 1;
            if scanned % PROGRESS_INTERVAL == 0 {
                let _ = tx.send(ScanProgress::Update {
                    scanned,
                    unused_found: unused.len() as u64,
                    current_path: path.to_string(),
                });
            }
        }
    }

    stats.lookup_failures = cache.failures;
    stats.duration = start.elapsed();

    info!(
        "Asset scan complete: {} assets, {} unused, {} lookup failures in {:?}",
        stats.total_assets,
        unused.len(),
        stats.lookup_failures,
        stats.duration
    );

    Ok(ScanResult { unused, stats })
}

/// The inventory must not name the same asset twice — the result order
/// contract is meaningless over a self-contradictory snapshot.
fn validate_inventory(paths: &[AssetPath]) -> Result<(), ScanError> {
    let mut seen = HashSet::with_capacity(paths.len());
    for path in paths {
        if !seen.insert(path) {
            return Err(ScanError::InvalidInput(format!(
                "duplicate asset path in inventory: {path}"
            )));
        }
    }
    Ok(())
}

/// Classify one asset. `true` means unused.
fn is_unused<'a, A, D>(
    path: &'a AssetPath,
    inventory: &'a A,
    rules: &ExclusionRules,
    cache: &mut DepCache<'a, D>,
    stats: &mut ScanStats,
) -> bool
where
    A: AssetInventory + ?Sized,
    D: DependencyIndex + ?Sized,
{
    // Step 1: protected paths are never candidates, checked before any
    // dependency query.
    if rules.is_excluded(path) {
        stats.excluded += 1;
        return false;
    }

    // Step 2: directories and metadata side-files are not content assets.
    let kind = inventory.kind(path);
    if matches!(kind, AssetKind::Directory | AssetKind::MetaFile)
        || path.is_directory()
        || path.is_meta_file()
    {
        stats.non_content += 1;
        return false;
    }

    // Step 3: a sprite sheet is used iff any of its sprites is referenced
    // by another asset.
    if kind == AssetKind::SpriteSheet {
        stats.sheets_inspected += 1;
        return !sheet_is_used(path, inventory, cache);
    }

    // Step 4: the original heuristic — a dependency list of length <= 1
    // holds only the conventional self-entry, so nothing else is involved.
    // A failed lookup classifies the asset as used (fail safe).
    match cache.get(path) {
        Some(list) => list.len() <= 1,
        None => false,
    }
}

/// Whether any sprite of `sheet` appears in another asset's dependency
/// list.
///
/// O(assets × sprites): the dependency index is keyed by asset, not by
/// sprite, so each sprite requires a walk over the full inventory. A
/// lookup failure during the walk leaves that asset's list unknown — it
/// could name one of the sprites — so the sheet is kept as used (fail
/// safe); the failure itself is recorded by the cache.
fn sheet_is_used<'a, A, D>(
    sheet: &'a AssetPath,
    inventory: &'a A,
    cache: &mut DepCache<'a, D>,
) -> bool
where
    A: AssetInventory + ?Sized,
    D: DependencyIndex + ?Sized,
{
    let mut saw_failure = false;
    for sprite in inventory.sprites(sheet) {
        for other in inventory.paths() {
            if other == sheet {
                continue;
            }
            match cache.get(other) {
                Some(list) => {
                    if list.contains(&sprite.id) {
                        return true;
                    }
                }
                None => saw_failure = true,
            }
        }
    }
    saw_failure
}

/// Per-scan dependency-query memoization.
///
/// Each asset's dependency list is fetched at most once per scan — the
/// sprite-sheet walk revisits the same assets many times. Failures are
/// memoized too, so one stale index entry produces exactly one warning.
struct DepCache<'a, D: ?Sized> {
    deps: &'a D,
    cache: HashMap<&'a AssetPath, Option<&'a [AssetPath]>>,
    progress: Option<&'a Sender<ScanProgress>>,
    failures: u64,
}

impl<'a, D: DependencyIndex + ?Sized> DepCache<'a, D> {
    fn new(deps: &'a D, progress: Option<&'a Sender<ScanProgress>>) -> Self {
        Self {
            deps,
            cache: HashMap::new(),
            progress,
            failures: 0,
        }
    }

    /// Memoized dependency lookup. `None` means the query failed.
    fn get(&mut self, path: &'a AssetPath) -> Option<&'a [AssetPath]> {
        if let Some(cached) = self.cache.get(path) {
            return *cached;
        }
        let fetched = match self.deps.dependencies(path) {
            Ok(list) => Some(list),
            Err(e) => {
                self.failures += 1;
                warn!("Dependency lookup failed for {path}: {e}");
                if let Some(tx) = self.progress {
                    let _ = tx.send(ScanProgress::Warning {
                        path: path.to_string(),
                        message: e.to_string(),
                    });
                }
                None
            }
        };
        self.cache.insert(path, fetched);
        fetched
    }
}
