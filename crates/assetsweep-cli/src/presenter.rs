/// Text presenter — renders a scan result as a human-readable report.
///
/// Implements the core's `ResultPresenter` so the CLI is just another
/// frontend behind the same seam a GUI or editor plugin would use. The
/// `locate` action resolves an asset path against the project root and
/// prints the absolute location — the command-line stand-in for
/// highlighting the asset in a project view.
use assetsweep_core::model::{AssetPath, ScanResult};
use assetsweep_core::report::ResultPresenter;
use std::io::Write;
use std::path::PathBuf;

pub struct TextPresenter<W: Write> {
    out: W,
    project_root: Option<PathBuf>,
}

impl<W: Write> TextPresenter<W> {
    pub fn new(out: W, project_root: Option<PathBuf>) -> Self {
        Self { out, project_root }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ResultPresenter for TextPresenter<W> {
    fn present(&mut self, result: &ScanResult) {
        let _ = writeln!(self.out, "Unused assets: {}", result.unused_count());
        if result.is_empty() {
            let _ = writeln!(self.out, "No unused assets found!");
        } else {
            for path in &result.unused {
                let _ = writeln!(self.out, "  {path}");
            }
        }
        let _ = writeln!(
            self.out,
            "Scanned {} assets in {:.2?} ({} excluded, {} non-content, {} sprite sheets)",
            result.stats.total_assets,
            result.stats.duration,
            result.stats.excluded,
            result.stats.non_content,
            result.stats.sheets_inspected,
        );
        if result.stats.lookup_failures > 0 {
            let _ = writeln!(
                self.out,
                "warning: {} dependency lookups failed; affected assets were kept as used",
                result.stats.lookup_failures,
            );
        }
    }

    fn locate(&mut self, path: &AssetPath) {
        let located = match &self.project_root {
            Some(root) => root.join(path.as_str()).display().to_string(),
            None => path.to_string(),
        };
        let _ = writeln!(self.out, "{located}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assetsweep_core::model::ScanStats;

    fn render(result: &ScanResult) -> String {
        let mut presenter = TextPresenter::new(Vec::new(), None);
        presenter.present(result);
        String::from_utf8(presenter.into_inner()).unwrap()
    }

    #[test]
    fn lists_unused_assets_with_count() {
        let result = ScanResult {
            unused: vec![AssetPath::new("Assets/Art/tex.png")],
            stats: ScanStats {
                total_assets: 3,
                ..Default::default()
            },
        };
        let text = render(&result);
        assert!(text.contains("Unused assets: 1"));
        assert!(text.contains("Assets/Art/tex.png"));
    }

    #[test]
    fn empty_result_says_so() {
        let result = ScanResult {
            unused: vec![],
            stats: ScanStats::default(),
        };
        assert!(render(&result).contains("No unused assets found!"));
    }

    #[test]
    fn lookup_failures_surface_as_warning() {
        let result = ScanResult {
            unused: vec![],
            stats: ScanStats {
                lookup_failures: 2,
                ..Default::default()
            },
        };
        assert!(render(&result).contains("warning: 2 dependency lookups failed"));
    }

    #[test]
    fn locate_resolves_against_project_root() {
        let mut presenter =
            TextPresenter::new(Vec::new(), Some(PathBuf::from("/projects/demo")));
        presenter.locate(&AssetPath::new("Assets/Art/tex.png"));
        let text = String::from_utf8(presenter.into_inner()).unwrap();
        assert!(text.contains("/projects/demo/Assets/Art/tex.png"));
    }
}
