/// Scan result export — CSV and JSON writers.
///
/// CSV carries run metadata in leading key/value rows followed by one row
/// per unused asset; JSON serializes the whole `ScanResult` including
/// stats. Both stamp the generation time so exported reports are
/// self-describing.
use crate::model::ScanResult;
use chrono::Utc;
use serde::Serialize;
use std::io::Write;

/// Write the unused-asset list as CSV.
///
/// Leading rows are `key,value` metadata; a `path` header then introduces
/// the one-column asset list, so the writer must allow mixed record
/// lengths.
pub fn write_csv<W: Write>(result: &ScanResult, out: W) -> Result<(), csv::Error> {
    let mut writer = csv::WriterBuilder::new().flexible(true).from_writer(out);

    let generated_at = Utc::now().to_rfc3339();
    writer.write_record(["generated_at", generated_at.as_str()])?;
    writer.write_record(["total_assets", result.stats.total_assets.to_string().as_str()])?;
    writer.write_record(["unused_count", result.unused_count().to_string().as_str()])?;
    writer.write_record([
        "lookup_failures",
        result.stats.lookup_failures.to_string().as_str(),
    ])?;
    writer.write_record(["path"])?;
    for path in &result.unused {
        writer.write_record([path.as_str()])?;
    }
    writer.flush()?;
    Ok(())
}

/// JSON document wrapping the result with a generation timestamp.
#[derive(Serialize)]
struct JsonReport<'a> {
    generated_at: String,
    #[serde(flatten)]
    result: &'a ScanResult,
}

/// Write the full result (list + stats) as pretty-printed JSON.
pub fn write_json<W: Write>(result: &ScanResult, out: W) -> Result<(), serde_json::Error> {
    serde_json::to_writer_pretty(
        out,
        &JsonReport {
            generated_at: Utc::now().to_rfc3339(),
            result,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AssetPath, ScanStats};

    fn sample_result() -> ScanResult {
        ScanResult {
            unused: vec![
                AssetPath::new("Assets/Art/tex.png"),
                AssetPath::new("Assets/Audio/old.wav"),
            ],
            stats: ScanStats {
                total_assets: 10,
                lookup_failures: 1,
                ..Default::default()
            },
        }
    }

    #[test]
    fn csv_lists_every_unused_path() {
        let mut buf = Vec::new();
        write_csv(&sample_result(), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Assets/Art/tex.png"));
        assert!(text.contains("Assets/Audio/old.wav"));
        assert!(text.contains("unused_count,2"));
        assert!(text.contains("lookup_failures,1"));
    }

    #[test]
    fn json_round_trips_structure() {
        let mut buf = Vec::new();
        write_json(&sample_result(), &mut buf).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["unused"].as_array().unwrap().len(), 2);
        assert_eq!(value["stats"]["total_assets"], 10);
        assert!(value["generated_at"].is_string());
    }
}
