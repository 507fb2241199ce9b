//! JSON report output.
//!
//! Reports are grouped by run date:
//! ```text
//! json_output_dir/
//! └── 2025-05-06/
//!     ├── 081500.json
//!     └── 203000.json
//! ```

use crate::models::AnalysisReport;
use std::error::Error;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{error, info, instrument};

/// Path of the report file inside `json_output_dir`.
pub fn report_path(report: &AnalysisReport, json_output_dir: &Path) -> PathBuf {
    json_output_dir
        .join(&report.local_date)
        .join(format!("{}.json", report.local_time.replace(':', "")))
}

/// Write an [`AnalysisReport`] to `{json_output_dir}/{date}/{HHMMSS}.json`.
///
/// # Returns
///
/// The path written, or an error if directory creation or writing fails.
#[instrument(level = "info", skip_all, fields(json_output_dir = %json_output_dir.display()))]
pub async fn write_report(
    report: &AnalysisReport,
    json_output_dir: &Path,
) -> Result<PathBuf, Box<dyn Error>> {
    let json = serde_json::to_string_pretty(report)?;
    let path = report_path(report, json_output_dir);

    if let Some(dir) = path.parent() {
        info!(dir = %dir.display(), "Ensuring JSON directory exists");
        if let Err(e) = fs::create_dir_all(dir).await {
            error!(dir = %dir.display(), error = %e, "Failed to create JSON dir");
            return Err(e.into());
        }
    }

    info!(path = %path.display(), "Writing JSON");
    fs::write(&path, json).await?;
    info!(path = %path.display(), "Wrote JSON report");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> AnalysisReport {
        AnalysisReport {
            local_date: "2025-05-06".to_string(),
            local_time: "20:30:00".to_string(),
            ngram_size: 2,
            top_n: 20,
            sources: vec![],
            comparison: None,
        }
    }

    #[test]
    fn test_report_path_layout() {
        let path = report_path(&report(), Path::new("/srv/json"));
        assert_eq!(path, PathBuf::from("/srv/json/2025-05-06/203000.json"));
    }

    #[tokio::test]
    async fn test_write_report_creates_dated_directory() {
        let dir = std::env::temp_dir().join(format!("headline_stats_json_{}", std::process::id()));
        let path = write_report(&report(), &dir).await.unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(value["local_date"], "2025-05-06");
        assert_eq!(value["sources"].as_array().unwrap().len(), 0);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
