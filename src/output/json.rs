//! JSON output formatting
//!
//! Serializes the full [`SimulationReport`]: parameters, work split,
//! per-region totals and the mean annual loss.

use crate::coordinator::SimulationReport;
use crate::Result;
use anyhow::Context;
use std::fs::File;
use std::path::Path;

/// Serialize a report to a JSON string
pub fn to_json(report: &SimulationReport, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(report)
    } else {
        serde_json::to_string(report)
    };
    json.context("Failed to serialize simulation report")
}

/// Write a report to a JSON file
pub fn write_json_file(report: &SimulationReport, path: &Path, pretty: bool) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create JSON output file: {}", path.display()))?;

    if pretty {
        serde_json::to_writer_pretty(file, report)?;
    } else {
        serde_json::to_writer(file, report)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimulationParameters;
    use crate::stats::RegionTotals;

    fn report() -> SimulationReport {
        SimulationReport {
            generated_at: "2024-01-01T00:00:00+00:00".to_string(),
            parameters: SimulationParameters {
                florida_landfall_rate: 1.0,
                florida_mean: 1.0,
                florida_stddev: 0.5,
                gulf_landfall_rate: 1.0,
                gulf_mean: 0.65,
                gulf_stddev: 0.23,
                samples: 10,
            },
            seed: None,
            worker_count: 4,
            samples_per_worker: 3,
            requested_samples: 10,
            total_samples_run: 12,
            total_loss: 60.0,
            mean_loss: 5.0,
            florida: RegionTotals::new(12, 36.0),
            gulf: RegionTotals::new(12, 24.0),
            elapsed_secs: 0.5,
        }
    }

    #[test]
    fn test_to_json_fields() {
        let json = to_json(&report(), false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["mean_loss"], 5.0);
        assert_eq!(value["total_samples_run"], 12);
        assert_eq!(value["parameters"]["gulf_mean"], 0.65);
        assert_eq!(value["florida"]["events"], 12);
        assert!(value["seed"].is_null());
    }

    #[test]
    fn test_to_json_pretty_parses_back() {
        let json = to_json(&report(), true).unwrap();
        assert!(json.contains('\n'));

        let parsed: SimulationReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.outcome(), report().outcome());
    }

    #[test]
    fn test_write_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        write_json_file(&report(), &path, true).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let parsed: SimulationReport = serde_json::from_str(&contents).unwrap();
        assert_eq!(parsed.worker_count, 4);
    }
}
