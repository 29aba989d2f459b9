//! Result output
//!
//! - **text**: the mean annual loss alone, plus an optional summary
//! - **json**: the full simulation report

pub mod json;
pub mod text;

use crate::config::OutputFormat;
use crate::coordinator::SimulationReport;
use crate::Result;

/// Render a report for stdout in the requested format
pub fn render(report: &SimulationReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(text::format_mean(&report.outcome())),
        OutputFormat::Json => json::to_json(report, true),
    }
}
