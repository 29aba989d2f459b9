//! Human-readable text output

use crate::coordinator::SimulationReport;
use crate::stats::{RegionTotals, SimulationOutcome};

const RULE: &str = "═══════════════════════════════════════════════════════════";

/// Mean annual loss, as printed on stdout
pub fn format_mean(outcome: &SimulationOutcome) -> String {
    format!("{}", outcome.mean_loss())
}

/// Multi-line summary of a run
///
/// Includes the work split, per-region landfalls and losses, and timing.
pub fn format_summary(report: &SimulationReport) -> String {
    let mut lines = vec![
        RULE.to_string(),
        "                 SIMULATION RESULTS".to_string(),
        RULE.to_string(),
        format!("Elapsed Time: {:.3}s", report.elapsed_secs),
        format!(
            "Samples:      {} requested, {} run ({} workers x {})",
            report.requested_samples,
            report.total_samples_run,
            report.worker_count,
            report.samples_per_worker
        ),
    ];
    if let Some(seed) = report.seed {
        lines.push(format!("Seed:         {}", seed));
    }
    lines.push(String::new());
    lines.push(region_line("Florida", &report.florida, report.total_samples_run));
    lines.push(region_line("Gulf", &report.gulf, report.total_samples_run));
    lines.push(String::new());
    lines.push(format!("Total loss:   {:.6}", report.total_loss));
    lines.push(format!("Mean loss:    {:.6}", report.mean_loss));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn region_line(name: &str, totals: &RegionTotals, years: u64) -> String {
    let rate = if years == 0 {
        0.0
    } else {
        totals.events as f64 / years as f64
    };
    format!(
        "{:<8}      {} landfalls ({:.4}/year), loss {:.6} ({:.6}/landfall)",
        name,
        totals.events,
        rate,
        totals.loss,
        totals.mean_loss_per_event()
    )
}
