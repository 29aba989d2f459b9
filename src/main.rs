//! gethurricaneloss CLI entry point

use anyhow::Result;
use hurricane_loss::config::cli::Cli;
use hurricane_loss::output::{self, json, text};
use hurricane_loss::util::parallelism::warn_if_oversubscribed;
use hurricane_loss::{RunOptions, Simulation};
use std::time::Instant;

fn main() -> Result<()> {
    let main_start = Instant::now();

    let cli = Cli::parse_args();
    cli.validate()?;

    // Errors propagate before anything is printed to stdout
    let config = cli.load_config()?;

    let debug = config.runtime.debug;
    if debug {
        eprintln!(
            "DEBUG: parameters {:?}, workers {:?}, seed {:?}",
            config.parameters, config.runtime.workers, config.runtime.seed
        );
    }

    if let Some(workers) = config.runtime.workers {
        warn_if_oversubscribed(workers);
    }

    let simulation = Simulation::new(config.parameters, &RunOptions::from(&config.runtime))?;
    let report = simulation.run_report()?;

    println!("{}", output::render(&report, config.output.format)?);

    if debug {
        eprint!("{}", text::format_summary(&report));
    }

    if let Some(path) = &config.output.json_file {
        json::write_json_file(&report, path, true)?;
        if debug {
            eprintln!("DEBUG: wrote JSON report to {}", path.display());
        }
    }

    if debug {
        eprintln!("DEBUG TIMING: total {:.3}s", main_start.elapsed().as_secs_f64());
    }

    Ok(())
}
