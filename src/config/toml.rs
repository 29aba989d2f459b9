//! TOML configuration file parsing
//!
//! ```toml
//! [parameters]
//! florida_landfall_rate = 1.0
//! florida_mean = 1.0
//! florida_stddev = 0.5
//! gulf_landfall_rate = 1.0
//! gulf_mean = 0.65
//! gulf_stddev = 0.23
//! samples = 10000
//!
//! [runtime]
//! workers = 8
//! seed = 42
//!
//! [output]
//! format = "json"
//! ```

use super::*;
use crate::config::cli::Cli;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Parse TOML configuration file
pub fn parse_toml_file(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    parse_toml_string(&contents)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Parse TOML configuration from string
pub fn parse_toml_string(contents: &str) -> Result<Config> {
    let config: Config = ::toml::from_str(contents)
        .context("Failed to parse TOML configuration")?;

    Ok(config)
}

/// Merge CLI arguments with TOML configuration (CLI takes precedence)
pub fn merge_cli_with_config(cli: &Cli, mut config: Config) -> Result<Config> {
    let params = &mut config.parameters;
    override_with(&mut params.florida_landfall_rate, cli.florida_landfall_rate);
    override_with(&mut params.florida_mean, cli.florida_mean);
    override_with(&mut params.florida_stddev, cli.florida_stddev);
    override_with(&mut params.gulf_landfall_rate, cli.gulf_landfall_rate);
    override_with(&mut params.gulf_mean, cli.gulf_mean);
    override_with(&mut params.gulf_stddev, cli.gulf_stddev);
    override_with(&mut params.samples, cli.samples);

    // Override runtime settings
    if cli.workers.is_some() {
        config.runtime.workers = cli.workers;
    }
    if cli.seed.is_some() {
        config.runtime.seed = cli.seed;
    }
    if cli.debug {
        config.runtime.debug = true;
    }

    // Override output format
    if let Some(format) = cli.format {
        config.output.format = format.into();
    }
    if cli.json_output.is_some() {
        config.output.json_file = cli.json_output.clone();
    }

    Ok(config)
}

fn override_with<T>(target: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *target = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;
    use std::path::PathBuf;

    const FULL: &str = r#"
[parameters]
florida_landfall_rate = 1.0
florida_mean = 1.0
florida_stddev = 0.5
gulf_landfall_rate = 1.0
gulf_mean = 0.65
gulf_stddev = 0.23
samples = 10000

[runtime]
workers = 4
seed = 42

[output]
format = "json"
json_file = "/tmp/report.json"
"#;

    #[test]
    fn test_parse_toml_full() {
        let config = parse_toml_string(FULL).unwrap();
        assert_eq!(config.parameters.florida_landfall_rate, 1.0);
        assert_eq!(config.parameters.gulf_stddev, 0.23);
        assert_eq!(config.parameters.samples, 10_000);
        assert_eq!(config.runtime.workers, Some(4));
        assert_eq!(config.runtime.seed, Some(42));
        assert!(!config.runtime.debug);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.output.json_file, Some(PathBuf::from("/tmp/report.json")));
    }

    #[test]
    fn test_parse_toml_defaults() {
        let toml = r#"
[parameters]
florida_landfall_rate = 0.0
florida_mean = 0.0
florida_stddev = 0.0
gulf_landfall_rate = 0.0
gulf_mean = 0.0
gulf_stddev = 0.0
samples = 1
"#;

        let config = parse_toml_string(toml).unwrap();
        assert_eq!(config.runtime.workers, None);
        assert_eq!(config.runtime.seed, None);
        assert_eq!(config.output.format, OutputFormat::Text);
        assert_eq!(config.output.json_file, None);
    }

    #[test]
    fn test_parse_toml_missing_parameter() {
        let toml = r#"
[parameters]
florida_landfall_rate = 1.0
samples = 10
"#;
        assert!(parse_toml_string(toml).is_err());
    }

    #[test]
    fn test_parse_toml_wrong_type() {
        let toml = FULL.replace("gulf_mean = 0.65", "gulf_mean = \"high\"");
        let err = parse_toml_string(&toml).unwrap_err();
        assert!(format!("{:#}", err).contains("gulf_mean"));
    }

    #[test]
    fn test_parse_toml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(FULL.as_bytes()).unwrap();

        let config = parse_toml_file(file.path()).unwrap();
        assert_eq!(config.parameters.samples, 10_000);
    }

    #[test]
    fn test_parse_toml_file_missing() {
        let err = parse_toml_file(Path::new("/nonexistent/hurricane.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_merge_cli_overrides_file() {
        let cli = Cli::try_parse_from([
            "gethurricaneloss", "--config", "run.toml", "-n", "500", "--seed", "7", "--format",
            "text",
        ])
        .unwrap();
        let merged = merge_cli_with_config(&cli, parse_toml_string(FULL).unwrap()).unwrap();

        assert_eq!(merged.parameters.samples, 500);
        assert_eq!(merged.parameters.florida_mean, 1.0);
        assert_eq!(merged.runtime.workers, Some(4));
        assert_eq!(merged.runtime.seed, Some(7));
        assert_eq!(merged.output.format, OutputFormat::Text);
    }

    #[test]
    fn test_merge_cli_positionals_override_file() {
        let cli = Cli::try_parse_from([
            "gethurricaneloss", "--config", "run.toml", "2", "3", "4", "5", "6", "7",
        ])
        .unwrap();
        let merged = merge_cli_with_config(&cli, parse_toml_string(FULL).unwrap()).unwrap();

        assert_eq!(merged.parameters.florida_landfall_rate, 2.0);
        assert_eq!(merged.parameters.gulf_stddev, 7.0);
        assert_eq!(merged.parameters.samples, 10_000);
    }

    #[test]
    fn test_build_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(FULL.as_bytes()).unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let cli = Cli::try_parse_from(["gethurricaneloss", "--config", &path, "--debug"]).unwrap();
        let config = cli.build_config().unwrap();
        assert_eq!(config.parameters.gulf_mean, 0.65);
        assert!(config.runtime.debug);
    }
}
