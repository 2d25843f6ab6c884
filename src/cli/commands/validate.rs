//! Validate command handler
//!
//! Loads `agent-config.yaml` from the asset directory and reports every
//! violation in human or JSON format.

use serde::Serialize;

use crate::cli::args::{OutputFormat, ValidateArgs};
use crate::config::{ConfigLoader, DirFetcher, FieldError};
use crate::error::{ClusterBootError, ConfigError};

/// Machine-readable validation outcome.
#[derive(Debug, Serialize)]
pub struct ValidationReport {
    /// Path of the document that was checked.
    pub file: String,
    /// Whether the document exists.
    pub found: bool,
    /// Whether the document passed every rule.
    pub valid: bool,
    /// Number of hosts declared.
    pub hosts: usize,
    /// Every violation, in detection order.
    pub errors: Vec<FieldError>,
}

/// Validate the configuration in the asset directory.
///
/// A missing document is reported but is not a failure.
///
/// # Errors
///
/// Returns a config error if the document cannot be decoded, upconverted,
/// or fails validation, and an I/O error if it cannot be read.
pub fn run(args: &ValidateArgs) -> Result<(), ClusterBootError> {
    let loader = ConfigLoader::with_defaults();
    let fetcher = DirFetcher::new(&args.dir);
    let file = fetcher
        .root()
        .join(crate::config::AGENT_CONFIG_FILENAME)
        .display()
        .to_string();

    tracing::info!(file = %file, "validating configuration");

    let mut report = ValidationReport {
        file,
        found: true,
        valid: true,
        hosts: 0,
        errors: Vec::new(),
    };

    let outcome = match loader.load(&fetcher) {
        Ok(Some(loaded)) => {
            report.hosts = loaded.config.hosts.len();
            Ok(())
        }
        Ok(None) => {
            tracing::warn!(file = %report.file, "configuration not found, nothing to validate");
            report.found = false;
            Ok(())
        }
        Err(ConfigError::Invalid(aggregate)) => {
            report.valid = false;
            report.errors = aggregate.errors().to_vec();
            Err(ConfigError::Invalid(aggregate))
        }
        Err(e) => return Err(e.into()),
    };

    match args.format {
        OutputFormat::Human => print_human(&report),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    outcome.map_err(Into::into)
}

fn print_human(report: &ValidationReport) {
    if !report.found {
        println!("{}: not found", report.file);
    } else if report.valid {
        println!("{}: valid ({} host(s))", report.file, report.hosts);
    } else {
        println!("{}: {} error(s)", report.file, report.errors.len());
        for error in &report.errors {
            println!("  - {error}");
        }
    }
}
