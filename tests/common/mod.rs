//! Shared integration-test harness for running the `clusterboot` binary.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Helpers for invoking the built `clusterboot` binary.
pub struct ClusterBootProcess;

impl ClusterBootProcess {
    /// Returns the fixture directory called `name`.
    #[must_use]
    pub fn fixture_path(name: &str) -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("fixtures")
            .join(name)
    }

    /// Runs `clusterboot` with `args` and waits for it to exit.
    ///
    /// Logging is forced to plain warnings so stderr stays predictable.
    #[allow(clippy::missing_panics_doc)]
    pub fn spawn_command(args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_clusterboot"))
            .args(args)
            .env_remove("CLUSTERBOOT_ASSET_DIR")
            .env_remove("CLUSTERBOOT_OUTPUT_DIR")
            .env_remove("CLUSTERBOOT_LOG_FORMAT")
            .env("CLUSTERBOOT_LOG_LEVEL", "warn")
            .env("CLUSTERBOOT_COLOR", "never")
            .output()
            .expect("failed to run clusterboot")
    }
}

/// Lossy UTF-8 view of captured stdout.
#[must_use]
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Lossy UTF-8 view of captured stderr.
#[must_use]
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
