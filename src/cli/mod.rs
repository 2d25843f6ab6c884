//! Command-line interface
//!
//! Argument parsing and command handlers for the `clusterboot` binary.

pub mod args;
pub mod commands;
