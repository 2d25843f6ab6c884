//! `clusterboot` - bare-metal cluster bootstrap configuration
//!
//! Loads `agent-config.yaml`, upconverts deprecated fields, validates the
//! document with cross-field rules that report every violation at once, and
//! derives the per-host files used by the agent installer.

pub mod cli;
pub mod config;
pub mod error;
pub mod hostfiles;
pub mod observability;
pub mod template;
