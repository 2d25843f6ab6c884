//! Observability module
//!
//! Structured logging for `clusterboot` commands.

pub mod logging;

pub use logging::{LogFormat, init_logging};
