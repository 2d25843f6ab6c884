//! Configuration module
//!
//! Loading, upconversion and validation of `agent-config.yaml`.

pub mod conversion;
pub mod field;
pub mod loader;
pub mod schema;
pub mod syntax;
pub mod validation;

pub use field::{AggregateError, ErrorKind, ErrorList, FieldError, FieldPath};
pub use loader::{
    AGENT_CONFIG_FILENAME, AssetFile, ConfigLoader, DirFetcher, FileFetcher, LoadedConfig,
    LoaderOptions, finish,
};
pub use schema::*;
pub use validation::{Validator, validate};
