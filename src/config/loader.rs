//! Configuration loader
//!
//! This module implements the configuration loading pipeline:
//! 1. Fetch `agent-config.yaml` through a [`FileFetcher`] (absent is not an error)
//! 2. Size check
//! 3. Strict YAML decoding (unknown fields rejected)
//! 4. Upconversion of deprecated fields
//! 5. Validation, aggregated into one error

use std::io;
use std::path::{Path, PathBuf};

use crate::config::conversion;
use crate::config::field::to_aggregate;
use crate::config::schema::ClusterBootstrapConfig;
use crate::config::validation::Validator;
use crate::error::ConfigError;

/// File name of the configuration document inside the asset directory.
pub const AGENT_CONFIG_FILENAME: &str = "agent-config.yaml";

// ============================================================================
// File Fetching
// ============================================================================

/// Raw bytes of a named asset file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetFile {
    /// Name the file was fetched by.
    pub name: String,
    /// File contents.
    pub data: Vec<u8>,
}

/// Source of asset files.
///
/// Implementations must report a missing file with
/// [`io::ErrorKind::NotFound`]; every other error is propagated as-is.
pub trait FileFetcher {
    /// Fetches the file called `name`.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file is missing or unreadable.
    fn fetch_by_name(&self, name: &str) -> io::Result<AssetFile>;
}

/// Fetches asset files from a directory on disk.
#[derive(Debug, Clone)]
pub struct DirFetcher {
    root: PathBuf,
}

impl DirFetcher {
    /// Creates a fetcher rooted at `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory files are read from.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl FileFetcher for DirFetcher {
    fn fetch_by_name(&self, name: &str) -> io::Result<AssetFile> {
        let data = std::fs::read(self.root.join(name))?;
        Ok(AssetFile {
            name: name.to_string(),
            data,
        })
    }
}

// ============================================================================
// Loader
// ============================================================================

/// Options for the configuration loader.
#[derive(Debug, Clone)]
pub struct LoaderOptions {
    /// Name of the document to fetch.
    pub file_name: String,

    /// Maximum configuration file size in bytes.
    pub max_config_size: usize,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            file_name: AGENT_CONFIG_FILENAME.to_string(),
            max_config_size: env_or("CLUSTERBOOT_MAX_CONFIG_SIZE", 1024 * 1024),
        }
    }
}

/// A configuration that was found, decoded, upconverted and validated.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    /// The file the configuration was read from.
    pub file: AssetFile,

    /// The canonical configuration.
    pub config: ClusterBootstrapConfig,
}

/// Configuration loader.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    options: LoaderOptions,
}

impl ConfigLoader {
    /// Creates a new configuration loader with the given options.
    #[must_use]
    pub const fn new(options: LoaderOptions) -> Self {
        Self { options }
    }

    /// Creates a new configuration loader with default options.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(LoaderOptions::default())
    }

    /// Loads and validates the configuration document.
    ///
    /// Returns `Ok(None)` when the document does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The fetcher fails for any reason other than "not found"
    /// - The document exceeds the size limit
    /// - Strict decoding fails
    /// - Upconversion fails
    /// - Validation reports one or more violations
    pub fn load(&self, fetcher: &dyn FileFetcher) -> Result<Option<LoadedConfig>, ConfigError> {
        let name = &self.options.file_name;
        tracing::debug!(file = %name, "fetching configuration");

        let file = match fetcher.fetch_by_name(name) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(file = %name, "configuration not found");
                return Ok(None);
            }
            Err(source) => {
                return Err(ConfigError::Fetch {
                    name: name.clone(),
                    source,
                });
            }
        };

        let config = self.decode(&file.name, &file.data)?;
        finish(&config)?;

        tracing::info!(
            file = %file.name,
            hosts = config.hosts.len(),
            "configuration loaded"
        );
        Ok(Some(LoadedConfig { file, config }))
    }

    /// Decodes and upconverts `data` without validating it.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is too large, is not strictly valid
    /// YAML for the schema, or cannot be upconverted.
    pub fn decode(&self, name: &str, data: &[u8]) -> Result<ClusterBootstrapConfig, ConfigError> {
        if data.len() > self.options.max_config_size {
            return Err(ConfigError::TooLarge {
                name: name.to_string(),
                size: data.len(),
                limit: self.options.max_config_size,
            });
        }

        let text = std::str::from_utf8(data).map_err(|e| ConfigError::Decode {
            name: name.to_string(),
            line: None,
            message: format!("input is not valid UTF-8: {e}"),
        })?;

        // Handle UTF-8 BOM
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);

        // An empty or explicitly null document is the empty configuration
        let mut config = if text.trim().is_empty() {
            ClusterBootstrapConfig::default()
        } else {
            serde_yaml::from_str::<Option<ClusterBootstrapConfig>>(text)
                .map_err(|e| ConfigError::Decode {
                    name: name.to_string(),
                    line: e.location().map(|l| l.line()),
                    message: e.to_string(),
                })?
                .unwrap_or_default()
        };

        conversion::upconvert(&mut config)?;
        Ok(config)
    }
}

/// Validates `config`, wrapping every violation into one error.
///
/// # Errors
///
/// Returns [`ConfigError::Invalid`] listing all violations when any rule fails.
pub fn finish(config: &ClusterBootstrapConfig) -> Result<(), ConfigError> {
    let errors = Validator::new().validate(config);
    match to_aggregate(errors) {
        Some(aggregate) => Err(ConfigError::Invalid(aggregate)),
        None => Ok(()),
    }
}

/// Reads an environment variable, falling back to `default` when unset or
/// unparsable.
fn env_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

// ============================================================================
// Tests
// ============================================================================
