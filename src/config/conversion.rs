//! Upconversion of deprecated document shapes.
//!
//! Runs once, in place, right after decoding. After it succeeds the
//! deprecated fields are empty and only the canonical ones carry data.

use crate::config::schema::{ClusterBootstrapConfig, InterfaceSpec};
use crate::error::ConversionError;

/// Current `apiVersion`.
pub const API_VERSION: &str = "v1beta1";

/// `apiVersion` values accepted on input.
pub const SUPPORTED_API_VERSIONS: &[&str] = &["v1alpha1", API_VERSION];

/// Rewrites deprecated fields of `config` into their canonical shape.
///
/// # Errors
///
/// Returns [`ConversionError::UnsupportedVersion`] for an unknown
/// `apiVersion`, or [`ConversionError::ConflictingFields`] when a deprecated
/// field and its replacement are both set with different contents.
pub fn upconvert(config: &mut ClusterBootstrapConfig) -> Result<(), ConversionError> {
    convert_api_version(config)?;
    convert_ntp_sources(config)?;

    for (idx, host) in config.hosts.iter_mut().enumerate() {
        if host.mac_addresses.is_empty() {
            continue;
        }
        if !host.interfaces.is_empty() {
            return Err(ConversionError::ConflictingFields {
                deprecated: format!("hosts[{idx}].macAddresses"),
                replacement: format!("hosts[{idx}].interfaces"),
            });
        }
        tracing::debug!(host = idx, "converting deprecated macAddresses to interfaces");
        host.interfaces = std::mem::take(&mut host.mac_addresses)
            .into_iter()
            .map(|mac_address| InterfaceSpec {
                name: String::new(),
                mac_address,
            })
            .collect();
    }

    Ok(())
}

fn convert_api_version(config: &mut ClusterBootstrapConfig) -> Result<(), ConversionError> {
    let Some(version) = config.api_version.as_deref() else {
        return Ok(());
    };

    match version {
        "" | API_VERSION => Ok(()),
        "v1alpha1" => {
            tracing::debug!(from = version, to = API_VERSION, "upconverting apiVersion");
            config.api_version = Some(API_VERSION.to_string());
            Ok(())
        }
        other => Err(ConversionError::UnsupportedVersion {
            version: other.to_string(),
            supported: SUPPORTED_API_VERSIONS.to_vec(),
        }),
    }
}

fn convert_ntp_sources(config: &mut ClusterBootstrapConfig) -> Result<(), ConversionError> {
    if config.ntp_sources.is_empty() {
        return Ok(());
    }

    if config.additional_ntp_sources.is_empty() {
        tracing::debug!("converting deprecated ntpSources to additionalNTPSources");
        config.additional_ntp_sources = std::mem::take(&mut config.ntp_sources);
        return Ok(());
    }

    if config.additional_ntp_sources == config.ntp_sources {
        config.ntp_sources.clear();
        return Ok(());
    }

    Err(ConversionError::ConflictingFields {
        deprecated: "ntpSources".to_string(),
        replacement: "additionalNTPSources".to_string(),
    })
}
