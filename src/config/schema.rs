//! Configuration schema types
//!
//! These types are deserialized from `agent-config.yaml`. Every struct denies
//! unknown fields so that typos are reported instead of silently ignored.

use serde::{Deserialize, Serialize};

// ============================================================================
// Top-Level Configuration
// ============================================================================

/// Root of an `agent-config.yaml` document.
///
/// Every field is optional; an empty document is a valid configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClusterBootstrapConfig {
    /// Document schema version (`v1alpha1` is upconverted to `v1beta1`)
    #[serde(rename = "apiVersion", default, skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,

    /// Document kind, conventionally `AgentConfig`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// Object metadata
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ObjectMeta>,

    /// Address of the host that coordinates bootstrap; empty means unassigned
    #[serde(rename = "rendezvousIP", default, skip_serializing_if = "String::is_empty")]
    pub rendezvous_ip: String,

    /// Extra time sources, each a domain name or an IP address
    #[serde(
        rename = "additionalNTPSources",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub additional_ntp_sources: Vec<String>,

    /// Deprecated spelling of `additionalNTPSources`
    #[serde(rename = "ntpSources", default, skip_serializing_if = "Vec::is_empty")]
    pub ntp_sources: Vec<String>,

    /// Hosts taking part in the installation, in declaration order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hosts: Vec<HostSpec>,
}

/// Name and namespace of the configuration object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ObjectMeta {
    /// Object name
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// Object namespace
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub namespace: String,
}

// ============================================================================
// Hosts
// ============================================================================

/// Per-host installation settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct HostSpec {
    /// Hostname; when empty, derived files use `host-<index>`
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub hostname: String,

    /// `master`, `worker`, or empty; other values fail validation
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub role: String,

    /// Disk selection criteria
    #[serde(default, skip_serializing_if = "RootDeviceHints::is_empty")]
    pub root_device_hints: RootDeviceHints,

    /// Network interfaces identifying the host
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub interfaces: Vec<InterfaceSpec>,

    /// Deprecated flat list of MAC addresses, upconverted into `interfaces`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mac_addresses: Vec<String>,

    /// Embedded network-state document, kept opaque
    #[serde(default, skip_serializing_if = "serde_yaml::Value::is_null")]
    pub network_config: serde_yaml::Value,
}

impl HostSpec {
    /// Canonical text rendering of the embedded network configuration.
    ///
    /// Returns an empty string when no network configuration is present, or
    /// when it cannot be rendered.
    #[must_use]
    pub fn network_config_raw(&self) -> String {
        if self.network_config.is_null() {
            return String::new();
        }
        match serde_yaml::to_string(&self.network_config) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(
                    hostname = %self.hostname,
                    error = %e,
                    "network config could not be rendered, treating it as empty"
                );
                String::new()
            }
        }
    }
}

/// A network interface used to identify a host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct InterfaceSpec {
    /// Interface name on the host
    #[serde(default)]
    pub name: String,

    /// Hardware address; required and must be a valid 48-bit MAC
    #[serde(default)]
    pub mac_address: String,
}

// ============================================================================
// Root Device Hints
// ============================================================================

/// Criteria for selecting the installation disk.
///
/// `wwnWithExtension` and `wwnVendorExtension` decode successfully but are
/// rejected by validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RootDeviceHints {
    /// Device path, e.g. `/dev/sda`
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub device_name: String,

    /// SCSI host:channel:target:lun address
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub hctl: String,

    /// Vendor-specific model identifier
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub model: String,

    /// Vendor name
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub vendor: String,

    /// Disk serial number
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub serial_number: String,

    /// Minimum disk size in gigabytes
    #[serde(default, skip_serializing_if = "is_zero")]
    pub min_size_gigabytes: u32,

    /// World Wide Name
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub wwn: String,

    /// World Wide Name with NAA extension
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub wwn_with_extension: String,

    /// World Wide Name with vendor extension
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub wwn_vendor_extension: String,

    /// Whether the disk is rotational
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotational: Option<bool>,
}

impl RootDeviceHints {
    /// Returns `true` when no hint is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)] // serde skip_serializing_if passes a reference
const fn is_zero(value: &u32) -> bool {
    *value == 0
}
