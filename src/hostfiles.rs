//! Per-host configuration files.
//!
//! Derives the files the agent installer client uses to recognise each host
//! and apply host-specific settings. Derivation is a pure function of the
//! configuration; writing the files is left to the caller.

use indexmap::IndexMap;

use crate::config::schema::ClusterBootstrapConfig;
use crate::error::ConfigError;

/// Lower-cased MAC addresses, one per line.
pub const MAC_ADDRESSES_FILE: &str = "mac_addresses";

/// YAML-serialized root device hints.
pub const ROOT_DEVICE_HINTS_FILE: &str = "root-device-hints.yaml";

/// The host's role, without a trailing newline.
pub const ROLE_FILE: &str = "role";

/// Map from `"<host>/<file>"` to file content, in host declaration order.
pub type HostConfigFileMap = IndexMap<String, Vec<u8>>;

/// Derives the per-host files for `config`.
///
/// Hosts are keyed by hostname, or `host-<index>` when the hostname is empty.
/// Files with nothing to say are omitted. `None` yields an empty map.
///
/// When two hosts resolve to the same directory (e.g. a host named `host-1`
/// and an unnamed second host), the later host's file replaces the earlier
/// one in place and a warning is logged.
///
/// # Errors
///
/// Returns [`ConfigError::Encode`] if root device hints cannot be serialized.
pub fn host_config_files(
    config: Option<&ClusterBootstrapConfig>,
) -> Result<HostConfigFileMap, ConfigError> {
    let mut files = HostConfigFileMap::new();
    let Some(config) = config else {
        return Ok(files);
    };

    for (idx, host) in config.hosts.iter().enumerate() {
        let name = if host.hostname.is_empty() {
            format!("host-{idx}")
        } else {
            host.hostname.clone()
        };

        if !host.interfaces.is_empty() {
            let macs: String = host
                .interfaces
                .iter()
                .map(|iface| format!("{}\n", iface.mac_address.to_lowercase()))
                .collect();
            insert(&mut files, idx, format!("{name}/{MAC_ADDRESSES_FILE}"), macs.into_bytes());
        }

        if !host.root_device_hints.is_empty() {
            let hints = serde_yaml::to_string(&host.root_device_hints)
                .map_err(|e| ConfigError::Encode(e.to_string()))?;
            insert(
                &mut files,
                idx,
                format!("{name}/{ROOT_DEVICE_HINTS_FILE}"),
                hints.into_bytes(),
            );
        }

        if !host.role.is_empty() {
            insert(
                &mut files,
                idx,
                format!("{name}/{ROLE_FILE}"),
                host.role.clone().into_bytes(),
            );
        }
    }

    tracing::debug!(files = files.len(), "derived host config files");
    Ok(files)
}

fn insert(files: &mut HostConfigFileMap, host_index: usize, key: String, content: Vec<u8>) {
    if files.insert(key.clone(), content).is_some() {
        tracing::warn!(
            file = %key,
            host = host_index,
            "host directory name collides with an earlier host, file replaced"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::{HostSpec, InterfaceSpec, RootDeviceHints};

    fn iface(mac: &str) -> InterfaceSpec {
        InterfaceSpec {
            name: String::new(),
            mac_address: mac.to_string(),
        }
    }

    fn text(files: &HostConfigFileMap, key: &str) -> String {
        String::from_utf8(files[key].clone()).unwrap()
    }

    #[test]
    fn test_none_config_yields_empty_map() {
        assert!(host_config_files(None).unwrap().is_empty());
    }

    #[test]
    fn test_single_master_host() {
        let config = ClusterBootstrapConfig {
            hosts: vec![HostSpec {
                hostname: "node1".to_string(),
                role: "master".to_string(),
                interfaces: vec![iface("AA:BB:CC:DD:EE:FF")],
                ..Default::default()
            }],
            ..Default::default()
        };
        let files = host_config_files(Some(&config)).unwrap();
        assert_eq!(files.len(), 2);
        assert_eq!(text(&files, "node1/mac_addresses"), "aa:bb:cc:dd:ee:ff\n");
        assert_eq!(text(&files, "node1/role"), "master");
    }

    #[test]
    fn test_unnamed_hosts_use_index() {
        let config = ClusterBootstrapConfig {
            hosts: vec![
                HostSpec {
                    interfaces: vec![iface("00:11:22:33:44:55")],
                    ..Default::default()
                },
                HostSpec {
                    role: "worker".to_string(),
                    ..Default::default()
                },
            ],
            ..Default::default()
        };
        let files = host_config_files(Some(&config)).unwrap();
        let keys: Vec<&str> = files.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["host-0/mac_addresses", "host-1/role"]);
    }

    #[test]
    fn test_multiple_macs_in_declaration_order() {
        let config = ClusterBootstrapConfig {
            hosts: vec![HostSpec {
                hostname: "h".to_string(),
                interfaces: vec![iface("00:00:00:00:00:0B"), iface("00:00:00:00:00:0A")],
                ..Default::default()
            }],
            ..Default::default()
        };
        let files = host_config_files(Some(&config)).unwrap();
        assert_eq!(
            text(&files, "h/mac_addresses"),
            "00:00:00:00:00:0b\n00:00:00:00:00:0a\n"
        );
    }

    #[test]
    fn test_root_device_hints_file() {
        let config = ClusterBootstrapConfig {
            hosts: vec![HostSpec {
                hostname: "h".to_string(),
                root_device_hints: RootDeviceHints {
                    device_name: "/dev/sda".to_string(),
                    ..Default::default()
                },
                ..Default::default()
            }],
            ..Default::default()
        };
        let files = host_config_files(Some(&config)).unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(
            text(&files, "h/root-device-hints.yaml"),
            "deviceName: /dev/sda\n"
        );
    }

    #[test]
    fn test_host_without_content_emits_nothing() {
        let config = ClusterBootstrapConfig {
            hosts: vec![HostSpec {
                hostname: "bare".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        };
        assert!(host_config_files(Some(&config)).unwrap().is_empty());
    }

    #[test]
    fn test_colliding_host_directories_keep_last_content() {
        let config = ClusterBootstrapConfig {
            hosts: vec![
                HostSpec {
                    hostname: "host-1".to_string(),
                    role: "master".to_string(),
                    interfaces: vec![iface("00:11:22:33:44:55")],
                    ..Default::default()
                },
                HostSpec {
                    interfaces: vec![iface("00:11:22:33:44:66")],
                    ..Default::default()
                },
            ],
            ..Default::default()
        };
        let files = host_config_files(Some(&config)).unwrap();
        let keys: Vec<&str> = files.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["host-1/mac_addresses", "host-1/role"]);
        assert_eq!(text(&files, "host-1/mac_addresses"), "00:11:22:33:44:66\n");
        assert_eq!(text(&files, "host-1/role"), "master");
    }

    #[test]
    fn test_derivation_is_idempotent() {
        let config = ClusterBootstrapConfig {
            hosts: vec![HostSpec {
                hostname: "h".to_string(),
                role: "worker".to_string(),
                interfaces: vec![iface("00:11:22:33:44:55")],
                root_device_hints: RootDeviceHints {
                    min_size_gigabytes: 100,
                    rotational: Some(false),
                    ..Default::default()
                },
                ..Default::default()
            }],
            ..Default::default()
        };
        let first = host_config_files(Some(&config)).unwrap();
        let second = host_config_files(Some(&config)).unwrap();
        assert_eq!(first, second);
    }
}
