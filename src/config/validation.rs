//! Configuration validation
//!
//! Validation runs on the fully decoded and upconverted
//! `ClusterBootstrapConfig`. It collects ALL errors (doesn't stop at first)
//! so a user can fix the whole document in one pass.

use std::collections::HashSet;

use crate::config::field::{ErrorList, FieldError, FieldPath};
use crate::config::schema::{ClusterBootstrapConfig, HostSpec};
use crate::config::syntax;

/// Role of a control-plane host.
pub const ROLE_MASTER: &str = "master";

/// Role of a compute host.
pub const ROLE_WORKER: &str = "worker";

// ============================================================================
// Public API
// ============================================================================

/// Configuration validator.
///
/// Each rule group runs independently and appends to one ordered list.
#[derive(Debug, Default)]
pub struct Validator {
    errors: ErrorList,
}

impl Validator {
    /// Creates a new validator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates a configuration and returns every violation found.
    ///
    /// An empty list means the configuration is valid.
    pub fn validate(&mut self, config: &ClusterBootstrapConfig) -> ErrorList {
        self.errors.clear();

        self.validate_rendezvous_ip(&config.rendezvous_ip);
        self.validate_hosts(&config.hosts);
        self.validate_additional_ntp_sources(
            &FieldPath::new("AdditionalNTPSources"),
            &config.additional_ntp_sources,
        );
        self.validate_rendezvous_ip_not_worker(&config.rendezvous_ip, &config.hosts);

        tracing::debug!(errors = self.errors.len(), "validation complete");
        std::mem::take(&mut self.errors)
    }

    // ========================================================================
    // Rendezvous Address
    // ========================================================================

    fn validate_rendezvous_ip(&mut self, rendezvous_ip: &str) {
        // empty rendezvous IP means "not yet assigned"
        if rendezvous_ip.is_empty() {
            return;
        }

        if let Err(message) = syntax::ip(rendezvous_ip) {
            self.errors.push(FieldError::invalid(
                FieldPath::new("rendezvousIP"),
                rendezvous_ip,
                &message,
            ));
        }
    }

    // ========================================================================
    // Hosts
    // ========================================================================

    fn validate_hosts(&mut self, hosts: &[HostSpec]) {
        // lower-cased MACs seen so far, across all hosts
        let mut macs = HashSet::new();

        for (idx, host) in hosts.iter().enumerate() {
            let host_path = FieldPath::new("Hosts").index(idx);

            self.validate_host_interfaces(&host_path, host, &mut macs);
            self.validate_host_root_device_hints(&host_path, host);
            self.validate_role(&host_path, host);
        }
    }

    fn validate_host_interfaces(
        &mut self,
        host_path: &FieldPath,
        host: &HostSpec,
        macs: &mut HashSet<String>,
    ) {
        let interface_path = host_path.child("Interfaces");
        if host.interfaces.is_empty() {
            self.errors.push(FieldError::required(
                interface_path.clone(),
                "at least one interface must be defined for each node",
            ));
        }

        for (idx, iface) in host.interfaces.iter().enumerate() {
            let mac = &iface.mac_address;
            let mac_path = interface_path.index(idx).child("macAddress");

            if mac.is_empty() {
                self.errors.push(FieldError::required(
                    mac_path,
                    "each interface must have a MAC address defined",
                ));
                continue;
            }

            if let Err(message) = syntax::mac(mac) {
                self.errors
                    .push(FieldError::invalid(mac_path.clone(), mac, &message));
            }

            if !macs.insert(mac.to_ascii_lowercase()) {
                self.errors.push(FieldError::invalid(
                    mac_path,
                    mac,
                    "duplicate MAC address found",
                ));
            }
        }
    }

    fn validate_host_root_device_hints(&mut self, host_path: &FieldPath, host: &HostSpec) {
        let hints_path = host_path.child("RootDeviceHints");

        if !host.root_device_hints.wwn_with_extension.is_empty() {
            self.errors.push(FieldError::forbidden(
                hints_path.child("WWNWithExtension"),
                "WWN extensions are not supported in root device hints",
            ));
        }

        if !host.root_device_hints.wwn_vendor_extension.is_empty() {
            self.errors.push(FieldError::forbidden(
                hints_path.child("WWNVendorExtension"),
                "WWN vendor extensions are not supported in root device hints",
            ));
        }
    }

    fn validate_role(&mut self, host_path: &FieldPath, host: &HostSpec) {
        if !host.role.is_empty() && host.role != ROLE_MASTER && host.role != ROLE_WORKER {
            self.errors.push(FieldError::forbidden(
                host_path.child("Host"),
                "host role has incorrect value. Role must either be 'master' or 'worker'",
            ));
        }
    }

    // ========================================================================
    // Time Sources
    // ========================================================================

    fn validate_additional_ntp_sources(&mut self, path: &FieldPath, sources: &[String]) {
        for (idx, source) in sources.iter().enumerate() {
            if syntax::domain_name(source, true).is_ok() || syntax::ip(source).is_ok() {
                continue;
            }
            self.errors.push(FieldError::invalid(
                path.index(idx),
                source,
                "NTP source is not a valid domain name nor a valid IP",
            ));
        }
    }

    // ========================================================================
    // Rendezvous Placement
    // ========================================================================

    /// Hosts with an unset role are not flagged, even when their network
    /// configuration carries the rendezvous address.
    fn validate_rendezvous_ip_not_worker(&mut self, rendezvous_ip: &str, hosts: &[HostSpec]) {
        if rendezvous_ip.is_empty() {
            return;
        }

        for (idx, host) in hosts.iter().enumerate() {
            if host.role.is_empty() || host.role == ROLE_MASTER {
                continue;
            }
            if !host.network_config_raw().contains(rendezvous_ip) {
                continue;
            }
            self.errors.push(FieldError::forbidden(
                FieldPath::new("Hosts").index(idx).child("Host"),
                &format!(
                    "Host {} is not of role 'master' and has the rendezvousIP assigned to it. \
                     The rendezvousIP must be assigned to a host of role 'master'",
                    host.hostname
                ),
            ));
        }
    }
}

/// Validates `config` with a fresh [`Validator`].
#[must_use]
pub fn validate(config: &ClusterBootstrapConfig) -> ErrorList {
    Validator::new().validate(config)
}

// ============================================================================
// Tests
// ============================================================================
