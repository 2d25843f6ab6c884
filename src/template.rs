//! Sample `agent-config.yaml`.
//!
//! The template documents the available fields; it is written verbatim and
//! never validated (its placeholders would not pass validation).

use std::path::{Path, PathBuf};

use crate::config::loader::AGENT_CONFIG_FILENAME;
use crate::error::ConfigError;

/// Commented sample configuration.
pub const AGENT_CONFIG_TEMPLATE: &str = r"#
# Note: This is a sample AgentConfig file showing
# which fields are available to aid you in creating your
# own agent-config.yaml file.
#
apiVersion: v1beta1
kind: AgentConfig
metadata:
  name: example-agent-config
  namespace: cluster0
# All fields are optional
rendezvousIP: your-node0-ip
# Extra time sources; each entry is a domain name or an IP address
additionalNTPSources:
  - pool.ntp.org
hosts:
# If a host is listed, then at least one interface
# needs to be specified.
- hostname: change-to-hostname
  role: master
  # rootDeviceHints select the disk to install to. wwnWithExtension and
  # wwnVendorExtension are not supported.
  rootDeviceHints:
    deviceName: /dev/sda
  # interfaces are used to identify the host to apply this configuration to
  interfaces:
    - macAddress: 00:00:00:00:00:00
      name: host-network-interface-name
  # networkConfig contains the network configuration for the host in NMState format.
  # See https://nmstate.io/examples.html for examples.
  networkConfig:
    interfaces:
      - name: eth0
        type: ethernet
        state: up
        mac-address: 00:00:00:00:00:00
        ipv4:
          enabled: true
          address:
            - ip: 192.168.122.2
              prefix-length: 23
          dhcp: false
";

/// Writes the sample configuration into `dir` and returns its path.
///
/// # Errors
///
/// Returns [`ConfigError::TemplateExists`] if the file exists and `force` is
/// not set, or an I/O error if writing fails.
pub fn write_template(dir: &Path, force: bool) -> Result<PathBuf, crate::error::ClusterBootError> {
    let path = dir.join(AGENT_CONFIG_FILENAME);
    if path.exists() && !force {
        return Err(ConfigError::TemplateExists { path }.into());
    }

    std::fs::create_dir_all(dir)?;
    std::fs::write(&path, AGENT_CONFIG_TEMPLATE)?;
    tracing::info!(path = %path.display(), "wrote configuration template");
    Ok(path)
}
