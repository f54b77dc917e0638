//! Virtual machine sub-resource models.

use serde::{Deserialize, Serialize};

use super::common::{Mac, Reference};

/// The identifying part of a VM.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VmSummary {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// Attachment of a disk to a VM.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiskAttachment {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub disk: Option<Reference>,
}

/// Disk sizes, in bytes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Disk {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(
        default,
        deserialize_with = "crate::serde_helpers::u64_from_string_or_number"
    )]
    pub total_size: u64,
    #[serde(
        default,
        deserialize_with = "crate::serde_helpers::u64_from_string_or_number"
    )]
    pub actual_size: u64,
    #[serde(
        default,
        deserialize_with = "crate::serde_helpers::u64_from_string_or_number"
    )]
    pub provisioned_size: u64,
}

/// VM snapshot; every VM carries one `active` snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub snapshot_type: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Tag {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ip {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IpList {
    #[serde(default)]
    pub ip: Vec<Ip>,
}

/// Network device reported by the guest agent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportedDevice {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub ips: Option<IpList>,
    #[serde(default)]
    pub mac: Option<Mac>,
}

impl ReportedDevice {
    /// All reported IP addresses of this device.
    pub fn ip_addresses(&self) -> impl Iterator<Item = &str> {
        self.ips
            .iter()
            .flat_map(|ips| ips.ip.iter())
            .filter_map(|ip| ip.address.as_deref())
    }

    pub fn mac_address(&self) -> Option<&str> {
        self.mac.as_ref()?.address.as_deref()
    }
}

/// Virtual network interface attached to a VM.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Nic {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub interface: Option<String>,
    #[serde(default)]
    pub mac: Option<Mac>,
}

impl Nic {
    pub fn mac_address(&self) -> Option<&str> {
        self.mac.as_ref()?.address.as_deref()
    }
}
