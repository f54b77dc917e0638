//! Inventory queries: top-level collections and per-object sub-resources.

use crate::client::EngineClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{
    ApiRoot, Disk, DiskAttachment, Nic, Object, ReportedDevice, Snapshot, Statistic, Tag,
    VmSummary,
};

impl EngineClient {
    /// Fetch the API root.
    pub async fn api_root(&self) -> Result<ApiRoot> {
        let token = self.auth_token()?;
        endpoints::api_root(&self.http, &self.base_url, token).await
    }

    /// List a top-level collection as raw objects.
    ///
    /// `rel` is the collection path under `/api` (e.g. `storagedomains`),
    /// `element_key` the array key of the response (e.g. `storage_domain`).
    pub async fn list_objects(&self, rel: &str, element_key: &str) -> Result<Vec<Object>> {
        let token = self.auth_token()?;
        endpoints::list_collection(&self.http, &self.base_url, token, rel, element_key).await
    }

    /// List all VMs with their id and name.
    pub async fn list_vms(&self) -> Result<Vec<VmSummary>> {
        let token = self.auth_token()?;
        endpoints::list_collection(&self.http, &self.base_url, token, "vms", "vm").await
    }

    /// List all tags defined on the engine.
    pub async fn list_tags(&self) -> Result<Vec<Tag>> {
        let token = self.auth_token()?;
        endpoints::list_collection(&self.http, &self.base_url, token, "tags", "tag").await
    }

    /// Disk attachments of a VM.
    pub async fn vm_disk_attachments(&self, vm_id: &str) -> Result<Vec<DiskAttachment>> {
        let token = self.auth_token()?;
        endpoints::vm_subcollection(
            &self.http,
            &self.base_url,
            token,
            vm_id,
            "diskattachments",
            "disk_attachment",
        )
        .await
    }

    /// Resolve a disk reference.
    pub async fn disk(&self, href: &str) -> Result<Disk> {
        let token = self.auth_token()?;
        endpoints::follow_link(&self.http, &self.base_url, token, href).await
    }

    /// Snapshots of a VM, including the active one.
    pub async fn vm_snapshots(&self, vm_id: &str) -> Result<Vec<Snapshot>> {
        let token = self.auth_token()?;
        endpoints::vm_subcollection(
            &self.http,
            &self.base_url,
            token,
            vm_id,
            "snapshots",
            "snapshot",
        )
        .await
    }

    /// Tags assigned to a VM.
    pub async fn vm_tags(&self, vm_id: &str) -> Result<Vec<Tag>> {
        let token = self.auth_token()?;
        endpoints::vm_subcollection(&self.http, &self.base_url, token, vm_id, "tags", "tag").await
    }

    /// Devices reported by the guest agent of a VM.
    pub async fn vm_reported_devices(&self, vm_id: &str) -> Result<Vec<ReportedDevice>> {
        let token = self.auth_token()?;
        endpoints::vm_subcollection(
            &self.http,
            &self.base_url,
            token,
            vm_id,
            "reporteddevices",
            "reported_device",
        )
        .await
    }

    /// Network interfaces of a VM.
    pub async fn vm_nics(&self, vm_id: &str) -> Result<Vec<Nic>> {
        let token = self.auth_token()?;
        endpoints::vm_subcollection(&self.http, &self.base_url, token, vm_id, "nics", "nic").await
    }

    /// Statistics behind a host's `statistics` link.
    pub async fn host_statistics(&self, href: &str) -> Result<Vec<Statistic>> {
        let token = self.auth_token()?;
        endpoints::follow_collection_link(&self.http, &self.base_url, token, href, "statistic")
            .await
    }
}
