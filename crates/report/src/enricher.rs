//! Category-specific derived fields.
//!
//! Responsibilities:
//! - Host: flatten the `statistics` sub-collection into `{name: first datum}`.
//! - VM: sum disk sizes, count snapshots, join tags and guest addresses.
//!
//! Invariants:
//! - One request per linked collection per object; nothing is cached.
//! - An object without enrichment gets an empty row.

use tracing::debug;
use zvirt_client::{ClientError, Disk, EngineClient, Object, Statistic, Tag, find_link};

use crate::manifest::EnrichmentRule;
use crate::table::{Cell, Row};

/// Summed sizes of the disks attached to a VM, in bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiskTotals {
    pub total_size: u64,
    pub actual_size: u64,
    pub provisioned_size: u64,
}

pub fn sum_disk_sizes(disks: &[Disk]) -> DiskTotals {
    disks.iter().fold(DiskTotals::default(), |acc, disk| DiskTotals {
        total_size: acc.total_size.saturating_add(disk.total_size),
        actual_size: acc.actual_size.saturating_add(disk.actual_size),
        provisioned_size: acc.provisioned_size.saturating_add(disk.provisioned_size),
    })
}

/// Snapshots excluding the always-present active one.
pub fn count_snapshots(total: usize) -> usize {
    total.saturating_sub(1)
}

/// Tag names in API order, `;`-separated.
pub fn join_tags(tags: &[Tag]) -> String {
    tags.iter()
        .map(|tag| tag.name.as_str())
        .collect::<Vec<_>>()
        .join(";")
}

/// Addresses joined with `", "`.
pub fn join_addresses<'a>(addresses: impl IntoIterator<Item = &'a str>) -> String {
    addresses.into_iter().collect::<Vec<_>>().join(", ")
}

/// `{statistic name: first datum}`; statistics without a datum are skipped.
pub fn flatten_statistics(statistics: &[Statistic]) -> Row {
    statistics
        .iter()
        .filter_map(|stat| {
            let datum = stat.first_datum();
            if datum.is_none() {
                debug!(statistic = %stat.name, "Statistic has no datum");
            }
            datum.map(|d| (stat.name.clone(), Cell::Text(d)))
        })
        .collect()
}

fn object_id(object: &Object) -> Result<&str, ClientError> {
    object
        .get("id")
        .and_then(|v| v.as_str())
        .ok_or_else(|| ClientError::InvalidResponse("object has no id".to_string()))
}

/// Derived fields for one object of a category.
pub async fn enrich(
    client: &EngineClient,
    rule: EnrichmentRule,
    object: &Object,
) -> Result<Row, ClientError> {
    match rule {
        EnrichmentRule::None => Ok(Row::new()),
        EnrichmentRule::HostStatistics => host_statistics(client, object).await,
        EnrichmentRule::VmStatistics => vm_statistics(client, object).await,
    }
}

async fn host_statistics(client: &EngineClient, host: &Object) -> Result<Row, ClientError> {
    let href = find_link(host, "statistics").ok_or_else(|| {
        ClientError::NotFound(format!(
            "statistics link of host {}",
            object_id(host).unwrap_or("<unknown>")
        ))
    })?;
    let statistics = client.host_statistics(href).await?;
    Ok(flatten_statistics(&statistics))
}

async fn vm_statistics(client: &EngineClient, vm: &Object) -> Result<Row, ClientError> {
    let vm_id = object_id(vm)?;
    let mut row = Row::new();

    let mut disks = Vec::new();
    for attachment in client.vm_disk_attachments(vm_id).await? {
        let href = attachment
            .disk
            .as_ref()
            .and_then(|disk| disk.href.as_deref())
            .ok_or_else(|| {
                ClientError::NotFound(format!(
                    "disk reference of attachment {} on vm {}",
                    attachment.id.as_deref().unwrap_or("<unknown>"),
                    vm_id
                ))
            })?;
        disks.push(client.disk(href).await?);
    }
    let totals = sum_disk_sizes(&disks);
    row.insert("vm_total_size", Cell::Text(totals.total_size.to_string()));
    row.insert("vm_actual_size", Cell::Text(totals.actual_size.to_string()));
    row.insert(
        "vm_provisioned_size",
        Cell::Text(totals.provisioned_size.to_string()),
    );

    let snapshots = client.vm_snapshots(vm_id).await?;
    row.insert(
        "vm_snapshots",
        Cell::Text(count_snapshots(snapshots.len()).to_string()),
    );

    let tags = client.vm_tags(vm_id).await?;
    row.insert("vm_tags", Cell::Text(join_tags(&tags)));

    let devices = client.vm_reported_devices(vm_id).await?;
    row.insert(
        "vm_ips",
        Cell::Text(join_addresses(devices.iter().flat_map(|d| d.ip_addresses()))),
    );
    row.insert(
        "vm_macs",
        Cell::Text(join_addresses(devices.iter().filter_map(|d| d.mac_address()))),
    );

    Ok(row)
}
