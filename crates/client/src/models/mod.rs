//! Data models for engine API responses.
//!
//! Collection endpoints return an envelope keyed by the element name,
//! e.g. `{"vm": [...]}`; an empty collection is returned as `{}`.

mod api;
mod common;
mod hosts;
mod vms;

pub use api::{ApiRoot, ProductInfo, ProductVersion};
pub use common::{Link, Mac, Object, Reference, find_link};
pub use hosts::{Statistic, StatisticValue, StatisticValues};
pub use vms::{Disk, DiskAttachment, Ip, IpList, Nic, ReportedDevice, Snapshot, Tag, VmSummary};
