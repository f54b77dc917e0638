//! oVirt / zVirt engine REST API client.
//!
//! This crate provides a typed client for the engine's v4 REST API. It
//! handles SSO token acquisition and revocation, collection listing, and
//! following the `href` links the API embeds in its objects.

mod auth;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;
mod serde_helpers;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use auth::{Credentials, SessionManager};
pub use client::EngineClient;
pub use client::builder::EngineClientBuilder;
pub use error::{ClientError, Result};
pub use models::{
    ApiRoot, Disk, DiskAttachment, Ip, IpList, Link, Mac, Nic, Object, ProductInfo, Reference,
    ReportedDevice, Snapshot, Statistic, StatisticValue, StatisticValues, Tag, VmSummary,
    find_link,
};
