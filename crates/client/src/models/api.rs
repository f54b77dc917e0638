//! API root model.

use serde::{Deserialize, Serialize};

use super::common::Link;

/// Engine product version.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductVersion {
    #[serde(default)]
    pub full_version: Option<String>,
}

/// Engine product information.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductInfo {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub version: Option<ProductVersion>,
}

/// Response of `GET /api`: the capability list of the session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiRoot {
    #[serde(default)]
    pub link: Vec<Link>,
    #[serde(default)]
    pub product_info: Option<ProductInfo>,
}

impl ApiRoot {
    /// Top-level collection relations, in the order the engine lists them.
    ///
    /// Search relations (`vms/search`) are not collections and are left out.
    pub fn collection_relations(&self) -> Vec<&str> {
        self.link
            .iter()
            .map(|link| link.rel.as_str())
            .filter(|rel| !rel.is_empty() && !rel.contains('/'))
            .collect()
    }

    /// Full product version string, if reported.
    pub fn product_version(&self) -> Option<&str> {
        self.product_info
            .as_ref()?
            .version
            .as_ref()?
            .full_version
            .as_deref()
    }
}
