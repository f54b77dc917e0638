//! Category collection and object flattening.
//!
//! Responsibilities:
//! - Fetch the objects of a category, enrich them and flatten them into a [`Table`].
//! - Build the per-NIC rows of the custom `nics_service` category.
//!
//! Does NOT handle:
//! - Dropping unresolved columns (see `table.rs`).
//! - Writing sheets (see `workbook.rs`).
//!
//! Invariants:
//! - `link` and `actions` fields are never tabulated.
//! - A reference object (`{"href", "id"}`) becomes a `<field>_id` column.
//! - Enricher fields win over object fields on key collision.
//! - Any error aborts the whole category.

use serde_json::Value;
use tracing::debug;
use zvirt_client::{EngineClient, Object};

use crate::enricher;
use crate::error::{ReportError, Result};
use crate::manifest::{Category, FetchStrategy};
use crate::table::{Cell, Row, Table};

/// Fields that describe the API itself rather than the object.
const OPAQUE_FIELDS: &[&str] = &["link", "actions"];

/// Flatten one engine object into a row.
pub fn flatten_object(object: &Object) -> Row {
    let mut row = Row::new();
    for (key, value) in object {
        if OPAQUE_FIELDS.contains(&key.as_str()) {
            continue;
        }
        match value {
            Value::Null => row.insert(key.as_str(), Cell::text("")),
            Value::String(s) => row.insert(key.as_str(), Cell::text(s.as_str())),
            Value::Bool(b) => row.insert(key.as_str(), Cell::Text(b.to_string())),
            Value::Number(n) => row.insert(key.as_str(), Cell::Text(n.to_string())),
            Value::Object(nested) => match nested.get("id").and_then(Value::as_str) {
                Some(id) => row.insert(format!("{key}_id"), Cell::text(id)),
                None => row.insert(key.as_str(), Cell::Unresolved),
            },
            Value::Array(_) => row.insert(key.as_str(), Cell::Unresolved),
        }
    }
    row
}

/// Collect all rows of a category.
pub async fn collect(client: &EngineClient, category: &Category) -> Result<Table> {
    let table = match category.strategy {
        FetchStrategy::List => collect_list(client, category).await,
        FetchStrategy::VmNics => collect_vm_nics(client).await,
    }
    .map_err(|source| ReportError::fetch(category.name, source))?;

    debug!(
        category = category.name,
        rows = table.len(),
        "Category collected"
    );
    Ok(table)
}

async fn collect_list(
    client: &EngineClient,
    category: &Category,
) -> std::result::Result<Table, zvirt_client::ClientError> {
    let objects = client
        .list_objects(category.rel, category.element_key)
        .await?;

    let mut table = Table::new();
    for object in &objects {
        let mut row = flatten_object(object);
        row.merge(enricher::enrich(client, category.enrichment, object).await?);
        table.push(row);
    }
    Ok(table)
}

async fn collect_vm_nics(
    client: &EngineClient,
) -> std::result::Result<Table, zvirt_client::ClientError> {
    let mut table = Table::new();
    for vm in client.list_vms().await? {
        for nic in client.vm_nics(&vm.id).await? {
            let mut row = Row::new();
            row.insert("vm_name", Cell::text(vm.name.as_str()));
            row.insert("nic_name", Cell::text(nic.name.as_str()));
            row.insert("nic_id", Cell::text(nic.id.as_deref().unwrap_or_default()));
            row.insert(
                "nic_interface",
                Cell::text(nic.interface.as_deref().unwrap_or_default()),
            );
            row.insert(
                "nic_mac_address",
                Cell::text(nic.mac_address().unwrap_or_default()),
            );
            table.push(row);
        }
    }
    Ok(table)
}
