//! Mock engine helpers for report integration tests.
//!
//! # Invariants
//! - The mock engine serves the client crate's fixtures under `/ovirt-engine`
//! - Requests without a mounted mock answer 404

use std::io::Read;
use std::path::Path;

use secrecy::SecretString;
use serde_json::{Value, json};
use wiremock::matchers::{method, path};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};
use zvirt_client::EngineClient;
#[allow(unused_imports)]
pub use zvirt_client::testing::{engine_url, load_fixture};
use zvirt_config::Config;

/// Mount a GET endpoint returning `body`.
pub async fn mount_get(server: &MockServer, api_path: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(format!("/ovirt-engine{api_path}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Mount SSO login, logout and the `tags` smoke-test collection.
pub async fn mount_session(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/ovirt-engine/sso/oauth/token"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("auth/token_success.json")),
        )
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/ovirt-engine/services/sso-logout"))
        .respond_with(ResponseTemplate::new(200))
        .mount(server)
        .await;
}

/// Mount a complete small engine: one host, two VMs, two disks.
#[allow(dead_code)]
pub async fn mount_engine(server: &MockServer) {
    mount_session(server).await;
    mount_get(server, "/api/tags", load_fixture("tags/list_tags.json")).await;
    mount_get(server, "/api", load_fixture("api/root.json")).await;

    mount_get(server, "/api/hosts", load_fixture("hosts/list_hosts.json")).await;
    mount_get(
        server,
        "/api/hosts/host-1/statistics",
        load_fixture("hosts/statistics.json"),
    )
    .await;

    mount_get(server, "/api/storagedomains", json!({})).await;
    mount_get(
        server,
        "/api/disks",
        json!({"disk": [load_fixture("disks/disk_1.json"), load_fixture("disks/disk_2.json")]}),
    )
    .await;
    mount_get(server, "/api/disks/disk-1", load_fixture("disks/disk_1.json")).await;
    mount_get(server, "/api/disks/disk-2", load_fixture("disks/disk_2.json")).await;

    mount_get(server, "/api/vms", load_fixture("vms/list_vms.json")).await;
    mount_get(
        server,
        "/api/vms/vm-1/diskattachments",
        load_fixture("vms/disk_attachments.json"),
    )
    .await;
    mount_get(server, "/api/vms/vm-1/snapshots", load_fixture("vms/snapshots.json")).await;
    mount_get(server, "/api/vms/vm-1/tags", load_fixture("vms/tags.json")).await;
    mount_get(
        server,
        "/api/vms/vm-1/reporteddevices",
        load_fixture("vms/reported_devices.json"),
    )
    .await;
    mount_get(server, "/api/vms/vm-1/nics", load_fixture("vms/nics.json")).await;

    mount_get(server, "/api/vms/vm-2/diskattachments", json!({})).await;
    mount_get(
        server,
        "/api/vms/vm-2/snapshots",
        json!({"snapshot": [{"id": "snap-active", "snapshot_type": "active"}]}),
    )
    .await;
    mount_get(server, "/api/vms/vm-2/tags", json!({})).await;
    mount_get(server, "/api/vms/vm-2/reporteddevices", json!({})).await;
    mount_get(
        server,
        "/api/vms/vm-2/nics",
        json!({"nic": [{
            "id": "nic-3",
            "name": "nic1",
            "interface": "virtio",
            "mac": {"address": "56:6f:1a:2b:00:03"}
        }]}),
    )
    .await;
}

/// Configuration pointing at the mock engine.
pub fn config_for(server: &MockServer) -> Config {
    Config::with_credentials(
        engine_url(&server.uri()),
        "admin@internal".to_string(),
        SecretString::new("password".to_string().into()),
    )
}

/// Open a session against the mock engine.
#[allow(dead_code)]
pub async fn open_session(server: &MockServer) -> EngineClient {
    zvirt_report::connection::open(&config_for(server))
        .await
        .expect("session should open")
}

/// Concatenated XML of every part of an `.xlsx` file.
#[allow(dead_code)]
pub fn workbook_xml(path: &Path) -> String {
    let file = std::fs::File::open(path).expect("workbook should exist");
    let mut archive = zip::ZipArchive::new(file).expect("workbook should be a zip archive");
    let mut xml = String::new();
    for i in 0..archive.len() {
        let mut entry = archive.by_index(i).expect("zip entry");
        if entry.name().ends_with(".xml") {
            entry.read_to_string(&mut xml).expect("utf-8 xml");
        }
    }
    xml
}

/// Sheet names listed in `xl/workbook.xml`, in order.
#[allow(dead_code)]
pub fn sheet_names(path: &Path) -> Vec<String> {
    let file = std::fs::File::open(path).expect("workbook should exist");
    let mut archive = zip::ZipArchive::new(file).expect("workbook should be a zip archive");
    let mut xml = String::new();
    archive
        .by_name("xl/workbook.xml")
        .expect("workbook part")
        .read_to_string(&mut xml)
        .expect("utf-8 xml");

    xml.split("<sheet ")
        .skip(1)
        .filter_map(|s| {
            let start = s.find("name=\"")? + 6;
            let end = s[start..].find('"')? + start;
            Some(s[start..end].to_string())
        })
        .collect()
}
