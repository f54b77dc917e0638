//! Shared test utilities for zvirt-report integration tests.
//!
//! Invariants / Assumptions:
//! - Commands are hermetic: `.env` loading is disabled and `ZVIRT_*` variables are cleared.
//! - Mock engines serve the client crate's fixtures under `/ovirt-engine`.

use assert_cmd::Command;
use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
#[allow(unused_imports)]
pub use zvirt_client::testing::{engine_url, load_fixture};

/// Returns a hermetic `zvirt-report` command for integration testing.
pub fn zvirt_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("zvirt-report");

    cmd.env("DOTENV_DISABLED", "1");
    clear_zvirt_env(&mut cmd);

    cmd
}

/// Remove every `ZVIRT_*` variable inherited from the host.
pub fn clear_zvirt_env(cmd: &mut Command) {
    for (key, _) in std::env::vars() {
        if key.starts_with("ZVIRT_") {
            cmd.env_remove(&key);
        }
    }
}

#[allow(dead_code)]
pub async fn mount_get(server: &MockServer, api_path: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(format!("/ovirt-engine{api_path}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Mount SSO login and logout.
#[allow(dead_code)]
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
        .expect(1)
        .mount(server)
        .await;
}

/// Mount an engine exposing clusters, tags and two NIC-only VMs.
///
/// Only `vms_service` needs enrichment data; hosts, disks and storage
/// domains are not listed in this engine's API root.
#[allow(dead_code)]
pub async fn mount_small_engine(server: &MockServer) {
    mount_session(server).await;
    mount_get(server, "/api/tags", load_fixture("tags/list_tags.json")).await;
    mount_get(
        server,
        "/api",
        json!({"link": [
            {"href": "/ovirt-engine/api/clusters", "rel": "clusters"},
            {"href": "/ovirt-engine/api/tags", "rel": "tags"},
            {"href": "/ovirt-engine/api/vms", "rel": "vms"}
        ]}),
    )
    .await;
    mount_get(
        server,
        "/api/vms",
        json!({"vm": [{"id": "vm-1", "name": "web01", "status": "up"}]}),
    )
    .await;
    for (sub, body) in [
        ("diskattachments", json!({})),
        ("snapshots", json!({"snapshot": [{"id": "active"}]})),
        ("tags", load_fixture("vms/tags.json")),
        ("reporteddevices", json!({})),
        ("nics", load_fixture("vms/nics.json")),
    ] {
        mount_get(server, &format!("/api/vms/vm-1/{sub}"), body).await;
    }
}
