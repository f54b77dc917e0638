//! Common test utilities for integration tests.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - Mock engines are mounted under `/ovirt-engine`, like a real engine

#[allow(unused_imports)]
pub use zvirt_client::testing::{engine_url, load_fixture};

#[allow(unused_imports)]
pub use reqwest::Client;
#[allow(unused_imports)]
pub use zvirt_client::endpoints;
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

use secrecy::SecretString;
use wiremock::matchers::{method, path};
use zvirt_client::{Credentials, EngineClient};

/// Mount a successful SSO token endpoint.
#[allow(dead_code)]
pub async fn mount_token(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/ovirt-engine/sso/oauth/token"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("auth/token_success.json")),
        )
        .mount(server)
        .await;
}

/// Build and log in a client against a mock engine.
#[allow(dead_code)]
pub async fn logged_in_client(server: &MockServer) -> EngineClient {
    mount_token(server).await;
    let mut client = EngineClient::builder()
        .base_url(engine_url(&server.uri()))
        .credentials(Credentials {
            username: "admin@internal".to_string(),
            password: SecretString::new("password".to_string().into()),
        })
        .build()
        .expect("client should build");
    client.login().await.expect("login should succeed");
    client
}
