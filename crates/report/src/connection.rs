//! Session lifecycle.
//!
//! Invariants:
//! - `open` returns only after login and one successful smoke-test query.
//! - A session that fails its smoke test is closed before the error is returned.
//! - `close` never fails; revocation errors are logged.

use tracing::{debug, warn};
use zvirt_client::EngineClient;
use zvirt_config::Config;

use crate::error::{ReportError, Result};

/// Open an authenticated session and verify it with one cheap query.
pub async fn open(config: &Config) -> Result<EngineClient> {
    let mut client = EngineClient::builder()
        .from_config(config)
        .build()
        .map_err(ReportError::Connection)?;

    client.login().await.map_err(ReportError::Connection)?;

    match client.list_tags().await {
        Ok(tags) => {
            debug!(tags = tags.len(), "Smoke test passed");
            Ok(client)
        }
        Err(e) => {
            close(client).await;
            Err(ReportError::Connection(e))
        }
    }
}

/// Close the session.
pub async fn close(client: EngineClient) {
    if let Err(e) = client.logout().await {
        warn!(error = %e, "Failed to close engine session");
    }
}
