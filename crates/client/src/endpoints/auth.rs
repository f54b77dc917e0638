//! SSO authentication endpoints.

use reqwest::Client;
use serde::Deserialize;
use tracing::debug;
use zvirt_config::constants::{SSO_LOGOUT_PATH, SSO_SCOPE, SSO_TOKEN_PATH};

use crate::endpoints::send_request;
use crate::error::{ClientError, Result};

/// Body of the SSO token endpoint; errors may come back with a 200 status.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    #[serde(default)]
    access_token: Option<String>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    error_description: Option<String>,
}

/// Request an SSO access token with the password grant.
pub async fn request_token(
    client: &Client,
    base_url: &str,
    username: &str,
    password: &str,
) -> Result<String> {
    debug!("Requesting SSO token for {}", username);

    let url = format!("{}{}", base_url, SSO_TOKEN_PATH);
    let builder = client
        .post(&url)
        .header("Accept", "application/json")
        .form(&[
            ("grant_type", "password"),
            ("scope", SSO_SCOPE),
            ("username", username),
            ("password", password),
        ]);

    let response = match send_request(builder, SSO_TOKEN_PATH, "POST").await {
        Ok(response) => response,
        Err(ClientError::ApiError {
            status, message, ..
        }) if status == 400 || status == 401 => {
            let reason = serde_json::from_str::<TokenResponse>(&message)
                .ok()
                .and_then(|body| body.error_description.or(body.error))
                .unwrap_or(message);
            return Err(ClientError::AuthFailed(reason));
        }
        Err(e) => return Err(e),
    };

    let body: TokenResponse = response.json().await?;

    match body.access_token {
        Some(token) if !token.is_empty() => Ok(token),
        _ => Err(ClientError::AuthFailed(
            body.error_description
                .or(body.error)
                .unwrap_or_else(|| "SSO response did not contain an access token".to_string()),
        )),
    }
}

/// Revoke an SSO access token.
pub async fn logout(client: &Client, base_url: &str, token: &str) -> Result<()> {
    debug!("Revoking SSO token");

    let url = format!("{}{}", base_url, SSO_LOGOUT_PATH);
    let builder = client
        .get(&url)
        .header("Accept", "application/json")
        .query(&[("scope", ""), ("token", token)]);

    send_request(builder, SSO_LOGOUT_PATH, "GET").await?;
    Ok(())
}
