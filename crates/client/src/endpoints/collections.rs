//! Collection listing and link following.

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;
use zvirt_config::constants::{API_PATH, API_VERSION};

use crate::endpoints::{encode_path_segment, send_request};
use crate::error::{ClientError, Result};
use crate::models::ApiRoot;

/// GET an API resource and return its JSON body.
async fn get_json(client: &Client, url: Url, auth_token: &str, path: &str) -> Result<Value> {
    let builder = client
        .get(url)
        .header("Accept", "application/json")
        .header("Version", API_VERSION)
        .bearer_auth(auth_token);
    let response = send_request(builder, path, "GET").await?;
    Ok(response.json().await?)
}

/// Build the URL of an API path relative to the engine root.
fn api_url(base_url: &str, path: &str) -> Result<Url> {
    let raw = if path.is_empty() {
        format!("{}{}", base_url, API_PATH)
    } else {
        format!("{}{}/{}", base_url, API_PATH, path)
    };
    Url::parse(&raw).map_err(|e| ClientError::InvalidUrl(format!("{}: {}", raw, e)))
}

/// Resolve an `href` embedded in an API object against the engine root.
fn resolve_href(base_url: &str, href: &str) -> Result<Url> {
    if !href.starts_with('/') {
        return Err(ClientError::InvalidUrl(format!(
            "expected an absolute path link, got '{}'",
            href
        )));
    }
    Url::parse(base_url)
        .and_then(|base| base.join(href))
        .map_err(|e| ClientError::InvalidUrl(format!("{}: {}", href, e)))
}

/// Extract the elements of a collection envelope such as `{"vm": [...]}`.
///
/// An envelope without the element key is an empty collection.
pub fn parse_collection<T: DeserializeOwned>(body: Value, element_key: &str) -> Result<Vec<T>> {
    let Value::Object(mut envelope) = body else {
        return Err(ClientError::InvalidResponse(format!(
            "expected a JSON object for collection '{}'",
            element_key
        )));
    };

    match envelope.remove(element_key) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => items
            .into_iter()
            .map(|item| {
                serde_json::from_value(item).map_err(|e| {
                    ClientError::InvalidResponse(format!("malformed '{}' item: {}", element_key, e))
                })
            })
            .collect(),
        Some(_) => Err(ClientError::InvalidResponse(format!(
            "'{}' is not an array",
            element_key
        ))),
    }
}

/// Fetch the API root (the capability list of the session).
pub async fn api_root(client: &Client, base_url: &str, auth_token: &str) -> Result<ApiRoot> {
    let url = api_url(base_url, "")?;
    let body = get_json(client, url, auth_token, API_PATH).await?;
    serde_json::from_value(body)
        .map_err(|e| ClientError::InvalidResponse(format!("malformed API root: {}", e)))
}

/// List a top-level collection, e.g. `rel = "vms"`, `element_key = "vm"`.
pub async fn list_collection<T: DeserializeOwned>(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    rel: &str,
    element_key: &str,
) -> Result<Vec<T>> {
    let url = api_url(base_url, rel)?;
    let body = get_json(client, url, auth_token, rel).await?;
    parse_collection(body, element_key)
}

/// List a sub-collection of a VM, e.g. `vms/{id}/nics`.
pub async fn vm_subcollection<T: DeserializeOwned>(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    vm_id: &str,
    sub: &str,
    element_key: &str,
) -> Result<Vec<T>> {
    let path = format!("vms/{}/{}", encode_path_segment(vm_id), sub);
    let url = api_url(base_url, &path)?;
    let body = get_json(client, url, auth_token, &path).await?;
    parse_collection(body, element_key)
}

/// Follow an `href` to a single object.
pub async fn follow_link<T: DeserializeOwned>(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    href: &str,
) -> Result<T> {
    let url = resolve_href(base_url, href)?;
    let body = get_json(client, url, auth_token, href).await?;
    serde_json::from_value(body)
        .map_err(|e| ClientError::InvalidResponse(format!("malformed object at {}: {}", href, e)))
}

/// Follow an `href` to a collection.
pub async fn follow_collection_link<T: DeserializeOwned>(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    href: &str,
    element_key: &str,
) -> Result<Vec<T>> {
    let url = resolve_href(base_url, href)?;
    let body = get_json(client, url, auth_token, href).await?;
    parse_collection(body, element_key)
}
