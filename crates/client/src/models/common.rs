//! Shared model types: links, references and raw objects.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A raw engine object whose fields are not known statically.
pub type Object = serde_json::Map<String, Value>;

/// A named relation to another resource.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Link {
    #[serde(default)]
    pub href: String,
    #[serde(default)]
    pub rel: String,
}

/// Reference to another resource (`{"href": "...", "id": "..."}`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Reference {
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
}

/// MAC address wrapper.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Mac {
    #[serde(default)]
    pub address: Option<String>,
}

/// Find the `href` of the link with relation `rel` inside a raw object.
pub fn find_link<'a>(object: &'a Object, rel: &str) -> Option<&'a str> {
    object
        .get("link")?
        .as_array()?
        .iter()
        .find(|link| link.get("rel").and_then(Value::as_str) == Some(rel))
        .and_then(|link| link.get("href"))
        .and_then(Value::as_str)
}
