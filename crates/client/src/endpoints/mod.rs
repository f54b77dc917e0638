//! REST API endpoint implementations.
//!
//! Every function takes the shared `reqwest::Client`, the engine root URL
//! (e.g. `https://engine.example.com/ovirt-engine`) and, for API calls, the
//! SSO access token.

mod auth;
mod collections;
mod request;
pub mod url_encoding;

pub use auth::{logout, request_token};
pub use collections::{
    api_root, follow_collection_link, follow_link, list_collection, parse_collection,
    vm_subcollection,
};
pub use request::send_request;
pub use url_encoding::encode_path_segment;
