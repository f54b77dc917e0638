//! URL encoding utilities for constructing safe API paths.
//!
//! Object identifiers are interpolated into paths such as
//! `/api/vms/{id}/nics`; encoding keeps a malformed identifier from
//! escaping its path segment.
//!
//! # Example
//!
//! ```
//! use zvirt_client::endpoints::url_encoding::encode_path_segment;
//!
//! let encoded = encode_path_segment("vm/../hosts");
//! assert_eq!(encoded, "vm%2F..%2Fhosts");
//! ```

use percent_encoding::{AsciiSet, CONTROLS, percent_encode};

/// Characters that must be percent-encoded in URL path segments.
pub const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'\\')
    .add(b'^')
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'#')
    .add(b'[')
    .add(b']');

/// Percent-encode a string for safe use as a URL path segment.
pub fn encode_path_segment(segment: &str) -> String {
    percent_encode(segment.as_bytes(), PATH_SEGMENT_ENCODE_SET).to_string()
}
