//! Serde helpers for the engine's inconsistent JSON typing.
//!
//! Invariants / assumptions:
//! - The engine returns most numeric fields as `"123"` strings, but some
//!   endpoints and versions return plain JSON numbers.
//! - Errors are generic parse errors and never echo surrounding payload.

use serde::Deserialize;
use serde::de::Error as _;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum U64OrString {
    U64(u64),
    I64(i64),
    String(String),
}

/// Deserialize a `u64` from either a JSON number or a numeric string.
///
/// `null` is read as zero.
pub fn u64_from_string_or_number<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match Option::<U64OrString>::deserialize(deserializer)? {
        None => Ok(0),
        Some(U64OrString::U64(v)) => Ok(v),
        Some(U64OrString::I64(v)) => u64::try_from(v).map_err(D::Error::custom),
        Some(U64OrString::String(s)) => s.trim().parse::<u64>().map_err(D::Error::custom),
    }
}
