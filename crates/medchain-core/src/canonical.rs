//! Canonical JSON encoding of a record's hashed fields.
//!
//! The canonical form is a compact JSON object (no insignificant whitespace),
//! UTF-8 encoded, with keys in exactly this order:
//!
//! 1. `patientId`
//! 2. `recordData`
//! 3. `previousHash`
//! 4. `timestamp`
//!
//! Strings use standard JSON escaping; non-ASCII characters are emitted
//! verbatim. The timestamp is an integer (milliseconds since the Unix epoch).
//!
//! ```text
//! {"patientId":"P1","recordData":"blood pressure 120/80","previousHash":"0","timestamp":1700000000000}
//! ```
//!
//! Any implementation that produces these exact bytes will compute the same
//! record hashes.

use serde::Serialize;

use crate::hasher::digest;

/// Borrowed view of the fields covered by a record hash.
///
/// Field declaration order is the canonical key order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalFields<'a> {
    pub patient_id: &'a str,
    pub record_data: &'a str,
    pub previous_hash: &'a str,
    pub timestamp: i64,
}

impl<'a> CanonicalFields<'a> {
    /// Bundle the hashed fields.
    pub fn new(
        patient_id: &'a str,
        record_data: &'a str,
        previous_hash: &'a str,
        timestamp: i64,
    ) -> Self {
        Self {
            patient_id,
            record_data,
            previous_hash,
            timestamp,
        }
    }
}

/// Encode the hashed fields to canonical bytes.
pub fn canonical_bytes(fields: &CanonicalFields<'_>) -> Vec<u8> {
    // A struct of strings and an integer has no failing serialization path.
    serde_json::to_vec(fields).expect("canonical fields are always representable as JSON")
}

/// Hex SHA-256 digest of the canonical encoding.
pub fn record_digest(fields: &CanonicalFields<'_>) -> String {
    digest(&canonical_bytes(fields))
}
