//! Golden test vectors for deterministic verification.
//!
//! These vectors pin the canonical encoding and its SHA-256 digest, so any
//! implementation can check that it hashes records identically.

use medchain_core::{canonical_bytes, digest, CanonicalFields};

/// A golden test vector.
#[derive(Debug, Clone)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    pub patient_id: &'static str,
    pub record_data: &'static str,
    pub previous_hash: &'static str,
    pub timestamp: i64,
    /// Expected canonical encoding (UTF-8).
    pub expected_canonical: &'static str,
    /// Expected record hash (lowercase hex).
    pub expected_hash: &'static str,
}

impl GoldenVector {
    /// The hashed fields of this vector.
    pub fn fields(&self) -> CanonicalFields<'static> {
        CanonicalFields::new(
            self.patient_id,
            self.record_data,
            self.previous_hash,
            self.timestamp,
        )
    }
}

/// SHA-256 of the empty payload.
pub const EMPTY_DIGEST: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

/// Get all golden test vectors.
///
/// The first two form a chain; the third is the first after tampering.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "genesis record",
            patient_id: "P1",
            record_data: "blood pressure 120/80",
            previous_hash: "0",
            timestamp: 1_700_000_000_000,
            expected_canonical: r#"{"patientId":"P1","recordData":"blood pressure 120/80","previousHash":"0","timestamp":1700000000000}"#,
            expected_hash: "45ad55c7b24e4ab9f943efe091313b577271b44e60139344fb956c9a923c9919",
        },
        GoldenVector {
            name: "linked record",
            patient_id: "P2",
            record_data: "glucose 90",
            previous_hash: "45ad55c7b24e4ab9f943efe091313b577271b44e60139344fb956c9a923c9919",
            timestamp: 1_700_000_001_000,
            expected_canonical: r#"{"patientId":"P2","recordData":"glucose 90","previousHash":"45ad55c7b24e4ab9f943efe091313b577271b44e60139344fb956c9a923c9919","timestamp":1700000001000}"#,
            expected_hash: "9b730ba37b3b7f635c6c2bd3b2f103293dbe11528290bab6b21bef89f0c7f558",
        },
        GoldenVector {
            name: "tampered genesis record",
            patient_id: "P1",
            record_data: "blood pressure 999/999",
            previous_hash: "0",
            timestamp: 1_700_000_002_000,
            expected_canonical: r#"{"patientId":"P1","recordData":"blood pressure 999/999","previousHash":"0","timestamp":1700000002000}"#,
            expected_hash: "25950fc5265d1e37c980f2c48d47f5a54649b054d52cc73a393d28bab64632d3",
        },
        GoldenVector {
            name: "escaped and non-ascii text",
            patient_id: "P\"3",
            record_data: "line\nbreak é",
            previous_hash: "0",
            timestamp: 0,
            expected_canonical: "{\"patientId\":\"P\\\"3\",\"recordData\":\"line\\nbreak é\",\"previousHash\":\"0\",\"timestamp\":0}",
            expected_hash: "00da09a3aece9f7a8c99f4ac1f128224efbc86c55a3debda852ed25f6ce01fb5",
        },
    ]
}

/// Check every vector against this implementation.
///
/// Returns `(name, matches, computed_hash)` per vector.
pub fn verify_all_vectors() -> Vec<(String, bool, String)> {
    all_vectors()
        .iter()
        .map(|v| {
            let bytes = canonical_bytes(&v.fields());
            let hash = digest(&bytes);
            let matches = bytes == v.expected_canonical.as_bytes() && hash == v.expected_hash;
            (v.name.to_string(), matches, hash)
        })
        .collect()
}
