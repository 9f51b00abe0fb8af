//! Record: one hash-linked entry in the chain.

use serde::{Deserialize, Serialize};

use crate::canonical::{record_digest, CanonicalFields};

/// The `previous_hash` carried by the first record of a chain.
pub const GENESIS_PREVIOUS_HASH: &str = "0";

/// A single entry in the chain.
///
/// `index`, `patient_id` and `previous_hash` are fixed at creation.
/// `record_data`, `timestamp` and `hash` change only through
/// [`Chain::tamper`](crate::Chain::tamper).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    index: usize,
    patient_id: String,
    record_data: String,
    previous_hash: String,
    /// Milliseconds since the Unix epoch of the last write.
    timestamp: i64,
    hash: String,
}

impl Record {
    /// Build a record and compute its hash.
    pub(crate) fn new(
        index: usize,
        patient_id: String,
        record_data: String,
        previous_hash: String,
        timestamp: i64,
    ) -> Self {
        let mut record = Self {
            index,
            patient_id,
            record_data,
            previous_hash,
            timestamp,
            hash: String::new(),
        };
        record.hash = record.compute_hash();
        record
    }

    /// Replace the payload, stamp the time, and rehash this record only.
    ///
    /// Returns the hash the record carried before the rewrite.
    pub(crate) fn rewrite(&mut self, record_data: String, timestamp: i64) -> String {
        self.record_data = record_data;
        self.timestamp = timestamp;
        let new_hash = self.compute_hash();
        std::mem::replace(&mut self.hash, new_hash)
    }

    /// Position of this record in its chain.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn patient_id(&self) -> &str {
        &self.patient_id
    }

    pub fn record_data(&self) -> &str {
        &self.record_data
    }

    /// Hash of the predecessor at the moment this record was appended.
    pub fn previous_hash(&self) -> &str {
        &self.previous_hash
    }

    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    /// The stored hash.
    pub fn hash(&self) -> &str {
        &self.hash
    }

    /// The fields covered by the record hash.
    pub fn canonical_fields(&self) -> CanonicalFields<'_> {
        CanonicalFields::new(
            &self.patient_id,
            &self.record_data,
            &self.previous_hash,
            self.timestamp,
        )
    }

    /// Recompute the hash from the current field values.
    pub fn compute_hash(&self) -> String {
        record_digest(&self.canonical_fields())
    }

    /// Whether the stored hash matches the current field values.
    pub fn is_self_consistent(&self) -> bool {
        self.hash == self.compute_hash()
    }
}
