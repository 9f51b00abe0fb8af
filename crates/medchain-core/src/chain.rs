//! Chain: an ordered, append-only log of hash-linked records.
//!
//! Each record stores the hash its predecessor had at the moment of append.
//! [`Chain::tamper`] rewrites one record in place and rehashes only that
//! record, so its successor keeps pointing at the old hash. The chain never
//! repairs itself; [`Chain::verify`] reports where the links stop holding.

use crate::error::{ChainError, Result};
use crate::integrity::{self, ChainIntegrity, RecordStatus};
use crate::record::{Record, GENESIS_PREVIOUS_HASH};

/// Suffix appended by [`Chain::tamper_with_marker`] in the default demo flow.
pub const DEFAULT_TAMPER_MARKER: &str = " [tampered]";

/// An in-memory chain of records.
///
/// The chain owns its records. Callers read them through shared references
/// and mutate them only through [`append`](Self::append) and
/// [`tamper`](Self::tamper).
#[derive(Debug, Clone, Default)]
pub struct Chain {
    records: Vec<Record>,
}

impl Chain {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Get the record at `index`.
    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    /// The most recently appended record.
    pub fn latest(&self) -> Option<&Record> {
        self.records.last()
    }

    /// All records in creation order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// The hash the next appended record will link to.
    ///
    /// This is whatever the last record holds right now, tampered or not.
    pub fn head_hash(&self) -> &str {
        self.latest()
            .map(Record::hash)
            .unwrap_or(GENESIS_PREVIOUS_HASH)
    }

    /// Append a record stamped with the current time.
    pub fn append(
        &mut self,
        patient_id: impl Into<String>,
        record_data: impl Into<String>,
    ) -> &Record {
        self.append_at(patient_id, record_data, now_millis())
    }

    /// Append a record with an explicit timestamp.
    pub fn append_at(
        &mut self,
        patient_id: impl Into<String>,
        record_data: impl Into<String>,
        timestamp: i64,
    ) -> &Record {
        let record = Record::new(
            self.records.len(),
            patient_id.into(),
            record_data.into(),
            self.head_hash().to_string(),
            timestamp,
        );
        self.records.push(record);
        &self.records[self.records.len() - 1]
    }

    /// Replace the payload of the record at `index`, stamped with the current time.
    ///
    /// Only that record is rehashed. Its `previous_hash` is kept and no other
    /// record is touched.
    pub fn tamper(&mut self, index: usize, new_record_data: impl Into<String>) -> Result<&Record> {
        self.tamper_at(index, new_record_data, now_millis())
    }

    /// Like [`tamper`](Self::tamper) with an explicit timestamp.
    pub fn tamper_at(
        &mut self,
        index: usize,
        new_record_data: impl Into<String>,
        timestamp: i64,
    ) -> Result<&Record> {
        let len = self.records.len();
        let record = self
            .records
            .get_mut(index)
            .ok_or(ChainError::InvalidIndex { index, len })?;
        record.rewrite(new_record_data.into(), timestamp);
        Ok(&*record)
    }

    /// Tamper by appending `marker` to the record's existing payload.
    pub fn tamper_with_marker(&mut self, index: usize, marker: &str) -> Result<&Record> {
        let data = self
            .get(index)
            .map(|r| format!("{}{}", r.record_data(), marker))
            .ok_or(ChainError::InvalidIndex {
                index,
                len: self.len(),
            })?;
        self.tamper(index, data)
    }

    /// Scan the chain from the first record.
    pub fn verify(&self) -> ChainIntegrity {
        integrity::scan(&self.records)
    }

    /// Check if every record links and hashes correctly.
    pub fn is_intact(&self) -> bool {
        self.verify().is_intact()
    }

    /// One status per record; everything from the first break on is broken.
    pub fn record_statuses(&self) -> Vec<RecordStatus> {
        integrity::statuses(&self.verify(), self.len())
    }
}

impl<'a> IntoIterator for &'a Chain {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Get current time in milliseconds.
fn now_millis() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}
