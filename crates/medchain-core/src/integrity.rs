//! Integrity scan over an ordered run of records.
//!
//! The scan is a single pass from the first record. It stops at the first
//! record whose stored link or stored hash no longer holds; that record and
//! every record after it are considered broken.

use serde::{Deserialize, Serialize};

use crate::record::{Record, GENESIS_PREVIOUS_HASH};

/// Why a record failed the integrity scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BreakReason {
    /// The first record does not carry the genesis sentinel.
    GenesisLink {
        /// The previous hash actually stored.
        found: String,
    },

    /// The stored previous hash differs from the predecessor's current hash.
    LinkMismatch {
        /// The predecessor's current hash.
        expected: String,
        /// The previous hash stored on this record.
        found: String,
    },

    /// The stored hash differs from the digest of the current fields.
    HashMismatch {
        /// The hash stored on the record.
        stored: String,
        /// The digest recomputed from the record's fields.
        computed: String,
    },
}

/// Outcome of scanning a chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChainIntegrity {
    /// Every record links and hashes correctly.
    Intact,

    /// The chain is intact only up to `first_broken`.
    Broken {
        /// Index of the first record that fails.
        first_broken: usize,
        /// What failed at that index.
        reason: BreakReason,
    },
}

impl ChainIntegrity {
    /// Check if the whole chain is intact.
    pub fn is_intact(&self) -> bool {
        matches!(self, ChainIntegrity::Intact)
    }

    /// Index of the first broken record, if any.
    pub fn first_broken(&self) -> Option<usize> {
        match self {
            ChainIntegrity::Intact => None,
            ChainIntegrity::Broken { first_broken, .. } => Some(*first_broken),
        }
    }

    /// The failure at the first broken record, if any.
    pub fn reason(&self) -> Option<&BreakReason> {
        match self {
            ChainIntegrity::Intact => None,
            ChainIntegrity::Broken { reason, .. } => Some(reason),
        }
    }
}

/// Per-record verdict, for renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RecordStatus {
    Intact,
    Broken,
}

/// Check a single record against its predecessor.
///
/// The link check runs first, so a record that fails both reports the link.
pub(crate) fn check_record(record: &Record, predecessor: Option<&Record>) -> Option<BreakReason> {
    match predecessor {
        None if record.previous_hash() != GENESIS_PREVIOUS_HASH => {
            return Some(BreakReason::GenesisLink {
                found: record.previous_hash().to_string(),
            });
        }
        Some(prev) if record.previous_hash() != prev.hash() => {
            return Some(BreakReason::LinkMismatch {
                expected: prev.hash().to_string(),
                found: record.previous_hash().to_string(),
            });
        }
        _ => {}
    }

    let computed = record.compute_hash();
    if computed != record.hash() {
        return Some(BreakReason::HashMismatch {
            stored: record.hash().to_string(),
            computed,
        });
    }

    None
}

/// Scan records in order and report the first break.
pub fn scan(records: &[Record]) -> ChainIntegrity {
    for (i, record) in records.iter().enumerate() {
        let predecessor = i.checked_sub(1).map(|p| &records[p]);
        if let Some(reason) = check_record(record, predecessor) {
            return ChainIntegrity::Broken {
                first_broken: i,
                reason,
            };
        }
    }
    ChainIntegrity::Intact
}

/// Expand a scan result into one status per record.
pub fn statuses(integrity: &ChainIntegrity, len: usize) -> Vec<RecordStatus> {
    let cut = integrity.first_broken().unwrap_or(len);
    (0..len)
        .map(|i| {
            if i < cut {
                RecordStatus::Intact
            } else {
                RecordStatus::Broken
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linked(n: usize) -> Vec<Record> {
        let mut records: Vec<Record> = Vec::new();
        for i in 0..n {
            let prev = records
                .last()
                .map(|r| r.hash().to_string())
                .unwrap_or_else(|| GENESIS_PREVIOUS_HASH.to_string());
            records.push(Record::new(
                i,
                format!("P{}", i),
                format!("data {}", i),
                prev,
                1000 + i as i64,
            ));
        }
        records
    }

    #[test]
    fn test_empty_is_intact() {
        assert!(scan(&[]).is_intact());
        assert!(statuses(&ChainIntegrity::Intact, 0).is_empty());
    }

    #[test]
    fn test_linked_is_intact() {
        let records = linked(4);
        let integrity = scan(&records);
        assert!(integrity.is_intact());
        assert_eq!(integrity.first_broken(), None);
        assert_eq!(statuses(&integrity, 4), vec![RecordStatus::Intact; 4]);
    }

    #[test]
    fn test_bad_genesis_sentinel() {
        let records = vec![Record::new(0, "P".into(), "d".into(), "1".into(), 0)];
        match scan(&records) {
            ChainIntegrity::Broken {
                first_broken: 0,
                reason: BreakReason::GenesisLink { found },
            } => assert_eq!(found, "1"),
            other => panic!("expected genesis break, got {:?}", other),
        }
    }

    #[test]
    fn test_rewrite_breaks_successor_link() {
        let mut records = linked(3);
        let old = records[1].rewrite("changed".into(), 5000);

        let integrity = scan(&records);
        assert_eq!(integrity.first_broken(), Some(2));
        assert_eq!(
            integrity.reason(),
            Some(&BreakReason::LinkMismatch {
                expected: records[1].hash().to_string(),
                found: old,
            })
        );
        assert_eq!(
            statuses(&integrity, 3),
            vec![RecordStatus::Intact, RecordStatus::Intact, RecordStatus::Broken]
        );
    }

    #[test]
    fn test_rewriting_last_record_stays_intact() {
        let mut records = linked(3);
        records[2].rewrite("changed".into(), 5000);
        assert!(scan(&records).is_intact());
    }

    #[test]
    fn test_stale_hash_detected() {
        let mut records = linked(2);
        let mut json = serde_json::to_value(&records[1]).unwrap();
        json["recordData"] = "silently edited".into();
        records[1] = serde_json::from_value(json).unwrap();

        match scan(&records) {
            ChainIntegrity::Broken {
                first_broken: 1,
                reason: BreakReason::HashMismatch { stored, computed },
            } => {
                assert_eq!(stored, records[1].hash());
                assert_ne!(stored, computed);
            }
            other => panic!("expected hash mismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_stale_genesis_hash_detected() {
        let mut records = linked(2);
        let mut json = serde_json::to_value(&records[0]).unwrap();
        json["patientId"] = "P9".into();
        records[0] = serde_json::from_value(json).unwrap();
        assert_eq!(records[0].previous_hash(), GENESIS_PREVIOUS_HASH);

        match scan(&records) {
            ChainIntegrity::Broken {
                first_broken: 0,
                reason: BreakReason::HashMismatch { stored, computed },
            } => {
                assert_eq!(stored, records[0].hash());
                assert_eq!(computed, records[0].compute_hash());
                assert_ne!(stored, computed);
            }
            other => panic!("expected hash mismatch at 0, got {:?}", other),
        }
        assert_eq!(
            statuses(&scan(&records), 2),
            vec![RecordStatus::Broken, RecordStatus::Broken]
        );
    }

    #[test]
    fn test_record_status_serializes_camel_case() {
        assert_eq!(
            serde_json::to_value(RecordStatus::Intact).unwrap(),
            serde_json::json!("intact")
        );
        assert_eq!(
            serde_json::to_value(RecordStatus::Broken).unwrap(),
            serde_json::json!("broken")
        );
    }
}
