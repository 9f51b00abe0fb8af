//! Chain properties checked against arbitrary append/tamper histories.

use proptest::prelude::*;

use medchain_core::{
    is_hex_digest, record_digest, BreakReason, Chain, ChainError, ChainIntegrity, RecordStatus,
    GENESIS_PREVIOUS_HASH,
};
use medchain_testkit::generators::{patient_id, record_data, timestamp};
use medchain_testkit::{chain_from_ops, ChainFixture, ChainOp};

/// First index whose stored link differs from the predecessor's current hash.
fn first_stale_link(chain: &Chain) -> Option<usize> {
    let records = chain.records();
    (1..records.len()).find(|&i| records[i].previous_hash() != records[i - 1].hash())
}

proptest! {
    #[test]
    fn genesis_links_to_sentinel(p in patient_id(), d in record_data(), ts in timestamp()) {
        let mut chain = Chain::new();
        let record = chain.append_at(p, d, ts);
        prop_assert_eq!(record.previous_hash(), GENESIS_PREVIOUS_HASH);
        prop_assert_eq!(record.index(), 0);
    }

    #[test]
    fn append_links_and_hashes_at_that_instant(ops in prop::collection::vec(any::<ChainOp>(), 0..20)) {
        let mut chain = chain_from_ops(&ops);
        let len = chain.len();
        let head = chain.head_hash().to_string();

        let record = chain.append_at("PX", "new entry", 42);

        prop_assert_eq!(record.index(), len);
        prop_assert_eq!(record.previous_hash(), head.as_str());
        prop_assert!(is_hex_digest(record.hash()));
        prop_assert_eq!(record.hash(), record_digest(&record.canonical_fields()));
        prop_assert_eq!(chain.len(), len + 1);
    }

    #[test]
    fn every_record_stays_self_consistent(ops in prop::collection::vec(any::<ChainOp>(), 0..30)) {
        let chain = chain_from_ops(&ops);
        for (i, record) in chain.iter().enumerate() {
            prop_assert_eq!(record.index(), i);
            prop_assert!(record.is_self_consistent());
        }
    }

    #[test]
    fn verify_reports_first_stale_link(ops in prop::collection::vec(any::<ChainOp>(), 0..30)) {
        let chain = chain_from_ops(&ops);
        let integrity = chain.verify();

        // Records only change through tamper, so every break is a stale link.
        prop_assert_eq!(integrity.first_broken(), first_stale_link(&chain));
        if let ChainIntegrity::Broken { reason, .. } = &integrity {
            let is_link_mismatch = matches!(reason, BreakReason::LinkMismatch { .. });
            prop_assert!(is_link_mismatch);
        }

        let statuses = chain.record_statuses();
        let cut = integrity.first_broken().unwrap_or(chain.len());
        for (i, status) in statuses.iter().enumerate() {
            let expected = if i < cut { RecordStatus::Intact } else { RecordStatus::Broken };
            prop_assert_eq!(*status, expected);
        }
    }

    #[test]
    fn tamper_breaks_successor_only(n in 2usize..10, pick in any::<usize>(), d in record_data()) {
        let mut fixture = ChainFixture::with_records(n);
        let index = pick % (n - 1);
        let before = fixture.chain.records().to_vec();
        prop_assume!(before[index].record_data() != d);

        fixture.tamper(index, &d);
        let after = fixture.chain.records();

        prop_assert_eq!(after[index].index(), index);
        prop_assert_eq!(after[index].previous_hash(), before[index].previous_hash());
        prop_assert_ne!(after[index].hash(), before[index].hash());
        prop_assert!(after[index].is_self_consistent());
        for i in (0..n).filter(|&i| i != index) {
            prop_assert_eq!(&after[i], &before[i]);
        }
        prop_assert_ne!(after[index + 1].previous_hash(), after[index].hash());
        prop_assert_eq!(fixture.chain.verify().first_broken(), Some(index + 1));
    }

    #[test]
    fn out_of_range_tamper_is_rejected(n in 0usize..8, extra in 0usize..1000) {
        let mut fixture = ChainFixture::with_records(n);
        let before = fixture.chain.records().to_vec();
        let index = n + extra;

        let err = fixture.chain.tamper(index, "x").unwrap_err();
        prop_assert_eq!(err, ChainError::InvalidIndex { index, len: n });
        prop_assert_eq!(fixture.chain.records(), &before[..]);
    }
}

#[test]
fn tamper_then_append_links_to_new_hash() {
    let mut fixture = ChainFixture::scenario();
    fixture.tamper(1, "glucose 500");
    let record = fixture.append("P3", "heart rate 70");

    let records = fixture.chain.records();
    assert_eq!(record.previous_hash(), records[1].hash());
    assert!(fixture.chain.is_intact());
}
