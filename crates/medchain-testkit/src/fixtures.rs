//! Test fixtures and helpers.
//!
//! Chains built here use fixed timestamps so hashes are reproducible.

use medchain_core::{Chain, Record};

/// Timestamp of the first fixture record (2023-11-14T22:13:20Z).
pub const BASE_TIMESTAMP: i64 = 1_700_000_000_000;

/// A chain with a deterministic clock.
///
/// Every write advances the clock by one second.
#[derive(Debug, Clone)]
pub struct ChainFixture {
    pub chain: Chain,
    clock: i64,
}

impl ChainFixture {
    /// Create an empty fixture.
    pub fn new() -> Self {
        Self {
            chain: Chain::new(),
            clock: BASE_TIMESTAMP,
        }
    }

    /// The two-record chain from the end-to-end scenario.
    ///
    /// `P1 / blood pressure 120/80` then `P2 / glucose 90`.
    pub fn scenario() -> Self {
        let mut fixture = Self::new();
        fixture.append("P1", "blood pressure 120/80");
        fixture.append("P2", "glucose 90");
        fixture
    }

    /// A chain of `n` records with generated patients and payloads.
    pub fn with_records(n: usize) -> Self {
        let mut fixture = Self::new();
        for i in 0..n {
            fixture.append(&format!("P{}", i), &format!("observation {}", i));
        }
        fixture
    }

    /// Timestamp the next write will use.
    pub fn now(&self) -> i64 {
        self.clock
    }

    /// Append at the fixture clock.
    pub fn append(&mut self, patient_id: &str, record_data: &str) -> Record {
        let ts = self.tick();
        self.chain.append_at(patient_id, record_data, ts).clone()
    }

    /// Tamper at the fixture clock.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn tamper(&mut self, index: usize, new_record_data: &str) -> Record {
        let ts = self.tick();
        self.chain
            .tamper_at(index, new_record_data, ts)
            .expect("fixture tamper index in range")
            .clone()
    }

    fn tick(&mut self) -> i64 {
        let now = self.clock;
        self.clock += 1_000;
        now
    }
}

impl Default for ChainFixture {
    fn default() -> Self {
        Self::new()
    }
}
