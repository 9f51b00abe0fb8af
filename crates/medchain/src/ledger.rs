//! The Ledger: the caller-facing handle around a [`Chain`].
//!
//! The Ledger is the boundary between collaborators (input capture, renderers)
//! and the core chain. It validates caller input, serializes writers, and logs
//! every mutation.

use medchain_core::{Chain, ChainIntegrity, Record, RecordStatus};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::config::LedgerConfig;
use crate::error::{LedgerError, Result};

/// A session-scoped, in-memory record chain.
///
/// Each write holds the chain lock across "read head hash, compute digest,
/// push", so concurrent appends never claim the same predecessor.
#[derive(Debug)]
pub struct Ledger {
    chain: Mutex<Chain>,
    config: LedgerConfig,
}

impl Ledger {
    /// Create an empty ledger.
    pub fn new(config: LedgerConfig) -> Self {
        Self::with_chain(Chain::new(), config)
    }

    /// Wrap an existing chain.
    pub fn with_chain(chain: Chain, config: LedgerConfig) -> Self {
        Self {
            chain: Mutex::new(chain),
            config,
        }
    }

    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Write Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Append a record for a patient.
    ///
    /// Both fields must be non-empty (after trimming, when configured).
    pub async fn append(&self, patient_id: &str, record_data: &str) -> Result<Record> {
        let patient_id = self.prepare("patient_id", patient_id)?;
        let record_data = self.prepare("record_data", record_data)?;

        let mut chain = self.chain.lock().await;
        let record = chain.append(patient_id, record_data).clone();

        debug!(
            index = record.index(),
            patient_id = record.patient_id(),
            hash = short(record.hash()),
            "appended record"
        );
        Ok(record)
    }

    /// Replace the payload of the record at `index` with arbitrary text.
    ///
    /// Only that record is rehashed; its successor keeps the stale link.
    pub async fn tamper(&self, index: i64, new_record_data: &str) -> Result<Record> {
        let mut chain = self.chain.lock().await;
        let position = self.position(index, &chain)?;
        let old_hash = chain.records()[position].hash().to_string();
        let record = chain.tamper(position, new_record_data)?.clone();
        log_tamper(position, &old_hash, &record);
        Ok(record)
    }

    /// Tamper by appending the configured marker to the existing payload.
    pub async fn tamper_default(&self, index: i64) -> Result<Record> {
        let mut chain = self.chain.lock().await;
        let position = self.position(index, &chain)?;
        let old_hash = chain.records()[position].hash().to_string();
        let record = chain
            .tamper_with_marker(position, &self.config.tamper_marker)?
            .clone();
        log_tamper(position, &old_hash, &record);
        Ok(record)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Query Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Clone every record in creation order.
    pub async fn snapshot(&self) -> Vec<Record> {
        self.chain.lock().await.records().to_vec()
    }

    /// Get a copy of the record at `index`.
    pub async fn get(&self, index: usize) -> Option<Record> {
        self.chain.lock().await.get(index).cloned()
    }

    pub async fn len(&self) -> usize {
        self.chain.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.chain.lock().await.is_empty()
    }

    /// The hash the next appended record will link to.
    pub async fn head_hash(&self) -> String {
        self.chain.lock().await.head_hash().to_string()
    }

    /// Scan the chain and log the first break, if any.
    pub async fn verify(&self) -> ChainIntegrity {
        let integrity = self.chain.lock().await.verify();
        if let ChainIntegrity::Broken {
            first_broken,
            reason,
        } = &integrity
        {
            info!(first_broken, ?reason, "chain integrity broken");
        }
        integrity
    }

    /// One status per record, for renderers.
    pub async fn record_statuses(&self) -> Vec<RecordStatus> {
        self.chain.lock().await.record_statuses()
    }

    /// Records paired with their integrity status, read under one lock.
    pub async fn view(&self) -> Vec<(Record, RecordStatus)> {
        let chain = self.chain.lock().await;
        chain
            .records()
            .iter()
            .cloned()
            .zip(chain.record_statuses())
            .collect()
    }

    /// Take the chain back out of the ledger.
    pub fn into_chain(self) -> Chain {
        self.chain.into_inner()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Boundary checks
    // ─────────────────────────────────────────────────────────────────────────

    fn prepare<'a>(&self, field: &'static str, value: &'a str) -> Result<&'a str> {
        let value = if self.config.trim_input {
            value.trim()
        } else {
            value
        };
        if value.trim().is_empty() {
            warn!(field, "rejected empty input");
            return Err(LedgerError::EmptyInput { field });
        }
        Ok(value)
    }

    fn position(&self, index: i64, chain: &Chain) -> Result<usize> {
        let len = chain.len();
        match usize::try_from(index) {
            Ok(position) if position < len => Ok(position),
            _ => {
                warn!(index, len, "rejected tamper index");
                Err(LedgerError::InvalidIndex { index, len })
            }
        }
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new(LedgerConfig::default())
    }
}

fn log_tamper(position: usize, old_hash: &str, record: &Record) {
    warn!(
        index = position,
        old_hash = short(old_hash),
        new_hash = short(record.hash()),
        "record tampered"
    );
}

/// First 16 hex characters of a hash, for log lines.
fn short(hash: &str) -> &str {
    hash.get(..16).unwrap_or(hash)
}
