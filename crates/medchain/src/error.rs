//! Error types for the Ledger.

use medchain_core::ChainError;
use thiserror::Error;

/// Errors that can occur during Ledger operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Tamper index does not name an existing record.
    #[error("invalid record index {index}: chain has {len} records")]
    InvalidIndex { index: i64, len: usize },

    /// Caller-supplied field is empty after trimming.
    #[error("{field} must not be empty")]
    EmptyInput { field: &'static str },

    /// Configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<ChainError> for LedgerError {
    fn from(e: ChainError) -> Self {
        match e {
            ChainError::InvalidIndex { index, len } => LedgerError::InvalidIndex {
                index: i64::try_from(index).unwrap_or(i64::MAX),
                len,
            },
        }
    }
}

/// Result type for Ledger operations.
pub type Result<T> = std::result::Result<T, LedgerError>;
