//! Error types for MedChain Core.

use thiserror::Error;

/// Errors that can occur during chain operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainError {
    /// Tamper targeted a position that holds no record.
    #[error("invalid record index {index}: chain has {len} records")]
    InvalidIndex { index: usize, len: usize },
}

/// Result type for chain operations.
pub type Result<T> = std::result::Result<T, ChainError>;
