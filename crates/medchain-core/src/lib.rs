//! # MedChain Core
//!
//! Pure primitives for MedChain: records, the hash chain, and canonical
//! serialization.
//!
//! This crate contains no I/O, no logging, no async. It is pure computation
//! over an in-memory chain of hash-linked records.
//!
//! ## Key Types
//!
//! - [`Record`] - One entry in the chain
//! - [`Chain`] - Ordered sequence of records linked by SHA-256 digests
//! - [`ChainIntegrity`] - Result of a linear integrity scan
//!
//! ## Canonicalization
//!
//! Every record hash is computed over a compact JSON object with a fixed key
//! order. See the [`canonical`] module.
//!
//! ## Usage
//!
//! ```rust
//! use medchain_core::Chain;
//!
//! let mut chain = Chain::new();
//! chain.append("P1", "blood pressure 120/80");
//! chain.append("P2", "glucose 90");
//! assert!(chain.is_intact());
//!
//! chain.tamper(0, "blood pressure 999/999").unwrap();
//! assert_eq!(chain.verify().first_broken(), Some(1));
//! ```

pub mod canonical;
pub mod chain;
pub mod error;
pub mod hasher;
pub mod integrity;
pub mod record;

pub use canonical::{canonical_bytes, record_digest, CanonicalFields};
pub use chain::{Chain, DEFAULT_TAMPER_MARKER};
pub use error::{ChainError, Result};
pub use hasher::{digest, is_hex_digest};
pub use integrity::{BreakReason, ChainIntegrity, RecordStatus};
pub use record::{Record, GENESIS_PREVIOUS_HASH};
