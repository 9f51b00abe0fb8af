//! # MedChain
//!
//! The unified API for MedChain - a tamper-evident chain of patient records
//! linked by SHA-256 hashes.
//!
//! ## Overview
//!
//! - **Records**: Each entry stores its own hash and its predecessor's hash
//! - **Chain**: Ordered, in-memory, owned by one [`Ledger`] per session
//! - **Tamper**: Rewrites one record in place; the break shows up downstream
//! - **Verify**: Linear scan reporting the first record whose link fails
//!
//! ## Usage
//!
//! ```rust
//! use medchain::{Ledger, LedgerConfig};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> medchain::Result<()> {
//! let ledger = Ledger::new(LedgerConfig::default());
//!
//! ledger.append("P1", "blood pressure 120/80").await?;
//! ledger.append("P2", "glucose 90").await?;
//! assert!(ledger.verify().await.is_intact());
//!
//! ledger.tamper(0, "blood pressure 999/999").await?;
//! assert_eq!(ledger.verify().await.first_broken(), Some(1));
//! # Ok(())
//! # }
//! ```
//!
//! ## Re-exports
//!
//! - `medchain::core` - Core primitives (Record, Chain, hashing)

pub mod config;
pub mod error;
pub mod ledger;
pub mod render;

pub use medchain_core as core;

pub use config::LedgerConfig;
pub use error::{LedgerError, Result};
pub use ledger::Ledger;

pub use medchain_core::{
    BreakReason, Chain, ChainIntegrity, Record, RecordStatus,
    DEFAULT_TAMPER_MARKER, GENESIS_PREVIOUS_HASH,
};
