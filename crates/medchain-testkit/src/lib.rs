//! # MedChain Testkit
//!
//! Testing utilities for MedChain.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Pinned canonical encodings and digests for cross-implementation checks
//! - **Generators**: Proptest strategies for property-based testing
//! - **Fixtures**: Deterministic chains for setting up test scenarios
//!
//! ## Golden Vectors
//!
//! ```rust
//! use medchain_testkit::vectors::{all_vectors, verify_all_vectors};
//!
//! assert!(!all_vectors().is_empty());
//! for (name, matches, _digest) in verify_all_vectors() {
//!     assert!(matches, "vector {} drifted", name);
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use medchain_testkit::generators::{ChainOp, chain_from_ops};
//!
//! proptest! {
//!     #[test]
//!     fn replay_is_deterministic(ops in prop::collection::vec(any::<ChainOp>(), 0..20)) {
//!         prop_assert_eq!(chain_from_ops(&ops).records(), chain_from_ops(&ops).records());
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use medchain_testkit::fixtures::ChainFixture;
//!
//! let fixture = ChainFixture::scenario();
//! assert_eq!(fixture.chain.len(), 2);
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{ChainFixture, BASE_TIMESTAMP};
pub use generators::{chain_from_ops, ChainOp};
pub use vectors::{all_vectors, verify_all_vectors, GoldenVector};
