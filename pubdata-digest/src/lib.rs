//! # Pubdata Digests
//!
//! The rollup contract identifies each operation by the low 160 bits of the
//! Keccak-256 hash of its pubdata. This crate computes that identifier and
//! checks encoder output against digests produced by the circuit.
//!
//! ## Example
//!
//! ```rust
//! use pubdata_digest::{digest160, matches};
//! use pubdata_encoder::encode_deposit_op;
//! use pubdata_spec::LayoutConfig;
//!
//! let buffer = encode_deposit_op(&LayoutConfig::DEFAULT, 1, 1, 500_000_000_000).unwrap();
//! let digest = digest160(&buffer);
//! assert_eq!(digest.to_hex(), "0x31abb1e435c5b1e8a81939d7e5e07441ee681eeb");
//! assert!(matches(&buffer, &digest));
//! ```

pub mod digest;
pub mod conformance;

pub use digest::{digest160, digest160_bytes, keccak256, matches, verify};
pub use conformance::{reference_vectors, run_suite, GoldenVector};
