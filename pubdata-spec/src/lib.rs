//! # Rollup Pubdata Types
//!
//! Core types for the bit-exact pubdata codec shared by the rollup circuit
//! and the on-chain verifier.
//!
//! ## Key Features
//! - Bounded-width integers (`BitWord`) for containers wider than 64 bits
//! - Reversed-bit, MSB-anchored field placement (`bits`)
//! - Versioned layout table derived from the circuit's tree depths
//! - Registry and deposit operation records
//! - 160-bit operation digests
//!
//! ## Example
//!
//! ```rust
//! use pubdata_spec::{insert_at, BitWord};
//! use num_bigint::BigUint;
//!
//! let acc = BitWord::zero(256);
//! let acc = insert_at(&acc, &BigUint::from(42u32), 8, 3).unwrap();
//! assert_eq!(&acc.to_be_bytes()[..2], &[0x0A, 0x80]);
//! ```

pub mod bits;
pub mod buffer;
pub mod config;
pub mod digest;
pub mod error;
pub mod field;
pub mod layout;
pub mod ops;
pub mod word;

pub use bits::{
    extract_at, insert_at, reverse_bits, BitContainer, Bits256, Bits32, Bits8, ContainerWidth,
    MAX_REVERSE_BITS,
};
pub use buffer::EncodedBuffer;
pub use config::{ConfigError, LayoutConfig, LAYOUT_VERSION};
pub use digest::{OperationDigest, DIGEST_BYTES};
pub use error::{ErrorKind, PubdataError, Result};
pub use field::Field;
pub use layout::{FieldSlot, OpLayout};
pub use ops::{DepositOp, OpType, Operation, PublicKey, RegistryOp};
pub use word::BitWord;
