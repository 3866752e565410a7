//! Rollup Pubdata Encoder
//!
//! Pack operation records into the circuit's reversed-bit transaction word.
//!
//! ## Example
//!
//! ```rust
//! use pubdata_encoder::encode_deposit_op;
//! use pubdata_spec::LayoutConfig;
//!
//! let buf = encode_deposit_op(&LayoutConfig::DEFAULT, 1, 1, 500_000_000_000).unwrap();
//! assert_eq!(buf.len(), 33);
//! ```

pub mod packer;
pub mod encoder;

pub use packer::{pack, Packer};
pub use encoder::{encode, encode_deposit_op, encode_registry_op, Encoder};
pub use pubdata_spec::{PubdataError, Result};
