//! # Pubdata Decoder
//!
//! Recover typed rollup operations from their canonical pubdata bytes.
//! Decoding is strict: the byte length must equal the configured transaction
//! size, the tag must name a known operation, and padding bits must be zero,
//! so every accepted buffer re-encodes to itself.
//!
//! ## Example
//!
//! ```rust
//! use pubdata_decoder::{decode, format};
//! use pubdata_spec::LayoutConfig;
//!
//! let mut bytes = vec![0u8; 33];
//! bytes[0] = 0b0001_0001;
//! bytes[1] = 0b0001_0000;
//!
//! let op = decode(&LayoutConfig::DEFAULT, &bytes).unwrap();
//! assert_eq!(format(&op), "deposit account=1 token=1 amount=0");
//! ```

pub mod error;
pub mod decoder;
pub mod formatter;

pub use error::{DecoderError, Result};
pub use decoder::decode;
pub use formatter::format;
