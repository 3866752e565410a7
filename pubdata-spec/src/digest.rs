//! 160-bit operation digest

use crate::error::{PubdataError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Digest width in bytes (low 20 bytes of a 256-bit hash)
pub const DIGEST_BYTES: usize = 20;

/// Truncated hash of an encoded operation.
///
/// Only ever compared for equality against circuit output; there is no way
/// back from a digest to the buffer it was computed over.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OperationDigest([u8; DIGEST_BYTES]);

impl OperationDigest {
    pub const fn new(bytes: [u8; DIGEST_BYTES]) -> Self {
        Self(bytes)
    }

    /// Take the low 20 bytes of a 32-byte hash
    pub fn from_hash(hash: &[u8; 32]) -> Self {
        let mut bytes = [0u8; DIGEST_BYTES];
        bytes.copy_from_slice(&hash[32 - DIGEST_BYTES..]);
        Self(bytes)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let bytes: [u8; DIGEST_BYTES] =
            bytes.try_into().map_err(|_| PubdataError::InvalidLength {
                expected: DIGEST_BYTES,
                found: bytes.len(),
            })?;
        Ok(Self(bytes))
    }

    /// Parse from hex, with or without a `0x` prefix
    pub fn from_hex(s: &str) -> Result<Self> {
        let raw = hex::decode(s.trim_start_matches("0x"))?;
        Self::from_slice(&raw)
    }

    pub fn as_bytes(&self) -> &[u8; DIGEST_BYTES] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}

impl fmt::Display for OperationDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for OperationDigest {
    type Err = PubdataError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl AsRef<[u8]> for OperationDigest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
