//! Encoded operation bytes

use crate::error::Result;
use std::fmt;

/// Serialized form of one operation, produced once and then only read
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EncodedBuffer(Vec<u8>);

impl EncodedBuffer {
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Parse from hex, with or without a `0x` prefix
    pub fn from_hex(s: &str) -> Result<Self> {
        Ok(Self(hex::decode(s.trim_start_matches("0x"))?))
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(&self.0))
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.0
    }
}

impl fmt::Display for EncodedBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl AsRef<[u8]> for EncodedBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
