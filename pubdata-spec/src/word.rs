//! # Bounded-Width Unsigned Integers
//!
//! `BitWord` carries its bit width alongside its value. Containers wider than
//! a machine word (256-bit public keys, 264-bit transaction pubdata) are
//! represented the same way as 8-bit ones, and no operation truncates
//! silently: a value that does not fit its width is rejected at construction.

use crate::error::{PubdataError, Result};
use num_bigint::BigUint;
use num_traits::Zero;
use std::fmt;

/// Unsigned integer of an explicit bit width
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BitWord {
    width: u32,
    value: BigUint,
}

impl BitWord {
    /// All-zero word of the given width
    pub fn zero(width: u32) -> Self {
        Self {
            width,
            value: BigUint::zero(),
        }
    }

    /// Create a word, failing if `value` needs more than `width` bits
    pub fn new(value: BigUint, width: u32) -> Result<Self> {
        if !fits(&value, width) {
            return Err(width_violation(&value, width));
        }
        Ok(Self { width, value })
    }

    /// Interpret big-endian bytes; the width is `8 * bytes.len()`
    pub fn from_be_bytes(bytes: &[u8]) -> Self {
        Self {
            width: (bytes.len() * 8) as u32,
            value: BigUint::from_bytes_be(bytes),
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn value(&self) -> &BigUint {
        &self.value
    }

    pub fn into_value(self) -> BigUint {
        self.value
    }

    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// Bit at `offset` counted from the most-significant end (offset 0 is the top bit)
    pub fn bit_from_msb(&self, offset: u32) -> bool {
        offset < self.width && self.value.bit((self.width - 1 - offset) as u64)
    }

    /// Number of bytes in the serialized form
    pub fn byte_len(&self) -> usize {
        self.width.div_ceil(8) as usize
    }

    /// Serialize to exactly `byte_len()` bytes, most significant first
    pub fn to_be_bytes(&self) -> Vec<u8> {
        let len = self.byte_len();
        let mut out = vec![0u8; len];
        if self.value.is_zero() {
            return out;
        }
        let raw = self.value.to_bytes_be();
        out[len - raw.len()..].copy_from_slice(&raw);
        out
    }

    /// Combine with a value of the same width
    pub(crate) fn or_value(&self, other: &BigUint) -> Self {
        Self {
            width: self.width,
            value: &self.value | other,
        }
    }
}

impl fmt::Display for BitWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.width.div_ceil(4) as usize;
        write!(f, "0x{:0>digits$}", format!("{:x}", self.value))
    }
}

/// Check whether `value` can be represented in `width` bits
#[inline]
pub fn fits(value: &BigUint, width: u32) -> bool {
    value.bits() <= width as u64
}

pub(crate) fn width_violation(value: &BigUint, width: u32) -> PubdataError {
    PubdataError::WidthViolation {
        value: format!("{:#x}", value),
        width,
    }
}
