//! # Rollup Operation Records
//!
//! Typed inputs of the operation encoders. Each record is a plain value; the
//! bit layout it is serialized with lives in [`crate::layout`].

use crate::error::{PubdataError, Result};
use crate::word::{fits, width_violation};
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Operation tag carried in the first three bits of every transaction
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum OpType {
    Deposit = 0,
    Registry = 1,
}

impl OpType {
    #[inline]
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    pub const fn from_u8(tag: u8) -> Option<Self> {
        match tag {
            0 => Some(OpType::Deposit),
            1 => Some(OpType::Registry),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            OpType::Deposit => "deposit",
            OpType::Registry => "registry",
        }
    }
}

impl fmt::Display for OpType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Compressed Baby Jubjub public key (32 bytes).
///
/// Little-endian `ay`, with the sign of `ax` stored in the most significant
/// bit of the last byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PublicKey([u8; 32]);

impl PublicKey {
    pub const SIGN_MASK: u8 = 0x80;

    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Parse from hex, with or without a `0x` prefix
    pub fn from_hex(s: &str) -> Result<Self> {
        let raw = hex::decode(s.trim_start_matches("0x"))?;
        let bytes: [u8; 32] = raw
            .as_slice()
            .try_into()
            .map_err(|_| PubdataError::InvalidLength {
                expected: 32,
                found: raw.len(),
            })?;
        Ok(Self(bytes))
    }

    /// Rebuild a compressed key from its sign bit and `ay`
    pub fn from_parts(sign: bool, ay: &BigUint) -> Result<Self> {
        if !fits(ay, 255) {
            return Err(width_violation(ay, 255));
        }
        let mut bytes = [0u8; 32];
        let le = ay.to_bytes_le();
        bytes[..le.len()].copy_from_slice(&le);
        if sign {
            bytes[31] |= Self::SIGN_MASK;
        }
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Sign of the `x` coordinate
    pub fn sign(&self) -> bool {
        self.0[31] & Self::SIGN_MASK != 0
    }

    /// The `y` coordinate, sign bit cleared
    pub fn ay(&self) -> BigUint {
        let mut bytes = self.0;
        bytes[31] &= !Self::SIGN_MASK;
        BigUint::from_bytes_le(&bytes)
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

/// Bind an account slot to a public key
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RegistryOp {
    pub account_id: u32,
    pub public_key: PublicKey,
}

/// Credit a token balance to an account slot
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DepositOp {
    pub account_id: u32,
    pub token_id: u32,
    pub amount: u128,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    Registry(RegistryOp),
    Deposit(DepositOp),
}

impl Operation {
    pub fn op_type(&self) -> OpType {
        match self {
            Operation::Registry(_) => OpType::Registry,
            Operation::Deposit(_) => OpType::Deposit,
        }
    }

    pub fn account_id(&self) -> u32 {
        match self {
            Operation::Registry(op) => op.account_id,
            Operation::Deposit(op) => op.account_id,
        }
    }
}

impl From<RegistryOp> for Operation {
    fn from(op: RegistryOp) -> Self {
        Operation::Registry(op)
    }
}

impl From<DepositOp> for Operation {
    fn from(op: DepositOp) -> Self {
        Operation::Deposit(op)
    }
}
