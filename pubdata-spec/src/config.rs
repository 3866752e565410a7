//! # Layout Configuration
//!
//! Field widths of the pubdata layout follow the circuit's tree depths: an
//! account id has `account_bits` bits, a token id `balance_bits` bits. The
//! circuit the reference vectors were produced with uses 4/4/3.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Current layout table version
pub const LAYOUT_VERSION: u16 = 1;

/// Operation tag width
pub const OP_TYPE_BITS: u32 = 3;

/// Public key sign width
pub const SIGN_BITS: u32 = 1;

/// Public key `ay` width (Baby Jubjub base field element)
pub const AY_BITS: u32 = 254;

/// Deposit amount width
pub const AMOUNT_BITS: u32 = 128;

/// Widest id field: ids are carried in 32-bit containers
pub const MAX_ID_BITS: u8 = 32;

/// Circuit parameterization the pubdata layout is derived from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Layout table version
    pub version: u16,
    /// Account tree depth (account id width)
    pub account_bits: u8,
    /// Order tree depth (order id width)
    pub order_bits: u8,
    /// Balance tree depth (token id width)
    pub balance_bits: u8,
    /// Bytes of pubdata per transaction
    pub tx_bytes: u16,
}

impl LayoutConfig {
    /// 4/4/3 parameterization, 33-byte transactions
    pub const DEFAULT: Self = Self {
        version: LAYOUT_VERSION,
        account_bits: 4,
        order_bits: 4,
        balance_bits: 3,
        tx_bytes: 33,
    };

    /// Create a configuration sized to the smallest transaction that holds
    /// every operation
    pub const fn new(account_bits: u8, order_bits: u8, balance_bits: u8) -> Result<Self, ConfigError> {
        if account_bits < 1 || account_bits > MAX_ID_BITS {
            return Err(ConfigError::InvalidAccountBits);
        }
        if order_bits < 1 || order_bits > MAX_ID_BITS {
            return Err(ConfigError::InvalidOrderBits);
        }
        if balance_bits < 1 || balance_bits > MAX_ID_BITS {
            return Err(ConfigError::InvalidBalanceBits);
        }

        let mut config = Self {
            version: LAYOUT_VERSION,
            account_bits,
            order_bits,
            balance_bits,
            tx_bytes: 0,
        };
        config.tx_bytes = config.min_tx_bytes();
        Ok(config)
    }

    /// Use a wider transaction than the minimum
    pub fn with_tx_bytes(self, tx_bytes: u16) -> Result<Self, ConfigError> {
        let config = Self { tx_bytes, ..self };
        config.validate()?;
        Ok(config)
    }

    /// Bits used by a registry operation
    #[inline]
    pub const fn registry_bits(&self) -> u32 {
        OP_TYPE_BITS + self.account_bits as u32 + SIGN_BITS + AY_BITS
    }

    /// Bits used by a deposit operation (two account slots, token, amount)
    #[inline]
    pub const fn deposit_bits(&self) -> u32 {
        OP_TYPE_BITS + 2 * self.account_bits as u32 + self.balance_bits as u32 + AMOUNT_BITS
    }

    /// Smallest transaction size holding every operation
    pub const fn min_tx_bytes(&self) -> u16 {
        let registry = self.registry_bits();
        let deposit = self.deposit_bits();
        let widest = if registry > deposit { registry } else { deposit };
        ((widest + 7) / 8) as u16
    }

    /// Accumulator width in bits
    #[inline]
    pub const fn tx_bits(&self) -> u32 {
        self.tx_bytes as u32 * 8
    }

    /// Largest encodable account id
    #[inline]
    pub const fn max_account_id(&self) -> u64 {
        max_unsigned(self.account_bits)
    }

    /// Largest encodable token id
    #[inline]
    pub const fn max_token_id(&self) -> u64 {
        max_unsigned(self.balance_bits)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version != LAYOUT_VERSION {
            return Err(ConfigError::UnsupportedVersion(self.version));
        }
        if self.account_bits < 1 || self.account_bits > MAX_ID_BITS {
            return Err(ConfigError::InvalidAccountBits);
        }
        if self.order_bits < 1 || self.order_bits > MAX_ID_BITS {
            return Err(ConfigError::InvalidOrderBits);
        }
        if self.balance_bits < 1 || self.balance_bits > MAX_ID_BITS {
            return Err(ConfigError::InvalidBalanceBits);
        }

        let required = self.min_tx_bytes();
        if self.tx_bytes < required {
            return Err(ConfigError::TxBytesTooSmall {
                required,
                found: self.tx_bytes,
            });
        }

        Ok(())
    }
}

// Saturates at u64::MAX for unvalidated widths of 64 bits or more
const fn max_unsigned(bits: u8) -> u64 {
    match 1u64.checked_shl(bits as u32) {
        Some(bound) => bound - 1,
        None => u64::MAX,
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for LayoutConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "LayoutConfig v{} {{ account: {} bits, order: {} bits, balance: {} bits, tx: {} bytes }}",
            self.version, self.account_bits, self.order_bits, self.balance_bits, self.tx_bytes,
        )
    }
}

/// Configuration error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Layout table version is not supported by this codec
    UnsupportedVersion(u16),
    /// Account bits must be in range [1, 32]
    InvalidAccountBits,
    /// Order bits must be in range [1, 32]
    InvalidOrderBits,
    /// Balance bits must be in range [1, 32]
    InvalidBalanceBits,
    /// Transaction too small for the widest operation
    TxBytesTooSmall { required: u16, found: u16 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnsupportedVersion(v) => {
                write!(f, "unsupported layout version {} (expected {})", v, LAYOUT_VERSION)
            }
            ConfigError::InvalidAccountBits => {
                write!(f, "account_bits must be in range [1, 32]")
            }
            ConfigError::InvalidOrderBits => {
                write!(f, "order_bits must be in range [1, 32]")
            }
            ConfigError::InvalidBalanceBits => {
                write!(f, "balance_bits must be in range [1, 32]")
            }
            ConfigError::TxBytesTooSmall { required, found } => {
                write!(f, "tx_bytes must be at least {}, found {}", required, found)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
