//! # Reversed-Bit, MSB-Anchored Containers
//!
//! The rollup circuit lays every field out least-significant bit first,
//! starting at a position counted from the most-significant end of the
//! transaction word. In integer terms: reverse the field's bits within its
//! container width, then place the reversed pattern so that it begins
//! `position` bits below the top of the accumulator.
//!
//! ```text
//! value 42 = 0b00101010, width 8, position 3, 256-bit accumulator
//!
//! reversed   = 0b01010100
//! top 16 bits: 000 01010100 00000  =  0x0A80
//! ```
//!
//! Pattern bits that would fall past the least-significant end of the
//! accumulator are discarded, which is what the circuit's right shift does.

use crate::error::{PubdataError, Result};
use crate::word::{fits, width_violation, BitWord};
use num_bigint::BigUint;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The container widths a field can be declared in
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContainerWidth {
    U8,
    U32,
    U256,
}

impl ContainerWidth {
    #[inline]
    pub const fn bits(self) -> u32 {
        match self {
            ContainerWidth::U8 => 8,
            ContainerWidth::U32 => 32,
            ContainerWidth::U256 => 256,
        }
    }
}

impl fmt::Display for ContainerWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "u{}", self.bits())
    }
}

/// Widest pattern that can be reversed: the largest container
pub const MAX_REVERSE_BITS: u32 = ContainerWidth::U256.bits();

/// Reverse the low `width` bits of `value`.
///
/// Bit `i` (from the least-significant side) moves to `width - 1 - i`.
/// `width` may not exceed [`MAX_REVERSE_BITS`].
pub fn reverse_bits(value: &BigUint, width: u32) -> Result<BigUint> {
    if width > MAX_REVERSE_BITS {
        return Err(PubdataError::ContainerTooNarrow {
            bits: width,
            container: MAX_REVERSE_BITS,
        });
    }
    if !fits(value, width) {
        return Err(width_violation(value, width));
    }
    Ok(reverse_fitting(value, width))
}

// `value` must fit in `width` bits
fn reverse_fitting(value: &BigUint, width: u32) -> BigUint {
    let mut out = BigUint::zero();
    for i in 0..value.bits() {
        if value.bit(i) {
            out.set_bit(width as u64 - 1 - i, true);
        }
    }
    out
}

/// OR `reverse_bits(value, width)` into `acc` so the pattern starts at
/// `position` bits below the accumulator's most-significant end.
pub fn insert_at(acc: &BitWord, value: &BigUint, width: u32, position: u32) -> Result<BitWord> {
    if position >= acc.width() {
        return Err(PubdataError::OutOfBounds {
            position,
            width,
            container: acc.width(),
        });
    }

    let pattern = reverse_bits(value, width)?;
    let shift = acc.width() as i64 - position as i64 - width as i64;
    let placed = if shift >= 0 {
        pattern << shift as usize
    } else {
        let dropped = (-shift) as u64;
        let lost = &pattern & low_mask(dropped);
        if !lost.is_zero() {
            tracing::debug!(
                "insert_at discards {} set bits of a {}-bit field at position {}",
                lost.count_ones(),
                width,
                position
            );
        }
        pattern >> dropped as usize
    };

    Ok(acc.or_value(&placed))
}

/// Read back the `width`-bit field placed at `position` and undo the reversal.
///
/// Inverse of [`insert_at`] for fields that lie entirely inside `acc`.
pub fn extract_at(acc: &BitWord, width: u32, position: u32) -> Result<BigUint> {
    if position.checked_add(width).map_or(true, |end| end > acc.width()) {
        return Err(PubdataError::OutOfBounds {
            position,
            width,
            container: acc.width(),
        });
    }

    let shift = (acc.width() - position - width) as usize;
    let window = (acc.value() >> shift) & low_mask(width as u64);
    reverse_bits(&window, width)
}

fn low_mask(bits: u64) -> BigUint {
    (BigUint::one() << bits as usize) - BigUint::one()
}

/// A value known to fit in a `W`-bit container
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BitContainer<const W: u32> {
    value: BigUint,
}

/// 8-bit container
pub type Bits8 = BitContainer<8>;

/// 32-bit container
pub type Bits32 = BitContainer<32>;

/// 256-bit container
pub type Bits256 = BitContainer<256>;

impl<const W: u32> BitContainer<W> {
    pub const WIDTH: u32 = W;

    pub fn new(value: impl Into<BigUint>) -> Result<Self> {
        let value = value.into();
        if !fits(&value, W) {
            return Err(width_violation(&value, W));
        }
        Ok(Self { value })
    }

    #[inline]
    pub fn value(&self) -> &BigUint {
        &self.value
    }

    pub fn reverse_bits(&self) -> Self {
        Self {
            value: reverse_fitting(&self.value, W),
        }
    }

    /// Place this container's reversed bits into `acc` at `position`
    pub fn insert_into(&self, acc: &BitWord, position: u32) -> Result<BitWord> {
        insert_at(acc, &self.value, W, position)
    }
}
