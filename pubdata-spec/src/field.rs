//! Field descriptors for the bit-field packer

use crate::bits::ContainerWidth;
use crate::error::{PubdataError, Result};
use crate::word::{fits, width_violation};
use num_bigint::BigUint;
use std::ops::Range;

/// A value to be placed into an accumulator.
///
/// The value is reversed within `container` bits, so only the top `bits`
/// positions of the container carry data. `bits` defaults to the full
/// container width.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    pub value: BigUint,
    pub container: ContainerWidth,
    pub bits: u32,
    pub position: u32,
}

impl Field {
    /// Field occupying its whole container
    pub fn new(value: impl Into<BigUint>, container: ContainerWidth, position: u32) -> Self {
        Self {
            value: value.into(),
            container,
            bits: container.bits(),
            position,
        }
    }

    /// Field with `bits` significant bits inside a wider container
    pub fn with_bits(
        value: impl Into<BigUint>,
        container: ContainerWidth,
        bits: u32,
        position: u32,
    ) -> Self {
        Self {
            value: value.into(),
            container,
            bits,
            position,
        }
    }

    /// Bit positions (from the most-significant end) carrying this field's data
    pub fn span(&self) -> Range<u32> {
        self.position..self.position.saturating_add(self.bits)
    }

    /// Check the field against an accumulator of `acc_width` bits
    pub fn validate(&self, acc_width: u32) -> Result<()> {
        if self.bits > self.container.bits() {
            return Err(PubdataError::ContainerTooNarrow {
                bits: self.bits,
                container: self.container.bits(),
            });
        }
        if !fits(&self.value, self.bits) {
            return Err(width_violation(&self.value, self.bits));
        }
        if self.position.checked_add(self.bits).map_or(true, |end| end > acc_width) {
            return Err(PubdataError::OutOfBounds {
                position: self.position,
                width: self.bits,
                container: acc_width,
            });
        }
        Ok(())
    }

    pub fn overlaps(&self, other: &Field) -> bool {
        let (a, b) = (self.span(), other.span());
        a.start < b.end && b.start < a.end
    }
}
