//! Bit-field packer
//!
//! Builds an accumulator by inserting fields one after another. Fields may
//! not share significant bits: an overlap is a broken layout, not an OR.

use pubdata_spec::{insert_at, BitWord, Field, PubdataError, Result};
use std::ops::Range;

/// Incremental packer over a fixed-width accumulator
#[derive(Debug, Clone)]
pub struct Packer {
    acc: BitWord,
    spans: Vec<Range<u32>>,
}

impl Packer {
    pub fn new(width: u32) -> Self {
        Self {
            acc: BitWord::zero(width),
            spans: Vec::new(),
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.acc.width()
    }

    /// Validate and insert one field
    pub fn push(&mut self, field: &Field) -> Result<&mut Self> {
        field.validate(self.acc.width())?;

        let span = field.span();
        if let Some(other) = self
            .spans
            .iter()
            .find(|s| span.start < s.end && s.start < span.end)
        {
            return Err(PubdataError::FieldOverlap {
                start: span.start,
                end: span.end,
                other_start: other.start,
                other_end: other.end,
            });
        }

        self.acc = insert_at(&self.acc, &field.value, field.container.bits(), field.position)?;
        tracing::trace!(
            "packed {}-bit field into {} at bits [{}, {})",
            field.bits,
            field.container,
            span.start,
            span.end
        );
        self.spans.push(span);
        Ok(self)
    }

    pub fn finish(self) -> BitWord {
        self.acc
    }
}

/// Pack `fields` in order into a zeroed accumulator of `width` bits
pub fn pack(width: u32, fields: &[Field]) -> Result<BitWord> {
    let mut packer = Packer::new(width);
    for field in fields {
        packer.push(field)?;
    }
    Ok(packer.finish())
}
