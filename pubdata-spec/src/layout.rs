//! # Operation Layouts
//!
//! Where each field of an operation sits inside the transaction word.
//! Positions count from the most-significant bit; fields are packed back to
//! back in declaration order, and every field is written least-significant
//! bit first.
//!
//! ```text
//! Registry: [op_type:3][account_id:A][sign:1][ay:254]
//! Deposit:  [op_type:3][account_id:A][dest_account_id:A][token_id:B][amount:128]
//! ```
//!
//! `A` is `account_bits` and `B` is `balance_bits`. Deposits share the
//! two-account payload shape of transfers, with both slots holding the
//! credited account.

use crate::bits::ContainerWidth;
use crate::config::{LayoutConfig, AMOUNT_BITS, AY_BITS, OP_TYPE_BITS, SIGN_BITS};
use crate::field::Field;
use crate::ops::OpType;
use num_bigint::BigUint;

pub const OP_TYPE: &str = "op_type";
pub const ACCOUNT_ID: &str = "account_id";
pub const DEST_ACCOUNT_ID: &str = "dest_account_id";
pub const TOKEN_ID: &str = "token_id";
pub const AMOUNT: &str = "amount";
pub const SIGN: &str = "sign";
pub const AY: &str = "ay";

/// A named position in an operation layout
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSlot {
    pub name: &'static str,
    pub container: ContainerWidth,
    pub bits: u32,
    pub position: u32,
}

impl FieldSlot {
    /// Fill this slot with a value
    pub fn field(&self, value: impl Into<BigUint>) -> Field {
        Field::with_bits(value, self.container, self.bits, self.position)
    }

    #[inline]
    pub fn end(&self) -> u32 {
        self.position + self.bits
    }
}

/// Ordered field slots of one operation type
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OpLayout {
    op_type: OpType,
    width: u32,
    slots: Vec<FieldSlot>,
}

impl OpLayout {
    fn sequential(op_type: OpType, width: u32, fields: &[(&'static str, ContainerWidth, u32)]) -> Self {
        let mut position = 0;
        let slots = fields
            .iter()
            .map(|&(name, container, bits)| {
                let slot = FieldSlot {
                    name,
                    container,
                    bits,
                    position,
                };
                position += bits;
                slot
            })
            .collect();

        Self {
            op_type,
            width,
            slots,
        }
    }

    #[inline]
    pub fn op_type(&self) -> OpType {
        self.op_type
    }

    /// Accumulator width in bits
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn slots(&self) -> &[FieldSlot] {
        &self.slots
    }

    pub fn slot(&self, name: &str) -> Option<&FieldSlot> {
        self.slots.iter().find(|s| s.name == name)
    }

    /// Bits covered by slots; everything after is zero padding
    pub fn used_bits(&self) -> u32 {
        self.slots.iter().map(FieldSlot::end).max().unwrap_or(0)
    }

    /// Whether bit `offset` (from the most-significant end) belongs to a slot
    pub fn covers(&self, offset: u32) -> bool {
        self.slots
            .iter()
            .any(|s| s.position <= offset && offset < s.end())
    }
}

impl LayoutConfig {
    pub fn registry_layout(&self) -> OpLayout {
        OpLayout::sequential(
            OpType::Registry,
            self.tx_bits(),
            &[
                (OP_TYPE, ContainerWidth::U8, OP_TYPE_BITS),
                (ACCOUNT_ID, ContainerWidth::U32, self.account_bits as u32),
                (SIGN, ContainerWidth::U8, SIGN_BITS),
                (AY, ContainerWidth::U256, AY_BITS),
            ],
        )
    }

    pub fn deposit_layout(&self) -> OpLayout {
        OpLayout::sequential(
            OpType::Deposit,
            self.tx_bits(),
            &[
                (OP_TYPE, ContainerWidth::U8, OP_TYPE_BITS),
                (ACCOUNT_ID, ContainerWidth::U32, self.account_bits as u32),
                (DEST_ACCOUNT_ID, ContainerWidth::U32, self.account_bits as u32),
                (TOKEN_ID, ContainerWidth::U32, self.balance_bits as u32),
                (AMOUNT, ContainerWidth::U256, AMOUNT_BITS),
            ],
        )
    }

    pub fn layout_for(&self, op_type: OpType) -> OpLayout {
        match op_type {
            OpType::Registry => self.registry_layout(),
            OpType::Deposit => self.deposit_layout(),
        }
    }
}
