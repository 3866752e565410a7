//! Pubdata decoder

use crate::error::{DecoderError, Result};
use num_bigint::BigUint;
use num_traits::ToPrimitive;
use pubdata_spec::config::OP_TYPE_BITS;
use pubdata_spec::layout::{ACCOUNT_ID, AMOUNT, AY, DEST_ACCOUNT_ID, SIGN, TOKEN_ID};
use pubdata_spec::{
    extract_at, BitWord, DepositOp, LayoutConfig, OpLayout, OpType, Operation, PubdataError,
    PublicKey, RegistryOp,
};

/// Decode one transaction's pubdata back into an operation
pub fn decode(config: &LayoutConfig, bytes: &[u8]) -> Result<Operation> {
    config.validate().map_err(PubdataError::from)?;

    let expected = config.tx_bytes as usize;
    if bytes.len() != expected {
        return Err(PubdataError::InvalidLength {
            expected,
            found: bytes.len(),
        }
        .into());
    }

    let acc = BitWord::from_be_bytes(bytes);
    let tag = to_u32(&extract_at(&acc, OP_TYPE_BITS, 0)?)? as u8;
    let op_type = OpType::from_u8(tag).ok_or(DecoderError::UnknownOpType(tag))?;

    let layout = config.layout_for(op_type);
    check_padding(&acc, &layout)?;

    let op = match op_type {
        OpType::Registry => decode_registry(&acc, &layout)?,
        OpType::Deposit => decode_deposit(&acc, &layout)?,
    };
    tracing::debug!("decoded {} op for account {}", op_type, op.account_id());
    Ok(op)
}

fn decode_registry(acc: &BitWord, layout: &OpLayout) -> Result<Operation> {
    let account_id = to_u32(&read(acc, layout, ACCOUNT_ID)?)?;
    let sign = read(acc, layout, SIGN)? == BigUint::from(1u8);
    let ay = read(acc, layout, AY)?;

    Ok(Operation::Registry(RegistryOp {
        account_id,
        public_key: PublicKey::from_parts(sign, &ay)?,
    }))
}

fn decode_deposit(acc: &BitWord, layout: &OpLayout) -> Result<Operation> {
    let account_id = to_u32(&read(acc, layout, ACCOUNT_ID)?)?;
    let dest_account_id = to_u32(&read(acc, layout, DEST_ACCOUNT_ID)?)?;
    if account_id != dest_account_id {
        return Err(DecoderError::AccountMismatch {
            account_id,
            dest_account_id,
        });
    }

    let token_id = to_u32(&read(acc, layout, TOKEN_ID)?)?;
    let amount = read(acc, layout, AMOUNT)?;
    let amount = amount.to_u128().ok_or_else(|| PubdataError::WidthViolation {
        value: format!("{:#x}", amount),
        width: 128,
    })?;

    Ok(Operation::Deposit(DepositOp {
        account_id,
        token_id,
        amount,
    }))
}

fn read(acc: &BitWord, layout: &OpLayout, name: &str) -> Result<BigUint> {
    let slot = layout
        .slot(name)
        .ok_or_else(|| PubdataError::MissingSlot(name.to_string()))?;
    Ok(extract_at(acc, slot.bits, slot.position)?)
}

// Every bit outside the layout's slots must be zero
fn check_padding(acc: &BitWord, layout: &OpLayout) -> Result<()> {
    match (0..acc.width()).find(|&offset| acc.bit_from_msb(offset) && !layout.covers(offset)) {
        Some(offset) => Err(DecoderError::NonCanonical { offset }),
        None => Ok(()),
    }
}

fn to_u32(value: &BigUint) -> Result<u32> {
    value.to_u32().ok_or_else(|| {
        PubdataError::WidthViolation {
            value: format!("{:#x}", value),
            width: 32,
        }
        .into()
    })
}
