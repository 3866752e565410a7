//! Operation encoders
//!
//! Map typed operation records to the canonical pubdata bytes the circuit
//! hashes. The accumulator is `config.tx_bits()` wide and serialized
//! big-endian.

use crate::packer::Packer;
use pubdata_spec::layout::{ACCOUNT_ID, AMOUNT, AY, DEST_ACCOUNT_ID, OP_TYPE, SIGN, TOKEN_ID};
use pubdata_spec::{
    DepositOp, EncodedBuffer, FieldSlot, LayoutConfig, OpLayout, OpType, Operation, PubdataError, PublicKey,
    RegistryOp, Result,
};
use num_bigint::BigUint;

/// Encode a registry operation: bind `account_id` to `public_key`
pub fn encode_registry_op(
    config: &LayoutConfig,
    account_id: u32,
    public_key: &PublicKey,
) -> Result<EncodedBuffer> {
    config.validate()?;
    let layout = config.registry_layout();

    let mut packer = Packer::new(layout.width());
    packer
        .push(&slot(&layout, OP_TYPE)?.field(OpType::Registry.to_u8()))?
        .push(&slot(&layout, ACCOUNT_ID)?.field(account_id))?
        .push(&slot(&layout, SIGN)?.field(public_key.sign() as u8))?
        .push(&slot(&layout, AY)?.field(public_key.ay()))?;

    let buffer = EncodedBuffer::from_bytes(packer.finish().to_be_bytes());
    tracing::debug!(
        "encoded registry op: account={} pubkey={} -> {} bytes",
        account_id,
        public_key,
        buffer.len()
    );
    Ok(buffer)
}

/// Encode a deposit operation: credit `amount` of `token_id` to `account_id`
pub fn encode_deposit_op(
    config: &LayoutConfig,
    account_id: u32,
    token_id: u32,
    amount: u128,
) -> Result<EncodedBuffer> {
    config.validate()?;
    let layout = config.deposit_layout();

    let mut packer = Packer::new(layout.width());
    packer
        .push(&slot(&layout, OP_TYPE)?.field(OpType::Deposit.to_u8()))?
        .push(&slot(&layout, ACCOUNT_ID)?.field(account_id))?
        .push(&slot(&layout, DEST_ACCOUNT_ID)?.field(account_id))?
        .push(&slot(&layout, TOKEN_ID)?.field(token_id))?
        .push(&slot(&layout, AMOUNT)?.field(BigUint::from(amount)))?;

    let buffer = EncodedBuffer::from_bytes(packer.finish().to_be_bytes());
    tracing::debug!(
        "encoded deposit op: account={} token={} amount={} -> {} bytes",
        account_id,
        token_id,
        amount,
        buffer.len()
    );
    Ok(buffer)
}

/// Encode any operation
pub fn encode(config: &LayoutConfig, op: &Operation) -> Result<EncodedBuffer> {
    match op {
        Operation::Registry(RegistryOp {
            account_id,
            public_key,
        }) => encode_registry_op(config, *account_id, public_key),
        Operation::Deposit(DepositOp {
            account_id,
            token_id,
            amount,
        }) => encode_deposit_op(config, *account_id, *token_id, *amount),
    }
}

/// Encoder bound to one validated configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Encoder {
    config: LayoutConfig,
}

impl Encoder {
    pub fn new(config: LayoutConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    #[inline]
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn registry(&self, op: &RegistryOp) -> Result<EncodedBuffer> {
        encode_registry_op(&self.config, op.account_id, &op.public_key)
    }

    pub fn deposit(&self, op: &DepositOp) -> Result<EncodedBuffer> {
        encode_deposit_op(&self.config, op.account_id, op.token_id, op.amount)
    }

    pub fn encode(&self, op: &Operation) -> Result<EncodedBuffer> {
        encode(&self.config, op)
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Self {
            config: LayoutConfig::DEFAULT,
        }
    }
}

fn slot<'a>(layout: &'a OpLayout, name: &str) -> Result<&'a FieldSlot> {
    layout
        .slot(name)
        .ok_or_else(|| PubdataError::MissingSlot(name.to_string()))
}
