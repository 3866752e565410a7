//! Decoder errors

use pubdata_spec::PubdataError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecoderError {
    #[error(transparent)]
    Pubdata(#[from] PubdataError),

    #[error("Unknown operation type: {0}")]
    UnknownOpType(u8),

    #[error("Non-canonical pubdata: bit {offset} lies outside every field but is set")]
    NonCanonical { offset: u32 },

    #[error("Account mismatch: deposit credits {dest_account_id} but names {account_id}")]
    AccountMismatch { account_id: u32, dest_account_id: u32 },
}

pub type Result<T> = std::result::Result<T, DecoderError>;
