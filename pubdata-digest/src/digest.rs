//! Keccak-256 digests of encoded operations

use pubdata_spec::{EncodedBuffer, OperationDigest, PubdataError, Result};
use sha3::{Digest, Keccak256};

/// Ethereum Keccak-256 (not NIST SHA3-256)
pub fn keccak256(bytes: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(bytes);

    let mut out = [0u8; 32];
    out.copy_from_slice(&hasher.finalize());
    out
}

/// Low 160 bits of the Keccak-256 hash of `bytes`
pub fn digest160_bytes(bytes: &[u8]) -> OperationDigest {
    OperationDigest::from_hash(&keccak256(bytes))
}

/// Low 160 bits of the Keccak-256 hash of an encoded operation
pub fn digest160(buffer: &EncodedBuffer) -> OperationDigest {
    digest160_bytes(buffer.as_bytes())
}

/// Whether `buffer` hashes to `expected`
pub fn matches(buffer: &EncodedBuffer, expected: &OperationDigest) -> bool {
    digest160(buffer) == *expected
}

/// Like [`matches`], but a divergence is an error the caller must not ignore
pub fn verify(buffer: &EncodedBuffer, expected: &OperationDigest) -> Result<OperationDigest> {
    let computed = digest160(buffer);
    if computed != *expected {
        tracing::error!(
            "pubdata digest mismatch: expected {}, computed {} over {}",
            expected,
            computed,
            buffer
        );
        return Err(PubdataError::DigestMismatch {
            expected: *expected,
            computed,
        });
    }
    Ok(computed)
}
