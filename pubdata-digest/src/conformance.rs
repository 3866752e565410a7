//! # Circuit Conformance
//!
//! A golden vector pairs an operation with the digest the rollup circuit
//! computed for it. Checking a vector encodes the operation with the local
//! layout and requires the digests to agree exactly; any divergence means
//! the two sides would reject each other's proofs.

use crate::digest::{digest160, verify};
use pubdata_encoder::encode;
use pubdata_spec::{
    DepositOp, EncodedBuffer, LayoutConfig, Operation, OperationDigest, PublicKey, RegistryOp,
    Result,
};

/// An operation and the digest the circuit produced for it
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GoldenVector {
    pub name: String,
    pub operation: Operation,
    pub expected: OperationDigest,
    preimage: Option<EncodedBuffer>,
}

impl GoldenVector {
    pub fn new(name: impl Into<String>, operation: Operation, expected: OperationDigest) -> Self {
        Self {
            name: name.into(),
            operation,
            expected,
            preimage: None,
        }
    }

    /// Build from the pubdata bytes the circuit hashed
    pub fn from_preimage(name: impl Into<String>, operation: Operation, preimage_hex: &str) -> Result<Self> {
        let preimage = EncodedBuffer::from_hex(preimage_hex)?;
        Ok(Self {
            name: name.into(),
            operation,
            expected: digest160(&preimage),
            preimage: Some(preimage),
        })
    }

    /// Circuit pubdata, when the vector was built from it
    pub fn preimage(&self) -> Option<&EncodedBuffer> {
        self.preimage.as_ref()
    }

    /// Encode the operation under `config` and verify its digest
    pub fn check(&self, config: &LayoutConfig) -> Result<OperationDigest> {
        let buffer = encode(config, &self.operation)?;
        let digest = verify(&buffer, &self.expected)?;
        tracing::debug!("golden vector {} ok: {}", self.name, digest);
        Ok(digest)
    }
}

/// Check every vector, stopping at the first failure.
///
/// Returns the number of vectors checked.
pub fn run_suite(config: &LayoutConfig, vectors: &[GoldenVector]) -> Result<usize> {
    for vector in vectors {
        if let Err(err) = vector.check(config) {
            tracing::error!("golden vector {} failed: {}", vector.name, err);
            return Err(err);
        }
    }
    tracing::debug!("{} golden vectors passed under {}", vectors.len(), config);
    Ok(vectors.len())
}

/// Vectors produced by the circuit for the 4/4/3 layout
pub fn reference_vectors() -> Result<Vec<GoldenVector>> {
    let registry = |account_id: u32, key: &str| -> Result<Operation> {
        Ok(Operation::Registry(RegistryOp {
            account_id,
            public_key: PublicKey::from_hex(key)?,
        }))
    };

    Ok(vec![
        GoldenVector::from_preimage(
            "registry account 1",
            registry(1, "0x5d182c51bcfe99583d7075a7a0c10d96bef82b8a059c4bf8c5f6e7124cf2bba3")?,
            "0x91ba18348a3d7f991abc0eaee50583b0697d1fd451a039d21fa36fe748324fddc4",
        )?,
        GoldenVector::from_preimage(
            "registry account 2",
            registry(2, "0xe9b54eb2dbf0a14faafd109ea2a6a292b78276c8381f8ef984dddefeafb2deaf")?,
            "0x8997ad724ddb0f85f255bf087945654549ed416e131cf8719f21bb7b7ff54d7bf4",
        )?,
        GoldenVector::from_preimage(
            "registry account 5",
            registry(5, "0x3941e71d773f3c07f781c420e3395d290128298a0a88fe5bfa3830cce10c991d")?,
            "0x949c82e7b8eefc3ce0ef812304c79cba948014945150117fda5f1c0c33873099b8",
        )?,
        GoldenVector::from_preimage(
            "deposit account 1 token 1",
            Operation::Deposit(DepositOp {
                account_id: 1,
                token_id: 1,
                amount: 500_000_000_000,
            }),
            "0x111000452958b80000000000000000000000000000000000000000000000000000",
        )?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use pubdata_spec::PubdataError;

    #[test]
    fn test_reference_vectors_pass() {
        let vectors = reference_vectors().unwrap();
        assert_eq!(run_suite(&LayoutConfig::DEFAULT, &vectors).unwrap(), 4);
    }

    #[test]
    fn test_preimage_digest() {
        let vectors = reference_vectors().unwrap();
        assert_eq!(
            vectors[3].expected.to_hex(),
            "0x31abb1e435c5b1e8a81939d7e5e07441ee681eeb"
        );
        assert_eq!(vectors[3].preimage().unwrap().len(), 33);
    }

    #[test]
    fn test_suite_stops_at_first_failure() {
        let mut vectors = reference_vectors().unwrap();
        vectors[1].expected = OperationDigest::default();
        let err = run_suite(&LayoutConfig::DEFAULT, &vectors).unwrap_err();
        assert!(matches!(err, PubdataError::DigestMismatch { .. }));
    }

    #[test]
    fn test_other_layout_disagrees() {
        // the circuit vectors only hold for 4/4/3
        let config = LayoutConfig::new(5, 4, 3).unwrap();
        let vectors = reference_vectors().unwrap();
        assert!(vectors[0].check(&config).is_err());
    }

    #[test]
    fn test_raw_digest_vector() {
        let op = Operation::Deposit(DepositOp {
            account_id: 1,
            token_id: 1,
            amount: 500_000_000_000,
        });
        let expected = OperationDigest::from_hex("0x31abb1e435c5b1e8a81939d7e5e07441ee681eeb").unwrap();
        let vector = GoldenVector::new("deposit", op, expected);
        assert!(vector.preimage().is_none());
        assert_eq!(vector.check(&LayoutConfig::DEFAULT).unwrap(), expected);
    }
}
