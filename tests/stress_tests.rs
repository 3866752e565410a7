//! Stress tests for the pubdata codec
//!
//! Many operations, every width the layout allows, and concurrent encoders.

use proptest::prelude::*;
use pubdata_decoder::decode;
use pubdata_digest::{digest160, reference_vectors, run_suite};
use pubdata_encoder::Encoder;
use pubdata_spec::{DepositOp, LayoutConfig, Operation, PublicKey, RegistryOp};
use std::collections::HashSet;

fn deposit(account_id: u32, token_id: u32, amount: u128) -> Operation {
    Operation::Deposit(DepositOp {
        account_id,
        token_id,
        amount,
    })
}

// ============================================================================
// Volume Tests
// ============================================================================

#[test]
fn test_10000_deposits_unique_digests() {
    let encoder = Encoder::default();
    let mut seen = HashSet::new();

    for i in 0..10_000u128 {
        let op = deposit((i % 16) as u32, (i % 8) as u32, i * 1_000_003);
        let buffer = encoder.encode(&op).unwrap();
        assert_eq!(buffer.len(), 33);
        assert!(seen.insert(digest160(&buffer)), "digest collision at {}", i);
    }
    assert_eq!(seen.len(), 10_000);
}

#[test]
fn test_repeated_suite_runs() {
    let vectors = reference_vectors().unwrap();
    for _ in 0..500 {
        assert_eq!(run_suite(&LayoutConfig::DEFAULT, &vectors).unwrap(), 4);
    }
}

// ============================================================================
// Configuration Sweep
// ============================================================================

#[test]
fn test_all_id_widths() {
    for bits in 1..=32u8 {
        let config = LayoutConfig::new(bits, bits, bits).unwrap();
        let encoder = Encoder::new(config).unwrap();
        let max_account = config.max_account_id() as u32;
        let max_token = config.max_token_id() as u32;

        let op = deposit(max_account, max_token, u128::MAX);
        let buffer = encoder.encode(&op).unwrap();
        assert_eq!(buffer.len(), config.tx_bytes as usize);
        assert_eq!(decode(&config, buffer.as_bytes()).unwrap(), op, "{} bits", bits);

        if bits < 32 {
            assert!(encoder.encode(&deposit(max_account + 1, 0, 0)).is_err());
        }
    }
}

// ============================================================================
// Concurrency
// ============================================================================

#[test]
fn test_concurrent_encoding_matches_serial() {
    let encoder = Encoder::default();
    let ops: Vec<Operation> = (0..256u32)
        .map(|i| deposit(i % 16, i % 8, i as u128 * 7))
        .collect();
    let serial: Vec<_> = ops.iter().map(|op| encoder.encode(op).unwrap()).collect();

    let parallel: Vec<_> = std::thread::scope(|s| {
        let handles: Vec<_> = ops
            .chunks(32)
            .map(|chunk| {
                s.spawn(move || {
                    chunk
                        .iter()
                        .map(|op| encoder.encode(op).unwrap())
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect()
    });

    assert_eq!(serial, parallel);
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #[test]
    fn test_deposit_survives_decode(
        account_id in 0u32..16,
        token_id in 0u32..8,
        amount in any::<u128>(),
    ) {
        let encoder = Encoder::default();
        let op = deposit(account_id, token_id, amount);
        let buffer = encoder.encode(&op).unwrap();
        prop_assert_eq!(decode(encoder.config(), buffer.as_bytes()).unwrap(), op);
    }

    #[test]
    fn test_registry_survives_decode(
        account_id in 0u32..16,
        mut bytes in any::<[u8; 32]>(),
    ) {
        // clear bit 254 of ay so the key is encodable
        bytes[31] &= 0xbf;
        let encoder = Encoder::default();
        let op = Operation::Registry(RegistryOp {
            account_id,
            public_key: PublicKey::from_bytes(bytes),
        });
        let buffer = encoder.encode(&op).unwrap();
        prop_assert_eq!(decode(encoder.config(), buffer.as_bytes()).unwrap(), op);
    }

    #[test]
    fn test_encoding_is_deterministic(
        account_id in 0u32..16,
        token_id in 0u32..8,
        amount in any::<u128>(),
    ) {
        let op = deposit(account_id, token_id, amount);
        let a = Encoder::default().encode(&op).unwrap();
        let b = Encoder::default().encode(&op).unwrap();
        prop_assert_eq!(digest160(&a), digest160(&b));
        prop_assert_eq!(a, b);
    }
}
