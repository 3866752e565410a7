//! Encoder behaviour on values and layouts it must refuse

use num_bigint::BigUint;
use pubdata_encoder::{encode, encode_deposit_op, encode_registry_op, pack, Encoder};
use pubdata_spec::{
    ConfigError, ContainerWidth, DepositOp, ErrorKind, Field, LayoutConfig, Operation,
    PubdataError, PublicKey, RegistryOp,
};

// ============================================================================
// Width Violations
// ============================================================================

#[test]
fn test_account_id_boundaries() {
    let config = LayoutConfig::DEFAULT;
    assert!(encode_deposit_op(&config, 15, 0, 0).is_ok());

    let err = encode_deposit_op(&config, 16, 0, 0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Width);
    assert_eq!(err.to_string(), "Width violation: 0x10 does not fit in 4 bits");
}

#[test]
fn test_registry_account_too_wide() {
    let key = PublicKey::from_bytes([0u8; 32]);
    let err = encode_registry_op(&LayoutConfig::DEFAULT, u32::MAX, &key).unwrap_err();
    assert!(matches!(err, PubdataError::WidthViolation { width: 4, .. }));
}

#[test]
fn test_public_key_outside_field() {
    // bit 254 of ay set: not a Baby Jubjub coordinate
    let mut bytes = [0u8; 32];
    bytes[31] = 0x40;
    let key = PublicKey::from_bytes(bytes);
    let err = encode_registry_op(&LayoutConfig::DEFAULT, 1, &key).unwrap_err();
    assert!(matches!(err, PubdataError::WidthViolation { width: 254, .. }));
}

#[test]
fn test_sign_bit_alone_is_fine() {
    let mut bytes = [0u8; 32];
    bytes[31] = 0x80;
    let key = PublicKey::from_bytes(bytes);
    let buf = encode_registry_op(&LayoutConfig::DEFAULT, 0, &key).unwrap();
    // op=1 -> 100, account=0 -> 0000, sign=1
    assert_eq!(buf.as_bytes()[0], 0b1000_0001);
    assert!(buf.as_bytes()[1..].iter().all(|b| *b == 0));
}

#[test]
fn test_wider_config_accepts_larger_ids() {
    let config = LayoutConfig::new(16, 4, 8).unwrap();
    let op = Operation::Deposit(DepositOp {
        account_id: 40_000,
        token_id: 200,
        amount: 1,
    });
    assert!(encode(&config, &op).is_ok());
    assert!(encode(&LayoutConfig::DEFAULT, &op).is_err());
}

// ============================================================================
// Layout Violations
// ============================================================================

#[test]
fn test_overlapping_fields() {
    let err = pack(
        264,
        &[
            Field::with_bits(1u32, ContainerWidth::U8, 3, 0),
            Field::with_bits(1u32, ContainerWidth::U32, 4, 2),
        ],
    )
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Layout);
}

#[test]
fn test_field_runs_past_accumulator() {
    let err = pack(256, &[Field::new(BigUint::from(1u32), ContainerWidth::U256, 128)]).unwrap_err();
    assert!(matches!(
        err,
        PubdataError::OutOfBounds {
            position: 128,
            width: 256,
            container: 256
        }
    ));
}

#[test]
fn test_significant_width_wider_than_container() {
    let err = pack(256, &[Field::with_bits(0u32, ContainerWidth::U32, 33, 0)]).unwrap_err();
    assert!(matches!(err, PubdataError::ContainerTooNarrow { bits: 33, container: 32 }));
}

#[test]
fn test_undersized_transaction() {
    let config = LayoutConfig {
        tx_bytes: 32,
        ..LayoutConfig::DEFAULT
    };
    let op = Operation::Registry(RegistryOp {
        account_id: 1,
        public_key: PublicKey::from_bytes([0u8; 32]),
    });
    let err = encode(&config, &op).unwrap_err();
    assert!(matches!(
        err,
        PubdataError::InvalidConfig(ConfigError::TxBytesTooSmall { required: 33, found: 32 })
    ));
}

#[test]
fn test_unknown_layout_version() {
    let config = LayoutConfig {
        version: 2,
        ..LayoutConfig::DEFAULT
    };
    assert!(matches!(
        Encoder::new(config),
        Err(PubdataError::InvalidConfig(ConfigError::UnsupportedVersion(2)))
    ));
}
