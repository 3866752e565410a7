//! Reversed-bit insertion vectors taken from the rollup circuit's test suite

use num_bigint::BigUint;
use pubdata_spec::{insert_at, BitWord, Bits256, Bits32, Bits8, PubdataError};

fn hex(s: &str) -> BigUint {
    BigUint::parse_bytes(s.trim_start_matches("0x").as_bytes(), 16).unwrap()
}

fn op8(value: u64, position: u32) -> BigUint {
    Bits8::new(value)
        .unwrap()
        .insert_into(&BitWord::zero(256), position)
        .unwrap()
        .into_value()
}

fn op32(value: u64, position: u32) -> BigUint {
    Bits32::new(value)
        .unwrap()
        .insert_into(&BitWord::zero(256), position)
        .unwrap()
        .into_value()
}

fn op256(value: BigUint, position: u32) -> BigUint {
    Bits256::new(value)
        .unwrap()
        .insert_into(&BitWord::zero(256), position)
        .unwrap()
        .into_value()
}

// ============================================================================
// 8-bit Containers
// ============================================================================

#[test]
fn test_bits8_vectors() {
    assert_eq!(op8(0, 138), BigUint::from(0u32));
    assert_eq!(
        op8(1, 0),
        hex("0x8000000000000000000000000000000000000000000000000000000000000000")
    );
    assert_eq!(
        op8(1, 1),
        hex("0x4000000000000000000000000000000000000000000000000000000000000000")
    );
    assert_eq!(
        op8(42, 3),
        hex("0x0A80000000000000000000000000000000000000000000000000000000000000")
    );
}

#[test]
fn test_bits8_truncates_past_lsb() {
    // 3 reversed is 0b11000000; only its first bit lands inside the word
    assert_eq!(op8(3, 255), BigUint::from(1u32));
}

// ============================================================================
// 32-bit Containers
// ============================================================================

#[test]
fn test_bits32_vectors() {
    assert_eq!(
        op32(1, 0),
        hex("0x8000000000000000000000000000000000000000000000000000000000000000")
    );
    assert_eq!(
        op32(42, 3),
        hex("0x0A80000000000000000000000000000000000000000000000000000000000000")
    );
    assert_eq!(op32(0x80000001, 225), hex("0x40000000"));
    assert_eq!(op32(995535, 236), BigUint::from(995535u32));
}

// ============================================================================
// 256-bit Containers
// ============================================================================

#[test]
fn test_bits256_vectors() {
    let top = hex("0x80000000000000000000000000000000");

    assert_eq!(
        op256(BigUint::from(1u32), 0),
        hex("0x8000000000000000000000000000000000000000000000000000000000000000")
    );
    assert_eq!(op256(BigUint::from(1u32), 128), top);
    assert_eq!(op256(top.clone(), 0), hex("0x100000000000000000000000000000000"));
    assert_eq!(op256(top.clone(), 1), top);
    assert_eq!(op256(top.clone(), 128), BigUint::from(1u32));
    assert_eq!(op256(top, 129), BigUint::from(0u32));
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_value_wider_than_container() {
    assert!(matches!(
        Bits8::new(0x100u32),
        Err(PubdataError::WidthViolation { width: 8, .. })
    ));
    assert!(matches!(
        Bits32::new(1u64 << 32),
        Err(PubdataError::WidthViolation { width: 32, .. })
    ));
}

#[test]
fn test_position_outside_accumulator() {
    let err = insert_at(&BitWord::zero(256), &BigUint::from(1u32), 8, 300).unwrap_err();
    assert!(err.is_layout_violation());
}

#[test]
fn test_insert_preserves_existing_bits() {
    let acc = insert_at(&BitWord::zero(256), &BigUint::from(1u32), 8, 0).unwrap();
    let acc = insert_at(&acc, &BigUint::from(1u32), 8, 8).unwrap();
    let bytes = acc.to_be_bytes();
    assert_eq!(&bytes[..2], &[0x80, 0x80]);
    assert_eq!(acc.width(), 256);
}
