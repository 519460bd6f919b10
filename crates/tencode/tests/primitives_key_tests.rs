#![cfg(feature = "dev")]
//! Tests for the hashable category key.
//!
//! These tests verify key semantics over floating-point codes:
//! - Equality and hashing consistency
//! - Signed-zero and ordering behavior
//! - Conversions to and from raw codes

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use tencode::internals::primitives::key::Category;

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

/// Test that equal codes produce equal keys with equal hashes.
#[test]
fn test_equal_codes_equal_keys() {
    let a = Category::new(3.0_f64);
    let b = Category::new(3.0_f64);

    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
}

/// Test that distinct codes produce distinct keys.
#[test]
fn test_distinct_codes_distinct_keys() {
    assert_ne!(Category::new(1.0_f64), Category::new(2.0));
}

/// Test signed zero.
///
/// `OrderedFloat` compares -0.0 == 0.0, so both codes land in the same
/// category.
#[test]
fn test_signed_zero_same_category() {
    let pos = Category::new(0.0_f64);
    let neg = Category::new(-0.0_f64);

    assert_eq!(pos, neg);
    assert_eq!(hash_of(&pos), hash_of(&neg));
}

/// Test total ordering of keys.
#[test]
fn test_keys_are_ordered() {
    let mut keys = vec![
        Category::new(2.0_f64),
        Category::new(0.0),
        Category::new(1.0),
    ];
    keys.sort();

    let codes: Vec<f64> = keys.into_iter().map(Category::value).collect();
    assert_eq!(codes, vec![0.0, 1.0, 2.0]);
}

/// Test round-trip conversions.
#[test]
fn test_conversion_round_trip() {
    let key: Category<f64> = 7.5.into();
    assert_eq!(key.value(), 7.5);
    assert_eq!(key, Category::new(7.5));
}
