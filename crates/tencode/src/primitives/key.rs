//! Hashable category keys for floating-point category codes.
//!
//! ## Purpose
//!
//! This module wraps floating-point category codes in a key type with total
//! equality and stable hashing, so per-category statistics can live in a hash
//! map without tripping over IEEE-754 equality semantics.
//!
//! ## Design notes
//!
//! * **Exact equality**: Two cells belong to the same category iff their codes
//!   compare equal under `OrderedFloat`'s total order.
//! * **NaN policy**: Non-finite codes are rejected by the validator before any
//!   key is ever formed; `OrderedFloat` would canonicalize NaN if it slipped
//!   through, so hashing can never be inconsistent.
//! * **Generics**: Generic over `FloatCore` so f32 and f64 codes both work.
//!
//! ## Invariants
//!
//! * `a == b` implies `hash(a) == hash(b)` for all keys.
//! * Keys are plain `Copy` values; cloning a table never aliases state.
//!
//! ## Non-goals
//!
//! * This module does not validate values (handled by the validator).
//! * This module does not map codes to dense integer ids.

// External dependencies
use core::hash::{Hash, Hasher};
use num_traits::float::FloatCore;
use ordered_float::OrderedFloat;

// ============================================================================
// Category Key
// ============================================================================

/// A categorical cell value, usable as a hash-map key.
#[derive(Debug, Clone, Copy)]
pub struct Category<T>(OrderedFloat<T>);

impl<T: FloatCore> Category<T> {
    /// Wrap a raw category code.
    pub fn new(value: T) -> Self {
        Category(OrderedFloat(value))
    }

    /// Return the underlying category code.
    pub fn value(self) -> T {
        self.0.into_inner()
    }
}

impl<T: FloatCore> From<T> for Category<T> {
    fn from(value: T) -> Self {
        Category::new(value)
    }
}

impl<T: FloatCore> PartialEq for Category<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T: FloatCore> Eq for Category<T> {}

impl<T: FloatCore> Hash for Category<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl<T: FloatCore> PartialOrd for Category<T> {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: FloatCore> Ord for Category<T> {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.0.cmp(&other.0)
    }
}
