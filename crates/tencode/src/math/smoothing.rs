//! Smoothing weight functions for target encoding.
//!
//! ## Purpose
//!
//! This module provides the logistic-ramp weight that blends a category's
//! local target mean with the global prior. It controls how much a category
//! is trusted as a function of how often it was observed.
//!
//! ## Design notes
//!
//! * **Logistic ramp**: `w = 1 / (1 + exp(-(n - min_samples_leaf) / smoothing))`.
//!   The ramp is centered at `min_samples_leaf` and its steepness is set by
//!   `smoothing`.
//! * **Saturation**: As `smoothing -> 0+` the ramp becomes a step at
//!   `n = min_samples_leaf`; for `n` far past the midpoint the weight
//!   saturates to 1 and the local mean dominates.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * Weights are always in [0, 1] for positive, finite `smoothing`.
//! * The weight is strictly increasing in `count`.
//! * `blend(w, m, p)` is exactly `m` at `w = 1` and exactly `p` at `w = 0`.
//!
//! ## Non-goals
//!
//! * This module does not validate parameters (handled by the validator).
//! * This module does not accumulate statistics (handled by `algorithms`).

// External dependencies
use num_traits::Float;

// ============================================================================
// Weight Functions
// ============================================================================

/// Logistic-ramp shrinkage weight for a category observed `count` times.
///
/// `smoothing` must be strictly positive; callers validate this before any
/// data pass.
pub fn logistic_weight<T: Float>(count: T, min_samples_leaf: T, smoothing: T) -> T {
    let exponent = -(count - min_samples_leaf) / smoothing;
    T::one() / (T::one() + exponent.exp())
}

/// Blend a local mean with the global prior at the given weight.
pub fn blend<T: Float>(weight: T, local_mean: T, prior: T) -> T {
    weight * local_mean + (T::one() - weight) * prior
}

/// Smoothed mean for a category: logistic weight applied to its local mean.
pub fn smoothed_mean<T: Float>(
    count: T,
    local_mean: T,
    prior: T,
    smoothing: T,
    min_samples_leaf: T,
) -> T {
    let weight = logistic_weight(count, min_samples_leaf, smoothing);
    blend(weight, local_mean, prior)
}
