#![cfg(feature = "dev")]
//! Tests for the logistic shrinkage math.
//!
//! These tests verify the weight and blending functions:
//! - Logistic weight behavior at, below, and above the ramp center
//! - Monotonicity of the weight in the observation count
//! - Step behavior for very small smoothing values
//! - Blending between local mean and prior

use approx::assert_relative_eq;

use tencode::internals::math::smoothing::{blend, logistic_weight, smoothed_mean};

// ============================================================================
// Logistic Weight Tests
// ============================================================================

/// Test weight at the ramp center.
///
/// Verifies that a count equal to min_samples_leaf yields exactly 0.5.
#[test]
fn test_weight_at_center_is_half() {
    let w = logistic_weight(3.0_f64, 3.0, 1.0);
    assert_relative_eq!(w, 0.5, epsilon = 1e-15);
}

/// Test weight below the ramp center.
///
/// Verifies that counts below min_samples_leaf yield weights below 0.5.
#[test]
fn test_weight_below_center() {
    let w = logistic_weight(1.0_f64, 5.0, 2.0);
    assert!(w < 0.5, "weight below center should be < 0.5, got {}", w);
    assert!(w > 0.0, "weight should be positive");
}

/// Test weight above the ramp center.
///
/// Verifies that counts above min_samples_leaf yield weights above 0.5.
#[test]
fn test_weight_above_center() {
    let w = logistic_weight(10.0_f64, 5.0, 2.0);
    assert!(w > 0.5, "weight above center should be > 0.5, got {}", w);
    assert!(w < 1.0, "weight should stay below 1");
}

/// Test known weight values.
///
/// Verifies the closed-form value 1/(1+exp(-1)) for count one past center.
#[test]
fn test_weight_known_value() {
    let w = logistic_weight(2.0_f64, 1.0, 1.0);
    assert_relative_eq!(w, 0.7310585786300049, epsilon = 1e-15);

    let w2 = logistic_weight(3.0_f64, 1.0, 1.0);
    assert_relative_eq!(w2, 0.8807970779778823, epsilon = 1e-15);
}

/// Test monotonicity of the weight in the count.
///
/// Verifies that the weight strictly increases with the observation count.
#[test]
fn test_weight_monotonic_in_count() {
    let mut prev = logistic_weight(0.0_f64, 10.0, 3.0);
    for n in 1..=20 {
        let w = logistic_weight(n as f64, 10.0, 3.0);
        assert!(
            w > prev,
            "weight should increase with count: w({}) = {} <= {}",
            n,
            w,
            prev
        );
        prev = w;
    }
}

/// Test step behavior for tiny smoothing.
///
/// Verifies that smoothing near zero approximates a hard threshold at
/// min_samples_leaf.
#[test]
fn test_tiny_smoothing_approximates_step() {
    let below = logistic_weight(4.0_f64, 5.0, 1e-6);
    let above = logistic_weight(6.0_f64, 5.0, 1e-6);

    assert!(below < 1e-9, "count below center should get ~0 weight");
    assert!(above > 1.0 - 1e-9, "count above center should get ~1 weight");
}

// ============================================================================
// Blend Tests
// ============================================================================

/// Test blend extremes.
///
/// Verifies that weight 1 returns the local mean and weight 0 the prior.
#[test]
fn test_blend_extremes() {
    assert_relative_eq!(blend(1.0_f64, 3.0, 7.0), 3.0, epsilon = 1e-15);
    assert_relative_eq!(blend(0.0_f64, 3.0, 7.0), 7.0, epsilon = 1e-15);
}

/// Test blend midpoint.
#[test]
fn test_blend_midpoint() {
    assert_relative_eq!(blend(0.5_f64, 2.0, 4.0), 3.0, epsilon = 1e-15);
}

// ============================================================================
// Smoothed Mean Tests
// ============================================================================

/// Test that the smoothed mean lies between local mean and prior.
#[test]
fn test_smoothed_mean_bounded() {
    let local = 2.0_f64;
    let prior = 5.0_f64;
    let result = smoothed_mean(4.0, local, prior, 1.0, 2.0);

    assert!(result >= local.min(prior));
    assert!(result <= local.max(prior));
}

/// Test that larger counts pull the smoothed mean toward the local mean.
#[test]
fn test_smoothed_mean_approaches_local_with_count() {
    let local = 2.0_f64;
    let prior = 5.0_f64;

    let few = smoothed_mean(2.0, local, prior, 1.0, 5.0);
    let many = smoothed_mean(50.0, local, prior, 1.0, 5.0);

    assert!(
        (many - local).abs() < (few - local).abs(),
        "more observations should move the encoding toward the local mean"
    );
}

/// Test the smoothed mean against a hand-computed value.
///
/// For count 2, center 1, smoothing 1: w = 1/(1+exp(-1)).
#[test]
fn test_smoothed_mean_known_value() {
    let result = smoothed_mean(2.0_f64, 0.5, 0.6, 1.0, 1.0);
    assert_relative_eq!(result, 0.5268941421369995, epsilon = 1e-12);
}

/// Test f32 precision support.
#[test]
fn test_smoothed_mean_f32() {
    let result = smoothed_mean(2.0_f32, 0.5, 0.6, 1.0, 1.0);
    assert_relative_eq!(result, 0.526_894_1_f32, epsilon = 1e-5);
}
