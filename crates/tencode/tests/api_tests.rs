//! Tests for the high-level target encoding API.
//!
//! These tests verify the builder pattern, configuration options, and complete
//! workflows for the public API including:
//! - Builder construction and validation
//! - Parameter error handling
//! - Fit and transform semantics on a single column
//! - Unseen-category fallback
//! - Determinism and precision support

use approx::assert_relative_eq;

use tencode::prelude::*;

// ============================================================================
// Builder Construction Tests
// ============================================================================

/// Test that a configured builder builds successfully.
#[test]
fn test_builder_builds_with_smoothing() {
    let encoder = TargetEncoder::<f64>::new().smoothing(1.0).adapter(Column);
    assert!(encoder.build().is_ok());
}

/// Test that smoothing is required.
#[test]
fn test_missing_smoothing_rejected() {
    let err = TargetEncoder::<f64>::new()
        .adapter(Column)
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        EncodeError::MissingParameter {
            parameter: "smoothing",
        }
    );
}

/// Test invalid smoothing rejection at build time.
#[test]
fn test_invalid_smoothing_rejected() {
    for bad in [0.0, -1.0] {
        let err = TargetEncoder::<f64>::new()
            .smoothing(bad)
            .adapter(Column)
            .build()
            .unwrap_err();
        assert_eq!(err, EncodeError::InvalidSmoothing(bad));
    }

    let err = TargetEncoder::<f64>::new()
        .smoothing(f64::NAN)
        .adapter(Column)
        .build()
        .unwrap_err();
    assert!(matches!(err, EncodeError::InvalidSmoothing(_)));
}

/// Test invalid min_samples_leaf rejection at build time.
#[test]
fn test_invalid_min_samples_leaf_rejected() {
    let err = TargetEncoder::<f64>::new()
        .smoothing(1.0)
        .min_samples_leaf(-2.0)
        .adapter(Column)
        .build()
        .unwrap_err();
    assert_eq!(err, EncodeError::InvalidMinSamplesLeaf(-2.0));
}

/// Test duplicate parameter rejection.
///
/// Verifies that setting the same parameter twice fails at build time.
#[test]
fn test_duplicate_parameter_rejected() {
    let err = TargetEncoder::<f64>::new()
        .smoothing(1.0)
        .smoothing(2.0)
        .adapter(Column)
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        EncodeError::DuplicateParameter {
            parameter: "smoothing",
        }
    );
}

// ============================================================================
// Fit Validation Tests
// ============================================================================

/// Test empty input rejection at fit time.
#[test]
fn test_fit_empty_input_rejected() {
    let encoder = TargetEncoder::<f64>::new()
        .smoothing(1.0)
        .adapter(Column)
        .build()
        .unwrap();

    let empty: Vec<f64> = vec![];
    let err = encoder.fit(&empty, &empty).unwrap_err();
    assert_eq!(err, EncodeError::EmptyInput);
}

/// Test mismatched lengths rejection at fit time.
#[test]
fn test_fit_shape_mismatch_rejected() {
    let encoder = TargetEncoder::<f64>::new()
        .smoothing(1.0)
        .adapter(Column)
        .build()
        .unwrap();

    let err = encoder.fit(&[0.0, 1.0], &[1.0, 0.0, 1.0]).unwrap_err();
    assert_eq!(
        err,
        EncodeError::ShapeMismatch {
            values_len: 2,
            target_len: 3,
        }
    );
}

/// Test NaN rejection at fit time.
#[test]
fn test_fit_nan_rejected() {
    let encoder = TargetEncoder::<f64>::new()
        .smoothing(1.0)
        .adapter(Column)
        .build()
        .unwrap();

    let err = encoder
        .fit(&[0.0, f64::NAN], &[1.0, 0.0])
        .unwrap_err();
    assert!(matches!(err, EncodeError::UnsupportedValue(_)));
}

/// Test NaN rejection at transform time.
#[test]
fn test_transform_nan_rejected() {
    let fitted = TargetEncoder::<f64>::new()
        .smoothing(1.0)
        .adapter(Column)
        .build()
        .unwrap()
        .fit(&[0.0, 1.0], &[1.0, 0.0])
        .unwrap();

    let err = fitted.transform(&[0.0, f64::NAN]).unwrap_err();
    assert!(matches!(err, EncodeError::UnsupportedValue(_)));
}

// ============================================================================
// Encoding Semantics Tests
// ============================================================================

/// Test the full encoding pipeline against hand-computed values.
///
/// values [0,0,1,1,1], targets [1,0,1,1,0], smoothing 1, center 1:
/// global mean 0.6; category 0 has local mean 0.5 and weight 1/(1+exp(-1)),
/// category 1 has local mean 2/3 and weight 1/(1+exp(-2)).
#[test]
fn test_encoding_hand_computed() {
    let values = vec![0.0_f64, 0.0, 1.0, 1.0, 1.0];
    let target = vec![1.0_f64, 0.0, 1.0, 1.0, 0.0];

    let fitted = TargetEncoder::new()
        .smoothing(1.0)
        .min_samples_leaf(1.0)
        .adapter(Column)
        .build()
        .unwrap()
        .fit(&values, &target)
        .unwrap();

    assert_relative_eq!(fitted.prior(), 0.6, epsilon = 1e-15);
    assert_relative_eq!(fitted.encode(0.0), 0.5268941421369995, epsilon = 1e-12);
    assert_relative_eq!(fitted.encode(1.0), 0.6587198051985255, epsilon = 1e-12);

    let encoded = fitted.transform(&values).unwrap();
    assert_eq!(encoded.len(), values.len());
    assert_eq!(encoded[0], fitted.encode(0.0));
    assert_eq!(encoded[2], fitted.encode(1.0));
}

/// Test that unseen categories encode exactly to the prior.
#[test]
fn test_unseen_category_is_prior() {
    let fitted = TargetEncoder::new()
        .smoothing(1.0)
        .adapter(Column)
        .build()
        .unwrap()
        .fit(&[0.0, 0.0, 1.0], &[1.0, 0.0, 1.0])
        .unwrap();

    // Bit-exact, not approximate
    assert_eq!(fitted.encode(42.0), fitted.prior());
    assert_eq!(fitted.transform(&[42.0, -7.0]).unwrap(), vec![fitted.prior(); 2]);
}

/// Test fitted metadata accessors.
#[test]
fn test_fitted_metadata() {
    let fitted = TargetEncoder::new()
        .smoothing(2.0)
        .min_samples_leaf(1.5)
        .adapter(Column)
        .build()
        .unwrap()
        .fit(&[0.0, 0.0, 1.0, 3.0], &[1.0, 0.0, 1.0, 0.0])
        .unwrap();

    assert_eq!(fitted.n_categories(), 3);
    assert_eq!(fitted.rows(), 4);
    assert_relative_eq!(fitted.smoothing(), 2.0, epsilon = 1e-15);
    assert_relative_eq!(fitted.min_samples_leaf(), 1.5, epsilon = 1e-15);
}

/// Test that fit_transform matches fit followed by transform.
#[test]
fn test_fit_transform_matches_fit_then_transform() {
    let values = vec![0.0_f64, 1.0, 1.0, 0.0, 3.0, 0.0, 1.0];
    let target = vec![1.0_f64, 2.0, 2.0, 1.0, 0.0, 1.0, 2.0];

    let build = || {
        TargetEncoder::new()
            .smoothing(1.0)
            .min_samples_leaf(1.0)
            .adapter(Column)
            .build()
            .unwrap()
    };

    let (_, combined) = build().fit_transform(&values, &target).unwrap();
    let separate = build().fit(&values, &target).unwrap().transform(&values).unwrap();

    assert_eq!(combined, separate, "fit_transform should be bit-identical");
}

/// Test the full pipeline against a straightforward reference loop.
///
/// Recomputes every encoding with nested scans over the raw data and
/// compares the transform output at 1e-9 relative tolerance.
#[test]
fn test_transform_matches_reference_loop() {
    let values = vec![0.0_f64, 1.0, 1.0, 0.0, 3.0, 0.0, 1.0, 5.0, 5.0];
    let target = vec![1.0_f64, 2.0, 2.0, 1.0, 0.0, 1.0, 2.0, 4.0, 3.0];
    let smoothing = 0.8;
    let min_samples_leaf = 2.0;

    let encoded = TargetEncoder::new()
        .smoothing(smoothing)
        .min_samples_leaf(min_samples_leaf)
        .adapter(Column)
        .build()
        .unwrap()
        .fit(&values, &target)
        .unwrap()
        .transform(&values)
        .unwrap();

    let global_mean: f64 = target.iter().sum::<f64>() / target.len() as f64;

    for (i, &v) in values.iter().enumerate() {
        let mut count = 0usize;
        let mut sum = 0.0;
        for (&vj, &tj) in values.iter().zip(&target) {
            if vj == v {
                count += 1;
                sum += tj;
            }
        }
        let local_mean = sum / count as f64;
        let w = 1.0 / (1.0 + (-(count as f64 - min_samples_leaf) / smoothing).exp());
        let expected = w * local_mean + (1.0 - w) * global_mean;

        assert_relative_eq!(encoded[i], expected, max_relative = 1e-9);
    }
}

/// Test determinism across repeated fits.
#[test]
fn test_fit_is_deterministic() {
    let values = vec![0.0_f64, 1.0, 1.0, 0.0, 3.0, 0.0, 1.0];
    let target = vec![1.0_f64, 2.0, 2.0, 1.0, 0.0, 1.0, 2.0];

    let run = || {
        TargetEncoder::new()
            .smoothing(0.7)
            .min_samples_leaf(2.0)
            .adapter(Column)
            .build()
            .unwrap()
            .fit(&values, &target)
            .unwrap()
            .transform(&values)
            .unwrap()
    };

    assert_eq!(run(), run(), "repeated fits should be bit-identical");
}

/// Test f32 precision support.
#[test]
fn test_f32_support() {
    let values = vec![0.0_f32, 0.0, 1.0, 1.0, 1.0];
    let target = vec![1.0_f32, 0.0, 1.0, 1.0, 0.0];

    let fitted = TargetEncoder::new()
        .smoothing(1.0_f32)
        .min_samples_leaf(1.0)
        .adapter(Column)
        .build()
        .unwrap()
        .fit(&values, &target)
        .unwrap();

    assert_relative_eq!(fitted.prior(), 0.6_f32, epsilon = 1e-6);
    assert_relative_eq!(fitted.encode(0.0), 0.526_894_1_f32, epsilon = 1e-5);
}

/// Test the Display summary of a fitted column.
#[test]
fn test_fitted_column_display() {
    let fitted = TargetEncoder::new()
        .smoothing(1.0)
        .adapter(Column)
        .build()
        .unwrap()
        .fit(&[0.0, 1.0], &[1.0, 0.0])
        .unwrap();

    let rendered = format!("{}", fitted);
    assert!(rendered.contains("Categories: 2"));
    assert!(rendered.contains("Rows: 2"));
    assert!(rendered.contains("Prior: 0.5"));
}
