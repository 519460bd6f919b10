//! Input validation for encoder configuration and data.
//!
//! ## Purpose
//!
//! This module provides validation functions for target-encoding
//! hyperparameters and input data. It checks requirements such as input
//! lengths, finite values, and parameter bounds.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered, always
//!   before any statistics are accumulated.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **NaN policy**: Non-finite category or target values are rejected;
//!   NaN is never treated as an implicit category.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective mathematical constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not transform or filter input data.
//! * This module does not provide automatic correction of invalid inputs.
//! * This module does not perform the encoding itself.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::EncodeError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for encoder configuration and input data.
///
/// Provides static methods for validating hyperparameters and input data.
/// All methods return `Result<(), EncodeError>` and fail fast upon
/// identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate a column and its target vector for fitting.
    pub fn validate_fit_inputs<T: Float>(values: &[T], target: &[T]) -> Result<(), EncodeError> {
        // Check 1: Non-empty arrays
        if values.is_empty() || target.is_empty() {
            return Err(EncodeError::EmptyInput);
        }

        // Check 2: Matching lengths
        if values.len() != target.len() {
            return Err(EncodeError::ShapeMismatch {
                values_len: values.len(),
                target_len: target.len(),
            });
        }

        // Check 3: All values finite
        Self::validate_values(values, "values")?;
        Self::validate_values(target, "target")?;

        Ok(())
    }

    /// Validate a column matrix against one shared target vector.
    pub fn validate_matrix<T: Float>(
        columns: &[Vec<T>],
        target: &[T],
    ) -> Result<(), EncodeError> {
        if target.is_empty() {
            return Err(EncodeError::EmptyInput);
        }

        Self::validate_values(target, "target")?;

        for (j, column) in columns.iter().enumerate() {
            if column.len() != target.len() {
                return Err(EncodeError::RaggedMatrix {
                    expected_rows: target.len(),
                    column: j,
                    got: column.len(),
                });
            }
            Self::validate_values(column, &format!("column[{}]", j))?;
        }

        Ok(())
    }

    /// Validate every element of an array for finiteness.
    pub fn validate_values<T: Float>(values: &[T], name: &str) -> Result<(), EncodeError> {
        for (i, &v) in values.iter().enumerate() {
            if !v.is_finite() {
                return Err(EncodeError::UnsupportedValue(format!(
                    "{}[{}]={}",
                    name,
                    i,
                    v.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the smoothing hyperparameter.
    pub fn validate_smoothing<T: Float>(smoothing: T) -> Result<(), EncodeError> {
        if !smoothing.is_finite() || smoothing <= T::zero() {
            return Err(EncodeError::InvalidSmoothing(
                smoothing.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate the min_samples_leaf hyperparameter.
    pub fn validate_min_samples_leaf<T: Float>(min_samples_leaf: T) -> Result<(), EncodeError> {
        if !min_samples_leaf.is_finite() || min_samples_leaf < T::zero() {
            return Err(EncodeError::InvalidMinSamplesLeaf(
                min_samples_leaf.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), EncodeError> {
        if let Some(parameter) = duplicate_param {
            return Err(EncodeError::DuplicateParameter { parameter });
        }
        Ok(())
    }

    // ========================================================================
    // Transform Validation
    // ========================================================================

    /// Validate that transform data matches the fitted column count.
    pub fn validate_transform_columns(fitted: usize, got: usize) -> Result<(), EncodeError> {
        if fitted != got {
            return Err(EncodeError::ColumnCountMismatch { fitted, got });
        }
        Ok(())
    }
}
