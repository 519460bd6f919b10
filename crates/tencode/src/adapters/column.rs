//! Column adapter for single-column target encoding.
//!
//! ## Purpose
//!
//! This module provides the single-column execution adapter for target
//! encoding. It fits one categorical column against a numeric target and
//! produces a frozen [`FittedColumn`] for later transforms.
//!
//! ## Design notes
//!
//! * **Processing**: Fits the complete column in a single pass.
//! * **Delegation**: Delegates computation to the execution engine.
//! * **Builder Pattern**: Fluent API for configuration; smoothing has no
//!   default and must be set explicitly.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * Input slices `values` and `target` must have the same length.
//! * All values must be finite.
//! * At least 1 data point is required.
//!
//! ## Non-goals
//!
//! * This adapter does not handle multi-column data (use matrix adapter).
//! * This adapter does not handle parallel execution (injected externally).

// External dependencies
use num_traits::Float;
use num_traits::float::FloatCore;

// Internal dependencies
use crate::engine::executor::{ColumnTransformPassFn, EncodeConfig, EncodeExecutor};
use crate::engine::output::FittedColumn;
use crate::engine::validator::Validator;
use crate::primitives::errors::EncodeError;

// ============================================================================
// Column Encoder Builder
// ============================================================================

/// Builder for the single-column encoder.
#[derive(Debug, Clone)]
pub struct ColumnEncoderBuilder<T: Float> {
    /// Steepness of the logistic shrinkage ramp
    pub smoothing: Option<T>,

    /// Center of the logistic shrinkage ramp
    pub min_samples_leaf: T,

    /// Deferred error from adapter conversion
    pub deferred_error: Option<EncodeError>,

    // ++++++++++++++++++++++++++++++++++++++
    // +               DEV                  +
    // ++++++++++++++++++++++++++++++++++++++
    /// Custom column transform pass function.
    #[doc(hidden)]
    pub custom_column_transform_pass: Option<ColumnTransformPassFn<T>>,

    /// Parallel execution hint.
    #[doc(hidden)]
    pub parallel: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation)
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for ColumnEncoderBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> ColumnEncoderBuilder<T> {
    /// Create a new column encoder builder with default parameters.
    fn new() -> Self {
        Self {
            smoothing: None,
            min_samples_leaf: T::zero(),
            deferred_error: None,
            custom_column_transform_pass: None,
            parallel: None,
            duplicate_param: None,
        }
    }

    // ========================================================================
    // Setters
    // ========================================================================

    /// Set the smoothing parameter (required, must be positive).
    pub fn smoothing(mut self, smoothing: T) -> Self {
        self.smoothing = Some(smoothing);
        self
    }

    /// Set the minimum samples leaf (ramp center).
    pub fn min_samples_leaf(mut self, min_samples_leaf: T) -> Self {
        self.min_samples_leaf = min_samples_leaf;
        self
    }

    // ++++++++++++++++++++++++++++++++++++++
    // +               DEV                  +
    // ++++++++++++++++++++++++++++++++++++++

    /// Set parallel execution hint.
    #[doc(hidden)]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = Some(parallel);
        self
    }

    /// Set a custom column transform pass function.
    #[doc(hidden)]
    pub fn custom_column_transform_pass(mut self, pass: ColumnTransformPassFn<T>) -> Self {
        self.custom_column_transform_pass = Some(pass);
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the column encoder.
    pub fn build(self) -> Result<ColumnEncoder<T>, EncodeError> {
        if let Some(err) = self.deferred_error {
            return Err(err);
        }

        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        // Smoothing is required
        let smoothing = self.smoothing.ok_or(EncodeError::MissingParameter {
            parameter: "smoothing",
        })?;

        Validator::validate_smoothing(smoothing)?;
        Validator::validate_min_samples_leaf(self.min_samples_leaf)?;

        Ok(ColumnEncoder {
            config: EncodeConfig {
                smoothing,
                min_samples_leaf: self.min_samples_leaf,
                custom_column_transform_pass: self.custom_column_transform_pass,
                custom_matrix_fit_pass: None,
                custom_matrix_transform_pass: None,
            },
        })
    }
}

// ============================================================================
// Column Encoder Processor
// ============================================================================

/// Single-column target encoder processor.
#[derive(Debug)]
pub struct ColumnEncoder<T: Float> {
    config: EncodeConfig<T>,
}

impl<T: Float + FloatCore> ColumnEncoder<T> {
    /// Fit the encoder on a categorical column and its numeric target.
    pub fn fit(self, values: &[T], target: &[T]) -> Result<FittedColumn<T>, EncodeError> {
        Validator::validate_fit_inputs(values, target)?;

        EncodeExecutor::fit_column(values, target, &self.config)
    }

    /// Fit the encoder and immediately encode the training column.
    ///
    /// Equivalent to `fit` followed by `transform` on the same values.
    pub fn fit_transform(
        self,
        values: &[T],
        target: &[T],
    ) -> Result<(FittedColumn<T>, Vec<T>), EncodeError> {
        let fitted = self.fit(values, target)?;
        let encoded = fitted.transform(values)?;
        Ok((fitted, encoded))
    }
}
