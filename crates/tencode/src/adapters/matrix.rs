//! Matrix adapter for multi-column target encoding.
//!
//! ## Purpose
//!
//! This module provides the multi-column execution adapter for target
//! encoding. It fits every column of a column-major matrix against one
//! shared numeric target and produces a [`FittedMatrix`].
//!
//! ## Design notes
//!
//! * **Processing**: Fits columns sequentially; extension crates inject
//!   parallel passes through the hidden hooks.
//! * **Column independence**: Each column is fitted against the target in
//!   isolation; results match per-column single fits exactly.
//! * **Whole-call failure**: Any column failure fails the entire call.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * Every column must have exactly `target.len()` rows.
//! * All values must be finite.
//! * Output column order matches input column order.
//!
//! ## Non-goals
//!
//! * This adapter does not handle row-major layouts (callers convert).
//! * This adapter does not perform parallel execution itself.

// External dependencies
use num_traits::Float;
use num_traits::float::FloatCore;

// Internal dependencies
use crate::engine::executor::{
    ColumnTransformPassFn, EncodeConfig, EncodeExecutor, MatrixFitPassFn, MatrixTransformPassFn,
};
use crate::engine::output::FittedMatrix;
use crate::engine::validator::Validator;
use crate::primitives::errors::EncodeError;

// ============================================================================
// Matrix Encoder Builder
// ============================================================================

/// Builder for the multi-column encoder.
#[derive(Debug, Clone)]
pub struct MatrixEncoderBuilder<T: Float> {
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

    /// Custom matrix fit pass function.
    #[doc(hidden)]
    pub custom_matrix_fit_pass: Option<MatrixFitPassFn<T>>,

    /// Custom matrix transform pass function.
    #[doc(hidden)]
    pub custom_matrix_transform_pass: Option<MatrixTransformPassFn<T>>,

    /// Parallel execution hint.
    #[doc(hidden)]
    pub parallel: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation)
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for MatrixEncoderBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> MatrixEncoderBuilder<T> {
    /// Create a new matrix encoder builder with default parameters.
    fn new() -> Self {
        Self {
            smoothing: None,
            min_samples_leaf: T::zero(),
            deferred_error: None,
            custom_column_transform_pass: None,
            custom_matrix_fit_pass: None,
            custom_matrix_transform_pass: None,
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

    /// Set a custom matrix fit pass function.
    #[doc(hidden)]
    pub fn custom_matrix_fit_pass(mut self, pass: MatrixFitPassFn<T>) -> Self {
        self.custom_matrix_fit_pass = Some(pass);
        self
    }

    /// Set a custom matrix transform pass function.
    #[doc(hidden)]
    pub fn custom_matrix_transform_pass(mut self, pass: MatrixTransformPassFn<T>) -> Self {
        self.custom_matrix_transform_pass = Some(pass);
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the matrix encoder.
    pub fn build(self) -> Result<MatrixEncoder<T>, EncodeError> {
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

        Ok(MatrixEncoder {
            config: EncodeConfig {
                smoothing,
                min_samples_leaf: self.min_samples_leaf,
                custom_column_transform_pass: self.custom_column_transform_pass,
                custom_matrix_fit_pass: self.custom_matrix_fit_pass,
                custom_matrix_transform_pass: self.custom_matrix_transform_pass,
            },
            matrix_transform_pass: self.custom_matrix_transform_pass,
        })
    }
}

// ============================================================================
// Matrix Encoder Processor
// ============================================================================

/// Multi-column target encoder processor.
pub struct MatrixEncoder<T: Float> {
    config: EncodeConfig<T>,
    matrix_transform_pass: Option<MatrixTransformPassFn<T>>,
}

impl<T: Float + FloatCore> MatrixEncoder<T> {
    /// Fit one encoder per column against the shared target.
    pub fn fit(self, columns: &[Vec<T>], target: &[T]) -> Result<FittedMatrix<T>, EncodeError> {
        Validator::validate_matrix(columns, target)?;

        let fitted = EncodeExecutor::fit_matrix(columns, target, &self.config)?;

        Ok(FittedMatrix::new(fitted, self.matrix_transform_pass))
    }

    /// Fit the encoder and immediately encode the training matrix.
    ///
    /// Equivalent to `fit` followed by `transform` on the same columns.
    pub fn fit_transform(
        self,
        columns: &[Vec<T>],
        target: &[T],
    ) -> Result<(FittedMatrix<T>, Vec<Vec<T>>), EncodeError> {
        let fitted = self.fit(columns, target)?;
        let encoded = fitted.transform(columns)?;
        Ok((fitted, encoded))
    }
}
