//! Matrix adapter for multi-column target encoding.
//!
//! ## Purpose
//!
//! This module provides the multi-column execution adapter with parallel
//! support. Columns are fitted and transformed across all available CPU
//! cores, with an optional dedicated thread pool.
//!
//! ## Design notes
//!
//! * **Processing**: Fans columns out across CPU cores via `rayon`.
//! * **Delegation**: Delegates validation and computation to `tencode`.
//! * **Thread Pool**: An explicit thread count runs the fit inside a
//!   dedicated pool; otherwise the global rayon pool is used.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * Every column must have exactly `target.len()` rows.
//! * All values must be finite.
//! * Parallel and sequential execution produce bit-identical output.
//!
//! ## Non-goals
//!
//! * This adapter does not handle single columns (use column adapter).
//! * This adapter does not handle row-major nested vectors.

// External dependencies
use num_traits::Float;
use num_traits::float::FloatCore;
use rayon::ThreadPoolBuilder;

// Export dependencies from tencode crate
use tencode::internals::adapters::matrix::MatrixEncoderBuilder;
use tencode::internals::engine::output::FittedMatrix;
use tencode::internals::primitives::errors::EncodeError;

// Internal dependencies
use crate::engine::executor::{
    column_transform_pass_parallel, matrix_fit_pass_parallel, matrix_transform_pass_parallel,
};
use crate::input::{ColumnInput, MatrixInput};

// ============================================================================
// Extended Matrix Encoder Builder
// ============================================================================

/// Builder for the multi-column encoder with parallel support.
#[derive(Debug, Clone)]
pub struct ParallelMatrixEncoderBuilder<T: Float> {
    /// Base builder from the tencode crate
    pub base: MatrixEncoderBuilder<T>,

    /// Size of the dedicated thread pool (global pool when unset)
    pub threads: Option<usize>,
}

impl<T: Float> Default for ParallelMatrixEncoderBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> ParallelMatrixEncoderBuilder<T> {
    /// Create a new matrix encoder builder with default parameters.
    ///
    /// # Defaults
    ///
    /// * All base parameters from tencode MatrixEncoderBuilder
    /// * parallel: true (fastTencode extension)
    /// * threads: global rayon pool
    fn new() -> Self {
        let base = MatrixEncoderBuilder::default().parallel(true);
        Self {
            base,
            threads: None,
        }
    }

    /// Set parallel execution mode.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.base = self.base.parallel(parallel);
        self
    }

    /// Run the fit inside a dedicated thread pool of the given size.
    pub fn threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    // ========================================================================
    // Shared Setters
    // ========================================================================

    /// Set the smoothing parameter (required, must be positive).
    pub fn smoothing(mut self, smoothing: T) -> Self {
        self.base = self.base.smoothing(smoothing);
        self
    }

    /// Set the minimum samples leaf (ramp center).
    pub fn min_samples_leaf(mut self, min_samples_leaf: T) -> Self {
        self.base = self.base.min_samples_leaf(min_samples_leaf);
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the matrix processor.
    pub fn build(self) -> Result<ParallelMatrixEncoder<T>, EncodeError> {
        // Check for deferred errors from adapter conversion
        if let Some(ref err) = self.base.deferred_error {
            return Err(err.clone());
        }

        // Validate by attempting to build the base processor
        // This reuses the validation logic centralized in the tencode crate
        let _ = self.base.clone().build()?;

        Ok(ParallelMatrixEncoder { config: self })
    }
}

// ============================================================================
// Extended Matrix Encoder Processor
// ============================================================================

/// Multi-column target encoder processor with parallel support.
pub struct ParallelMatrixEncoder<T: Float> {
    config: ParallelMatrixEncoderBuilder<T>,
}

impl<T: Float + FloatCore + Send + Sync + 'static> ParallelMatrixEncoder<T> {
    /// Fit one encoder per column against the shared target.
    pub fn fit<D, I>(self, data: &D, target: &I) -> Result<FittedMatrix<T>, EncodeError>
    where
        D: MatrixInput<T> + ?Sized,
        I: ColumnInput<T> + ?Sized,
    {
        let columns = data.to_columns()?;
        let target_slice = target.as_column_slice()?;

        // Destructure to avoid partial moves out of the config
        let ParallelMatrixEncoderBuilder { base, threads } = self.config;

        // Configure the base builder with parallel callbacks if enabled
        let mut builder = base;

        if builder.parallel.unwrap_or(true) {
            builder = builder
                .custom_matrix_fit_pass(matrix_fit_pass_parallel)
                .custom_matrix_transform_pass(matrix_transform_pass_parallel)
                .custom_column_transform_pass(column_transform_pass_parallel);
        } else {
            builder.custom_matrix_fit_pass = None;
            builder.custom_matrix_transform_pass = None;
            builder.custom_column_transform_pass = None;
        }

        // Delegate execution to the base implementation
        let processor = builder.build()?;

        match threads {
            Some(n) => {
                let pool = ThreadPoolBuilder::new().num_threads(n).build().map_err(|e| {
                    EncodeError::InvalidInput(format!("failed to build thread pool: {}", e))
                })?;
                pool.install(|| processor.fit(&columns, target_slice))
            }
            None => processor.fit(&columns, target_slice),
        }
    }

    /// Fit the encoder and immediately encode the training matrix.
    pub fn fit_transform<D, I>(
        self,
        data: &D,
        target: &I,
    ) -> Result<(FittedMatrix<T>, Vec<Vec<T>>), EncodeError>
    where
        D: MatrixInput<T> + ?Sized,
        I: ColumnInput<T> + ?Sized,
    {
        let columns = data.to_columns()?;
        let fitted = self.fit(data, target)?;
        let encoded = fitted.transform(&columns)?;
        Ok((fitted, encoded))
    }
}
