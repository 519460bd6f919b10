//! Column adapter for single-column target encoding.
//!
//! ## Purpose
//!
//! This module provides the single-column execution adapter with parallel
//! transform support. Fitting a single column is a sequential accumulation
//! pass; the encoded transform is parallelized across values.
//!
//! ## Design notes
//!
//! * **Processing**: Fits the complete column in a single pass.
//! * **Delegation**: Delegates validation and computation to `tencode`.
//! * **Parallelism**: Adds a parallel transform pass via `rayon`.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * Input `values` and `target` must have the same length.
//! * All values must be finite.
//! * Parallel and sequential transforms produce bit-identical output.
//!
//! ## Non-goals
//!
//! * This adapter does not handle multi-column data (use matrix adapter).

// External dependencies
use num_traits::Float;
use num_traits::float::FloatCore;

// Export dependencies from tencode crate
use tencode::internals::adapters::column::ColumnEncoderBuilder;
use tencode::internals::engine::output::FittedColumn;
use tencode::internals::primitives::errors::EncodeError;

// Internal dependencies
use crate::engine::executor::column_transform_pass_parallel;
use crate::input::ColumnInput;

// ============================================================================
// Extended Column Encoder Builder
// ============================================================================

/// Builder for the single-column encoder with parallel support.
#[derive(Debug, Clone)]
pub struct ParallelColumnEncoderBuilder<T: Float> {
    /// Base builder from the tencode crate
    pub base: ColumnEncoderBuilder<T>,
}

impl<T: Float> Default for ParallelColumnEncoderBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> ParallelColumnEncoderBuilder<T> {
    /// Create a new column encoder builder with default parameters.
    ///
    /// # Defaults
    ///
    /// * All base parameters from tencode ColumnEncoderBuilder
    /// * parallel: true (fastTencode extension)
    fn new() -> Self {
        let base = ColumnEncoderBuilder::default().parallel(true);
        Self { base }
    }

    /// Set parallel execution mode.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.base = self.base.parallel(parallel);
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

    /// Build the column processor.
    pub fn build(self) -> Result<ParallelColumnEncoder<T>, EncodeError> {
        // Check for deferred errors from adapter conversion
        if let Some(ref err) = self.base.deferred_error {
            return Err(err.clone());
        }

        // Validate by attempting to build the base processor
        // This reuses the validation logic centralized in the tencode crate
        let _ = self.base.clone().build()?;

        Ok(ParallelColumnEncoder { config: self })
    }
}

// ============================================================================
// Extended Column Encoder Processor
// ============================================================================

/// Single-column target encoder processor with parallel support.
#[derive(Debug)]
pub struct ParallelColumnEncoder<T: Float> {
    config: ParallelColumnEncoderBuilder<T>,
}

impl<T: Float + FloatCore + Send + Sync + 'static> ParallelColumnEncoder<T> {
    /// Fit the encoder on a categorical column and its numeric target.
    pub fn fit<I1, I2>(self, values: &I1, target: &I2) -> Result<FittedColumn<T>, EncodeError>
    where
        I1: ColumnInput<T> + ?Sized,
        I2: ColumnInput<T> + ?Sized,
    {
        let values_slice = values.as_column_slice()?;
        let target_slice = target.as_column_slice()?;

        // Configure the base builder with the parallel callback if enabled
        let mut builder = self.config.base;

        if builder.parallel.unwrap_or(true) {
            builder = builder.custom_column_transform_pass(column_transform_pass_parallel);
        } else {
            builder.custom_column_transform_pass = None;
        }

        // Delegate execution to the base implementation
        let processor = builder.build()?;
        processor.fit(values_slice, target_slice)
    }

    /// Fit the encoder and immediately encode the training column.
    pub fn fit_transform<I1, I2>(
        self,
        values: &I1,
        target: &I2,
    ) -> Result<(FittedColumn<T>, Vec<T>), EncodeError>
    where
        I1: ColumnInput<T> + ?Sized,
        I2: ColumnInput<T> + ?Sized,
    {
        let values_slice = values.as_column_slice()?;
        let fitted = self.fit(values, target)?;
        let encoded = fitted.transform(values_slice)?;
        Ok((fitted, encoded))
    }
}
