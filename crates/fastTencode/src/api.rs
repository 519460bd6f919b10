//! High-level API for target encoding with parallel execution support.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point for target
//! encoding with parallel execution capabilities. It extends the `tencode`
//! API with adapters that utilize all available CPU cores.
//!
//! ## Design notes
//!
//! * **Fluent Integration**: Re-uses the base `tencode` builder pattern.
//! * **Parallel-First**: Defaults to parallel execution where beneficial.
//! * **Transparent**: Marker types (Column, Matrix) select the parallel builders.
//!
//! ## Key concepts
//!
//! * **Parallel Support**: Uses `rayon` for CPU acceleration.
//! * **Extended Adapters**: Wraps core adapters with parallel implementation logic.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`TargetEncoderBuilder`] via `TargetEncoder::new()`.
//! 2. Chain configuration methods (`.smoothing()`, `.min_samples_leaf()`).
//! 3. Select an adapter via `.adapter(Column)` to get a parallel execution builder.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::adapters::column::ParallelColumnEncoderBuilder;
use crate::adapters::matrix::ParallelMatrixEncoderBuilder;

// Import base marker types for delegation
use tencode::internals::api::Column as BaseColumn;
use tencode::internals::api::Matrix as BaseMatrix;

// Publicly re-exported types
pub use tencode::internals::api::{EncoderAdapter, TargetEncoderBuilder};
pub use tencode::internals::engine::output::{FittedColumn, FittedMatrix};
pub use tencode::internals::primitives::errors::EncodeError;

// ============================================================================
// Adapter Module
// ============================================================================

/// Adapter selection namespace.
#[allow(non_snake_case)]
pub mod Adapter {
    pub use super::{Column, Matrix};
}

// ============================================================================
// Adapter Marker Types
// ============================================================================

/// Marker for parallel single-column encoding.
#[derive(Debug, Clone, Copy)]
pub struct Column;

impl<T: Float> EncoderAdapter<T> for Column {
    type Output = ParallelColumnEncoderBuilder<T>;

    fn convert(builder: TargetEncoderBuilder<T>) -> Self::Output {
        // Determine parallel mode: user choice OR default to true for fastTencode
        let parallel = builder.parallel.unwrap_or(true);

        // Delegate to base implementation to create base builder
        let mut base = <BaseColumn as EncoderAdapter<T>>::convert(builder);
        base = base.parallel(parallel);

        // Wrap with extension fields
        ParallelColumnEncoderBuilder { base }
    }
}

/// Marker for parallel multi-column matrix encoding.
#[derive(Debug, Clone, Copy)]
pub struct Matrix;

impl<T: Float> EncoderAdapter<T> for Matrix {
    type Output = ParallelMatrixEncoderBuilder<T>;

    fn convert(builder: TargetEncoderBuilder<T>) -> Self::Output {
        // Determine parallel mode: user choice OR default to true for fastTencode
        let parallel = builder.parallel.unwrap_or(true);

        // Delegate to base implementation to create base builder
        let mut base = <BaseMatrix as EncoderAdapter<T>>::convert(builder);
        base = base.parallel(parallel);

        // Wrap with extension fields
        ParallelMatrixEncoderBuilder {
            base,
            threads: None,
        }
    }
}
