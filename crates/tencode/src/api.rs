//! High-level API for target encoding.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point for target
//! encoding. It implements a fluent builder pattern for configuring the
//! shrinkage parameters and choosing an execution adapter (Column or
//! Matrix).
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder; smoothing is the only required knob.
//! * **Polymorphic**: Uses marker types to transition to specialized adapter builders.
//! * **Validated**: Core parameters are validated during adapter construction.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ## Key concepts
//!
//! * **Execution Adapters**: Column and Matrix modes.
//! * **Configuration Flow**: Builder pattern ending in `.adapter(Adapter::Type)`.
//! * **Validation**: Parameters are validated when `.build()` is called on the adapter.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`TargetEncoderBuilder`] via `TargetEncoder::new()`.
//! 2. Chain configuration methods (`.smoothing()`, `.min_samples_leaf()`).
//! 3. Select an adapter via `.adapter(Adapter::Column)` to get an execution builder.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::adapters::column::ColumnEncoderBuilder;
use crate::adapters::matrix::MatrixEncoderBuilder;
use crate::engine::executor::{ColumnTransformPassFn, MatrixFitPassFn, MatrixTransformPassFn};

// Publicly re-exported types
pub use crate::engine::output::{FittedColumn, FittedMatrix};
pub use crate::primitives::errors::EncodeError;

/// Marker types for selecting execution adapters.
#[allow(non_snake_case)]
pub mod Adapter {
    pub use super::{Column, Matrix};
}

/// Fluent builder for configuring target encoding parameters and execution modes.
#[derive(Debug, Clone)]
pub struct TargetEncoderBuilder<T> {
    /// Steepness of the logistic shrinkage ramp (> 0, required).
    pub smoothing: Option<T>,

    /// Center of the logistic shrinkage ramp (>= 0, default 0).
    pub min_samples_leaf: Option<T>,

    // ======================================
    // DEV
    // ======================================
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

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for TargetEncoderBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> TargetEncoderBuilder<T> {
    /// Select an execution adapter to transition to an execution builder.
    pub fn adapter<A>(self, _adapter: A) -> A::Output
    where
        A: EncoderAdapter<T>,
    {
        A::convert(self)
    }

    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            smoothing: None,
            min_samples_leaf: None,
            custom_column_transform_pass: None,
            custom_matrix_fit_pass: None,
            custom_matrix_transform_pass: None,
            parallel: None,
            duplicate_param: None,
        }
    }

    /// Set the smoothing parameter (ramp steepness, must be positive).
    pub fn smoothing(mut self, smoothing: T) -> Self {
        if self.smoothing.is_some() {
            self.duplicate_param = Some("smoothing");
        }
        self.smoothing = Some(smoothing);
        self
    }

    /// Set the minimum samples leaf (ramp center, must be non-negative).
    pub fn min_samples_leaf(mut self, min_samples_leaf: T) -> Self {
        if self.min_samples_leaf.is_some() {
            self.duplicate_param = Some("min_samples_leaf");
        }
        self.min_samples_leaf = Some(min_samples_leaf);
        self
    }

    // ==========================
    // Development Options
    // ==========================

    /// Set a custom column transform pass function (only for dev)
    #[doc(hidden)]
    pub fn custom_column_transform_pass(mut self, pass: ColumnTransformPassFn<T>) -> Self {
        self.custom_column_transform_pass = Some(pass);
        self
    }

    /// Set a custom matrix fit pass function (only for dev)
    #[doc(hidden)]
    pub fn custom_matrix_fit_pass(mut self, pass: MatrixFitPassFn<T>) -> Self {
        self.custom_matrix_fit_pass = Some(pass);
        self
    }

    /// Set a custom matrix transform pass function (only for dev)
    #[doc(hidden)]
    pub fn custom_matrix_transform_pass(mut self, pass: MatrixTransformPassFn<T>) -> Self {
        self.custom_matrix_transform_pass = Some(pass);
        self
    }

    /// Set parallel execution hint (only for dev)
    #[doc(hidden)]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = Some(parallel);
        self
    }
}

/// Trait for transitioning from a generic builder to an execution builder.
pub trait EncoderAdapter<T: Float> {
    /// The output execution builder.
    type Output;

    /// Convert a generic [`TargetEncoderBuilder`] into a specialized execution builder.
    fn convert(builder: TargetEncoderBuilder<T>) -> Self::Output;
}

/// Marker for single-column encoding.
#[derive(Debug, Clone, Copy)]
pub struct Column;

impl<T: Float> EncoderAdapter<T> for Column {
    type Output = ColumnEncoderBuilder<T>;

    fn convert(builder: TargetEncoderBuilder<T>) -> Self::Output {
        let mut result = ColumnEncoderBuilder::default();

        if let Some(smoothing) = builder.smoothing {
            result.smoothing = Some(smoothing);
        }
        if let Some(msl) = builder.min_samples_leaf {
            result.min_samples_leaf = msl;
        }

        // ======================================
        // DEV
        // ======================================
        if let Some(pass) = builder.custom_column_transform_pass {
            result.custom_column_transform_pass = Some(pass);
        }
        if let Some(p) = builder.parallel {
            result.parallel = Some(p);
        }

        result.duplicate_param = builder.duplicate_param;

        result
    }
}

/// Marker for multi-column matrix encoding.
#[derive(Debug, Clone, Copy)]
pub struct Matrix;

impl<T: Float> EncoderAdapter<T> for Matrix {
    type Output = MatrixEncoderBuilder<T>;

    fn convert(builder: TargetEncoderBuilder<T>) -> Self::Output {
        let mut result = MatrixEncoderBuilder::default();

        if let Some(smoothing) = builder.smoothing {
            result.smoothing = Some(smoothing);
        }
        if let Some(msl) = builder.min_samples_leaf {
            result.min_samples_leaf = msl;
        }

        // ======================================
        // DEV
        // ======================================
        if let Some(pass) = builder.custom_column_transform_pass {
            result.custom_column_transform_pass = Some(pass);
        }
        if let Some(pass) = builder.custom_matrix_fit_pass {
            result.custom_matrix_fit_pass = Some(pass);
        }
        if let Some(pass) = builder.custom_matrix_transform_pass {
            result.custom_matrix_transform_pass = Some(pass);
        }
        if let Some(p) = builder.parallel {
            result.parallel = Some(p);
        }

        result.duplicate_param = builder.duplicate_param;

        result
    }
}
