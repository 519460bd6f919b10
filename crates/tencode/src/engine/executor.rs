//! Execution engine for target-encoding fit and transform passes.
//!
//! ## Purpose
//!
//! This module provides the execution passes that turn validated inputs into
//! fitted encoders: a single-column fit pass and a sequential multi-column
//! fan-out. It also defines the typed hooks through which extension crates
//! inject parallel replacements for the multi-column passes.
//!
//! ## Design notes
//!
//! * **Hooks**: Pass functions are plain `fn` pointers stored in
//!   [`EncodeConfig`]; the sequential implementations here are the defaults.
//! * **Column independence**: Each column fit owns its statistics table; no
//!   state is shared between columns, so a parallel pass needs no locks.
//! * **Whole-call failure**: Multi-column passes collect `Result`s; any
//!   column failure fails the entire call with no partial results.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * Output column order always matches input column order.
//! * A sequential and an injected parallel pass produce bit-identical output
//!   for the same input.
//!
//! ## Non-goals
//!
//! * This module does not validate input data (handled by `validator`).
//! * This module does not perform parallel execution itself (injected by
//!   extension crates).

// External dependencies
use num_traits::Float;
use num_traits::float::FloatCore;

// Internal dependencies
use crate::algorithms::stats::CategoryStats;
use crate::engine::output::FittedColumn;
use crate::primitives::errors::EncodeError;

// ============================================================================
// Type Definitions
// ============================================================================

/// Signature for a custom single-column transform pass.
#[doc(hidden)]
pub type ColumnTransformPassFn<T> = fn(
    &FittedColumn<T>, // fitted column encoder
    &[T],             // values to encode
) -> Vec<T>; // encoded values

/// Signature for a custom multi-column fit pass.
#[doc(hidden)]
pub type MatrixFitPassFn<T> = fn(
    &[Vec<T>],        // columns
    &[T],             // shared target
    &EncodeConfig<T>, // hyperparameters
) -> Result<Vec<FittedColumn<T>>, EncodeError>;

/// Signature for a custom multi-column transform pass.
#[doc(hidden)]
pub type MatrixTransformPassFn<T> = fn(
    &[FittedColumn<T>], // fitted column encoders
    &[Vec<T>],          // columns to encode
) -> Result<Vec<Vec<T>>, EncodeError>;

// ============================================================================
// Configuration
// ============================================================================

/// Validated configuration for encoding execution.
#[derive(Debug, Clone)]
pub struct EncodeConfig<T> {
    /// Steepness of the logistic shrinkage ramp (> 0).
    pub smoothing: T,

    /// Center of the logistic shrinkage ramp (>= 0).
    pub min_samples_leaf: T,

    // ++++++++++++++++++++++++++++++++++++++
    // +               DEV                  +
    // ++++++++++++++++++++++++++++++++++++++
    /// Custom single-column transform pass (enables parallel execution).
    #[doc(hidden)]
    pub custom_column_transform_pass: Option<ColumnTransformPassFn<T>>,

    /// Custom multi-column fit pass.
    #[doc(hidden)]
    pub custom_matrix_fit_pass: Option<MatrixFitPassFn<T>>,

    /// Custom multi-column transform pass.
    #[doc(hidden)]
    pub custom_matrix_transform_pass: Option<MatrixTransformPassFn<T>>,
}

// ============================================================================
// Executor
// ============================================================================

/// Unified executor for target-encoding passes.
pub struct EncodeExecutor;

impl EncodeExecutor {
    /// Fit one column: accumulate statistics, then derive the encodings map.
    ///
    /// Assumes inputs were validated by the caller; the shape check in the
    /// statistics builder still guards against length mismatches.
    pub fn fit_column<T: Float + FloatCore>(
        values: &[T],
        target: &[T],
        config: &EncodeConfig<T>,
    ) -> Result<FittedColumn<T>, EncodeError> {
        let stats = CategoryStats::build(values, target)?;
        let prior = stats.global_mean();
        let encodings = stats.encodings(config.smoothing, config.min_samples_leaf);

        Ok(FittedColumn::new(
            encodings,
            prior,
            config.smoothing,
            config.min_samples_leaf,
            stats.rows(),
            config.custom_column_transform_pass,
        ))
    }

    /// Fit every column of a matrix against one shared target.
    ///
    /// Delegates to the injected matrix pass when one is configured;
    /// otherwise fits columns sequentially in input order.
    pub fn fit_matrix<T: Float + FloatCore>(
        columns: &[Vec<T>],
        target: &[T],
        config: &EncodeConfig<T>,
    ) -> Result<Vec<FittedColumn<T>>, EncodeError> {
        if let Some(pass) = config.custom_matrix_fit_pass {
            return pass(columns, target, config);
        }

        columns
            .iter()
            .map(|column| Self::fit_column(column, target, config))
            .collect()
    }
}
