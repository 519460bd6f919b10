//! Parallel execution engine for target encoding operations.
//!
//! ## Purpose
//!
//! This module provides the parallel pass functions that are injected into
//! the `tencode` crate's execution engine. Columns are fitted and
//! transformed across all available CPU cores, speeding up encoding for
//! wide matrices and long columns.
//!
//! ## Design notes
//!
//! * **Implementation**: Drop-in replacements for the sequential passes.
//! * **Parallelism**: Uses `rayon` for data-parallel execution across CPU cores.
//! * **Determinism**: `collect` preserves input order, so parallel output is
//!   bit-identical to sequential output.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Column Fan-Out**: Each column is fitted independently against the
//!   shared target; no state is shared between columns.
//! * **Integration**: Plugs into the `tencode` executor via the pass hooks.
//!
//! ## Invariants
//!
//! * Output column order matches input column order.
//! * Any column failure fails the whole pass with no partial results.
//!
//! ## Non-goals
//!
//! * This module does not validate input data (handled by `tencode`).
//! * This module does not manage thread pools (caller's responsibility).

// External dependencies
use num_traits::Float;
use num_traits::float::FloatCore;
use rayon::prelude::*;

// Export dependencies from tencode crate
use tencode::internals::engine::executor::{EncodeConfig, EncodeExecutor};
use tencode::internals::engine::output::FittedColumn;
use tencode::internals::primitives::errors::EncodeError;

// ============================================================================
// Parallel Pass Functions
// ============================================================================

/// Fit every column of a matrix in parallel against the shared target.
pub fn matrix_fit_pass_parallel<T>(
    columns: &[Vec<T>],
    target: &[T],
    config: &EncodeConfig<T>,
) -> Result<Vec<FittedColumn<T>>, EncodeError>
where
    T: Float + FloatCore + Send + Sync,
{
    columns
        .par_iter()
        .map(|column| EncodeExecutor::fit_column(column, target, config))
        .collect()
}

/// Transform every column of a matrix in parallel.
pub fn matrix_transform_pass_parallel<T>(
    fitted: &[FittedColumn<T>],
    columns: &[Vec<T>],
) -> Result<Vec<Vec<T>>, EncodeError>
where
    T: Float + FloatCore + Send + Sync,
{
    fitted
        .par_iter()
        .zip(columns.par_iter())
        .map(|(column_encoder, column)| column_encoder.transform(column))
        .collect()
}

/// Encode a single column's values in parallel.
pub fn column_transform_pass_parallel<T>(fitted: &FittedColumn<T>, values: &[T]) -> Vec<T>
where
    T: Float + FloatCore + Send + Sync,
{
    values.par_iter().map(|&v| fitted.encode(v)).collect()
}
