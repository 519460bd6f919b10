//! Input abstractions for target encoding.
//!
//! ## Purpose
//!
//! This module provides a unified abstraction for encoder inputs, allowing
//! `fit` and `transform` to process multiple data formats (slices, vectors,
//! ndarray) through a single interface.
//!
//! ## Design notes
//!
//! * **Zero-copy where possible**: One-dimensional inputs provide direct
//!   slice access to underlying data buffers.
//! * **Interoperability**: Bridges standard Rust collections with
//!   specialized numerical libraries.
//! * **Fail-fast validation**: Ensures memory continuity for
//!   one-dimensional ndarray types before processing.
//!
//! ## Key concepts
//!
//! * **ColumnInput Trait**: Types usable as a single column or target.
//! * **MatrixInput Trait**: Types usable as a multi-column matrix. Two
//!   dimensional ndarray inputs are row-major (rows are samples), while
//!   nested vectors are column-major (each inner vector is one column).
//!
//! ## Invariants
//!
//! * Returned slices must represent all elements in the input container.
//! * One-dimensional inputs must be contiguous in memory; non-contiguous
//!   inputs return an error.
//!
//! ## Non-goals
//!
//! * This module does not perform data cleaning or imputation.
//! * This module does not handle missing values.

// External dependencies
use ndarray::{ArrayBase, Axis, Data, Ix1, Ix2};
use num_traits::Float;

// Export dependencies from tencode crate
use tencode::internals::primitives::errors::EncodeError;

/// Trait for types that can be used as a single column or target input.
pub trait ColumnInput<T: Float> {
    /// Convert the input to a contiguous slice.
    fn as_column_slice(&self) -> Result<&[T], EncodeError>;
}

impl<T: Float> ColumnInput<T> for [T] {
    fn as_column_slice(&self) -> Result<&[T], EncodeError> {
        Ok(self)
    }
}

impl<T: Float> ColumnInput<T> for Vec<T> {
    fn as_column_slice(&self) -> Result<&[T], EncodeError> {
        Ok(self.as_slice())
    }
}

impl<T: Float, S> ColumnInput<T> for ArrayBase<S, Ix1>
where
    S: Data<Elem = T>,
{
    fn as_column_slice(&self) -> Result<&[T], EncodeError> {
        self.as_slice().ok_or_else(|| {
            EncodeError::InvalidInput("ndarray input must be contiguous in memory".to_string())
        })
    }
}

/// Trait for types that can be used as a multi-column matrix input.
pub trait MatrixInput<T: Float> {
    /// Convert the input to owned column-major data.
    fn to_columns(&self) -> Result<Vec<Vec<T>>, EncodeError>;
}

impl<T: Float> MatrixInput<T> for [Vec<T>] {
    fn to_columns(&self) -> Result<Vec<Vec<T>>, EncodeError> {
        Ok(self.to_vec())
    }
}

impl<T: Float> MatrixInput<T> for Vec<Vec<T>> {
    fn to_columns(&self) -> Result<Vec<Vec<T>>, EncodeError> {
        Ok(self.clone())
    }
}

impl<T: Float, S> MatrixInput<T> for ArrayBase<S, Ix2>
where
    S: Data<Elem = T>,
{
    fn to_columns(&self) -> Result<Vec<Vec<T>>, EncodeError> {
        Ok(self
            .axis_iter(Axis(1))
            .map(|column| column.to_vec())
            .collect())
    }
}
