//! Fitted encoder structures and transform surfaces.
//!
//! ## Purpose
//!
//! This module defines the artifacts produced by a fit: [`FittedColumn`]
//! holds one column's learned encodings, and [`FittedMatrix`] holds a
//! fitted column per input column. Both expose `transform` to encode new
//! data with the learned statistics frozen.
//!
//! ## Key concepts
//!
//! * **Fallback prior**: Categories never seen during fit encode to the
//!   global target mean exactly.
//! * **Frozen state**: Transforming never mutates the fitted encoder;
//!   repeated transforms of the same input are bit-identical.
//!
//! ## Invariants
//!
//! * `transform` output length equals input length (column) or input
//!   column count (matrix), with row order preserved.
//! * Transform rejects non-finite inputs before encoding anything.

// External dependencies
use fnv::FnvHashMap;
use num_traits::Float;
use num_traits::float::FloatCore;
use std::fmt;

// Internal dependencies
use crate::engine::executor::{ColumnTransformPassFn, MatrixTransformPassFn};
use crate::engine::validator::Validator;
use crate::primitives::errors::EncodeError;
use crate::primitives::key::Category;

// ============================================================================
// Fitted column
// ============================================================================

/// A single-column encoder with frozen category statistics.
#[derive(Debug, Clone)]
pub struct FittedColumn<T> {
    /// Precomputed smoothed encoding per observed category.
    encodings: FnvHashMap<Category<T>, T>,

    /// Global target mean, used for unseen categories.
    prior: T,

    /// Smoothing used at fit time.
    smoothing: T,

    /// Ramp center used at fit time.
    min_samples_leaf: T,

    /// Number of training rows seen at fit time.
    rows: usize,

    /// Injected transform pass, if any.
    transform_pass: Option<ColumnTransformPassFn<T>>,
}

impl<T: Float + FloatCore> FittedColumn<T> {
    pub(crate) fn new(
        encodings: FnvHashMap<Category<T>, T>,
        prior: T,
        smoothing: T,
        min_samples_leaf: T,
        rows: usize,
        transform_pass: Option<ColumnTransformPassFn<T>>,
    ) -> Self {
        FittedColumn {
            encodings,
            prior,
            smoothing,
            min_samples_leaf,
            rows,
            transform_pass,
        }
    }

    /// Global target mean learned at fit time.
    pub fn prior(&self) -> T {
        self.prior
    }

    /// Smoothing hyperparameter used at fit time.
    pub fn smoothing(&self) -> T {
        self.smoothing
    }

    /// Ramp center hyperparameter used at fit time.
    pub fn min_samples_leaf(&self) -> T {
        self.min_samples_leaf
    }

    /// Number of distinct categories observed during fit.
    pub fn n_categories(&self) -> usize {
        self.encodings.len()
    }

    /// Number of training rows seen during fit.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Encode one category value. Unseen categories map to the prior.
    pub fn encode(&self, value: T) -> T {
        self.encodings
            .get(&Category::new(value))
            .copied()
            .unwrap_or(self.prior)
    }

    /// Encode a slice of category values.
    ///
    /// Rejects non-finite inputs up front; on error nothing is encoded.
    pub fn transform(&self, values: &[T]) -> Result<Vec<T>, EncodeError> {
        Validator::validate_values(values, "values")?;

        if let Some(pass) = self.transform_pass {
            return Ok(pass(self, values));
        }

        Ok(values.iter().map(|&v| self.encode(v)).collect())
    }
}

impl<T: Float + FloatCore + fmt::Display> fmt::Display for FittedColumn<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Fitted column encoder:")?;
        writeln!(f, "  Categories: {}", self.n_categories())?;
        writeln!(f, "  Rows: {}", self.rows)?;
        writeln!(f, "  Prior: {}", self.prior)?;
        writeln!(f, "  Smoothing: {}", self.smoothing)?;
        write!(f, "  Min samples leaf: {}", self.min_samples_leaf)
    }
}

// ============================================================================
// Fitted matrix
// ============================================================================

/// A multi-column encoder holding one fitted column per input column.
#[derive(Debug, Clone)]
pub struct FittedMatrix<T> {
    /// Fitted encoders in input column order.
    columns: Vec<FittedColumn<T>>,

    /// Injected matrix transform pass, if any.
    transform_pass: Option<MatrixTransformPassFn<T>>,
}

impl<T: Float + FloatCore> FittedMatrix<T> {
    pub(crate) fn new(
        columns: Vec<FittedColumn<T>>,
        transform_pass: Option<MatrixTransformPassFn<T>>,
    ) -> Self {
        FittedMatrix {
            columns,
            transform_pass,
        }
    }

    /// Number of fitted columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether this encoder holds no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// The fitted encoder for column `index`, if it exists.
    pub fn column(&self, index: usize) -> Option<&FittedColumn<T>> {
        self.columns.get(index)
    }

    /// All fitted column encoders in input order.
    pub fn columns(&self) -> &[FittedColumn<T>] {
        &self.columns
    }

    /// Encode a matrix column by column.
    ///
    /// The input must have exactly as many columns as were fitted, all of
    /// the same length. Any column failure fails the whole call with no
    /// partial output.
    pub fn transform(&self, data: &[Vec<T>]) -> Result<Vec<Vec<T>>, EncodeError> {
        Validator::validate_transform_columns(self.columns.len(), data.len())?;

        if let Some(first) = data.first() {
            for (j, column) in data.iter().enumerate() {
                if column.len() != first.len() {
                    return Err(EncodeError::RaggedMatrix {
                        expected_rows: first.len(),
                        column: j,
                        got: column.len(),
                    });
                }
            }
        }

        if let Some(pass) = self.transform_pass {
            return pass(&self.columns, data);
        }

        self.columns
            .iter()
            .zip(data.iter())
            .map(|(fitted, column)| fitted.transform(column))
            .collect()
    }
}

impl<T: Float + FloatCore + fmt::Display> fmt::Display for FittedMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Fitted matrix encoder:")?;
        write!(f, "  Columns: {}", self.columns.len())?;
        for (i, column) in self.columns.iter().enumerate() {
            write!(
                f,
                "\n  Column {}: {} categories, prior {}",
                i,
                column.n_categories(),
                column.prior()
            )?;
        }
        Ok(())
    }
}
