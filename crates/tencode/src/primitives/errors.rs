//! Error types for target encoding operations.
//!
//! ## Purpose
//!
//! This module defines error conditions that can occur during target
//! encoding, including input validation, parameter constraints, and
//! matrix-shape mismatches.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., actual vs. expected lengths).
//! * **Deferred**: Errors are often caught and stored during builder configuration.
//! * **Synchronous**: All errors surface from the call that triggers them;
//!   nothing is retried internally.
//!
//! ## Key concepts
//!
//! 1. **Input validation**: Empty inputs, mismatched lengths, non-finite values.
//! 2. **Parameter validation**: Missing, invalid, or duplicated hyperparameters.
//! 3. **Matrix constraints**: Ragged columns and fitted/input column-count mismatches.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Error messages are consistent in tone and formatting.
//! * Numeric values in errors use the same types as the public API.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// External dependencies
use std::error::Error;
use std::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for target encoding operations.
#[derive(Debug, Clone, PartialEq)]
pub enum EncodeError {
    /// Zero rows were supplied to `fit`; encoding requires at least 1 row.
    EmptyInput,

    /// Generic invalid input error with a descriptive message.
    InvalidInput(String),

    /// Values and target must have the same number of elements.
    ShapeMismatch {
        /// Number of elements in the category-value array.
        values_len: usize,
        /// Number of elements in the target array.
        target_len: usize,
    },

    /// A matrix column does not match the target length.
    RaggedMatrix {
        /// Expected number of rows (the target length).
        expected_rows: usize,
        /// Index of the offending column.
        column: usize,
        /// Number of rows found in that column.
        got: usize,
    },

    /// Transform received a different column count than the fitted encoder.
    ColumnCountMismatch {
        /// Number of fitted column encoders.
        fitted: usize,
        /// Number of columns in the supplied data.
        got: usize,
    },

    /// A category or target value cannot be encoded (NaN or infinity).
    UnsupportedValue(String),

    /// Smoothing must be strictly positive and finite.
    InvalidSmoothing(f64),

    /// Minimum samples leaf must be non-negative and finite.
    InvalidMinSamplesLeaf(f64),

    /// A required parameter was never set on the builder.
    MissingParameter {
        /// Name of the missing parameter.
        parameter: &'static str,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for EncodeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Input arrays are empty"),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::ShapeMismatch {
                values_len,
                target_len,
            } => {
                write!(
                    f,
                    "Length mismatch: values has {values_len} rows, target has {target_len}"
                )
            }
            Self::RaggedMatrix {
                expected_rows,
                column,
                got,
            } => {
                write!(
                    f,
                    "Ragged matrix: column {column} has {got} rows, expected {expected_rows}"
                )
            }
            Self::ColumnCountMismatch { fitted, got } => {
                write!(
                    f,
                    "Column count mismatch: encoder was fitted on {fitted} columns, data has {got}"
                )
            }
            Self::UnsupportedValue(s) => write!(f, "Unsupported value: {s}"),
            Self::InvalidSmoothing(s) => {
                write!(f, "Invalid smoothing: {s} (must be > 0 and finite)")
            }
            Self::InvalidMinSamplesLeaf(m) => {
                write!(f, "Invalid min_samples_leaf: {m} (must be >= 0 and finite)")
            }
            Self::MissingParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' is required and has no default. Set it on the builder before build()."
                )
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

impl Error for EncodeError {}
