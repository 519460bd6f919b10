//! # Fast target encoding for categorical features
//!
//! A fast, strongly-typed implementation of smoothed target (mean) encoding
//! for **Rust**, with parallel execution built on `rayon` and native
//! `ndarray` support.
//!
//! ## What is target encoding?
//!
//! Target encoding replaces each categorical value with a statistic of the
//! numeric target over the rows sharing that category. To avoid overfitting
//! rare categories, the per-category mean is shrunk toward the global target
//! mean with a logistic ramp: categories with many observations keep their
//! local mean, categories with few observations are pulled toward the prior.
//! Categories never seen during fitting encode to the global mean exactly.
//!
//! ## Quick Start
//!
//! ### Typical Use
//!
//! ```rust
//! use fastTencode::prelude::*;
//! use ndarray::{array, Array1, Array2};
//!
//! // Rows are samples, columns are categorical features
//! let data: Array2<f64> = array![
//!     [0.0, 2.0],
//!     [1.0, 2.0],
//!     [0.0, 3.0],
//!     [1.0, 3.0],
//! ];
//! let target: Array1<f64> = array![1.0, 0.0, 1.0, 1.0];
//!
//! // Build the encoder with parallel execution (default)
//! let encoder = TargetEncoder::new()
//!     .smoothing(1.0)         // Ramp steepness (required)
//!     .min_samples_leaf(1.0)  // Ramp center
//!     .adapter(Matrix)        // Parallel by default
//!     .build()?;
//!
//! // Fit the encoder, then transform the data
//! let fitted = encoder.fit(&data, &target)?;
//! let encoded = fitted.transform(&data.to_columns()?)?;
//! assert_eq!(encoded.len(), 2);
//! # Result::<(), EncodeError>::Ok(())
//! ```
//!
//! ### Single Column
//!
//! ```rust
//! use fastTencode::prelude::*;
//!
//! let values = vec![0.0, 0.0, 1.0, 1.0, 1.0];
//! let target = vec![1.0, 0.0, 1.0, 1.0, 0.0];
//!
//! let encoder = TargetEncoder::new()
//!     .smoothing(1.0)
//!     .adapter(Column)
//!     .build()?;
//!
//! let fitted = encoder.fit(&values, &target)?;
//!
//! // Unseen categories fall back to the global target mean
//! assert_eq!(fitted.encode(7.0), fitted.prior());
//! # Result::<(), EncodeError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! `fit` and `transform` return `Result<_, EncodeError>`. Failures are
//! whole-call: a bad input produces an error and no partial output.
//!
//! ```rust
//! use fastTencode::prelude::*;
//! # let values = vec![0.0, 1.0];
//! # let target = vec![1.0, 0.0];
//!
//! let encoder = TargetEncoder::new()
//!     .smoothing(1.0)
//!     .adapter(Column)
//!     .build()?;
//!
//! match encoder.fit(&values, &target) {
//!     Ok(fitted) => println!("prior = {}", fitted.prior()),
//!     Err(e) => eprintln!("fit failed: {}", e),
//! }
//! # Result::<(), EncodeError>::Ok(())
//! ```
//!
//! ### ndarray Integration
//!
//! `fastTencode` supports [ndarray](https://docs.rs/ndarray) natively:
//! `fit` accepts `&Array1`/`&Array2` alongside slices and vectors, with
//! zero-copy access for contiguous one-dimensional inputs.

#![allow(non_snake_case)]

// Parallel execution engine.
mod engine;

// Parallel execution mode adapters.
mod adapters;

// High-level fluent API for target encoding.
mod api;

// Input data handling.
mod input;

// Standard fastTencode prelude.
pub mod prelude {
    pub use crate::api::{
        Adapter::{Column, Matrix},
        EncodeError, FittedColumn, FittedMatrix, TargetEncoderBuilder as TargetEncoder,
    };
    pub use crate::input::{ColumnInput, MatrixInput};
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod adapters {
        pub use crate::adapters::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
    pub mod input {
        pub use crate::input::*;
    }
}
