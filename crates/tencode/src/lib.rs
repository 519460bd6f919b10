//! # Target encoding for categorical features
//!
//! A fast, strongly-typed implementation of smoothed target (mean) encoding
//! for **Rust**.
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
//! The blend for a category observed `n` times is:
//!
//! ```text
//! w = 1 / (1 + exp(-(n - min_samples_leaf) / smoothing))
//! encoding = w * local_mean + (1 - w) * global_mean
//! ```
//!
//! ## Quick Start
//!
//! ### Single column
//!
//! ```rust
//! use tencode::prelude::*;
//!
//! let values = vec![0.0, 0.0, 1.0, 1.0, 1.0];
//! let target = vec![1.0, 0.0, 1.0, 1.0, 0.0];
//!
//! // Build the encoder
//! let encoder = TargetEncoder::new()
//!     .smoothing(1.0)         // Ramp steepness (required)
//!     .min_samples_leaf(1.0)  // Ramp center
//!     .adapter(Column)
//!     .build()?;
//!
//! // Fit on training data, then encode
//! let fitted = encoder.fit(&values, &target)?;
//! let encoded = fitted.transform(&values)?;
//!
//! // Unseen categories fall back to the global target mean
//! assert_eq!(fitted.encode(7.0), fitted.prior());
//! # Result::<(), EncodeError>::Ok(())
//! ```
//!
//! ### Multiple columns
//!
//! ```rust
//! use tencode::prelude::*;
//!
//! let columns = vec![
//!     vec![0.0, 1.0, 0.0, 1.0],
//!     vec![2.0, 2.0, 3.0, 3.0],
//! ];
//! let target = vec![1.0, 0.0, 1.0, 1.0];
//!
//! let encoder = TargetEncoder::new()
//!     .smoothing(1.0)
//!     .adapter(Matrix)
//!     .build()?;
//!
//! let fitted = encoder.fit(&columns, &target)?;
//! let encoded = fitted.transform(&columns)?;
//! assert_eq!(encoded.len(), 2);
//! # Result::<(), EncodeError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! `fit` and `transform` return `Result<_, EncodeError>`. Failures are
//! whole-call: a bad input produces an error and no partial output.
//!
//! ```rust
//! use tencode::prelude::*;
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

// Layer 1: Primitives - data structures and basic utilities.
mod primitives;

// Layer 2: Math - pure mathematical functions.
mod math;

// Layer 3: Algorithms - category statistics accumulation.
mod algorithms;

// Layer 4: Engine - orchestration and execution control.
mod engine;

// Layer 5: Adapters - execution mode adapters.
mod adapters;

// High-level fluent API for target encoding.
mod api;

// Standard target encoding prelude.
pub mod prelude {
    pub use crate::api::{
        Adapter::{Column, Matrix},
        EncodeError, FittedColumn, FittedMatrix, TargetEncoderBuilder as TargetEncoder,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod adapters {
        pub use crate::adapters::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
