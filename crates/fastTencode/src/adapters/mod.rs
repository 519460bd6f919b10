//! Parallel processing-mode adapters.
//!
//! ## Purpose
//!
//! This layer wraps the `tencode` adapters with parallel execution support:
//! each builder delegates configuration to its base builder and injects the
//! rayon-backed passes at fit time.

pub mod column;
pub mod matrix;
