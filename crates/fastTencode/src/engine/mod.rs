//! Parallel execution layer.
//!
//! ## Purpose
//!
//! This layer provides the rayon-backed pass functions that are injected
//! into the `tencode` execution engine through its pass-function hooks.

pub mod executor;
