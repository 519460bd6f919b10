//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical functions. It depends only on the
//! primitives layer and has no state of its own.

/// Smoothing weight functions.
pub mod smoothing;
