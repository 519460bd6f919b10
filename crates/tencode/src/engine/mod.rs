//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer orchestrates encoding: input validation, the fit/transform
//! execution passes, and the read-only fitted models handed back to callers.

/// Input and parameter validation.
pub mod validator;

/// Fit/transform execution passes and configuration.
pub mod executor;

/// Fitted encoder models.
pub mod output;
