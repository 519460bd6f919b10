//! Processing-mode adapters.
//!
//! ## Purpose
//!
//! This layer wraps the engine in the two user-facing processing modes:
//! single-column encoding and multi-column (matrix) encoding. Each adapter
//! pairs a builder, which collects and validates hyperparameters, with a
//! processor, which runs fit and transform.

pub mod column;
pub mod matrix;
