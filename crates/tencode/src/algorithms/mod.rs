//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer provides the core accumulation algorithm: one pass over a
//! column collecting per-category and global target statistics.

/// Per-category statistics accumulation.
pub mod stats;
