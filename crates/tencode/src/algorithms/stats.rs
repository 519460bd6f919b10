//! Per-category target statistics for a single column.
//!
//! ## Purpose
//!
//! This module accumulates, in one linear pass over `(value, target)` pairs,
//! a `(count, target_sum)` entry per distinct category plus the global count
//! and sum, and answers smoothed-mean queries against the finished table.
//!
//! ## Design notes
//!
//! * **Single pass**: Counts and sums update together, per observation; the
//!   table is never partially updated for a row.
//! * **Owned accumulator**: Each table is an independent value with no shared
//!   state, so one table per matrix column can be built concurrently.
//! * **Storage**: An FNV hash map keyed by [`Category`]; FNV wins on the
//!   small fixed-size keys used here.
//! * **Generics**: Generic over `Float` codes and targets.
//!
//! ## Invariants
//!
//! * Every key present in the table has count >= 1.
//! * `rows()` equals the length of the fitted column.
//! * Table size is bounded by the number of distinct categories, not rows.
//!
//! ## Non-goals
//!
//! * This module does not validate finiteness (handled by the validator).
//! * This module does not own hyperparameters; queries receive them.

// External dependencies
use fnv::FnvHashMap;
use num_traits::Float;
use num_traits::float::FloatCore;

// Internal dependencies
use crate::math::smoothing;
use crate::primitives::errors::EncodeError;
use crate::primitives::key::Category;

// ============================================================================
// Accumulator Entry
// ============================================================================

/// Running `(count, target_sum)` pair for one category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryAccumulator<T> {
    /// Number of rows observed for this category.
    pub count: usize,

    /// Sum of target values over those rows.
    pub sum: T,
}

// ============================================================================
// Statistics Table
// ============================================================================

/// Per-category statistics table plus global statistics for one column.
#[derive(Debug, Clone)]
pub struct CategoryStats<T: FloatCore> {
    /// Per-category accumulators.
    table: FnvHashMap<Category<T>, CategoryAccumulator<T>>,

    /// Total number of rows accumulated.
    total_count: usize,

    /// Sum of the target over all rows.
    total_sum: T,
}

impl<T: Float + FloatCore> CategoryStats<T> {
    /// Accumulate statistics from a column and its matching target vector.
    ///
    /// Fails with [`EncodeError::ShapeMismatch`] before touching any data if
    /// the lengths differ.
    pub fn build(values: &[T], target: &[T]) -> Result<Self, EncodeError> {
        if values.len() != target.len() {
            return Err(EncodeError::ShapeMismatch {
                values_len: values.len(),
                target_len: target.len(),
            });
        }

        let mut table: FnvHashMap<Category<T>, CategoryAccumulator<T>> = FnvHashMap::default();
        let mut total_sum = T::zero();

        for (&value, &t) in values.iter().zip(target) {
            let entry = table
                .entry(Category::new(value))
                .or_insert(CategoryAccumulator {
                    count: 0,
                    sum: T::zero(),
                });
            entry.count += 1;
            entry.sum = entry.sum + t;
            total_sum = total_sum + t;
        }

        Ok(Self {
            table,
            total_count: values.len(),
            total_sum,
        })
    }

    // ========================================================================
    // Query Methods
    // ========================================================================

    /// Global target mean over the whole fitted column.
    ///
    /// An empty table has no meaningful prior; callers reject empty input
    /// before building, so the zero returned here is never observable.
    pub fn global_mean(&self) -> T {
        if self.total_count == 0 {
            return T::zero();
        }
        self.total_sum / T::from(self.total_count).unwrap()
    }

    /// Number of rows accumulated.
    pub fn rows(&self) -> usize {
        self.total_count
    }

    /// Number of distinct categories observed.
    pub fn categories(&self) -> usize {
        self.table.len()
    }

    /// Observation count for a category code (0 if unseen).
    pub fn count(&self, value: T) -> usize {
        self.table
            .get(&Category::new(value))
            .map_or(0, |entry| entry.count)
    }

    /// Iterate over `(key, accumulator)` entries.
    pub fn iter(&self) -> impl Iterator<Item = (&Category<T>, &CategoryAccumulator<T>)> {
        self.table.iter()
    }

    /// Smoothed mean for a category code under the given hyperparameters.
    ///
    /// Unseen codes (count 0) return exactly the global mean.
    pub fn smoothed_mean(&self, value: T, smoothing: T, min_samples_leaf: T) -> T {
        let prior = self.global_mean();
        match self.table.get(&Category::new(value)) {
            None => prior,
            Some(entry) => {
                let count = T::from(entry.count).unwrap();
                let local_mean = entry.sum / count;
                smoothing::smoothed_mean(count, local_mean, prior, smoothing, min_samples_leaf)
            }
        }
    }

    /// Derive the full category -> smoothed-mean map for this table.
    pub fn encodings(&self, smoothing: T, min_samples_leaf: T) -> FnvHashMap<Category<T>, T> {
        let prior = self.global_mean();
        let mut encodings =
            FnvHashMap::with_capacity_and_hasher(self.table.len(), Default::default());

        for (key, entry) in &self.table {
            let count = T::from(entry.count).unwrap();
            let local_mean = entry.sum / count;
            let encoded =
                smoothing::smoothed_mean(count, local_mean, prior, smoothing, min_samples_leaf);
            encodings.insert(*key, encoded);
        }

        encodings
    }
}
