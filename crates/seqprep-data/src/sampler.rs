//! Samplers - Data Access Patterns
//!
//! Provides the index-ordering strategies the loader draws from. A sampler
//! produces one full pass of indices per call; the random sampler reshuffles
//! on every pass.
//!
//! @version 0.1.0
//! @author `SeqPrep` Development Team

use rand::seq::SliceRandom;

// =============================================================================
// Sampler Trait
// =============================================================================

/// Produces the index order for one pass over a dataset.
pub trait Sampler: Send + Sync {
    /// Returns the number of indices per pass.
    fn len(&self) -> usize;

    /// Returns true if a pass yields no indices.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Produces the indices for one pass.
    fn indices(&self) -> Vec<usize>;
}

// =============================================================================
// SequentialSampler
// =============================================================================

/// Yields `0..len` in order.
pub struct SequentialSampler {
    len: usize,
}

impl SequentialSampler {
    /// Creates a new `SequentialSampler`.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self { len }
    }
}

impl Sampler for SequentialSampler {
    fn len(&self) -> usize {
        self.len
    }

    fn indices(&self) -> Vec<usize> {
        (0..self.len).collect()
    }
}

// =============================================================================
// RandomSampler
// =============================================================================

/// Yields a fresh permutation of `0..len` on every pass.
pub struct RandomSampler {
    len: usize,
}

impl RandomSampler {
    /// Creates a new `RandomSampler`.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self { len }
    }
}

impl Sampler for RandomSampler {
    fn len(&self) -> usize {
        self.len
    }

    fn indices(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..self.len).collect();
        indices.shuffle(&mut rand::thread_rng());
        indices
    }
}

// =============================================================================
// Tests
// =============================================================================
