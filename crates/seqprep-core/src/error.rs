//! Error Types - SeqPrep Core Error Handling
//!
//! Provides the unified error type for all operations within the SeqPrep
//! toolkit, covering corpus loading, corpus alignment, vocabulary lookup,
//! container shape checks, and item access.
//!
//! # Key Features
//! - Unified error type for all SeqPrep operations
//! - Detailed error context for debugging
//! - Integration with `std::error::Error`
//!
//! @version 0.1.0
//! @author `SeqPrep` Development Team

use thiserror::Error;

// =============================================================================
// Error Types
// =============================================================================

/// The main error type for SeqPrep operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A corpus file could not be read.
    #[error("Failed to load corpus file {path}: {reason}")]
    CorpusLoad {
        /// Path of the file that failed to load.
        path: String,
        /// Why the load failed.
        reason: String,
    },

    /// The two half-files of a split disagree on line count.
    #[error("Misaligned corpora in split '{split}': {source_lines} source lines vs {target_lines} target lines")]
    Misaligned {
        /// Name of the split.
        split: String,
        /// Line count of the source half-file.
        source_lines: usize,
        /// Line count of the target half-file.
        target_lines: usize,
    },

    /// A split name is not present in the split registry.
    #[error("Unknown split: '{name}'")]
    UnknownSplit {
        /// The requested split name.
        name: String,
    },

    /// A character was not seen when the vocabulary was built.
    #[error("Character {ch:?} is not in the vocabulary")]
    UnknownChar {
        /// The out-of-vocabulary character.
        ch: char,
    },

    /// A zero-length source sentence reached the encoder.
    ///
    /// Unreachable when inputs pass through the pair filter first.
    #[error("Empty source sentence reached the encoder")]
    EmptySource,

    /// Item index outside `[0, len)`.
    #[error("Index out of bounds: index {index} for dataset of length {len}")]
    IndexOutOfBounds {
        /// The invalid index.
        index: usize,
        /// Length of the indexed collection.
        len: usize,
    },

    /// Shape mismatch between containers.
    #[error("Shape mismatch: expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        /// The expected shape.
        expected: Vec<usize>,
        /// The actual shape.
        actual: Vec<usize>,
    },

    /// Invalid dimension index for a container.
    #[error("Invalid dimension: index {index} for container with {ndim} dimensions")]
    InvalidDimension {
        /// The invalid dimension index.
        index: usize,
        /// Number of dimensions in the container.
        ndim: usize,
    },

    /// A declared but intentionally unimplemented operation was invoked.
    #[error("Not implemented: {feature}")]
    NotImplemented {
        /// The unimplemented feature.
        feature: String,
    },
}

// =============================================================================
// Result Type
// =============================================================================

/// A specialized Result type for SeqPrep operations.
pub type Result<T> = core::result::Result<T, Error>;

// =============================================================================
// Helper Functions
// =============================================================================

impl Error {
    /// Creates a new corpus load error.
    #[must_use]
    pub fn corpus_load(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::CorpusLoad {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Creates a new shape mismatch error.
    #[must_use]
    pub fn shape_mismatch(expected: &[usize], actual: &[usize]) -> Self {
        Self::ShapeMismatch {
            expected: expected.to_vec(),
            actual: actual.to_vec(),
        }
    }

    /// Creates a new not-implemented error.
    #[must_use]
    pub fn not_implemented(feature: impl Into<String>) -> Self {
        Self::NotImplemented {
            feature: feature.into(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
