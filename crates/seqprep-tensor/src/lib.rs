//! SeqPrep Tensor - Batch Container for Prepared Text
//!
//! Provides the opaque numeric container SeqPrep pipelines produce: a
//! contiguous N-dimensional array with construction, fill, concatenation,
//! and stacking. Model frameworks consume these containers; SeqPrep never
//! computes on them.
//!
//! # Example
//! ```rust
//! use seqprep_tensor::{stack, Tensor};
//!
//! let a = Tensor::from_vec(vec![1.0f32, 2.0], &[2]).unwrap();
//! let b = Tensor::from_vec(vec![3.0f32, 4.0], &[2]).unwrap();
//! let batch = stack(&[a, b]).unwrap();
//! assert_eq!(batch.shape(), &[2, 2]);
//! ```
//!
//! @version 0.1.0
//! @author `SeqPrep` Development Team

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Data-pipeline allowances
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::return_self_not_must_use)]

// =============================================================================
// Module Declarations
// =============================================================================

pub mod tensor;

// =============================================================================
// Re-exports
// =============================================================================

pub use tensor::{cat, stack, Scalar, Tensor};
