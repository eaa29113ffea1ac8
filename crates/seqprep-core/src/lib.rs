//! SeqPrep Core - Foundation Layer for the SeqPrep Toolkit
//!
//! This crate provides the shared abstractions that underpin the SeqPrep
//! bilingual corpus preparation toolkit: the unified error type and the
//! `Result` alias every other crate builds on.
//!
//! # Example
//! ```rust
//! use seqprep_core::{Error, Result};
//!
//! fn checked(index: usize, len: usize) -> Result<usize> {
//!     if index < len {
//!         Ok(index)
//!     } else {
//!         Err(Error::IndexOutOfBounds { index, len })
//!     }
//! }
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

pub mod error;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{Error, Result};
