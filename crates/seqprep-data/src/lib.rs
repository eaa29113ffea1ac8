//! SeqPrep Data - Data Loading Utilities
//!
//! Provides the data loading infrastructure SeqPrep pipelines feed into:
//! - Dataset trait for defining data sources
//! - `DataLoader` for batched iteration with parallel item fetch
//! - Samplers for controlling data access order
//! - `PadCollate` for dynamic per-batch padding of variable-length examples
//!
//! # Example
//!
//! ```ignore
//! use seqprep_data::prelude::*;
//!
//! let collate = PadCollate::new((Some(1), Some(0)), (pad_src, pad_tgt));
//! let loader = DataLoader::new(dataset, collate, 32)
//!     .shuffle(true)
//!     .num_workers(4);
//!
//! for batch in loader.iter() {
//!     let (sources, targets) = batch?;
//!     // Feed the model
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
#![allow(clippy::iter_without_into_iter)]
#![allow(clippy::type_repetition_in_bounds)]

// =============================================================================
// Module Declarations
// =============================================================================

pub mod collate;
pub mod dataloader;
pub mod dataset;
pub mod sampler;

// =============================================================================
// Re-exports
// =============================================================================

pub use collate::{pad_and_stack, pad_tensor, Collate, PadCollate};
pub use dataloader::{DataLoader, DataLoaderIter};
pub use dataset::{Dataset, InMemoryDataset, MapDataset};
pub use sampler::{RandomSampler, Sampler, SequentialSampler};

// =============================================================================
// Prelude
// =============================================================================

/// Common imports for data loading.
pub mod prelude {
    pub use crate::{
        Collate, DataLoader, DataLoaderIter, Dataset, InMemoryDataset, MapDataset, PadCollate,
        RandomSampler, Sampler, SequentialSampler,
    };
    pub use seqprep_tensor::Tensor;
}
