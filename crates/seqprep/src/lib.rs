//! # SeqPrep - Bilingual Corpus Preparation for Sequence Models
//!
//! SeqPrep prepares parallel bilingual text (character-level source/target
//! sentence pairs) for sequence-model training:
//!
//! - **Vocabularies**: deterministic per-language character vocabularies
//!   with a reserved pad/unknown symbol at the highest index
//! - **Filtering**: length and length-ratio constraints over line-aligned
//!   corpora, with fatal alignment checking
//! - **Encoding**: character-to-index (or literal-symbol) encoding with an
//!   end marker and formulaic per-example padding
//! - **Datasets**: split-registered corpora behind immutable views, eager
//!   or lazy encoding
//! - **Batching**: dynamic per-batch padding that collates variable-length
//!   examples into rectangular tensors at fetch time
//!
//! # Quick Start
//!
//! ```ignore
//! use seqprep::prelude::*;
//!
//! // Load a pre-staged corpus and pick a split
//! let corpus = IwsltCorpus::load("./data", IndexScheme, CorpusOptions::new())?;
//! let train = corpus.split("stanford_nmt")?;
//!
//! // Batch with dynamic padding: pad sources along their length axis,
//! // targets along theirs, filling with each side's pad index.
//! let src_fill = train.src_vocab().pad_index() as f32;
//! let tgt_fill = train.tgt_vocab().pad_index() as i64;
//! let collate = PadCollate::new((Some(1), Some(0)), (src_fill, tgt_fill));
//!
//! let loader = DataLoader::new(train, collate, 32).shuffle(true);
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
#![allow(clippy::doc_markdown)]

// =============================================================================
// Re-exports
// =============================================================================

pub use seqprep_core::{Error, Result};
pub use seqprep_data as data;
pub use seqprep_tensor::{cat, stack, Scalar, Tensor};
pub use seqprep_text as text;

// =============================================================================
// Prelude
// =============================================================================

/// Common imports for the full pipeline.
pub mod prelude {
    pub use seqprep_core::{Error, Result};
    pub use seqprep_data::prelude::*;
    pub use seqprep_text::prelude::*;
}
