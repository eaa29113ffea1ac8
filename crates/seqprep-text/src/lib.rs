//! SeqPrep Text - Character-Level Bilingual Corpus Preparation
//!
//! This crate prepares parallel bilingual text for sequence-model training:
//!
//! - **Normalization**: fixed character replacements on raw corpus text
//! - **CharVocab**: per-language character vocabularies with a reserved
//!   pad/unknown symbol at the highest index
//! - **PairFilter**: length and length-ratio filtering of aligned pairs
//! - **Encoding**: index or symbol encoding with formulaic per-example
//!   padding
//! - **Datasets**: split-registered corpora exposing padded examples
//!
//! # Example
//!
//! ```ignore
//! use seqprep_text::prelude::*;
//!
//! let corpus = IwsltCorpus::load("./data", IndexScheme, CorpusOptions::new())?;
//! let train = corpus.split("stanford_nmt")?;
//! let (src, tgt) = train.item(0)?;
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
#![allow(clippy::len_without_is_empty)]

// =============================================================================
// Module Declarations
// =============================================================================

pub mod datasets;
pub mod encode;
pub mod filter;
pub mod normalize;
pub mod vocab;

// =============================================================================
// Re-exports
// =============================================================================

pub use datasets::{CorpusOptions, IwsltCorpus, IwsltDataset, PadTiming, SPLITS};
pub use encode::{EncodeScheme, IndexScheme, PadPolicy, SymbolScheme};
pub use filter::{PairFilter, MAX_LEN, MIN_RATIO, RATIO_MARGIN};
pub use normalize::{normalize, REPLACE};
pub use vocab::CharVocab;

// =============================================================================
// Prelude
// =============================================================================

/// Common imports for corpus preparation.
pub mod prelude {
    pub use crate::{
        normalize, CharVocab, CorpusOptions, EncodeScheme, IndexScheme, IwsltCorpus,
        IwsltDataset, PadPolicy, PadTiming, PairFilter, SymbolScheme,
    };
    pub use seqprep_data::prelude::*;
}
