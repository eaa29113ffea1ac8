//! Encoding - Per-Example Padding and Index Mapping
//!
//! Turns a filtered (source, target) sentence pair into a padded example.
//! Both sides get one end marker appended; the source then grows by a pad
//! count computed from a linear function of its original length, and the
//! target is brought up to the padded source length when shorter - never
//! truncated, never clamped down.
//!
//! Two schemes share the arithmetic: `IndexScheme` maps characters through
//! the vocabularies into tensors, `SymbolScheme` keeps literal symbols for
//! diagnostics.
//!
//! @version 0.1.0
//! @author `SeqPrep` Development Team

use seqprep_core::{Error, Result};
use seqprep_tensor::Tensor;

use crate::vocab::CharVocab;

// =============================================================================
// PadPolicy
// =============================================================================

/// The linear per-example padding formula.
///
/// A source of length `n` gains `floor(n * a + b)` pad symbols after its
/// end marker, where `a` is stored as `a_raw - 1` (paper default
/// `a_raw = 1.2`, `b = 0`). The slack reserves room proportional to the
/// expected output growth.
#[derive(Debug, Clone, Copy)]
pub struct PadPolicy {
    /// Slope, stored as `a_raw - 1`.
    a: f64,
    /// Additive constant.
    b: f64,
}

impl PadPolicy {
    /// Creates a policy from the raw ratio parameter and intercept.
    #[must_use]
    pub fn from_ratio(a_raw: f64, b: f64) -> Self {
        Self { a: a_raw - 1.0, b }
    }

    /// Number of pad symbols appended after the source end marker.
    #[must_use]
    pub fn extra_pad(&self, src_len: usize) -> usize {
        let raw = src_len as f64 * self.a + self.b;
        if raw <= 0.0 {
            0
        } else {
            raw as usize
        }
    }

    /// Full padded source length: original + end marker + extra pad.
    #[must_use]
    pub fn padded_src_len(&self, src_len: usize) -> usize {
        src_len + 1 + self.extra_pad(src_len)
    }
}

impl Default for PadPolicy {
    fn default() -> Self {
        Self::from_ratio(1.2, 0.0)
    }
}

// =============================================================================
// EncodeScheme Trait
// =============================================================================

/// Strategy for turning a filtered pair into a padded example.
///
/// Eager and lazy dataset timings both funnel through this, so one scheme
/// produces identical items regardless of when encoding happens.
pub trait EncodeScheme: Copy + Send + Sync + 'static {
    /// The per-example item type.
    type Item: Clone + Send + Sync;

    /// Encodes and pads one (source, target) pair.
    fn encode(
        &self,
        src: &str,
        tgt: &str,
        src_vocab: &CharVocab,
        tgt_vocab: &CharVocab,
        policy: PadPolicy,
    ) -> Result<Self::Item>;
}

// =============================================================================
// IndexScheme
// =============================================================================

/// Maps characters through the vocabularies into index tensors.
///
/// Items are `(Tensor<f32>` of shape `[1, padded_src_len]`,
/// `Tensor<i64>` of shape `[padded_tgt_len])`.
#[derive(Debug, Clone, Copy, Default)]
pub struct IndexScheme;

impl EncodeScheme for IndexScheme {
    type Item = (Tensor<f32>, Tensor<i64>);

    fn encode(
        &self,
        src: &str,
        tgt: &str,
        src_vocab: &CharVocab,
        tgt_vocab: &CharVocab,
        policy: PadPolicy,
    ) -> Result<Self::Item> {
        let src_len = src.chars().count();
        if src_len == 0 {
            return Err(Error::EmptySource);
        }

        let mut src_pad: Vec<i64> = Vec::with_capacity(policy.padded_src_len(src_len));
        for ch in src.chars() {
            src_pad.push(src_vocab.index_of(ch)? as i64);
        }
        src_pad.push(CharVocab::END as i64);
        src_pad.resize(src_pad.len() + policy.extra_pad(src_len), src_vocab.pad_index() as i64);

        let mut tgt_pad: Vec<i64> = Vec::new();
        for ch in tgt.chars() {
            tgt_pad.push(tgt_vocab.index_of(ch)? as i64);
        }
        tgt_pad.push(CharVocab::END as i64);
        if src_pad.len() > tgt_pad.len() {
            tgt_pad.resize(src_pad.len(), tgt_vocab.pad_index() as i64);
        }

        let src_data: Vec<f32> = src_pad.iter().map(|&v| v as f32).collect();
        let src_tensor = Tensor::from_vec(src_data, &[1, src_pad.len()])?;
        let tgt_len = tgt_pad.len();
        let tgt_tensor = Tensor::from_vec(tgt_pad, &[tgt_len])?;

        Ok((src_tensor, tgt_tensor))
    }
}

// =============================================================================
// SymbolScheme
// =============================================================================

/// Keeps characters as literal symbols, for inspection and diagnostics.
///
/// Same lengths as `IndexScheme`: the end marker is the vocabulary's
/// index-0 character and padding is the reserved `UNK` symbol.
#[derive(Debug, Clone, Copy, Default)]
pub struct SymbolScheme;

impl EncodeScheme for SymbolScheme {
    type Item = (Vec<String>, Vec<String>);

    fn encode(
        &self,
        src: &str,
        tgt: &str,
        src_vocab: &CharVocab,
        tgt_vocab: &CharVocab,
        policy: PadPolicy,
    ) -> Result<Self::Item> {
        let src_len = src.chars().count();
        if src_len == 0 {
            return Err(Error::EmptySource);
        }

        let unk = CharVocab::UNK.to_string();

        let mut src_pad: Vec<String> = src.chars().map(String::from).collect();
        src_pad.push(src_vocab.end_char().to_string());
        src_pad.resize(src_pad.len() + policy.extra_pad(src_len), unk.clone());

        let mut tgt_pad: Vec<String> = tgt.chars().map(String::from).collect();
        tgt_pad.push(tgt_vocab.end_char().to_string());
        if src_pad.len() > tgt_pad.len() {
            tgt_pad.resize(src_pad.len(), unk);
        }

        Ok((src_pad, tgt_pad))
    }
}

// =============================================================================
// Tests
// =============================================================================
