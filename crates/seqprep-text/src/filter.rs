//! PairFilter - Length and Ratio Filtering
//!
//! Selects line-aligned sentence pairs fit for training: non-empty source,
//! bounded lengths, and a target/source length ratio inside an asymmetric
//! window. The window discards misaligned or garbage pairs (line-count
//! drift between parallel files) before they reach encoding.
//!
//! @version 0.1.0
//! @author `SeqPrep` Development Team

use seqprep_core::{Error, Result};

/// Lower bound (exclusive) of the target/source length ratio.
pub const MIN_RATIO: f64 = 0.3;

/// Shrink factor applied to the configured ratio for the upper bound.
///
/// The asymmetry against the fixed lower bound is empirically tuned; keep
/// as-is.
pub const RATIO_MARGIN: f64 = 0.98;

/// Maximum sentence length (exclusive), in Unicode scalar values.
pub const MAX_LEN: usize = 1000;

// =============================================================================
// PairFilter
// =============================================================================

/// Filters line-aligned sentence pairs by length and length ratio.
#[derive(Debug, Clone, Copy)]
pub struct PairFilter {
    /// The configured ratio parameter, e.g. 1.2.
    a_raw: f64,
}

impl PairFilter {
    /// Creates a new `PairFilter` with the given ratio parameter.
    #[must_use]
    pub fn new(a_raw: f64) -> Self {
        Self { a_raw }
    }

    /// Returns true if a single pair passes all constraints.
    #[must_use]
    pub fn keep(&self, src: &str, tgt: &str) -> bool {
        let src_len = src.chars().count();
        let tgt_len = tgt.chars().count();
        if src_len == 0 || src_len >= MAX_LEN || tgt_len >= MAX_LEN {
            return false;
        }
        let ratio = tgt_len as f64 / src_len as f64;
        ratio > MIN_RATIO && ratio <= self.a_raw * RATIO_MARGIN
    }

    /// Filters two line-aligned sides into surviving pairs.
    ///
    /// Original line order is preserved; survivors are densely renumbered
    /// from zero by position in the returned vector.
    ///
    /// # Returns
    /// The surviving pairs, or `Misaligned` if the sides differ in line
    /// count (`split` names the offending split in the error).
    pub fn filter(
        &self,
        split: &str,
        src_lines: &[String],
        tgt_lines: &[String],
    ) -> Result<Vec<(String, String)>> {
        if src_lines.len() != tgt_lines.len() {
            return Err(Error::Misaligned {
                split: split.to_string(),
                source_lines: src_lines.len(),
                target_lines: tgt_lines.len(),
            });
        }

        Ok(src_lines
            .iter()
            .zip(tgt_lines)
            .filter(|(s, t)| self.keep(s, t))
            .map(|(s, t)| (s.clone(), t.clone()))
            .collect())
    }
}

impl Default for PairFilter {
    fn default() -> Self {
        Self::new(1.2)
    }
}

// =============================================================================
// Tests
// =============================================================================
