//! CharVocab - Character to Index Mapping
//!
//! A per-language character vocabulary built from normalized corpus text:
//! distinct characters sorted by code point take indices `0..n`, then the
//! reserved pad symbol is appended at index `n`. The mapping is immutable
//! once built and deterministic for a fixed corpus.
//!
//! @version 0.1.0
//! @author `SeqPrep` Development Team

use std::collections::{BTreeSet, HashMap};

use seqprep_core::{Error, Result};

// =============================================================================
// CharVocab
// =============================================================================

/// An ordered, injective mapping from character to index.
///
/// The reserved symbol [`CharVocab::UNK`] always sits at the highest index
/// and deliberately plays a dual role: it is both the padding fill and the
/// out-of-vocabulary marker. There is exactly one reserved slot for both
/// purposes.
#[derive(Debug, Clone)]
pub struct CharVocab {
    /// Characters in index order; the last entry is always `UNK`.
    chars: Vec<char>,
    /// Character to index mapping.
    index: HashMap<char, usize>,
}

impl CharVocab {
    /// The reserved pad / unknown symbol, appended after all corpus chars.
    pub const UNK: char = '☺';

    /// The designated end-marker index.
    ///
    /// Index 0 is whatever character sorts first in the corpus (for a
    /// newline-terminated file that is usually `'\n'`, which the line split
    /// removes). Nothing guarantees index 0 means "end" in both languages'
    /// independently sorted vocabularies; treat this as a known correctness
    /// risk of the scheme, not a property to rely on.
    pub const END: usize = 0;

    /// Builds a vocabulary from normalized corpus text.
    ///
    /// Distinct characters are sorted by code point and numbered from zero,
    /// then `UNK` is appended at the next index.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let uniq: BTreeSet<char> = text.chars().collect();
        let mut chars: Vec<char> = uniq.into_iter().collect();
        chars.push(Self::UNK);

        // Later entries win, so a corpus-occurring UNK resolves to the
        // reserved last slot.
        let index = chars.iter().enumerate().map(|(i, &c)| (c, i)).collect();

        Self { chars, index }
    }

    /// Returns the index of a character.
    ///
    /// # Returns
    /// The index, or `UnknownChar` for characters absent at build time.
    pub fn index_of(&self, ch: char) -> Result<usize> {
        self.index
            .get(&ch)
            .copied()
            .ok_or(Error::UnknownChar { ch })
    }

    /// Returns the character at an index.
    #[must_use]
    pub fn char_at(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }

    /// Returns the pad index: always the highest index.
    #[must_use]
    pub fn pad_index(&self) -> usize {
        self.chars.len() - 1
    }

    /// Returns the character at the end-marker index.
    #[must_use]
    pub fn end_char(&self) -> char {
        self.chars[Self::END]
    }

    /// Returns the vocabulary size (corpus characters plus the pad slot).
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Returns true if the vocabulary holds only the pad slot.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.len() <= 1
    }

    /// Checks whether a character is in the vocabulary.
    #[must_use]
    pub fn contains(&self, ch: char) -> bool {
        self.index.contains_key(&ch)
    }

    /// Returns all characters in index order.
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_by_code_point() {
        let vocab = CharVocab::from_text("cba");
        assert_eq!(vocab.index_of('a').unwrap(), 0);
        assert_eq!(vocab.index_of('b').unwrap(), 1);
        assert_eq!(vocab.index_of('c').unwrap(), 2);
    }

    #[test]
    fn test_size_is_distinct_plus_one() {
        let vocab = CharVocab::from_text("hello\nworld\n");
        // distinct: \n d e h l o r w
        assert_eq!(vocab.len(), 8 + 1);
        assert_eq!(vocab.pad_index(), vocab.len() - 1);
    }

    #[test]
    fn test_unk_is_highest_index() {
        let vocab = CharVocab::from_text("ab");
        assert_eq!(vocab.index_of(CharVocab::UNK).unwrap(), vocab.pad_index());
        assert_eq!(vocab.char_at(vocab.pad_index()), Some(CharVocab::UNK));
    }

    #[test]
    fn test_unknown_char_is_error() {
        let vocab = CharVocab::from_text("ab");
        assert_eq!(
            vocab.index_of('z').unwrap_err(),
            seqprep_core::Error::UnknownChar { ch: 'z' }
        );
    }

    #[test]
    fn test_newline_sorts_first() {
        // For newline-terminated corpora, '\n' takes the END index.
        let vocab = CharVocab::from_text("hi\nho\n");
        assert_eq!(vocab.index_of('\n').unwrap(), CharVocab::END);
        assert_eq!(vocab.end_char(), '\n');
    }

    #[test]
    fn test_deterministic() {
        let a = CharVocab::from_text("xyzzy");
        let b = CharVocab::from_text("xyzzy");
        assert_eq!(a.chars(), b.chars());
    }
}
