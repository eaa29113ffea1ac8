//! Bilingual Corpus Datasets
//!
//! Loads line-aligned bilingual corpora from disk, builds per-language
//! character vocabularies, filters sentence pairs, and exposes encoded,
//! padded examples through the `Dataset` trait. Splits are registered by
//! name; selecting one returns an immutable view rather than mutating
//! shared state.
//!
//! @version 0.1.0
//! @author `SeqPrep` Development Team

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::{debug, info};
use seqprep_core::{Error, Result};
use seqprep_data::Dataset;

use crate::encode::{EncodeScheme, PadPolicy};
use crate::filter::PairFilter;
use crate::normalize::normalize;
use crate::vocab::CharVocab;

// =============================================================================
// Split Registry
// =============================================================================

/// Registered splits: name to (source filename, target filename).
///
/// Files live under `root/<split name>/`. One split is registered today;
/// the loading logic is shared across however many are listed here, each
/// keeping its own vocabulary pair.
pub const SPLITS: [(&str, (&str, &str)); 1] = [(
    "stanford_nmt",
    ("iwslt15.en-vi.train.en", "iwslt15.en-vi.train.vi"),
)];

// =============================================================================
// Options
// =============================================================================

/// When per-example encoding and padding happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PadTiming {
    /// Encode every surviving pair at construction time.
    #[default]
    Eager,
    /// Store raw filtered pairs; encode on each item access.
    Lazy,
}

/// Construction parameters for [`IwsltCorpus`].
#[derive(Debug, Clone, Copy)]
pub struct CorpusOptions {
    /// Ratio parameter; drives both the filter window and the pad slope.
    pub a_raw: f64,
    /// Additive pad constant.
    pub b: f64,
    /// Eager or lazy encoding.
    pub timing: PadTiming,
}

impl CorpusOptions {
    /// Creates options with the paper defaults (`a = 1.2`, `b = 0`, eager).
    #[must_use]
    pub fn new() -> Self {
        Self {
            a_raw: 1.2,
            b: 0.0,
            timing: PadTiming::Eager,
        }
    }

    /// Sets the ratio parameter.
    pub fn a_raw(mut self, a_raw: f64) -> Self {
        self.a_raw = a_raw;
        self
    }

    /// Sets the additive pad constant.
    pub fn b(mut self, b: f64) -> Self {
        self.b = b;
        self
    }

    /// Sets the encoding timing.
    pub fn timing(mut self, timing: PadTiming) -> Self {
        self.timing = timing;
        self
    }
}

impl Default for CorpusOptions {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Split Storage
// =============================================================================

/// Either pre-encoded items or raw pairs awaiting on-demand encoding.
enum Store<S: EncodeScheme> {
    Eager(Vec<S::Item>),
    Lazy(Vec<(String, String)>),
}

impl<S: EncodeScheme> Store<S> {
    fn len(&self) -> usize {
        match self {
            Store::Eager(items) => items.len(),
            Store::Lazy(pairs) => pairs.len(),
        }
    }
}

/// Everything one split owns after loading: vocabularies and examples.
struct SplitData<S: EncodeScheme> {
    name: String,
    src_vocab: CharVocab,
    tgt_vocab: CharVocab,
    store: Store<S>,
    scheme: S,
    policy: PadPolicy,
}

// =============================================================================
// IwsltCorpus
// =============================================================================

/// A loaded bilingual corpus: every registered split, ready for view
/// selection.
///
/// Construction reads, normalizes, vocabulary-builds, and filters each
/// registered split; any missing or misaligned file fails the whole load.
pub struct IwsltCorpus<S: EncodeScheme> {
    root: PathBuf,
    splits: HashMap<String, Arc<SplitData<S>>>,
}

impl<S: EncodeScheme> std::fmt::Debug for IwsltCorpus<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IwsltCorpus")
            .field("root", &self.root)
            .field("splits", &self.splits.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl<S: EncodeScheme> IwsltCorpus<S> {
    /// Loads every registered split from `root`.
    ///
    /// Per split, the two half-files are read from `root/<split>/`,
    /// normalized, vocabulary-built, split on newlines, alignment-checked,
    /// and filtered. With eager timing the surviving pairs are encoded
    /// immediately; with lazy timing they are encoded per access. Both
    /// timings yield identical items.
    pub fn load(root: impl AsRef<Path>, scheme: S, options: CorpusOptions) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        let filter = PairFilter::new(options.a_raw);
        let policy = PadPolicy::from_ratio(options.a_raw, options.b);

        let mut splits = HashMap::new();
        for (name, (src_file, tgt_file)) in SPLITS {
            let dir = root.join(name);
            let src_text = read_normalized(&dir.join(src_file))?;
            let tgt_text = read_normalized(&dir.join(tgt_file))?;

            let src_vocab = CharVocab::from_text(&src_text);
            let tgt_vocab = CharVocab::from_text(&tgt_text);
            debug!(
                "split {}: source vocab {} chars, target vocab {} chars",
                name,
                src_vocab.len(),
                tgt_vocab.len()
            );

            let src_lines: Vec<String> = src_text.split('\n').map(str::to_string).collect();
            let tgt_lines: Vec<String> = tgt_text.split('\n').map(str::to_string).collect();

            let total = src_lines.len();
            let pairs = filter.filter(name, &src_lines, &tgt_lines)?;
            info!("split {}: kept {}/{} sentence pairs", name, pairs.len(), total);

            let store = match options.timing {
                PadTiming::Eager => Store::Eager(
                    pairs
                        .iter()
                        .map(|(s, t)| scheme.encode(s, t, &src_vocab, &tgt_vocab, policy))
                        .collect::<Result<Vec<_>>>()?,
                ),
                PadTiming::Lazy => Store::Lazy(pairs),
            };

            splits.insert(
                name.to_string(),
                Arc::new(SplitData {
                    name: name.to_string(),
                    src_vocab,
                    tgt_vocab,
                    store,
                    scheme,
                    policy,
                }),
            );
        }

        Ok(Self { root, splits })
    }

    /// Returns an immutable dataset view of one split.
    ///
    /// # Returns
    /// The view, or `UnknownSplit` if the name is not registered.
    pub fn split(&self, name: &str) -> Result<IwsltDataset<S>> {
        self.splits
            .get(name)
            .map(|data| IwsltDataset {
                data: Arc::clone(data),
            })
            .ok_or_else(|| Error::UnknownSplit {
                name: name.to_string(),
            })
    }

    /// Returns the registered split names.
    #[must_use]
    pub fn split_names(&self) -> Vec<&str> {
        self.splits.keys().map(String::as_str).collect()
    }

    /// Returns the corpus root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Downloads and extracts the corpus archive.
    ///
    /// Declared for interface completeness; corpus files must be
    /// pre-staged under the root directory.
    ///
    /// # Errors
    /// Always fails with `NotImplemented`.
    pub fn download_and_extract(&self) -> Result<()> {
        Err(Error::not_implemented("download_and_extract"))
    }
}

// =============================================================================
// IwsltDataset
// =============================================================================

/// An immutable view of one split's examples.
///
/// Views are cheap to clone and safe to share across threads; selecting a
/// different split means asking the corpus for a new view, never mutating
/// this one.
pub struct IwsltDataset<S: EncodeScheme> {
    data: Arc<SplitData<S>>,
}

impl<S: EncodeScheme> Clone for IwsltDataset<S> {
    fn clone(&self) -> Self {
        Self {
            data: Arc::clone(&self.data),
        }
    }
}

impl<S: EncodeScheme> IwsltDataset<S> {
    /// Returns the split name this view covers.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.data.name
    }

    /// Returns the number of surviving pairs in this split.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.store.len()
    }

    /// Returns true if no pairs survived filtering.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns one encoded, padded example.
    ///
    /// # Returns
    /// The item, or `IndexOutOfBounds` outside `[0, len)`.
    pub fn item(&self, index: usize) -> Result<S::Item> {
        match &self.data.store {
            Store::Eager(items) => items.get(index).cloned().ok_or(Error::IndexOutOfBounds {
                index,
                len: items.len(),
            }),
            Store::Lazy(pairs) => {
                let (src, tgt) = pairs.get(index).ok_or(Error::IndexOutOfBounds {
                    index,
                    len: pairs.len(),
                })?;
                self.data.scheme.encode(
                    src,
                    tgt,
                    &self.data.src_vocab,
                    &self.data.tgt_vocab,
                    self.data.policy,
                )
            }
        }
    }

    /// Returns the source-language vocabulary.
    #[must_use]
    pub fn src_vocab(&self) -> &CharVocab {
        &self.data.src_vocab
    }

    /// Returns the target-language vocabulary.
    #[must_use]
    pub fn tgt_vocab(&self) -> &CharVocab {
        &self.data.tgt_vocab
    }
}

impl<S: EncodeScheme> Dataset for IwsltDataset<S> {
    type Item = S::Item;

    fn len(&self) -> usize {
        IwsltDataset::len(self)
    }

    fn get(&self, index: usize) -> Option<Self::Item> {
        self.item(index).ok()
    }
}

// =============================================================================
// Helpers
// =============================================================================

/// Reads a corpus file and applies the normalization table.
fn read_normalized(path: &Path) -> Result<String> {
    let raw = fs::read_to_string(path)
        .map_err(|e| Error::corpus_load(path.display().to_string(), e.to_string()))?;
    Ok(normalize(&raw))
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::{IndexScheme, SymbolScheme};
    use std::io::Write;
    use tempfile::TempDir;

    const EN: &str = "hello there friend\nhi\nsecond line here\n";
    const VI: &str = "xin chao ban cua toi\nxin chao ca nha oi\nhang thu hai o day\n";

    fn write_corpus(en: &str, vi: &str) -> TempDir {
        let dir = TempDir::new().unwrap();
        let split_dir = dir.path().join("stanford_nmt");
        fs::create_dir_all(&split_dir).unwrap();
        let mut f = fs::File::create(split_dir.join("iwslt15.en-vi.train.en")).unwrap();
        f.write_all(en.as_bytes()).unwrap();
        let mut f = fs::File::create(split_dir.join("iwslt15.en-vi.train.vi")).unwrap();
        f.write_all(vi.as_bytes()).unwrap();
        dir
    }

    #[test]
    fn test_load_and_access() {
        let dir = write_corpus(EN, VI);
        let corpus =
            IwsltCorpus::load(dir.path(), IndexScheme, CorpusOptions::new()).unwrap();
        let dataset = corpus.split("stanford_nmt").unwrap();

        // Pair 2 ("hi" vs a much longer target) fails the ratio window;
        // the trailing empty line fails the non-empty-source rule.
        assert_eq!(dataset.len(), 2);

        let (src, tgt) = dataset.item(0).unwrap();
        assert_eq!(src.shape()[0], 1);
        // "hello there friend" = 18 chars: 18 + 1 + floor(18 * 0.2) = 22.
        assert_eq!(src.shape()[1], 22);
        assert_eq!(tgt.shape()[0], 22);
    }

    #[test]
    fn test_out_of_range_item() {
        let dir = write_corpus(EN, VI);
        let corpus =
            IwsltCorpus::load(dir.path(), IndexScheme, CorpusOptions::new()).unwrap();
        let dataset = corpus.split("stanford_nmt").unwrap();

        let err = dataset.item(dataset.len()).unwrap_err();
        assert!(matches!(err, Error::IndexOutOfBounds { .. }));
        assert!(dataset.get(dataset.len()).is_none());
    }

    #[test]
    fn test_unknown_split() {
        let dir = write_corpus(EN, VI);
        let corpus =
            IwsltCorpus::load(dir.path(), IndexScheme, CorpusOptions::new()).unwrap();
        assert!(matches!(
            corpus.split("wmt14"),
            Err(Error::UnknownSplit { .. })
        ));
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let dir = TempDir::new().unwrap();
        let err =
            IwsltCorpus::load(dir.path(), IndexScheme, CorpusOptions::new()).unwrap_err();
        assert!(matches!(err, Error::CorpusLoad { .. }));
    }

    #[test]
    fn test_misaligned_files_are_fatal() {
        let dir = write_corpus("one line\n", "mot\nhai\nba\n");
        let err =
            IwsltCorpus::load(dir.path(), IndexScheme, CorpusOptions::new()).unwrap_err();
        assert!(matches!(err, Error::Misaligned { .. }));
    }

    #[test]
    fn test_download_not_implemented() {
        let dir = write_corpus(EN, VI);
        let corpus =
            IwsltCorpus::load(dir.path(), IndexScheme, CorpusOptions::new()).unwrap();
        assert_eq!(
            corpus.download_and_extract().unwrap_err(),
            Error::not_implemented("download_and_extract")
        );
    }

    #[test]
    fn test_eager_and_lazy_agree() {
        let dir = write_corpus(EN, VI);
        let eager = IwsltCorpus::load(dir.path(), IndexScheme, CorpusOptions::new()).unwrap();
        let lazy = IwsltCorpus::load(
            dir.path(),
            IndexScheme,
            CorpusOptions::new().timing(PadTiming::Lazy),
        )
        .unwrap();

        let eager = eager.split("stanford_nmt").unwrap();
        let lazy = lazy.split("stanford_nmt").unwrap();
        assert_eq!(eager.len(), lazy.len());
        for i in 0..eager.len() {
            let (es, et) = eager.item(i).unwrap();
            let (ls, lt) = lazy.item(i).unwrap();
            assert_eq!(es.to_vec(), ls.to_vec());
            assert_eq!(et.to_vec(), lt.to_vec());
        }
    }

    #[test]
    fn test_vocab_properties() {
        let dir = write_corpus(EN, VI);
        let corpus =
            IwsltCorpus::load(dir.path(), IndexScheme, CorpusOptions::new()).unwrap();
        let dataset = corpus.split("stanford_nmt").unwrap();

        let distinct = normalize(EN).chars().collect::<std::collections::BTreeSet<_>>();
        assert_eq!(dataset.src_vocab().len(), distinct.len() + 1);
        assert_eq!(
            dataset.src_vocab().pad_index(),
            dataset.src_vocab().len() - 1
        );
    }

    #[test]
    fn test_symbol_scheme_corpus() {
        let dir = write_corpus(EN, VI);
        let corpus =
            IwsltCorpus::load(dir.path(), SymbolScheme, CorpusOptions::new()).unwrap();
        let dataset = corpus.split("stanford_nmt").unwrap();

        let (src, _tgt) = dataset.item(0).unwrap();
        assert_eq!(src.len(), 22);
        assert_eq!(src[0], "h");
        assert_eq!(src.last().unwrap(), &CharVocab::UNK.to_string());
    }

    #[test]
    fn test_views_are_independent() {
        let dir = write_corpus(EN, VI);
        let corpus =
            IwsltCorpus::load(dir.path(), IndexScheme, CorpusOptions::new()).unwrap();
        let a = corpus.split("stanford_nmt").unwrap();
        let b = corpus.split("stanford_nmt").unwrap();
        assert_eq!(a.len(), b.len());
        assert_eq!(a.name(), "stanford_nmt");
        drop(a);
        assert_eq!(b.item(0).unwrap().0.shape()[0], 1);
    }
}
