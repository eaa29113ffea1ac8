//! Dataset Trait - Core Data Abstraction
//!
//! Defines the Dataset trait that all data sources implement, plus small
//! adapters for in-memory data and per-item transforms.
//!
//! @version 0.1.0
//! @author `SeqPrep` Development Team

// =============================================================================
// Dataset Trait
// =============================================================================

/// Core trait for all datasets: indexed access to data items.
pub trait Dataset: Send + Sync {
    /// The type of items in the dataset.
    type Item: Send;

    /// Returns the number of items in the dataset.
    fn len(&self) -> usize;

    /// Returns true if the dataset is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Gets an item by index; `None` outside `[0, len)`.
    fn get(&self, index: usize) -> Option<Self::Item>;
}

// =============================================================================
// InMemoryDataset
// =============================================================================

/// A dataset backed by a plain vector of items.
pub struct InMemoryDataset<T: Clone + Send> {
    items: Vec<T>,
}

impl<T: Clone + Send> InMemoryDataset<T> {
    /// Creates a new `InMemoryDataset` from a vector.
    #[must_use]
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T: Clone + Send + Sync> Dataset for InMemoryDataset<T> {
    type Item = T;

    fn len(&self) -> usize {
        self.items.len()
    }

    fn get(&self, index: usize) -> Option<Self::Item> {
        self.items.get(index).cloned()
    }
}

// =============================================================================
// MapDataset
// =============================================================================

/// Applies a transform to every item fetched from an inner dataset.
///
/// This is the per-example transform hook: the closure may reshape the item
/// or map it to a different type entirely.
pub struct MapDataset<D, F, U>
where
    D: Dataset,
    F: Fn(D::Item) -> U + Send + Sync,
    U: Send,
{
    inner: D,
    transform: F,
}

impl<D, F, U> MapDataset<D, F, U>
where
    D: Dataset,
    F: Fn(D::Item) -> U + Send + Sync,
    U: Send,
{
    /// Wraps `inner` so that `transform` runs on every fetched item.
    pub fn new(inner: D, transform: F) -> Self {
        Self { inner, transform }
    }
}

impl<D, F, U> Dataset for MapDataset<D, F, U>
where
    D: Dataset,
    F: Fn(D::Item) -> U + Send + Sync,
    U: Send,
{
    type Item = U;

    fn len(&self) -> usize {
        self.inner.len()
    }

    fn get(&self, index: usize) -> Option<Self::Item> {
        self.inner.get(index).map(&self.transform)
    }
}

// =============================================================================
// Tests
// =============================================================================
