//! DataLoader - Batched Data Iteration
//!
//! Provides batched iteration over datasets with a pluggable collate
//! function, optional shuffling, and optional parallel item fetch.
//! Batches are formed at fetch time: the loader gathers `batch_size`
//! items and hands them to the collate function, which owns padding and
//! stacking.
//!
//! @version 0.1.0
//! @author `SeqPrep` Development Team

use crate::collate::Collate;
use crate::dataset::Dataset;
use crate::sampler::{RandomSampler, Sampler, SequentialSampler};
use rayon::prelude::*;

// =============================================================================
// DataLoader
// =============================================================================

/// Batched iteration over a dataset through a collate function.
pub struct DataLoader<D, C>
where
    D: Dataset,
    C: Collate<D::Item>,
{
    dataset: D,
    collate_fn: C,
    batch_size: usize,
    shuffle: bool,
    drop_last: bool,
    num_workers: usize,
}

impl<D, C> DataLoader<D, C>
where
    D: Dataset,
    C: Collate<D::Item>,
{
    /// Creates a new `DataLoader`.
    pub fn new(dataset: D, collate_fn: C, batch_size: usize) -> Self {
        Self {
            dataset,
            collate_fn,
            batch_size,
            shuffle: false,
            drop_last: false,
            num_workers: 0,
        }
    }

    /// Enables or disables shuffling.
    pub fn shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Sets whether to drop the last incomplete batch.
    pub fn drop_last(mut self, drop_last: bool) -> Self {
        self.drop_last = drop_last;
        self
    }

    /// Sets the number of worker threads for parallel item fetch.
    pub fn num_workers(mut self, num_workers: usize) -> Self {
        self.num_workers = num_workers;
        self
    }

    /// Returns the batch size.
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Returns the number of batches per pass.
    pub fn len(&self) -> usize {
        let total = self.dataset.len();
        if self.drop_last {
            total / self.batch_size
        } else {
            total.div_ceil(self.batch_size)
        }
    }

    /// Returns true if the underlying dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.dataset.is_empty()
    }

    /// Creates an iterator over collated batches for one pass.
    pub fn iter(&self) -> DataLoaderIter<'_, D, C> {
        let indices = if self.shuffle {
            RandomSampler::new(self.dataset.len()).indices()
        } else {
            SequentialSampler::new(self.dataset.len()).indices()
        };

        // Chunk up front; an undersized tail chunk is dropped on request.
        let mut batches: Vec<Vec<usize>> = indices
            .chunks(self.batch_size)
            .map(<[usize]>::to_vec)
            .collect();
        if self.drop_last {
            batches.retain(|b| b.len() == self.batch_size);
        }

        DataLoaderIter {
            loader: self,
            batches: batches.into_iter(),
        }
    }

    /// Fetches one batch of items, in parallel when workers are configured.
    fn fetch(&self, batch_indices: &[usize]) -> Vec<D::Item> {
        if self.num_workers > 0 {
            batch_indices
                .par_iter()
                .filter_map(|&idx| self.dataset.get(idx))
                .collect()
        } else {
            batch_indices
                .iter()
                .filter_map(|&idx| self.dataset.get(idx))
                .collect()
        }
    }
}

// =============================================================================
// DataLoaderIter
// =============================================================================

/// Iterator over collated batches from a `DataLoader`.
pub struct DataLoaderIter<'a, D, C>
where
    D: Dataset,
    C: Collate<D::Item>,
{
    loader: &'a DataLoader<D, C>,
    batches: std::vec::IntoIter<Vec<usize>>,
}

impl<D, C> Iterator for DataLoaderIter<'_, D, C>
where
    D: Dataset,
    C: Collate<D::Item>,
{
    type Item = C::Output;

    fn next(&mut self) -> Option<Self::Item> {
        let batch_indices = self.batches.next()?;
        let samples = self.loader.fetch(&batch_indices);
        if samples.is_empty() {
            return None;
        }
        Some(self.loader.collate_fn.collate(samples))
    }
}

// =============================================================================
// Tests
// =============================================================================
