//! Collate - Batch Assembly Functions
//!
//! Combines individually prepared samples into rectangular batch tensors.
//! `PadCollate` right-pads every sample to the longest sample in the batch
//! along a chosen axis before stacking, so variable-length examples batch
//! cleanly.
//!
//! @version 0.1.0
//! @author `SeqPrep` Development Team

use seqprep_core::{Error, Result};
use seqprep_tensor::{cat, stack, Scalar, Tensor};

// =============================================================================
// Collate Trait
// =============================================================================

/// Trait for collating samples into batches.
pub trait Collate<T>: Send + Sync {
    /// The output batch type.
    type Output;

    /// Collates a vector of samples into a batch.
    fn collate(&self, batch: Vec<T>) -> Self::Output;
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Right-pads a tensor along `dim` to size `pad` with the fill value.
///
/// Returns the tensor unchanged when it already has size `pad` along `dim`;
/// fails if it is larger than `pad`.
pub fn pad_tensor<T: Scalar>(t: &Tensor<T>, pad: usize, dim: usize, val: T) -> Result<Tensor<T>> {
    let size = t.size(dim)?;
    if size == pad {
        return Ok(t.clone());
    }
    if size > pad {
        let mut expected = t.shape().to_vec();
        expected[dim] = pad;
        return Err(Error::shape_mismatch(&expected, t.shape()));
    }
    let mut pad_shape = t.shape().to_vec();
    pad_shape[dim] = pad - size;
    cat(&[t.clone(), Tensor::full(&pad_shape, val)], dim)
}

/// Pads every tensor along `dim` to the batch maximum, then stacks along a
/// new leading dimension. With `dim = None` the tensors are stacked as-is
/// and must already share a shape.
pub fn pad_and_stack<T: Scalar>(
    tensors: &[Tensor<T>],
    dim: Option<usize>,
    val: T,
) -> Result<Tensor<T>> {
    let Some(dim) = dim else {
        return stack(tensors);
    };
    let mut max_len = 0;
    for t in tensors {
        max_len = max_len.max(t.size(dim)?);
    }
    let padded: Vec<Tensor<T>> = tensors
        .iter()
        .map(|t| pad_tensor(t, max_len, dim, val))
        .collect::<Result<_>>()?;
    stack(&padded)
}

// =============================================================================
// PadCollate
// =============================================================================

/// Collation that pads each sample pair to the longest sample in the batch.
///
/// Each side of the pair has its own padding axis (or `None` for plain
/// stacking) and its own fill value. The padded axis ends up sized to the
/// per-batch maximum, which is generally longer than any single example's
/// own pre-padded length.
pub struct PadCollate<A: Scalar, B: Scalar> {
    /// Padding axis per tensor; `None` stacks without padding.
    dims: (Option<usize>, Option<usize>),
    /// Fill value per tensor.
    fills: (A, B),
}

impl<A: Scalar, B: Scalar> PadCollate<A, B> {
    /// Creates a new `PadCollate` with per-tensor axes and fill values.
    #[must_use]
    pub fn new(dims: (Option<usize>, Option<usize>), fills: (A, B)) -> Self {
        Self { dims, fills }
    }
}

impl<A: Scalar, B: Scalar> Collate<(Tensor<A>, Tensor<B>)> for PadCollate<A, B> {
    type Output = Result<(Tensor<A>, Tensor<B>)>;

    fn collate(&self, batch: Vec<(Tensor<A>, Tensor<B>)>) -> Self::Output {
        if batch.is_empty() {
            return Ok((Tensor::empty(), Tensor::empty()));
        }

        let xs: Vec<Tensor<A>> = batch.iter().map(|(x, _)| x.clone()).collect();
        let ys: Vec<Tensor<B>> = batch.iter().map(|(_, y)| y.clone()).collect();

        let xs = pad_and_stack(&xs, self.dims.0, self.fills.0)?;
        let ys = pad_and_stack(&ys, self.dims.1, self.fills.1)?;

        Ok((xs, ys))
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_tensor() {
        let t = Tensor::from_vec(vec![1i64, 2, 3], &[3]).unwrap();
        let padded = pad_tensor(&t, 5, 0, 0i64).unwrap();
        assert_eq!(padded.shape(), &[5]);
        assert_eq!(padded.to_vec(), vec![1, 2, 3, 0, 0]);
    }

    #[test]
    fn test_pad_tensor_noop() {
        let t = Tensor::from_vec(vec![1i64, 2, 3], &[3]).unwrap();
        let padded = pad_tensor(&t, 3, 0, 0i64).unwrap();
        assert_eq!(padded.to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn test_pad_tensor_too_long_fails() {
        let t = Tensor::from_vec(vec![1i64, 2, 3], &[3]).unwrap();
        assert!(pad_tensor(&t, 2, 0, 0i64).is_err());
    }

    #[test]
    fn test_pad_tensor_2d() {
        let t = Tensor::from_vec(vec![1.0f32, 2.0], &[1, 2]).unwrap();
        let padded = pad_tensor(&t, 4, 1, 9.0f32).unwrap();
        assert_eq!(padded.shape(), &[1, 4]);
        assert_eq!(padded.to_vec(), vec![1.0, 2.0, 9.0, 9.0]);
    }

    #[test]
    fn test_pad_collate_variable_lengths() {
        let collate = PadCollate::new((Some(1), Some(0)), (9.0f32, 9i64));

        let batch = vec![
            (
                Tensor::from_vec(vec![1.0f32, 2.0, 3.0], &[1, 3]).unwrap(),
                Tensor::from_vec(vec![1i64, 2, 3, 4], &[4]).unwrap(),
            ),
            (
                Tensor::from_vec(vec![4.0f32, 5.0], &[1, 2]).unwrap(),
                Tensor::from_vec(vec![5i64, 6], &[2]).unwrap(),
            ),
        ];

        let (xs, ys) = collate.collate(batch).unwrap();

        // Batch axis first, padded axis at the per-batch maximum.
        assert_eq!(xs.shape(), &[2, 1, 3]);
        assert_eq!(ys.shape(), &[2, 4]);
        assert_eq!(xs.to_vec(), vec![1.0, 2.0, 3.0, 4.0, 5.0, 9.0]);
        assert_eq!(ys.to_vec(), vec![1, 2, 3, 4, 5, 6, 9, 9]);
    }

    #[test]
    fn test_pad_collate_content_recoverable() {
        let collate = PadCollate::new((Some(0), Some(0)), (0.0f32, 0i64));
        let batch = vec![
            (
                Tensor::from_vec(vec![1.0f32, 2.0], &[2]).unwrap(),
                Tensor::from_vec(vec![7i64], &[1]).unwrap(),
            ),
            (
                Tensor::from_vec(vec![3.0f32, 4.0, 5.0, 6.0], &[4]).unwrap(),
                Tensor::from_vec(vec![8i64, 9], &[2]).unwrap(),
            ),
        ];
        let (xs, _ys) = collate.collate(batch).unwrap();

        // Slicing the first example back out up to its own length recovers it.
        assert_eq!(&xs.to_vec()[0..2], &[1.0, 2.0]);
        assert_eq!(&xs.to_vec()[2..4], &[0.0, 0.0]);
    }

    #[test]
    fn test_pad_collate_no_axis_requires_uniform_shapes() {
        let collate: PadCollate<f32, i64> = PadCollate::new((None, None), (0.0, 0));
        let batch = vec![
            (
                Tensor::from_vec(vec![1.0f32, 2.0], &[2]).unwrap(),
                Tensor::from_vec(vec![1i64], &[1]).unwrap(),
            ),
            (
                Tensor::from_vec(vec![3.0f32], &[1]).unwrap(),
                Tensor::from_vec(vec![2i64], &[1]).unwrap(),
            ),
        ];
        assert!(collate.collate(batch).is_err());
    }

    #[test]
    fn test_pad_collate_empty() {
        let collate: PadCollate<f32, i64> = PadCollate::new((Some(0), Some(0)), (0.0, 0));
        let (xs, ys) = collate.collate(vec![]).unwrap();
        assert_eq!(xs.shape(), &[0]);
        assert_eq!(ys.shape(), &[0]);
    }
}
