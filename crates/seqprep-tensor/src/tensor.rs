//! Tensor - Contiguous N-Dimensional Container
//!
//! The `Tensor` struct is the numeric container SeqPrep hands to training
//! code: a contiguous, row-major block of scalars plus a shape. It carries
//! exactly the operations batch assembly needs - construction, fill,
//! concatenation along a dimension, and stacking along a new leading
//! dimension. No views, no strides, no devices.
//!
//! @version 0.1.0
//! @author `SeqPrep` Development Team

use core::fmt;

use seqprep_core::{Error, Result};

// =============================================================================
// Scalar Trait
// =============================================================================

/// Marker trait for element types a [`Tensor`] can hold.
pub trait Scalar: Copy + Send + Sync + fmt::Debug + PartialEq + 'static {}

impl Scalar for f32 {}
impl Scalar for f64 {}
impl Scalar for i32 {}
impl Scalar for i64 {}
impl Scalar for u8 {}
impl Scalar for usize {}

// =============================================================================
// Tensor Struct
// =============================================================================

/// A contiguous N-dimensional array of scalar values.
#[derive(Clone, PartialEq)]
pub struct Tensor<T: Scalar> {
    /// Row-major element data.
    data: Vec<T>,
    /// Shape of the tensor (dimensions).
    shape: Vec<usize>,
}

impl<T: Scalar> Tensor<T> {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// Creates a new tensor from a vector with the given shape.
    ///
    /// # Returns
    /// New tensor, or error if the shape does not match the data length.
    pub fn from_vec(data: Vec<T>, shape: &[usize]) -> Result<Self> {
        let numel: usize = shape.iter().product();
        if numel != data.len() {
            return Err(Error::shape_mismatch(&[data.len()], shape));
        }
        Ok(Self {
            data,
            shape: shape.to_vec(),
        })
    }

    /// Creates a new tensor from a slice with the given shape.
    pub fn from_slice(data: &[T], shape: &[usize]) -> Result<Self> {
        Self::from_vec(data.to_vec(), shape)
    }

    /// Creates a tensor of the given shape filled with one value.
    #[must_use]
    pub fn full(shape: &[usize], value: T) -> Self {
        let numel: usize = shape.iter().product();
        Self {
            data: vec![value; numel],
            shape: shape.to_vec(),
        }
    }

    /// Creates an empty rank-1 tensor.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            data: Vec::new(),
            shape: vec![0],
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Returns the shape of the tensor.
    #[must_use]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Returns the number of dimensions.
    #[must_use]
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// Returns the total number of elements.
    #[must_use]
    pub fn numel(&self) -> usize {
        self.data.len()
    }

    /// Returns the size along one dimension.
    ///
    /// # Returns
    /// The dimension size, or error if `dim` is out of range.
    pub fn size(&self, dim: usize) -> Result<usize> {
        self.shape.get(dim).copied().ok_or(Error::InvalidDimension {
            index: dim,
            ndim: self.shape.len(),
        })
    }

    /// Returns the element data as a slice.
    #[must_use]
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Returns a copy of the element data.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.data.clone()
    }
}

// =============================================================================
// Combination Operations
// =============================================================================

/// Concatenates tensors along an existing dimension.
///
/// All inputs must agree on every dimension except `dim`.
pub fn cat<T: Scalar>(tensors: &[Tensor<T>], dim: usize) -> Result<Tensor<T>> {
    let Some(first) = tensors.first() else {
        return Ok(Tensor::empty());
    };
    if dim >= first.ndim() {
        return Err(Error::InvalidDimension {
            index: dim,
            ndim: first.ndim(),
        });
    }
    for t in &tensors[1..] {
        if t.ndim() != first.ndim()
            || t.shape()
                .iter()
                .zip(first.shape())
                .enumerate()
                .any(|(d, (a, b))| d != dim && a != b)
        {
            return Err(Error::shape_mismatch(first.shape(), t.shape()));
        }
    }

    let mut out_shape = first.shape().to_vec();
    out_shape[dim] = tensors.iter().map(|t| t.shape()[dim]).sum();

    // Row-major: every tensor decomposes into `outer` blocks of
    // `shape[dim] * inner` elements; interleave block-by-block.
    let outer: usize = first.shape()[..dim].iter().product();
    let inner: usize = first.shape()[dim + 1..].iter().product();

    let numel: usize = out_shape.iter().product();
    let mut data = Vec::with_capacity(numel);
    for o in 0..outer {
        for t in tensors {
            let block = t.shape()[dim] * inner;
            let start = o * block;
            data.extend_from_slice(&t.data()[start..start + block]);
        }
    }

    Tensor::from_vec(data, &out_shape)
}

/// Stacks tensors of identical shape along a new leading dimension.
pub fn stack<T: Scalar>(tensors: &[Tensor<T>]) -> Result<Tensor<T>> {
    let Some(first) = tensors.first() else {
        return Ok(Tensor::empty());
    };
    for t in &tensors[1..] {
        if t.shape() != first.shape() {
            return Err(Error::shape_mismatch(first.shape(), t.shape()));
        }
    }

    let mut out_shape = vec![tensors.len()];
    out_shape.extend_from_slice(first.shape());

    let mut data = Vec::with_capacity(tensors.len() * first.numel());
    for t in tensors {
        data.extend_from_slice(t.data());
    }

    Tensor::from_vec(data, &out_shape)
}

// =============================================================================
// Formatting
// =============================================================================

impl<T: Scalar> fmt::Debug for Tensor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tensor")
            .field("shape", &self.shape)
            .field("data", &self.data)
            .finish()
    }
}

// =============================================================================
// Tests
// =============================================================================
