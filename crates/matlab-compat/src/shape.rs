//! Shape inspection in MATLAB terms.
//!
//! MATLAB has no 1-D arrays: a vector is any array with at most one axis of
//! extent greater than one, stored as either a row (`1 x n`) or a column
//! (`n x 1`). ndarray distinguishes `(n,)`, `(1, n)` and `(n, 1)`, so every
//! dispatched wrapper first collapses those three layouts into one class.

use ndarray::{ArrayBase, Data, Dimension};

use crate::error::{CompatError, Result};

/// MATLAB classification of a 1-D or 2-D shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeClass {
    /// One axis, or two axes with at least one of extent 1.
    Vector { len: usize },
    /// Two axes, neither of extent 1.
    Matrix { rows: usize, cols: usize },
}

/// Classify `shape`, rejecting empty arrays and ranks other than 1 and 2.
pub fn classify(shape: &[usize]) -> Result<ShapeClass> {
    classify_for("classify", shape)
}

pub(crate) fn classify_for(op: &'static str, shape: &[usize]) -> Result<ShapeClass> {
    ensure_non_empty(op, shape)?;
    match *shape {
        [len] => Ok(ShapeClass::Vector { len }),
        [rows, cols] if rows == 1 || cols == 1 => Ok(ShapeClass::Vector { len: rows * cols }),
        [rows, cols] => Ok(ShapeClass::Matrix { rows, cols }),
        _ => Err(CompatError::UnsupportedRank {
            op,
            ndim: shape.len(),
        }),
    }
}

pub(crate) fn ensure_non_empty(op: &'static str, shape: &[usize]) -> Result<()> {
    if shape.iter().any(|&n| n == 0) {
        return Err(CompatError::EmptyAxis {
            op,
            shape: shape.to_vec(),
        });
    }
    Ok(())
}

/// Index of the first axis with extent greater than one.
pub(crate) fn first_non_singleton(shape: &[usize]) -> Option<usize> {
    shape.iter().position(|&n| n > 1)
}

/// MATLAB `size`: the extents, padded to at least two entries.
///
/// A 1-D array of length `n` is reported as the row vector `[1, n]`.
pub fn size<A, S, D>(a: &ArrayBase<S, D>) -> Vec<usize>
where
    S: Data<Elem = A>,
    D: Dimension,
{
    match a.shape() {
        [] => vec![1, 1],
        [n] => vec![1, *n],
        shape => shape.to_vec(),
    }
}

/// MATLAB `size(a, dim)` with a one-based `dim`. Dimensions past the rank are 1.
pub fn size_along<A, S, D>(a: &ArrayBase<S, D>, dim: usize) -> Result<usize>
where
    S: Data<Elem = A>,
    D: Dimension,
{
    if dim == 0 {
        return Err(CompatError::invalid(
            "size",
            "dimension argument must be a positive integer",
        ));
    }
    Ok(size(a).get(dim - 1).copied().unwrap_or(1))
}

/// MATLAB `length`: the largest extent, or 0 for an empty array.
pub fn length<A, S, D>(a: &ArrayBase<S, D>) -> usize
where
    S: Data<Elem = A>,
    D: Dimension,
{
    if a.is_empty() {
        0
    } else {
        a.shape().iter().copied().max().unwrap_or(1)
    }
}

/// MATLAB `numel`.
pub fn numel<A, S, D>(a: &ArrayBase<S, D>) -> usize
where
    S: Data<Elem = A>,
    D: Dimension,
{
    a.len()
}

/// MATLAB `ndims`, which never reports fewer than two dimensions.
pub fn ndims<A, S, D>(a: &ArrayBase<S, D>) -> usize
where
    S: Data<Elem = A>,
    D: Dimension,
{
    a.ndim().max(2)
}
