//! Elementwise pass-throughs: rounding, remainders, `erfinv` and the
//! two-argument forms of `max`/`min`.
//!
//! None of these dispatch on shape. Binary operations follow MATLAB's implicit
//! expansion: shapes are aligned from the trailing axis and extents of 1
//! stretch to match the other operand.

use ndarray::{Array, ArrayBase, ArrayD, Data, Dimension, ErrorKind, IxDyn, ShapeError, Zip};
use num_traits::Float;
use statrs::function::erf::erf_inv;

use crate::error::Result;

/// Round half away from zero, as MATLAB `round` does. The element type is kept.
pub fn round<A, S, D>(a: &ArrayBase<S, D>) -> Array<A, D>
where
    A: Float,
    S: Data<Elem = A>,
    D: Dimension,
{
    a.mapv(Float::round)
}

pub fn ceil<A, S, D>(a: &ArrayBase<S, D>) -> Array<A, D>
where
    A: Float,
    S: Data<Elem = A>,
    D: Dimension,
{
    a.mapv(Float::ceil)
}

pub fn floor<A, S, D>(a: &ArrayBase<S, D>) -> Array<A, D>
where
    A: Float,
    S: Data<Elem = A>,
    D: Dimension,
{
    a.mapv(Float::floor)
}

/// Round toward zero (MATLAB `fix`).
pub fn fix<A, S, D>(a: &ArrayBase<S, D>) -> Array<A, D>
where
    A: Float,
    S: Data<Elem = A>,
    D: Dimension,
{
    a.mapv(Float::trunc)
}

/// Inverse error function. `erfinv(±1)` is `±inf`; anything outside `[-1, 1]` is NaN.
pub fn erfinv<S, D>(a: &ArrayBase<S, D>) -> Array<f64, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    a.mapv(|x| {
        if x.is_nan() || !(-1.0..=1.0).contains(&x) {
            f64::NAN
        } else if x == 1.0 {
            f64::INFINITY
        } else if x == -1.0 {
            f64::NEG_INFINITY
        } else {
            erf_inv(x)
        }
    })
}

/// MATLAB `rem`: remainder after truncated division, with the sign of the dividend.
///
/// A scalar operand can be passed as a 0-D array (`ndarray::arr0`).
pub fn rem<A, S1, S2, D1, D2>(a: &ArrayBase<S1, D1>, b: &ArrayBase<S2, D2>) -> Result<ArrayD<A>>
where
    A: Float,
    S1: Data<Elem = A>,
    S2: Data<Elem = A>,
    D1: Dimension,
    D2: Dimension,
{
    zip_expanded(a, b, |x, y| x % y)
}

/// MATLAB `mod`: remainder after floored division, with the sign of the divisor.
/// `mod(x, 0)` is `x`.
pub fn modulo<A, S1, S2, D1, D2>(
    a: &ArrayBase<S1, D1>,
    b: &ArrayBase<S2, D2>,
) -> Result<ArrayD<A>>
where
    A: Float,
    S1: Data<Elem = A>,
    S2: Data<Elem = A>,
    D1: Dimension,
    D2: Dimension,
{
    zip_expanded(a, b, |x, y| {
        if y == A::zero() {
            return x;
        }
        let r = x % y;
        if r != A::zero() && (r < A::zero()) != (y < A::zero()) {
            r + y
        } else {
            r
        }
    })
}

/// MATLAB `max(A, B)`. NaN loses against any number.
pub fn maximum<A, S1, S2, D1, D2>(
    a: &ArrayBase<S1, D1>,
    b: &ArrayBase<S2, D2>,
) -> Result<ArrayD<A>>
where
    A: Float,
    S1: Data<Elem = A>,
    S2: Data<Elem = A>,
    D1: Dimension,
    D2: Dimension,
{
    zip_expanded(a, b, Float::max)
}

/// MATLAB `min(A, B)`. NaN loses against any number.
pub fn minimum<A, S1, S2, D1, D2>(
    a: &ArrayBase<S1, D1>,
    b: &ArrayBase<S2, D2>,
) -> Result<ArrayD<A>>
where
    A: Float,
    S1: Data<Elem = A>,
    S2: Data<Elem = A>,
    D1: Dimension,
    D2: Dimension,
{
    zip_expanded(a, b, Float::min)
}

fn expanded_shape(a: &[usize], b: &[usize]) -> Option<Vec<usize>> {
    let ndim = a.len().max(b.len());
    let extent = |shape: &[usize], axis: usize| {
        let pad = ndim - shape.len();
        if axis < pad {
            1
        } else {
            shape[axis - pad]
        }
    };

    (0..ndim)
        .map(|axis| match (extent(a, axis), extent(b, axis)) {
            (x, y) if x == y => Some(x),
            (1, y) => Some(y),
            (x, 1) => Some(x),
            _ => None,
        })
        .collect()
}

fn zip_expanded<A, S1, S2, D1, D2, F>(
    a: &ArrayBase<S1, D1>,
    b: &ArrayBase<S2, D2>,
    mut f: F,
) -> Result<ArrayD<A>>
where
    A: Copy,
    S1: Data<Elem = A>,
    S2: Data<Elem = A>,
    D1: Dimension,
    D2: Dimension,
    F: FnMut(A, A) -> A,
{
    let incompatible = || ShapeError::from_kind(ErrorKind::IncompatibleShape);
    let shape = expanded_shape(a.shape(), b.shape()).ok_or_else(incompatible)?;
    let lhs = a.broadcast(IxDyn(&shape)).ok_or_else(incompatible)?;
    let rhs = b.broadcast(IxDyn(&shape)).ok_or_else(incompatible)?;
    Ok(Zip::from(&lhs).and(&rhs).map_collect(|&x, &y| f(x, y)))
}
