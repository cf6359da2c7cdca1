//! Index generation (`colon`, `linspace`) and linear index lookup (`find`).

use itertools_num::linspace as even_steps;
use ndarray::{Array1, ArrayBase, Data, Dimension};

use crate::error::{CompatError, Result};
use crate::reductions::Logical;

/// Slack for floating point steps that land just short of `stop`.
const COLON_TOLERANCE: f64 = 1e-10;

/// Largest number of `f64` elements a single allocation can address.
const MAX_COLON_LEN: usize = isize::MAX as usize / std::mem::size_of::<f64>();

/// MATLAB `start:stop`, inclusive on both ends with unit step.
///
/// `colon(1.0, 5.0)` yields `[1, 2, 3, 4, 5]`; a `stop` below `start` yields an
/// empty array, as in MATLAB.
pub fn colon(start: f64, stop: f64) -> Result<Array1<f64>> {
    colon_step(start, 1.0, stop)
}

/// MATLAB `start:step:stop`.
pub fn colon_step(start: f64, step: f64, stop: f64) -> Result<Array1<f64>> {
    if !(start.is_finite() && step.is_finite() && stop.is_finite()) {
        return Err(CompatError::invalid("colon", "bounds and step must be finite"));
    }
    if step == 0.0 {
        return Err(CompatError::invalid("colon", "step must be nonzero"));
    }

    let span = ((stop - start) / step + COLON_TOLERANCE).floor();
    if span < 0.0 {
        return Ok(Array1::zeros(0));
    }
    // Count in f64 first; the cast to usize saturates and the `+ 1` would overflow.
    let count = span + 1.0;
    if count > MAX_COLON_LEN as f64 {
        return Err(CompatError::invalid(
            "colon",
            format!("range of {:e} elements is too large", count),
        ));
    }
    let count = count as usize;

    let mut values = Vec::new();
    values.try_reserve_exact(count).map_err(|err| {
        CompatError::invalid("colon", format!("cannot allocate {} elements: {}", count, err))
    })?;
    values.extend((0..count).map(|i| start + step * i as f64));
    Ok(Array1::from_vec(values))
}

/// MATLAB `linspace(a, b, n)`: `n` evenly spaced points from `a` to `b` inclusive.
///
/// With `n == 1` MATLAB returns `b`.
pub fn linspace(a: f64, b: f64, n: usize) -> Array1<f64> {
    match n {
        0 => Array1::zeros(0),
        1 => Array1::from_vec(vec![b]),
        _ => even_steps(a, b, n).collect(),
    }
}

/// MATLAB `find(A)`: zero-based linear indices of the nonzero elements.
///
/// Indices count through the array in logical row-major order, i.e. the
/// positions of nonzero elements in `a.iter()`. NaN counts as nonzero.
pub fn find<A, S, D>(a: &ArrayBase<S, D>) -> Array1<usize>
where
    A: Logical,
    S: Data<Elem = A>,
    D: Dimension,
{
    let indices: Array1<usize> = a
        .iter()
        .enumerate()
        .filter(|(_, v)| v.is_nonzero())
        .map(|(idx, _)| idx)
        .collect();
    log::trace!("find: {} of {} elements nonzero", indices.len(), a.len());
    indices
}
