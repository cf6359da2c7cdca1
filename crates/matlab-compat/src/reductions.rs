//! MATLAB reductions: `sum`, `prod`, `mean`, `any`, `all`, `max`, `min`.
//!
//! Each function collapses a vector to a scalar and a matrix to one value per
//! column. See [`crate::dispatch`] for the shape rules.

use std::ops::{Add, Mul};

use ndarray::{ArrayBase, ArrayView1, Data, Dimension};
use ndarray_stats::QuantileExt;
use num_traits::{Float, FromPrimitive, One, Zero};

use crate::dispatch::{Dispatcher, Reduction};
use crate::error::Result;

/// Truth value of an element in MATLAB's logical context.
pub trait Logical {
    fn is_nonzero(&self) -> bool;

    /// `any` skips NaN entries; nothing but floats can be NaN.
    fn is_nan_value(&self) -> bool {
        false
    }
}

impl Logical for bool {
    fn is_nonzero(&self) -> bool {
        *self
    }
}

macro_rules! impl_logical_int {
    ($($t:ty),*) => {
        $(
            impl Logical for $t {
                fn is_nonzero(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

macro_rules! impl_logical_float {
    ($($t:ty),*) => {
        $(
            impl Logical for $t {
                fn is_nonzero(&self) -> bool {
                    *self != 0.0
                }

                fn is_nan_value(&self) -> bool {
                    self.is_nan()
                }
            }
        )*
    };
}

impl_logical_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_logical_float!(f32, f64);

/// Per-lane extrema for `max`, `min`, `argmax` and `argmin`.
///
/// Floats skip NaN unless the whole lane is NaN; integers use their total order.
/// Positions are zero-based and the first position wins ties.
pub trait Extremum: Sized {
    fn lane_max(lane: ArrayView1<'_, Self>) -> Self;
    fn lane_min(lane: ArrayView1<'_, Self>) -> Self;
    fn lane_argmax(lane: ArrayView1<'_, Self>) -> usize;
    fn lane_argmin(lane: ArrayView1<'_, Self>) -> usize;
}

macro_rules! impl_extremum_float {
    ($($t:ty),*) => {
        $(
            impl Extremum for $t {
                fn lane_max(lane: ArrayView1<'_, Self>) -> Self {
                    *lane.max_skipnan()
                }

                fn lane_min(lane: ArrayView1<'_, Self>) -> Self {
                    *lane.min_skipnan()
                }

                fn lane_argmax(lane: ArrayView1<'_, Self>) -> usize {
                    lane.argmax_skipnan().unwrap_or(0)
                }

                fn lane_argmin(lane: ArrayView1<'_, Self>) -> usize {
                    lane.argmin_skipnan().unwrap_or(0)
                }
            }
        )*
    };
}

// Dispatched lanes are never empty, so the fallbacks below are unreachable.
macro_rules! impl_extremum_int {
    ($($t:ty),*) => {
        $(
            impl Extremum for $t {
                fn lane_max(lane: ArrayView1<'_, Self>) -> Self {
                    lane.max().map(|v| *v).unwrap_or(<$t>::MIN)
                }

                fn lane_min(lane: ArrayView1<'_, Self>) -> Self {
                    lane.min().map(|v| *v).unwrap_or(<$t>::MAX)
                }

                fn lane_argmax(lane: ArrayView1<'_, Self>) -> usize {
                    lane.argmax().unwrap_or(0)
                }

                fn lane_argmin(lane: ArrayView1<'_, Self>) -> usize {
                    lane.argmin().unwrap_or(0)
                }
            }
        )*
    };
}

impl_extremum_float!(f32, f64);
impl_extremum_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Dispatcher {
    pub fn sum<A, S, D>(&self, a: &ArrayBase<S, D>) -> Result<Reduction<A>>
    where
        A: Clone + Add<Output = A> + Zero,
        S: Data<Elem = A>,
        D: Dimension,
    {
        self.reduce("sum", a, |lane| lane.sum())
    }

    pub fn prod<A, S, D>(&self, a: &ArrayBase<S, D>) -> Result<Reduction<A>>
    where
        A: Clone + Mul<Output = A> + One,
        S: Data<Elem = A>,
        D: Dimension,
    {
        self.reduce("prod", a, |lane| lane.product())
    }

    pub fn mean<A, S, D>(&self, a: &ArrayBase<S, D>) -> Result<Reduction<A>>
    where
        A: Float + FromPrimitive,
        S: Data<Elem = A>,
        D: Dimension,
    {
        // Lanes are never empty here, so the NaN fallback is unreachable.
        self.reduce("mean", a, |lane| lane.mean().unwrap_or_else(A::nan))
    }

    pub fn any<A, S, D>(&self, a: &ArrayBase<S, D>) -> Result<Reduction<bool>>
    where
        A: Logical,
        S: Data<Elem = A>,
        D: Dimension,
    {
        self.reduce("any", a, |lane| {
            lane.iter().any(|v| v.is_nonzero() && !v.is_nan_value())
        })
    }

    pub fn all<A, S, D>(&self, a: &ArrayBase<S, D>) -> Result<Reduction<bool>>
    where
        A: Logical,
        S: Data<Elem = A>,
        D: Dimension,
    {
        self.reduce("all", a, |lane| lane.iter().all(Logical::is_nonzero))
    }

    /// Largest element per lane. Floats ignore NaN unless the lane is all NaN.
    pub fn max<A, S, D>(&self, a: &ArrayBase<S, D>) -> Result<Reduction<A>>
    where
        A: Extremum,
        S: Data<Elem = A>,
        D: Dimension,
    {
        self.reduce("max", a, A::lane_max)
    }

    /// Smallest element per lane. Floats ignore NaN unless the lane is all NaN.
    pub fn min<A, S, D>(&self, a: &ArrayBase<S, D>) -> Result<Reduction<A>>
    where
        A: Extremum,
        S: Data<Elem = A>,
        D: Dimension,
    {
        self.reduce("min", a, A::lane_min)
    }

    /// Zero-based position of the largest element per lane (the second output
    /// of MATLAB's `[M, I] = max(A)`). The first position wins ties, and an
    /// all-NaN lane reports position 0.
    pub fn argmax<A, S, D>(&self, a: &ArrayBase<S, D>) -> Result<Reduction<usize>>
    where
        A: Extremum,
        S: Data<Elem = A>,
        D: Dimension,
    {
        self.reduce("argmax", a, A::lane_argmax)
    }

    pub fn argmin<A, S, D>(&self, a: &ArrayBase<S, D>) -> Result<Reduction<usize>>
    where
        A: Extremum,
        S: Data<Elem = A>,
        D: Dimension,
    {
        self.reduce("argmin", a, A::lane_argmin)
    }
}

/// MATLAB `sum(A)`.
pub fn sum<A, S, D>(a: &ArrayBase<S, D>) -> Result<Reduction<A>>
where
    A: Clone + Add<Output = A> + Zero,
    S: Data<Elem = A>,
    D: Dimension,
{
    Dispatcher::default().sum(a)
}

/// MATLAB `prod(A)`.
pub fn prod<A, S, D>(a: &ArrayBase<S, D>) -> Result<Reduction<A>>
where
    A: Clone + Mul<Output = A> + One,
    S: Data<Elem = A>,
    D: Dimension,
{
    Dispatcher::default().prod(a)
}

/// MATLAB `mean(A)`.
pub fn mean<A, S, D>(a: &ArrayBase<S, D>) -> Result<Reduction<A>>
where
    A: Float + FromPrimitive,
    S: Data<Elem = A>,
    D: Dimension,
{
    Dispatcher::default().mean(a)
}

/// MATLAB `any(A)`.
pub fn any<A, S, D>(a: &ArrayBase<S, D>) -> Result<Reduction<bool>>
where
    A: Logical,
    S: Data<Elem = A>,
    D: Dimension,
{
    Dispatcher::default().any(a)
}

/// MATLAB `all(A)`.
pub fn all<A, S, D>(a: &ArrayBase<S, D>) -> Result<Reduction<bool>>
where
    A: Logical,
    S: Data<Elem = A>,
    D: Dimension,
{
    Dispatcher::default().all(a)
}

/// MATLAB `max(A)`.
pub fn max<A, S, D>(a: &ArrayBase<S, D>) -> Result<Reduction<A>>
where
    A: Extremum,
    S: Data<Elem = A>,
    D: Dimension,
{
    Dispatcher::default().max(a)
}

/// MATLAB `min(A)`.
pub fn min<A, S, D>(a: &ArrayBase<S, D>) -> Result<Reduction<A>>
where
    A: Extremum,
    S: Data<Elem = A>,
    D: Dimension,
{
    Dispatcher::default().min(a)
}

pub fn argmax<A, S, D>(a: &ArrayBase<S, D>) -> Result<Reduction<usize>>
where
    A: Extremum,
    S: Data<Elem = A>,
    D: Dimension,
{
    Dispatcher::default().argmax(a)
}

pub fn argmin<A, S, D>(a: &ArrayBase<S, D>) -> Result<Reduction<usize>>
where
    A: Extremum,
    S: Data<Elem = A>,
    D: Dimension,
{
    Dispatcher::default().argmin(a)
}
