//! Lane-preserving MATLAB operations: `cumsum`, `cumprod`, `diff`, `fliplr`
//! and `sort`.
//!
//! A vector input always comes back as a 1-D array, whichever way round it
//! was stored. Matrix input is processed column by column and keeps its
//! two-dimensional shape.

use std::cmp::Ordering;
use std::ops::{Add, Mul, Sub};

use ndarray::{Array1, ArrayBase, Axis, Data, Dimension, Ix2};
use num_traits::{One, Zero};

use crate::dispatch::{vector_lane, Dispatcher, Route, Scan};
use crate::error::Result;

/// Direction for [`sort`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Ascend,
    Descend,
}

/// Total order over a partially ordered type where unordered values (NaN)
/// compare greater than everything else.
fn nan_greatest<A: PartialOrd>(a: &A, b: &A) -> Ordering {
    match a.partial_cmp(b) {
        Some(ord) => ord,
        None => {
            let a_nan = a.partial_cmp(a).is_none();
            let b_nan = b.partial_cmp(b).is_none();
            match (a_nan, b_nan) {
                (true, false) => Ordering::Greater,
                (false, true) => Ordering::Less,
                _ => Ordering::Equal,
            }
        }
    }
}

impl Dispatcher {
    pub fn cumsum<A, S, D>(&self, a: &ArrayBase<S, D>) -> Result<Scan<A>>
    where
        A: Clone + Add<Output = A> + Zero,
        S: Data<Elem = A>,
        D: Dimension,
    {
        self.scan("cumsum", a, |lane| {
            lane.iter()
                .scan(A::zero(), |acc, x| {
                    *acc = acc.clone() + x.clone();
                    Some(acc.clone())
                })
                .collect::<Array1<A>>()
        })
    }

    pub fn cumprod<A, S, D>(&self, a: &ArrayBase<S, D>) -> Result<Scan<A>>
    where
        A: Clone + Mul<Output = A> + One,
        S: Data<Elem = A>,
        D: Dimension,
    {
        self.scan("cumprod", a, |lane| {
            lane.iter()
                .scan(A::one(), |acc, x| {
                    *acc = acc.clone() * x.clone();
                    Some(acc.clone())
                })
                .collect::<Array1<A>>()
        })
    }

    /// First differences; each lane shrinks by one element.
    pub fn diff<A, S, D>(&self, a: &ArrayBase<S, D>) -> Result<Scan<A>>
    where
        A: Clone + Sub<Output = A>,
        S: Data<Elem = A>,
        D: Dimension,
    {
        self.scan("diff", a, |lane| {
            lane.iter()
                .zip(lane.iter().skip(1))
                .map(|(prev, next)| next.clone() - prev.clone())
                .collect::<Array1<A>>()
        })
    }

    pub fn sort<A, S, D>(&self, a: &ArrayBase<S, D>, order: SortOrder) -> Result<Scan<A>>
    where
        A: Clone + PartialOrd,
        S: Data<Elem = A>,
        D: Dimension,
    {
        self.scan("sort", a, |lane| {
            let mut values = lane.to_vec();
            match order {
                SortOrder::Ascend => values.sort_by(nan_greatest),
                SortOrder::Descend => values.sort_by(|x, y| nan_greatest(y, x)),
            }
            Array1::from_vec(values)
        })
    }

    /// Reverse a vector, or reverse the column order of a matrix.
    ///
    /// Unlike the other scans this works across columns, so N-D input (when
    /// allowed) is flipped along axis 1.
    pub fn fliplr<A, S, D>(&self, a: &ArrayBase<S, D>) -> Result<Scan<A>>
    where
        A: Clone,
        S: Data<Elem = A>,
        D: Dimension,
    {
        let mut view = a.view().into_dyn();
        let route = self.route("fliplr", view.shape())?;
        log::trace!("fliplr: shape {:?} dispatched as {:?}", view.shape(), route);

        match route {
            Route::Vector => Ok(Scan::Vector(
                vector_lane(view)?.iter().rev().cloned().collect(),
            )),
            Route::Matrix => {
                let mut matrix = view.into_dimensionality::<Ix2>()?;
                matrix.invert_axis(Axis(1));
                Ok(Scan::Matrix(matrix.as_standard_layout().into_owned()))
            }
            Route::Along(_) => {
                view.invert_axis(Axis(1));
                Ok(Scan::Along {
                    axis: 1,
                    values: view.as_standard_layout().into_owned(),
                })
            }
        }
    }
}

/// MATLAB `cumsum(A)`.
pub fn cumsum<A, S, D>(a: &ArrayBase<S, D>) -> Result<Scan<A>>
where
    A: Clone + Add<Output = A> + Zero,
    S: Data<Elem = A>,
    D: Dimension,
{
    Dispatcher::default().cumsum(a)
}

/// MATLAB `cumprod(A)`.
pub fn cumprod<A, S, D>(a: &ArrayBase<S, D>) -> Result<Scan<A>>
where
    A: Clone + Mul<Output = A> + One,
    S: Data<Elem = A>,
    D: Dimension,
{
    Dispatcher::default().cumprod(a)
}

/// MATLAB `diff(A)`.
pub fn diff<A, S, D>(a: &ArrayBase<S, D>) -> Result<Scan<A>>
where
    A: Clone + Sub<Output = A>,
    S: Data<Elem = A>,
    D: Dimension,
{
    Dispatcher::default().diff(a)
}

/// MATLAB `sort(A, order)`. NaN goes last when ascending and first when descending.
pub fn sort<A, S, D>(a: &ArrayBase<S, D>, order: SortOrder) -> Result<Scan<A>>
where
    A: Clone + PartialOrd,
    S: Data<Elem = A>,
    D: Dimension,
{
    Dispatcher::default().sort(a, order)
}

/// MATLAB `fliplr(A)`.
pub fn fliplr<A, S, D>(a: &ArrayBase<S, D>) -> Result<Scan<A>>
where
    A: Clone,
    S: Data<Elem = A>,
    D: Dimension,
{
    Dispatcher::default().fliplr(a)
}
