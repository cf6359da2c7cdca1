//! Vector-versus-matrix dispatch.
//!
//! ndarray reductions default to collapsing every element into a scalar.
//! MATLAB instead works down each column of a matrix and only collapses
//! everything when the input is a vector. [`Dispatcher`] reproduces the MATLAB
//! convention: it classifies the input shape, picks the lane to operate on,
//! and packages the result as a [`Reduction`] or a [`Scan`].

use ndarray::{
    arr0, Array1, Array2, ArrayBase, ArrayD, ArrayView1, ArrayViewD, Axis, Data, Dimension, Ix1,
    Ix2, IxDyn,
};

use crate::config::{DispatchConfig, RankPolicy};
use crate::error::{CompatError, Result};
use crate::shape::{classify_for, first_non_singleton, ShapeClass};

/// Result of a reducing operation such as `sum` or `mean`.
#[derive(Debug, Clone, PartialEq)]
pub enum Reduction<A> {
    /// The input was a vector.
    Scalar(A),
    /// The input was a matrix; one entry per column.
    PerColumn(Array1<A>),
    /// N-D input reduced along `axis`, which is removed from the output.
    Along { axis: usize, values: ArrayD<A> },
}

impl<A> Reduction<A> {
    pub fn scalar(&self) -> Option<&A> {
        match self {
            Reduction::Scalar(v) => Some(v),
            _ => None,
        }
    }

    pub fn per_column(&self) -> Option<&Array1<A>> {
        match self {
            Reduction::PerColumn(v) => Some(v),
            _ => None,
        }
    }

    /// Flatten into a dynamic-rank array; a scalar becomes a 0-D array.
    pub fn into_dyn(self) -> ArrayD<A> {
        match self {
            Reduction::Scalar(v) => arr0(v).into_dyn(),
            Reduction::PerColumn(v) => v.into_dyn(),
            Reduction::Along { values, .. } => values,
        }
    }
}

/// Result of a lane-preserving operation such as `cumsum` or `sort`.
#[derive(Debug, Clone, PartialEq)]
pub enum Scan<A> {
    /// The input was a vector; the output is always 1-D.
    Vector(Array1<A>),
    /// The input was a matrix; each column was processed independently.
    Matrix(Array2<A>),
    /// N-D input processed along `axis`.
    Along { axis: usize, values: ArrayD<A> },
}

impl<A> Scan<A> {
    pub fn as_vector(&self) -> Option<&Array1<A>> {
        match self {
            Scan::Vector(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_matrix(&self) -> Option<&Array2<A>> {
        match self {
            Scan::Matrix(m) => Some(m),
            _ => None,
        }
    }

    pub fn into_dyn(self) -> ArrayD<A> {
        match self {
            Scan::Vector(v) => v.into_dyn(),
            Scan::Matrix(m) => m.into_dyn(),
            Scan::Along { values, .. } => values,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Route {
    Vector,
    Matrix,
    Along(usize),
}

/// Applies lane operations with MATLAB's default-dimension rules.
///
/// The free functions of this crate use [`Dispatcher::default`], which only
/// accepts 1-D and 2-D input. Build one from a [`DispatchConfig`] to opt into
/// N-D handling.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dispatcher {
    config: DispatchConfig,
}

impl Dispatcher {
    pub fn new(config: DispatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    pub(crate) fn route(&self, op: &'static str, shape: &[usize]) -> Result<Route> {
        match classify_for(op, shape) {
            Ok(ShapeClass::Vector { .. }) => Ok(Route::Vector),
            Ok(ShapeClass::Matrix { .. }) => Ok(Route::Matrix),
            Err(CompatError::UnsupportedRank { ndim, .. })
                if ndim > 2 && self.config.rank_policy == RankPolicy::FirstNonSingleton =>
            {
                match first_non_singleton(shape) {
                    Some(axis) => {
                        log::debug!("{}: {}-D input {:?} handled along axis {}", op, ndim, shape, axis);
                        Ok(Route::Along(axis))
                    }
                    None => Ok(Route::Vector),
                }
            }
            Err(err) => Err(err),
        }
    }

    /// Reduce every lane selected by the MATLAB rules with `f`.
    pub fn reduce<A, B, S, D, F>(
        &self,
        op: &'static str,
        a: &ArrayBase<S, D>,
        f: F,
    ) -> Result<Reduction<B>>
    where
        S: Data<Elem = A>,
        D: Dimension,
        F: FnMut(ArrayView1<'_, A>) -> B,
    {
        let view = a.view().into_dyn();
        let route = self.route(op, view.shape())?;
        log::trace!("{}: shape {:?} dispatched as {:?}", op, view.shape(), route);

        match route {
            Route::Vector => {
                let mut f = f;
                Ok(Reduction::Scalar(f(vector_lane(view)?)))
            }
            Route::Matrix => {
                let matrix = view.into_dimensionality::<Ix2>()?;
                Ok(Reduction::PerColumn(matrix.map_axis(Axis(0), f)))
            }
            Route::Along(axis) => Ok(Reduction::Along {
                axis,
                values: view.map_axis(Axis(axis), f),
            }),
        }
    }

    /// Map every lane selected by the MATLAB rules to a new lane with `f`.
    ///
    /// All lanes produced by `f` must have the same length.
    pub fn scan<A, B, S, D, F>(&self, op: &'static str, a: &ArrayBase<S, D>, f: F) -> Result<Scan<B>>
    where
        S: Data<Elem = A>,
        D: Dimension,
        B: Clone,
        F: FnMut(ArrayView1<'_, A>) -> Array1<B>,
    {
        let view = a.view().into_dyn();
        let route = self.route(op, view.shape())?;
        log::trace!("{}: shape {:?} dispatched as {:?}", op, view.shape(), route);

        match route {
            Route::Vector => {
                let mut f = f;
                Ok(Scan::Vector(f(vector_lane(view)?)))
            }
            Route::Matrix => {
                let values = map_lanes(view, Axis(0), f)?;
                Ok(Scan::Matrix(values.into_dimensionality::<Ix2>()?))
            }
            Route::Along(axis) => Ok(Scan::Along {
                axis,
                values: map_lanes(view, Axis(axis), f)?,
            }),
        }
    }
}

/// The single meaningful lane of a vector-shaped array.
pub(crate) fn vector_lane<A>(view: ArrayViewD<'_, A>) -> Result<ArrayView1<'_, A>> {
    let keep = first_non_singleton(view.shape()).unwrap_or(0);
    let mut lane = view;
    for axis in (0..lane.ndim()).rev() {
        if axis != keep {
            lane = lane.index_axis_move(Axis(axis), 0);
        }
    }
    Ok(lane.into_dimensionality::<Ix1>()?)
}

/// Apply `f` to each lane along `axis` and reassemble the outputs in place of
/// the original lanes.
fn map_lanes<A, B, F>(view: ArrayViewD<'_, A>, axis: Axis, mut f: F) -> Result<ArrayD<B>>
where
    B: Clone,
    F: FnMut(ArrayView1<'_, A>) -> Array1<B>,
{
    let mut shape = view.shape().to_vec();
    shape.remove(axis.index());

    let mut lane_len = None;
    let mut data = Vec::new();
    for lane in view.lanes(axis) {
        let out = f(lane);
        lane_len.get_or_insert(out.len());
        data.extend(out.iter().cloned());
    }
    shape.push(lane_len.unwrap_or(0));

    // Lanes were laid out last; move that axis back to where it came from.
    let last = shape.len() - 1;
    let mut order: Vec<usize> = (0..last).collect();
    order.insert(axis.index(), last);

    let stacked = ArrayD::from_shape_vec(IxDyn(&shape), data)?;
    Ok(stacked.permuted_axes(order).as_standard_layout().into_owned())
}
