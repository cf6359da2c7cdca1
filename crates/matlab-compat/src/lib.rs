//! matlab-compat: MATLAB array-function conventions on top of `ndarray`.
//!
//! MATLAB reductions such as `sum`, `mean` or `any` work down the columns of a
//! matrix but collapse a row or column vector to a single value. ndarray has no
//! notion of a "vector stored as a matrix", so the wrappers here classify the
//! input shape first ([`shape::classify`]) and then call the ndarray primitive
//! along the matching axis ([`dispatch::Dispatcher`]).
//!
//! The remaining functions are thin adapters (rounding, `find`, `colon`,
//! `randn`, ...) that translate MATLAB's argument conventions.
//!
//! ```
//! use ndarray::array;
//! use matlab_compat::{sum, Reduction};
//!
//! let column = array![[1.0], [2.0], [3.0]];
//! assert_eq!(sum(&column).unwrap(), Reduction::Scalar(6.0));
//!
//! let matrix = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
//! assert_eq!(sum(&matrix).unwrap(), Reduction::PerColumn(array![5.0, 7.0, 9.0]));
//! ```
pub mod config;
pub mod dispatch;
pub mod elementwise;
pub mod error;
pub mod indexing;
pub mod logging;
pub mod random;
pub mod reductions;
pub mod scans;
pub mod shape;

pub use config::{DispatchConfig, RankPolicy};
pub use dispatch::{Dispatcher, Reduction, Scan};
pub use elementwise::{ceil, erfinv, fix, floor, maximum, minimum, modulo, rem, round};
pub use error::{CompatError, Result};
pub use indexing::{colon, colon_step, find, linspace};
pub use random::{randn, randn_with};
pub use reductions::{all, any, argmax, argmin, max, mean, min, prod, sum, Extremum, Logical};
pub use scans::{cumprod, cumsum, diff, fliplr, sort, SortOrder};
pub use shape::{classify, length, ndims, numel, size, size_along, ShapeClass};
