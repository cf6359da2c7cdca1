use std::error::Error;
use std::fmt;

use ndarray::ShapeError;

/// Errors raised by the MATLAB-compatible wrappers.
#[derive(Debug, Clone)]
pub enum CompatError {
    /// The array has a number of axes the operation does not handle.
    UnsupportedRank { op: &'static str, ndim: usize },
    /// At least one axis has extent 0.
    EmptyAxis { op: &'static str, shape: Vec<usize> },
    /// A scalar parameter is out of range (zero step, zero dimension, ...).
    InvalidArgument { op: &'static str, reason: String },
    /// Failure reported by ndarray itself, passed through untouched.
    Shape(ShapeError),
}

pub type Result<T, E = CompatError> = std::result::Result<T, E>;

impl CompatError {
    pub(crate) fn invalid(op: &'static str, reason: impl Into<String>) -> Self {
        CompatError::InvalidArgument {
            op,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for CompatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompatError::UnsupportedRank { op, ndim } => write!(
                f,
                "{}: arrays with {} axes are not supported (expected 1 or 2)",
                op, ndim
            ),
            CompatError::EmptyAxis { op, shape } => {
                write!(f, "{}: cannot dispatch on empty array of shape {:?}", op, shape)
            }
            CompatError::InvalidArgument { op, reason } => write!(f, "{}: {}", op, reason),
            CompatError::Shape(err) => write!(f, "{}", err),
        }
    }
}

impl Error for CompatError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            CompatError::Shape(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ShapeError> for CompatError {
    fn from(err: ShapeError) -> Self {
        CompatError::Shape(err)
    }
}
