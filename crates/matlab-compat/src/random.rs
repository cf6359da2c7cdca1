use ndarray::{ArrayD, IxDyn};
use rand::Rng;
use rand_distr::StandardNormal;

/// MATLAB `randn(dims)` drawing from the thread-local generator.
///
/// `[]` gives a 1x1 array, `[n]` an `n x n` matrix, and longer dimension lists
/// are used as-is.
pub fn randn(dims: &[usize]) -> ArrayD<f64> {
    randn_with(&mut rand::thread_rng(), dims)
}

/// [`randn`] with a caller-supplied generator, for reproducible draws.
pub fn randn_with<R: Rng>(rng: &mut R, dims: &[usize]) -> ArrayD<f64> {
    let shape = match dims {
        [] => vec![1, 1],
        [n] => vec![*n, *n],
        _ => dims.to_vec(),
    };
    log::trace!("randn: sampling shape {:?}", shape);
    ArrayD::from_shape_simple_fn(IxDyn(&shape), || rng.sample(StandardNormal))
}
