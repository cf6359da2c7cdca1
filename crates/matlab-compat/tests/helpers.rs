//! Integration tests for the thin MATLAB adapters: shape queries, index
//! generation, `find`, rounding, remainders, `erfinv` and `randn`.

use ndarray::{arr0, array, Array1, Array2, ArrayD};
use rand::rngs::StdRng;
use rand::SeedableRng;
use statrs::function::erf::erf;

use matlab_compat::{
    ceil, colon, colon_step, erfinv, find, fix, floor, length, linspace, maximum, minimum,
    modulo, ndims, numel, randn_with, rem, round, size, size_along, CompatError,
};

fn flat(a: ArrayD<f64>) -> Vec<f64> {
    a.iter().copied().collect()
}

// ---------------------------------------------------------------------------
// Shape queries
// ---------------------------------------------------------------------------

#[test]
fn size_pads_one_dimensional_arrays_as_rows() {
    assert_eq!(size(&array![1, 2, 3]), vec![1, 3]);
    assert_eq!(size(&Array2::<f64>::zeros((2, 5))), vec![2, 5]);
    assert_eq!(size(&arr0(1.0)), vec![1, 1]);
}

#[test]
fn size_along_is_one_based() {
    let a = Array2::<f64>::zeros((2, 5));
    assert_eq!(size_along(&a, 1).unwrap(), 2);
    assert_eq!(size_along(&a, 2).unwrap(), 5);
    assert_eq!(size_along(&a, 3).unwrap(), 1);
    assert!(matches!(
        size_along(&a, 0),
        Err(CompatError::InvalidArgument { op: "size", .. })
    ));
}

#[test]
fn length_numel_ndims() {
    let a = Array2::<f64>::zeros((2, 7));
    assert_eq!(length(&a), 7);
    assert_eq!(numel(&a), 14);
    assert_eq!(ndims(&a), 2);
    assert_eq!(ndims(&array![1, 2]), 2);
    assert_eq!(length(&Array2::<f64>::zeros((0, 7))), 0);
}

// ---------------------------------------------------------------------------
// Index generation
// ---------------------------------------------------------------------------

#[test]
fn colon_is_one_indexed_and_inclusive() {
    assert_eq!(colon(1.0, 5.0).unwrap(), array![1.0, 2.0, 3.0, 4.0, 5.0]);
    for n in 1..50 {
        let range = colon(1.0, n as f64).unwrap();
        assert_eq!(range.len(), n);
        assert_eq!(range[0], 1.0);
        assert_eq!(range[n - 1], n as f64);
    }
}

#[test]
fn colon_backwards_is_empty() {
    assert!(colon(5.0, 1.0).unwrap().is_empty());
}

#[test]
fn colon_step_handles_fractional_and_negative_steps() {
    assert_eq!(colon_step(0.0, 0.1, 0.3).unwrap().len(), 4);
    assert_eq!(
        colon_step(10.0, -3.0, 1.0).unwrap(),
        array![10.0, 7.0, 4.0, 1.0]
    );
    assert!(colon_step(1.0, 0.0, 3.0).is_err());
    assert!(colon_step(1.0, 1.0, f64::INFINITY).is_err());
}

#[test]
fn colon_rejects_ranges_too_large_to_allocate() {
    for (start, step, stop) in [
        (0.0, 1.0, f64::MAX),
        (-f64::MAX, 1.0, f64::MAX),
        (0.0, 1e-300, 1.0),
        (f64::MAX, -1.0, 0.0),
    ] {
        match colon_step(start, step, stop) {
            Err(CompatError::InvalidArgument { op, .. }) => assert_eq!(op, "colon"),
            other => panic!(
                "expected InvalidArgument for {}:{}:{}, got {:?}",
                start, step, stop, other
            ),
        }
    }
    assert!(colon(1.0, 1e300).is_err());
}

#[test]
fn linspace_includes_both_ends() {
    assert_eq!(linspace(0.0, 1.0, 5), array![0.0, 0.25, 0.5, 0.75, 1.0]);
    assert_eq!(linspace(0.0, 1.0, 1), array![1.0]);
    assert!(linspace(0.0, 1.0, 0).is_empty());
}

// ---------------------------------------------------------------------------
// find
// ---------------------------------------------------------------------------

#[test]
fn find_matches_flattened_nonzero_positions() {
    let a = array![[0, 3, 0], [1, 0, 7]];
    let values: Vec<i32> = a.iter().copied().collect();
    let expected: Array1<usize> = values
        .iter()
        .enumerate()
        .filter(|(_, v)| **v != 0)
        .map(|(i, _)| i)
        .collect();
    assert_eq!(find(&a), expected);
    assert_eq!(find(&a), array![1, 3, 5]);
}

#[test]
fn find_follows_logical_order_of_views() {
    let a = array![[0, 3], [1, 0]];
    // Transposed: [[0, 1], [3, 0]]
    assert_eq!(find(&a.t()), array![1, 2]);
}

#[test]
fn find_treats_nan_as_nonzero() {
    assert_eq!(find(&array![0.0, f64::NAN, 2.0]), array![1, 2]);
    assert!(find(&Array1::<f64>::zeros(0)).is_empty());
}

// ---------------------------------------------------------------------------
// Rounding and remainders
// ---------------------------------------------------------------------------

#[test]
fn rounding_follows_matlab() {
    let a = array![-2.5, -1.5, -0.4, 0.5, 2.5, 2.7];
    assert_eq!(round(&a), array![-3.0, -2.0, -0.0, 1.0, 3.0, 3.0]);
    assert_eq!(ceil(&a), array![-2.0, -1.0, -0.0, 1.0, 3.0, 3.0]);
    assert_eq!(floor(&a), array![-3.0, -2.0, -1.0, 0.0, 2.0, 2.0]);
    assert_eq!(fix(&a), array![-2.0, -1.0, -0.0, 0.0, 2.0, 2.0]);
}

#[test]
fn rem_and_mod_differ_in_sign() {
    let a = array![-7.0, 7.0, -7.0];
    let b = array![3.0, -3.0, -3.0];
    assert_eq!(flat(rem(&a, &b).unwrap()), vec![-1.0, 1.0, -1.0]);
    assert_eq!(flat(modulo(&a, &b).unwrap()), vec![2.0, -2.0, -1.0]);
}

#[test]
fn rem_and_mod_with_scalar_divisor() {
    let a = array![[5.0, 6.0], [7.0, 8.0]];
    let r = rem(&a, &arr0(3.0)).unwrap();
    assert_eq!(r.shape(), &[2, 2]);
    assert_eq!(flat(r), vec![2.0, 0.0, 1.0, 2.0]);

    assert_eq!(flat(modulo(&array![5.0], &arr0(0.0)).unwrap()), vec![5.0]);
    assert!(rem(&array![5.0_f64], &arr0(0.0)).unwrap().iter().all(|v| v.is_nan()));
}

#[test]
fn maximum_and_minimum_expand_and_skip_nan() {
    let col = array![[1.0], [5.0], [f64::NAN]];
    let row = array![[2.0, 4.0]];

    let hi = maximum(&col, &row).unwrap();
    assert_eq!(hi.shape(), &[3, 2]);
    assert_eq!(flat(hi), vec![2.0, 4.0, 5.0, 5.0, 2.0, 4.0]);

    let lo = minimum(&col, &row).unwrap();
    assert_eq!(flat(lo), vec![1.0, 1.0, 2.0, 4.0, 2.0, 4.0]);
}

// ---------------------------------------------------------------------------
// erfinv / randn
// ---------------------------------------------------------------------------

#[test]
fn erfinv_inverts_erf() {
    let xs = array![-0.9, -0.3, 0.0, 0.5, 1.2];
    let ys = xs.mapv(erf);
    let back = erfinv(&ys);
    for (x, y) in xs.iter().zip(back.iter()) {
        assert!((x - y).abs() < 1e-9, "erfinv(erf({})) = {}", x, y);
    }
}

#[test]
fn erfinv_domain_edges() {
    let out = erfinv(&array![1.0, -1.0, 1.5, f64::NAN]);
    assert_eq!(out[0], f64::INFINITY);
    assert_eq!(out[1], f64::NEG_INFINITY);
    assert!(out[2].is_nan());
    assert!(out[3].is_nan());
}

#[test]
fn randn_shape_conventions() {
    let mut rng = StdRng::seed_from_u64(3);
    assert_eq!(randn_with(&mut rng, &[]).shape(), &[1, 1]);
    assert_eq!(randn_with(&mut rng, &[3]).shape(), &[3, 3]);
    assert_eq!(randn_with(&mut rng, &[2, 4]).shape(), &[2, 4]);
    assert_eq!(randn_with(&mut rng, &[2, 3, 4]).shape(), &[2, 3, 4]);
}

#[test]
fn randn_is_reproducible_and_standard() {
    let a = randn_with(&mut StdRng::seed_from_u64(42), &[100, 100]);
    let b = randn_with(&mut StdRng::seed_from_u64(42), &[100, 100]);
    assert_eq!(a, b);

    let n = a.len() as f64;
    let mean = a.sum() / n;
    let var = a.mapv(|x| (x - mean).powi(2)).sum() / n;
    assert!(mean.abs() < 0.05, "mean {}", mean);
    assert!((var - 1.0).abs() < 0.1, "variance {}", var);
}
